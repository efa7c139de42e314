use serde_json::{Value, json};

/// Parcel with a verified area in the flat `features` shape.
pub const FLAT_VERIFIED: &str = "50:27:0030526:16";
/// Parcel with only a declared area in the nested `data.features` shape.
pub const NESTED_DECLARED: &str = "77:01:0001001:1001";
/// Parcel whose status only exists under `previously_posted`.
pub const PREVIOUSLY_POSTED: &str = "23:43:0000000:1";
/// Flat document with an empty feature list.
pub const EMPTY_FLAT: &str = "00:00:0000000:0";
/// Document carrying a top-level `error` key.
pub const REJECTED: &str = "99:99:9999999:9";

pub fn by_cadastral_number(cn: &str) -> Value {
    match cn {
        FLAT_VERIFIED => json!({
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[
                        [37.9021, 55.4412],
                        [37.9034, 55.4412],
                        [37.9034, 55.4420],
                        [37.9021, 55.4420],
                        [37.9021, 55.4412]
                    ]]
                },
                "properties": {
                    "cadastralDistrictsCode": 50,
                    "options": {
                        "cad_num": FLAT_VERIFIED,
                        "quarter_cad_number": "50:27:0030526",
                        "land_record_area_verified": 1200.0,
                        "declared_area": 1180,
                        "readable_address": "Moscow Oblast, Domodedovo, Kolychevo village",
                        "land_record_category_type": "Agricultural land",
                        "land_record_type": "Land plot",
                        "land_record_subtype": "Landholding",
                        "permitted_use_established_by_document": "Individual housing",
                        "ownership_type": "Private",
                        "status": "Recorded",
                        "registration_date": "2012-04-17",
                        "land_record_reg_date": "2012-04-17",
                        "cost_value": 1854312.0,
                        "cost_index": 1545.26,
                        "cost_registration_date": "2023-01-01"
                    }
                }
            }]
        }),
        NESTED_DECLARED => json!({
            "data": {
                "type": "FeatureCollection",
                "features": [{
                    "type": "Feature",
                    "geometry": {"type": "Point", "coordinates": [37.6173, 55.7558]},
                    "properties": {
                        "cadastralDistrictsCode": "77",
                        "options": {
                            "cad_num": NESTED_DECLARED,
                            "quarter_cad_number": "77:01:0001001",
                            "declared_area": "850.5",
                            "readable_address": "Moscow, Tverskaya st, 1",
                            "land_record_category_type": "Settlement land",
                            "permitted_use_established_by_document": "Office buildings",
                            "status": "Recorded",
                            "cost_value": "95000000"
                        }
                    }
                }]
            },
            "meta": [{"totalCount": 1}]
        }),
        PREVIOUSLY_POSTED => json!({
            "features": [{
                "type": "Feature",
                "properties": {
                    "options": {
                        "cad_num": PREVIOUSLY_POSTED,
                        "specified_area": 4021,
                        "land_record_area": 4000,
                        "previously_posted": "Previously recorded",
                        "ownership_type": null
                    }
                }
            }]
        }),
        EMPTY_FLAT => json!({"type": "FeatureCollection", "features": []}),
        REJECTED => json!({"error": "Service temporarily unavailable"}),
        _ => json!({"data": {"features": []}}),
    }
}
