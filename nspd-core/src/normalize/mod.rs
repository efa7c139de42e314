mod bag;
mod precedence;
mod shape;

pub use bag::PropertyBag;
pub use precedence::{AREA_PRECEDENCE, STATUS_PRECEDENCE, select_area, select_status};
pub use shape::DocumentShape;

use serde_json::{Map, Value};

use crate::document::RawDocument;
use crate::{FetchError, LookupFailure, ParcelRecord, SearchReport};

/// Collapse a connector result into a `SearchReport`.
///
/// - Any fetch failure becomes `"Object not found"`; the cause is kept in
///   `warnings` and never serialized.
/// - A successful fetch is handed to [`normalize_document`].
///
/// Pure: the same input always yields the same report.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(name = "nspd_core::normalize", skip(result), level = "debug")
)]
pub fn normalize(cadastral_number: &str, result: Result<RawDocument, FetchError>) -> SearchReport {
    match result {
        Ok(doc) => normalize_document(cadastral_number, &doc),
        Err(cause) => {
            SearchReport::failure(cadastral_number, LookupFailure::ObjectNotFound)
                .with_warning(cause)
        }
    }
}

/// Normalize a decoded upstream document.
///
/// Only the first feature is used. Its `properties.options` bag is mapped onto
/// [`ParcelRecord`] and its `geometry` is passed through unchanged (`{}` when
/// absent).
#[must_use]
pub fn normalize_document(cadastral_number: &str, doc: &RawDocument) -> SearchReport {
    let shape = DocumentShape::resolve(doc.as_value());
    #[cfg(feature = "tracing")]
    tracing::debug!(shape = shape.label(), "resolved document shape");

    if let DocumentShape::Rejected(reported) = shape {
        let msg = match reported {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        return SearchReport::failure(cadastral_number, LookupFailure::ObjectNotFound)
            .with_warning(FetchError::upstream(msg));
    }

    match shape.first_feature() {
        Some(feature) => {
            let (data, geometry) = map_feature(feature);
            SearchReport::success(cadastral_number, data, geometry)
        }
        None => SearchReport::failure(cadastral_number, LookupFailure::NoFeatures),
    }
}

/// Map one feature onto the record schema and extract its geometry.
#[must_use]
pub fn map_feature(feature: &Value) -> (ParcelRecord, Value) {
    let properties = PropertyBag::of(feature.get("properties"));
    let options = properties.child("options");
    let geometry = feature
        .get("geometry")
        .cloned()
        .unwrap_or_else(|| Value::Object(Map::new()));

    let (area, area_type) = select_area(&options).unzip();

    let record = ParcelRecord {
        cadastral_number: options.text("cad_num"),
        cadastral_district: properties.text("cadastralDistrictsCode"),
        quarter_cad_number: options.text("quarter_cad_number"),
        area,
        area_type,
        readable_address: options.text("readable_address"),
        land_category: options.text("land_record_category_type"),
        land_record_type: options.text("land_record_type"),
        land_record_subtype: options.text("land_record_subtype"),
        permitted_use: options.text("permitted_use_established_by_document"),
        ownership_type: options.text("ownership_type"),
        status: select_status(&options),
        registration_date: options.text("registration_date"),
        land_record_reg_date: options.text("land_record_reg_date"),
        cadastral_cost: options.number("cost_value"),
        cost_per_sqm: options.number("cost_index"),
        cost_registration_date: options.text("cost_registration_date"),
    };
    (record, geometry)
}
