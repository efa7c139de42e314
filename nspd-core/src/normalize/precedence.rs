use crate::AreaType;

use super::bag::PropertyBag;

/// Area source keys in priority order, each with the tag it reports.
///
/// `specified_area` and `land_record_area` both report `Verified`.
pub const AREA_PRECEDENCE: &[(&str, AreaType)] = &[
    ("land_record_area_verified", AreaType::Verified),
    ("declared_area", AreaType::Declared),
    ("specified_area", AreaType::Verified),
    ("land_record_area", AreaType::Verified),
];

/// Status source keys in priority order. Empty strings do not count.
pub const STATUS_PRECEDENCE: &[&str] = &["status", "previously_posted"];

/// First area candidate that holds a number, with its tag.
#[must_use]
pub fn select_area(options: &PropertyBag<'_>) -> Option<(f64, AreaType)> {
    AREA_PRECEDENCE
        .iter()
        .find_map(|&(key, tag)| options.number(key).map(|area| (area, tag)))
}

/// First non-empty status candidate, or `""`.
#[must_use]
pub fn select_status(options: &PropertyBag<'_>) -> String {
    STATUS_PRECEDENCE
        .iter()
        .map(|key| options.text(key))
        .find(|s| !s.is_empty())
        .unwrap_or_default()
}
