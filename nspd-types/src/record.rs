//! The normalized land-parcel record.

use serde::{Deserialize, Serialize};

/// Which upstream field supplied the reported parcel area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AreaType {
    /// Area confirmed by a land survey.
    Verified,
    /// Area as declared by the owner, without a survey.
    Declared,
}

impl AreaType {
    /// Wire label of this tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Verified => "verified",
            Self::Declared => "declared",
        }
    }
}

impl std::fmt::Display for AreaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable description of one land parcel.
///
/// Every field is always present on the wire. Text fields fall back to an
/// empty string and numeric fields to `null` when the registry omits them,
/// so consumers can rely on a fixed schema.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ParcelRecord {
    /// Cadastral number as reported by the registry (`cad_num`).
    pub cadastral_number: String,
    /// Cadastral district code.
    pub cadastral_district: String,
    /// Cadastral number of the enclosing quarter.
    pub quarter_cad_number: String,
    /// Parcel area in square metres.
    pub area: Option<f64>,
    /// Source of `area`; `None` exactly when `area` is `None`.
    pub area_type: Option<AreaType>,
    /// Human-readable postal address.
    pub readable_address: String,
    /// Land category (agricultural, settlement, ...).
    pub land_category: String,
    /// Record type.
    pub land_record_type: String,
    /// Record subtype.
    pub land_record_subtype: String,
    /// Permitted use as established by the registering document.
    pub permitted_use: String,
    /// Form of ownership.
    pub ownership_type: String,
    /// Registry status of the parcel.
    pub status: String,
    /// Date the object was registered.
    pub registration_date: String,
    /// Date the land record was registered.
    pub land_record_reg_date: String,
    /// Cadastral cost.
    pub cadastral_cost: Option<f64>,
    /// Cadastral cost per square metre.
    pub cost_per_sqm: Option<f64>,
    /// Date the cadastral cost was registered.
    pub cost_registration_date: String,
}
