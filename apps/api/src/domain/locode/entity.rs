use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A single UN/LOCODE entry as served by `/locode`.
///
/// `locode` is always `country_code + location_code`; it is the key the entry is
/// stored under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Location {
    pub locode: String,
    pub country_code: String,
    pub country_name: String,
    pub admin_code: String,
    pub location_code: String,
    pub name: String,
    pub alt_name: String,
    pub coordinates: String,
}

impl Location {
    pub fn new(
        country_code: &str,
        country_name: &str,
        admin_code: &str,
        location_code: &str,
        name: &str,
        alt_name: &str,
        coordinates: &str,
    ) -> Self {
        Self {
            locode: format!("{}{}", country_code, location_code),
            country_code: country_code.to_string(),
            country_name: country_name.to_string(),
            admin_code: admin_code.to_string(),
            location_code: location_code.to_string(),
            name: name.to_string(),
            alt_name: alt_name.to_string(),
            coordinates: coordinates.to_string(),
        }
    }
}
