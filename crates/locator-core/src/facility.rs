//! Hospital point-of-interest type.

use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;

/// Name used when the data source has no usable name for a facility.
pub const UNKNOWN_FACILITY_NAME: &str = "Unknown Hospital";

/// A hospital with a display name and position.
///
/// Facilities carry no stable identifier; a query result is a fresh,
/// ordered set and is never merged with earlier results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawFacility")]
pub struct Facility {
    /// Display name, never empty.
    pub name: String,
    /// Where the facility is.
    pub position: Coordinate,
}

impl Facility {
    /// Create a facility. Blank names are replaced by [`UNKNOWN_FACILITY_NAME`].
    pub fn new(name: impl Into<String>, position: Coordinate) -> Self {
        let name = name.into();
        let trimmed = name.trim();
        let name = if trimmed.is_empty() {
            UNKNOWN_FACILITY_NAME.to_string()
        } else if trimmed.len() == name.len() {
            name
        } else {
            trimmed.to_string()
        };

        Self { name, position }
    }

    /// Create a facility from an optional source name.
    pub fn from_source(name: Option<&str>, position: Coordinate) -> Self {
        Self::new(name.unwrap_or_default(), position)
    }
}

#[derive(Deserialize)]
struct RawFacility {
    #[serde(default)]
    name: Option<String>,
    position: Coordinate,
}

impl From<RawFacility> for Facility {
    fn from(raw: RawFacility) -> Self {
        Self::from_source(raw.name.as_deref(), raw.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn here() -> Coordinate {
        Coordinate::new(12.9716, 77.5946).unwrap()
    }

    #[test]
    fn test_named_facility() {
        let f = Facility::new("St. John's Hospital", here());
        assert_eq!(f.name, "St. John's Hospital");
    }

    #[test]
    fn test_placeholder_name() {
        assert_eq!(Facility::new("", here()).name, UNKNOWN_FACILITY_NAME);
        assert_eq!(Facility::new("   ", here()).name, UNKNOWN_FACILITY_NAME);
        assert_eq!(Facility::from_source(None, here()).name, UNKNOWN_FACILITY_NAME);
    }

    #[test]
    fn test_deserialize_applies_placeholder() {
        let position = r#"{"latitude": 12.9716, "longitude": 77.5946}"#;

        let blank: Facility =
            serde_json::from_str(&format!(r#"{{"name": "", "position": {}}}"#, position)).unwrap();
        assert_eq!(blank.name, UNKNOWN_FACILITY_NAME);

        let missing: Facility =
            serde_json::from_str(&format!(r#"{{"position": {}}}"#, position)).unwrap();
        assert_eq!(missing.name, UNKNOWN_FACILITY_NAME);

        let padded: Facility =
            serde_json::from_str(&format!(r#"{{"name": " Manipal ", "position": {}}}"#, position))
                .unwrap();
        assert_eq!(padded, Facility::new("Manipal", here()));
    }

    #[test]
    fn test_name_is_trimmed() {
        assert_eq!(Facility::new("  Manipal ", here()).name, "Manipal");
    }
}
