use serde::{Deserialize, Serialize};

/// A well-formed latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Finite and within the valid latitude/longitude ranges
    pub fn is_well_formed(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

/// Location attached to an issue report.
///
/// Coordinates are optional here because upstream data can arrive with a
/// missing or unparseable position; use [`IssueLocation::coordinates`] to get
/// a usable point.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IssueLocation {
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// GPS accuracy radius in meters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy_meters: Option<f64>,
}

impl IssueLocation {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self {
            lat: Some(lat),
            lng: Some(lng),
            address: None,
            accuracy_meters: None,
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Returns `None` when either coordinate is missing, NaN, infinite or out of range
    pub fn coordinates(&self) -> Option<Coordinates> {
        let coords = Coordinates::new(self.lat?, self.lng?);
        coords.is_well_formed().then_some(coords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_present() {
        let location = IssueLocation::new(40.7128, -74.0060);
        assert_eq!(
            location.coordinates(),
            Some(Coordinates::new(40.7128, -74.0060))
        );
    }

    #[test]
    fn test_coordinates_rejects_malformed() {
        let missing = IssueLocation {
            lat: Some(40.7),
            lng: None,
            ..Default::default()
        };
        assert!(missing.coordinates().is_none());

        assert!(IssueLocation::new(f64::NAN, -74.0).coordinates().is_none());
        assert!(IssueLocation::new(40.7, f64::INFINITY).coordinates().is_none());
        assert!(IssueLocation::new(91.0, 0.0).coordinates().is_none());
        assert!(IssueLocation::new(0.0, -180.5).coordinates().is_none());
    }

    #[test]
    fn test_null_coordinates_deserialize() {
        let location: IssueLocation =
            serde_json::from_str(r#"{ "lat": null, "lng": -74.0, "address": "Pier 4" }"#)
                .unwrap();
        assert!(location.coordinates().is_none());
        assert_eq!(location.address.as_deref(), Some("Pier 4"));
    }
}
