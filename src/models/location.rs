use serde::{Deserialize, Serialize};

use crate::models::null_as_default;
use crate::validation::{ValidationError, check_present};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocationResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub latitude: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub longitude: f64,
}

impl LocationResponse {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Position reported by a delivery person. Both coordinates are required.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocationUpdateRequest {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl LocationUpdateRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationError::new();
        check_present(&mut errors, "latitude", "Latitude", self.latitude.as_ref());
        check_present(&mut errors, "longitude", "Longitude", self.longitude.as_ref());
        errors.into_result()
    }

    pub fn into_location(self) -> Result<LocationResponse, ValidationError> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Ok(LocationResponse::new(latitude, longitude)),
            _ => Err(self.validate().err().unwrap_or_default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_read_back() {
        let mut location = LocationResponse::default();
        location.latitude = 3.848;
        location.longitude = 11.5021;

        assert_eq!(location.latitude, 3.848);
        assert_eq!(location.longitude, 11.5021);
        assert_eq!(location, LocationResponse::new(3.848, 11.5021));
    }

    #[test]
    fn out_of_range_values_are_kept() {
        let location = LocationResponse::new(123.0, -720.0);
        assert_eq!(location.latitude, 123.0);
        assert_eq!(location.longitude, -720.0);
    }

    #[test]
    fn default_location_is_origin() {
        assert_eq!(LocationResponse::default(), LocationResponse::new(0.0, 0.0));
    }

    #[test]
    fn complete_update_becomes_location() {
        let request = LocationUpdateRequest {
            latitude: Some(4.05),
            longitude: Some(9.7),
        };

        assert_eq!(request.into_location().unwrap(), LocationResponse::new(4.05, 9.7));
    }

    #[test]
    fn missing_coordinates_are_reported() {
        let err = LocationUpdateRequest {
            latitude: None,
            longitude: Some(9.7),
        }
        .into_location()
        .unwrap_err();

        assert_eq!(err.violations.len(), 1);
        assert_eq!(err.violations[0].field, "latitude");
        assert_eq!(err.violations[0].message, "Latitude is required");

        let err = LocationUpdateRequest::default().validate().unwrap_err();
        assert!(err.has_field("latitude"));
        assert!(err.has_field("longitude"));
    }
}
