use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::null_as_default;
use crate::validation::{ValidationError, check_max_text, check_required_text};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AddressType {
    Primary,
    Secondary,
}

impl AddressType {
    pub const ALL: [AddressType; 2] = [AddressType::Primary, AddressType::Secondary];

    pub fn as_str(&self) -> &'static str {
        match self {
            AddressType::Primary => "PRIMARY",
            AddressType::Secondary => "SECONDARY",
        }
    }
}

impl fmt::Display for AddressType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stored values are matched without regard to case.
impl FromStr for AddressType {
    type Err = AppError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(raw))
            .ok_or_else(|| AppError::unknown_variant("address type", raw))
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    pub street: Option<String>,
    pub city: Option<String>,
    pub district: Option<String>,
    pub country: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub address_type: Option<AddressType>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

const STREET_LEN: (usize, usize) = (3, 200);
const AREA_LEN: (usize, usize) = (2, 100);
const DESCRIPTION_MAX: usize = 500;

/// Payload for creating or updating an address.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddressInput {
    #[serde(deserialize_with = "null_as_default")]
    pub street: String,
    #[serde(deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(deserialize_with = "null_as_default")]
    pub district: String,
    #[serde(deserialize_with = "null_as_default")]
    pub country: String,
    pub description: Option<String>,
}

impl AddressInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationError::new();

        check_required_text(
            &mut errors,
            "street",
            "Street",
            &self.street,
            STREET_LEN.0,
            STREET_LEN.1,
        );
        check_required_text(&mut errors, "city", "City", &self.city, AREA_LEN.0, AREA_LEN.1);
        check_required_text(
            &mut errors,
            "district",
            "District",
            &self.district,
            AREA_LEN.0,
            AREA_LEN.1,
        );
        check_required_text(
            &mut errors,
            "country",
            "Country",
            &self.country,
            AREA_LEN.0,
            AREA_LEN.1,
        );
        check_max_text(
            &mut errors,
            "description",
            "Description",
            self.description.as_deref(),
            DESCRIPTION_MAX,
        );

        errors.into_result()
    }

    pub fn into_address(self) -> Result<Address, ValidationError> {
        self.validate()?;

        Ok(Address {
            street: Some(self.street),
            city: Some(self.city),
            district: Some(self.district),
            country: Some(self.country),
            description: self.description,
            ..Address::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> AddressInput {
        AddressInput {
            street: "Rue de la Joie".to_string(),
            city: "Yaounde".to_string(),
            district: "Bastos".to_string(),
            country: "Cameroon".to_string(),
            description: Some("Blue gate".to_string()),
        }
    }

    #[test]
    fn every_field_reads_back_what_was_set() {
        let mut address = Address::default();
        address.street = Some("12 Avenue Kennedy".to_string());
        address.city = Some("Douala".to_string());
        address.district = Some("Akwa".to_string());
        address.country = Some("Cameroon".to_string());
        address.description = Some("Second floor".to_string());
        address.address_type = Some(AddressType::Secondary);
        address.latitude = Some(4.0511);
        address.longitude = Some(9.7679);

        assert_eq!(address.street.as_deref(), Some("12 Avenue Kennedy"));
        assert_eq!(address.city.as_deref(), Some("Douala"));
        assert_eq!(address.district.as_deref(), Some("Akwa"));
        assert_eq!(address.country.as_deref(), Some("Cameroon"));
        assert_eq!(address.description.as_deref(), Some("Second floor"));
        assert_eq!(address.address_type, Some(AddressType::Secondary));
        assert_eq!(address.latitude, Some(4.0511));
        assert_eq!(address.longitude, Some(9.7679));
    }

    #[test]
    fn default_address_is_all_unset() {
        let address = Address::default();

        assert!(address.street.is_none());
        assert!(address.city.is_none());
        assert!(address.district.is_none());
        assert!(address.country.is_none());
        assert!(address.description.is_none());
        assert!(address.address_type.is_none());
        assert!(address.latitude.is_none());
        assert!(address.longitude.is_none());
    }

    #[test]
    fn address_type_parses_case_insensitively() {
        assert_eq!("primary".parse::<AddressType>().unwrap(), AddressType::Primary);
        assert_eq!("Secondary".parse::<AddressType>().unwrap(), AddressType::Secondary);
        assert!("billing".parse::<AddressType>().is_err());
    }

    #[test]
    fn valid_input_becomes_address() {
        let address = valid_input().into_address().unwrap();

        assert_eq!(address.city.as_deref(), Some("Yaounde"));
        assert_eq!(address.description.as_deref(), Some("Blue gate"));
        assert!(address.address_type.is_none());
        assert!(address.latitude.is_none());
    }

    #[test]
    fn empty_input_reports_every_required_field() {
        let err = AddressInput::default().validate().unwrap_err();

        assert_eq!(err.violations.len(), 4);
        assert!(err.has_field("street"));
        assert!(err.has_field("city"));
        assert!(err.has_field("district"));
        assert!(err.has_field("country"));
        assert!(!err.has_field("description"));
    }

    #[test]
    fn short_street_and_long_description_are_rejected() {
        let mut input = valid_input();
        input.street = "Ru".to_string();
        input.description = Some("x".repeat(501));

        let err = input.validate().unwrap_err();

        assert_eq!(err.violations.len(), 2);
        assert_eq!(
            err.violations[0].message,
            "Street must be between 3 and 200 characters"
        );
        assert_eq!(
            err.violations[1].message,
            "Description cannot exceed 500 characters"
        );
    }

    #[test]
    fn boundary_lengths_are_accepted() {
        let mut input = valid_input();
        input.street = "abc".to_string();
        input.city = "x".repeat(100);
        input.district = "ab".to_string();
        input.description = Some("d".repeat(500));

        assert!(input.validate().is_ok());
    }
}
