//! Kind-directed decoding of a single JSON document into one of the
//! crate's records.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::AppError;
use crate::models::address::{Address, AddressInput};
use crate::models::dashboard::DashboardStats;
use crate::models::location::{LocationResponse, LocationUpdateRequest};
use crate::models::packet::Packet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Address,
    AddressInput,
    Packet,
    DashboardStats,
    Location,
    LocationUpdate,
}

impl RecordKind {
    pub const ALL: [RecordKind; 6] = [
        RecordKind::Address,
        RecordKind::AddressInput,
        RecordKind::Packet,
        RecordKind::DashboardStats,
        RecordKind::Location,
        RecordKind::LocationUpdate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Address => "address",
            RecordKind::AddressInput => "address-input",
            RecordKind::Packet => "packet",
            RecordKind::DashboardStats => "dashboard-stats",
            RecordKind::Location => "location",
            RecordKind::LocationUpdate => "location-update",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = AppError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == raw)
            .ok_or_else(|| AppError::unknown_variant("record kind", raw))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Record {
    Address(Address),
    AddressInput(AddressInput),
    Packet(Packet),
    DashboardStats(DashboardStats),
    Location(LocationResponse),
    LocationUpdate(LocationUpdateRequest),
}

impl Record {
    pub fn decode(kind: RecordKind, json: &str) -> Result<Self, AppError> {
        let decoded = match kind {
            RecordKind::Address => serde_json::from_str(json).map(Record::Address),
            RecordKind::AddressInput => serde_json::from_str(json).map(Record::AddressInput),
            RecordKind::Packet => serde_json::from_str(json).map(Record::Packet),
            RecordKind::DashboardStats => serde_json::from_str(json).map(Record::DashboardStats),
            RecordKind::Location => serde_json::from_str(json).map(Record::Location),
            RecordKind::LocationUpdate => serde_json::from_str(json).map(Record::LocationUpdate),
        };

        match decoded {
            Ok(record) => {
                debug!(kind = %kind, "record decoded");
                Ok(record)
            }
            Err(err) => {
                warn!(kind = %kind, error = %err, "failed to decode record");
                Err(AppError::Decode(err))
            }
        }
    }

    pub fn kind(&self) -> RecordKind {
        match self {
            Record::Address(_) => RecordKind::Address,
            Record::AddressInput(_) => RecordKind::AddressInput,
            Record::Packet(_) => RecordKind::Packet,
            Record::DashboardStats(_) => RecordKind::DashboardStats,
            Record::Location(_) => RecordKind::Location,
            Record::LocationUpdate(_) => RecordKind::LocationUpdate,
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        let outcome = match self {
            Record::AddressInput(input) => input.validate(),
            Record::LocationUpdate(update) => update.validate(),
            Record::Address(_)
            | Record::Packet(_)
            | Record::DashboardStats(_)
            | Record::Location(_) => Ok(()),
        };

        if let Err(violations) = &outcome {
            warn!(
                kind = %self.kind(),
                violations = violations.violations.len(),
                "record failed validation"
            );
        }

        outcome.map_err(AppError::from)
    }

    pub fn to_json(&self, pretty: bool) -> Result<String, AppError> {
        let encoded = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(encoded)
    }
}

#[cfg(test)]
mod tests {
    use super::{Record, RecordKind};

    #[test]
    fn kind_names_round_trip() {
        for kind in RecordKind::ALL {
            assert_eq!(kind.as_str().parse::<RecordKind>().unwrap(), kind);
        }
        assert!("courier".parse::<RecordKind>().is_err());
    }

    #[test]
    fn decoded_record_reports_its_kind() {
        for kind in RecordKind::ALL {
            let record = Record::decode(kind, "{}").unwrap();
            assert_eq!(record.kind(), kind);
        }
    }
}
