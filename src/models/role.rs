use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PersonRole {
    Admin,
    Client,
    DeliveryPerson,
}

impl PersonRole {
    pub const ALL: [PersonRole; 3] = [
        PersonRole::Admin,
        PersonRole::Client,
        PersonRole::DeliveryPerson,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PersonRole::Admin => "ADMIN",
            PersonRole::Client => "CLIENT",
            PersonRole::DeliveryPerson => "DELIVERY_PERSON",
        }
    }
}

impl fmt::Display for PersonRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role names are compared exactly; `"admin"` is not a role.
impl FromStr for PersonRole {
    type Err = AppError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == raw)
            .ok_or_else(|| AppError::unknown_variant("person role", raw))
    }
}
