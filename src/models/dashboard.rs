use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::null_as_default;

/// Lifecycle status of a delivery-person account.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryPersonStatus {
    Pending,
    Approved,
    Suspended,
    Rejected,
}

impl DeliveryPersonStatus {
    pub const ALL: [DeliveryPersonStatus; 4] = [
        DeliveryPersonStatus::Pending,
        DeliveryPersonStatus::Approved,
        DeliveryPersonStatus::Suspended,
        DeliveryPersonStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryPersonStatus::Pending => "PENDING",
            DeliveryPersonStatus::Approved => "APPROVED",
            DeliveryPersonStatus::Suspended => "SUSPENDED",
            DeliveryPersonStatus::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for DeliveryPersonStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeliveryPersonStatus {
    type Err = AppError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(raw))
            .ok_or_else(|| AppError::unknown_variant("delivery person status", raw))
    }
}

/// Account counters shown on the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    #[serde(deserialize_with = "null_as_default")]
    pub pending_count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub active_count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub suspended_count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub rejected_count: u64,
}

impl DashboardStats {
    pub fn builder() -> DashboardStatsBuilder {
        DashboardStatsBuilder::default()
    }

    /// Counts `(status, is_active)` pairs. Approved accounts only count
    /// as active while their active flag is set.
    pub fn tally<I>(accounts: I) -> Self
    where
        I: IntoIterator<Item = (DeliveryPersonStatus, bool)>,
    {
        accounts
            .into_iter()
            .fold(DashboardStats::builder(), |builder, (status, is_active)| {
                builder.record(status, is_active)
            })
            .build()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DashboardStatsBuilder {
    stats: DashboardStats,
}

impl DashboardStatsBuilder {
    pub fn pending_count(mut self, count: u64) -> Self {
        self.stats.pending_count = count;
        self
    }

    pub fn active_count(mut self, count: u64) -> Self {
        self.stats.active_count = count;
        self
    }

    pub fn suspended_count(mut self, count: u64) -> Self {
        self.stats.suspended_count = count;
        self
    }

    pub fn rejected_count(mut self, count: u64) -> Self {
        self.stats.rejected_count = count;
        self
    }

    pub fn record(mut self, status: DeliveryPersonStatus, is_active: bool) -> Self {
        let stats = &mut self.stats;
        match status {
            DeliveryPersonStatus::Pending => bump(&mut stats.pending_count),
            DeliveryPersonStatus::Approved if is_active => bump(&mut stats.active_count),
            DeliveryPersonStatus::Approved => {}
            DeliveryPersonStatus::Suspended => bump(&mut stats.suspended_count),
            DeliveryPersonStatus::Rejected => bump(&mut stats.rejected_count),
        }
        self
    }

    pub fn build(self) -> DashboardStats {
        self.stats
    }
}

fn bump(counter: &mut u64) {
    *counter = counter.saturating_add(1);
}
