use crate::types::contracts::{ContractSummary, Variant};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use icu_collator::{Collator, CollatorOptions, Strength};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use strum::{Display, EnumString};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SortField {
    Name,
    Network,
    SolidityDeployedTime,
    InkDeployedTime,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn reversed(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    pub order: SortOrder,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            field: SortField::SolidityDeployedTime,
            order: SortOrder::Desc,
        }
    }
}

impl SortSpec {
    pub fn new(field: SortField, order: SortOrder) -> Self {
        Self { field, order }
    }

    /// Selecting the active field reverses the direction, selecting another
    /// field switches to it in ascending order.
    pub fn toggle(self, field: SortField) -> Self {
        if self.field == field {
            Self::new(field, self.order.reversed())
        } else {
            Self::new(field, SortOrder::Asc)
        }
    }

    pub fn compare(&self, a: &ContractSummary, b: &ContractSummary) -> Ordering {
        let ordering = match self.field {
            SortField::Name => locale_compare(&a.name, &b.name),
            SortField::Network => locale_compare(&a.network.to_string(), &b.network.to_string()),
            SortField::SolidityDeployedTime => compare_deployed_time(a, b, Variant::Solidity),
            SortField::InkDeployedTime => compare_deployed_time(a, b, Variant::Ink),
        };
        self.order.apply(ordering)
    }

    /// Stable sort: contracts comparing equal keep their relative order.
    pub fn sort(&self, contracts: &mut [ContractSummary]) {
        contracts.sort_by(|a, b| self.compare(a, b));
    }
}

fn compare_deployed_time(a: &ContractSummary, b: &ContractSummary, variant: Variant) -> Ordering {
    parse_timestamp(a.deployed_time(variant)).cmp(&parse_timestamp(b.deployed_time(variant)))
}

/// Parses a deployment timestamp. Missing or malformed values map to the unix
/// epoch, so they sort first in ascending and last in descending order.
pub fn parse_timestamp(value: Option<&str>) -> DateTime<Utc> {
    value
        .and_then(|value| {
            let value = value.trim();
            DateTime::parse_from_rfc3339(value)
                .map(|time| time.with_timezone(&Utc))
                .ok()
                .or_else(|| {
                    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"]
                        .into_iter()
                        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
                        .map(|time| time.and_utc())
                })
                .or_else(|| {
                    NaiveDate::parse_from_str(value, "%Y-%m-%d")
                        .ok()
                        .and_then(|date| date.and_hms_opt(0, 0, 0))
                        .map(|time| time.and_utc())
                })
        })
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

thread_local! {
    static COLLATOR: Option<Collator> = root_collator();
}

fn root_collator() -> Option<Collator> {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Tertiary);
    Collator::try_new(&Default::default(), options)
        .map_err(|err| {
            tracing::warn!(error = ?err, "root collator unavailable, comparing case-folded text")
        })
        .ok()
}

/// Root-locale collation: base letters decide first (accents and case only
/// break ties), and among strings differing only in case the lower-case one
/// goes first.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => case_folded_compare(a, b),
    })
}

fn case_folded_compare(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| b.cmp(a))
}
