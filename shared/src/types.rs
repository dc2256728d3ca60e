//! Common types used across the platform

use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// Date range for queries
///
/// `start` is inclusive, `end` is exclusive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    pub start: chrono::NaiveDate,
    pub end: chrono::NaiveDate,
}

impl DateRange {
    pub fn contains(&self, date: chrono::NaiveDate) -> bool {
        date >= self.start && date < self.end
    }
}

/// Preset reporting periods for analytics queries
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AnalyticsPeriod {
    Week,
    #[default]
    Month,
    Year,
}

impl AnalyticsPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalyticsPeriod::Week => "week",
            AnalyticsPeriod::Month => "month",
            AnalyticsPeriod::Year => "year",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "week" => Some(AnalyticsPeriod::Week),
            "month" => Some(AnalyticsPeriod::Month),
            "year" => Some(AnalyticsPeriod::Year),
            _ => None,
        }
    }

    /// Resolve the preset to a concrete half-open window that includes `today`
    pub fn resolve(&self, today: chrono::NaiveDate) -> DateRange {
        let end = today.succ_opt().unwrap_or(today);
        let start = match self {
            AnalyticsPeriod::Week => today - chrono::Duration::days(6),
            AnalyticsPeriod::Month => today.with_day(1).unwrap_or(today),
            AnalyticsPeriod::Year => today.with_ordinal(1).unwrap_or(today),
        };
        DateRange { start, end }
    }
}
