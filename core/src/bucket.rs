//! Delinquency bucket classification.
//!
//! RULE: classification is a pure, total function of days_past_due.
//! The ranges are exhaustive for non-negative values; the Current
//! fallback only fires for negative input, which the warehouse schema
//! does not produce.

use crate::record::RepaymentDetail;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How late a repayment is. Variant order is the report's severity
/// order (Current first), which the derived `Ord` relies on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum DelinquencyBucket {
    #[serde(rename = "Current")]
    Current,
    #[serde(rename = "1-29 Days")]
    Days1To29,
    #[serde(rename = "30-59 Days")]
    Days30To59,
    #[serde(rename = "60-89 Days")]
    Days60To89,
    #[serde(rename = "90+ Days")]
    Days90Plus,
}

impl DelinquencyBucket {
    pub const ALL: [DelinquencyBucket; 5] = [
        DelinquencyBucket::Current,
        DelinquencyBucket::Days1To29,
        DelinquencyBucket::Days30To59,
        DelinquencyBucket::Days60To89,
        DelinquencyBucket::Days90Plus,
    ];

    pub fn from_days_past_due(days: i64) -> Self {
        match days {
            0 => DelinquencyBucket::Current,
            1..=29 => DelinquencyBucket::Days1To29,
            30..=59 => DelinquencyBucket::Days30To59,
            60..=89 => DelinquencyBucket::Days60To89,
            d if d >= 90 => DelinquencyBucket::Days90Plus,
            // Negative input: fall back to Current.
            _ => DelinquencyBucket::Current,
        }
    }

    /// The label used in the report table and console output.
    pub fn label(&self) -> &'static str {
        match self {
            DelinquencyBucket::Current => "Current",
            DelinquencyBucket::Days1To29 => "1-29 Days",
            DelinquencyBucket::Days30To59 => "30-59 Days",
            DelinquencyBucket::Days60To89 => "60-89 Days",
            DelinquencyBucket::Days90Plus => "90+ Days",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|b| b.label() == label)
    }

    /// Every bucket except Current carries ranked customers.
    pub fn is_delinquent(&self) -> bool {
        !matches!(self, DelinquencyBucket::Current)
    }
}

impl fmt::Display for DelinquencyBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A joined repayment row with its bucket attached. The aggregator and
/// ranker both consume this so classification happens exactly once.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedDetail {
    pub detail: RepaymentDetail,
    pub bucket: DelinquencyBucket,
}

pub fn classify_all(details: Vec<RepaymentDetail>) -> Vec<ClassifiedDetail> {
    details
        .into_iter()
        .map(|detail| {
            let bucket = DelinquencyBucket::from_days_past_due(detail.days_past_due());
            ClassifiedDetail { detail, bucket }
        })
        .collect()
}
