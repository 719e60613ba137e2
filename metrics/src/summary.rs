//! Dashboard summary: the one real data call behind the transaction cards.
//!
//! The endpoint returns camelCase JSON with two optional counts. Everything
//! else on the cards is derived from them. Any failure (transport, status,
//! body) leaves the fallback ledger in place; the caller logs and moves on.

#[cfg(test)]
#[path = "summary_test.rs"]
mod summary_test;

use serde::Deserialize;

use crate::queue::TransactionLedger;

pub const FALLBACK_TOTAL: u64 = 1002;
pub const FALLBACK_REJECTED: u64 = 401;
pub const FALLBACK_ISSUED: u64 = 601;
pub const FALLBACK_QUEUED: u64 = 2;

pub const DEFAULT_DASHBOARD_ENDPOINT: &str = "http://localhost:8080/api/dashboard";

/// Dashboard endpoint, overridable at build time with `MULTIVA_DASHBOARD_URL`.
pub const DASHBOARD_ENDPOINT: &str = match option_env!("MULTIVA_DASHBOARD_URL") {
    Some(url) => url,
    None => DEFAULT_DASHBOARD_ENDPOINT,
};

/// Share of the total counted as rejected, in tenths.
const REJECTED_TENTHS: u64 = 4;

#[derive(Debug, thiserror::Error)]
pub enum SummaryError {
    #[error("dashboard request failed: {0}")]
    Network(String),
    #[error("dashboard returned HTTP {0}")]
    Status(u16),
    #[error("dashboard body is not a summary: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Wire shape of `GET /api/dashboard`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    #[serde(default)]
    pub total_customers: Option<u64>,
    #[serde(default)]
    pub total_cert_issues: Option<u64>,
}

impl DashboardSummary {
    /// Decode a response body.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError::Decode`] if the body is not a JSON object of
    /// the expected shape.
    pub fn parse(body: &str) -> Result<Self, SummaryError> {
        // A derived struct decoder also takes positional arrays; only an
        // object counts as a summary.
        let object: serde_json::Map<String, serde_json::Value> = serde_json::from_str(body)?;
        Ok(serde_json::from_value(serde_json::Value::Object(object))?)
    }

    /// Derive the transaction cards from this summary.
    ///
    /// `total` and `issued` come straight from the payload; `rejected` is 40%
    /// of the total rounded down and `queued` is what is left, floored at
    /// zero. A missing count keeps its fallback value, and without a total
    /// there is nothing to derive `rejected` and `queued` from, so they keep
    /// theirs too.
    #[must_use]
    pub fn to_ledger(&self) -> TransactionLedger {
        let mut ledger = TransactionLedger::default();
        if let Some(issued) = self.total_cert_issues {
            ledger.issued = issued;
        }
        if let Some(total) = self.total_customers {
            ledger.total = total;
            ledger.rejected = rejected_share(total);
            ledger.queued = total.saturating_sub(ledger.issued).saturating_sub(ledger.rejected);
        }
        ledger
    }
}

/// `floor(total * 0.4)` without going through floating point.
fn rejected_share(total: u64) -> u64 {
    total / 10 * REJECTED_TENTHS + total % 10 * REJECTED_TENTHS / 10
}

/// Seed the ledger from the outcome of the dashboard call.
///
/// A successful summary replaces the ledger; a failure leaves it untouched,
/// so whatever the cards already show (the fallback values plus any local
/// activity) stays. Returns `true` when the ledger was replaced.
pub fn apply_summary(ledger: &mut TransactionLedger, result: &Result<DashboardSummary, SummaryError>) -> bool {
    match result {
        Ok(summary) => {
            *ledger = summary.to_ledger();
            true
        }
        Err(_) => false,
    }
}
