//! Immutable order records.

use chrono::{DateTime, Utc};
use sbos_core::OrderRef;
use serde::{Deserialize, Serialize};

use crate::cart::LineItem;
use crate::customer::Customer;
use crate::totals::Totals;

/// A placed order: reference, timestamp, and snapshots of the customer,
/// cart lines, and totals at submission time.
///
/// Orders are append-only history records and are never mutated after
/// creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Unique order reference.
    pub reference: OrderRef,
    /// Submission time.
    pub placed_at: DateTime<Utc>,
    /// Customer snapshot.
    pub customer: Customer,
    /// Cart line snapshots.
    pub items: Vec<LineItem>,
    /// Totals snapshot.
    pub totals: Totals,
}
