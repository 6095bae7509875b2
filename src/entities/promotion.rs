//! Promotion entity - the discount record administered through the console.
//!
//! Two representations cross the wire: [`Promotion`] is what the server
//! returns (ids assigned, dates as full timestamps) and [`PromotionPayload`]
//! is what create/update requests send (no id, date-only dates). Both are
//! strict at the deserialization boundary: a body that does not match the
//! schema is an error, never a partially populated record.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A promotion as the server represents it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Promotion {
    /// Server-assigned identifier
    pub id: i64,
    /// Display name of the promotion
    pub title: String,
    /// Business-unique promotion code
    pub promo_code: String,
    /// Discount category (e.g. "percentage", "fixed")
    pub promo_type: String,
    /// Discount magnitude
    pub amount: i64,
    /// True when the promotion applies across the whole catalog
    pub is_site_wide: bool,
    /// Start of the promotion window, wire-encoded as a full timestamp
    pub start_date: NaiveDateTime,
    /// End of the promotion window, wire-encoded as a full timestamp
    pub end_date: NaiveDateTime,
    /// Target product; meaningful only when `is_site_wide` is false.
    /// The client does not enforce that relationship.
    pub product_id: Option<i64>,
}

/// Request body for creating or replacing a promotion.
///
/// Dates are sent date-only: the edit form holds calendar dates, and the
/// server accepts them as midnight timestamps. Round-tripping an entity
/// through the form is therefore lossy for non-midnight timestamps.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PromotionPayload {
    pub title: String,
    pub promo_code: String,
    pub promo_type: String,
    pub amount: i64,
    pub is_site_wide: bool,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub product_id: Option<i64>,
}

/// Structured status/error body: `{"message": "..."}`.
///
/// Error responses carry the text shown verbatim in the flash area.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}
