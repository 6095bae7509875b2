//! Form synchronization - mapping between promotion entities and the edit form.
//!
//! The form is a single-slot, string-typed projection of at most one
//! promotion: the most recently created, retrieved, updated, or
//! first-of-search-results record. It has no identity beyond "currently
//! displayed" and is owned by the console controller rather than read from
//! ambient UI state.
//!
//! Two coercions live here:
//! - the site-wide control holds the string token `"true"` or `"false"`;
//!   anything other than a strict `"true"` reads back as false;
//! - wire dates are full timestamps but the form shows only the leading
//!   `YYYY-MM-DD`. Applying an entity truncates the time of day
//!   irrecoverably, so an entity → form → entity round trip is lossy for
//!   any non-midnight timestamp. That is the documented behavior, not a bug.

use crate::{
    entities::{Promotion, PromotionPayload},
    errors::{Error, Result},
};
use chrono::NaiveDate;

/// Date format shown in the form: the leading 10 characters of the wire timestamp.
const FORM_DATE_FORMAT: &str = "%Y-%m-%d";

/// String-typed contents of the promotion edit form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    /// Identifier field; server-assigned, empty before creation
    pub id: String,
    /// Display name
    pub title: String,
    /// Business-unique promotion code
    pub code: String,
    /// Discount category
    pub promo_type: String,
    /// Discount magnitude
    pub amount: String,
    /// Site-wide token: `"true"` or `"false"`
    pub is_site_wide: String,
    /// Start date, `YYYY-MM-DD`
    pub start: String,
    /// End date, `YYYY-MM-DD`
    pub end: String,
    /// Target product id; empty when site-wide
    pub product_id: String,
}

impl FormState {
    /// Creates an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes every field of `promotion` into the form.
    ///
    /// The wire boolean is compared by strict equality to `true`; anything
    /// else becomes the `"false"` token. Dates are truncated to their
    /// calendar date.
    pub fn apply_entity(&mut self, promotion: &Promotion) {
        self.id = promotion.id.to_string();
        self.title = promotion.title.clone();
        self.code = promotion.promo_code.clone();
        self.promo_type = promotion.promo_type.clone();
        self.amount = promotion.amount.to_string();
        self.is_site_wide = if promotion.is_site_wide {
            "true".to_string()
        } else {
            "false".to_string()
        };
        self.start = promotion.start_date.format(FORM_DATE_FORMAT).to_string();
        self.end = promotion.end_date.format(FORM_DATE_FORMAT).to_string();
        self.product_id = promotion
            .product_id
            .map_or_else(String::new, |id| id.to_string());
    }

    /// Produces a candidate request body from the current form fields.
    ///
    /// # Errors
    /// Returns [`Error::Form`] when a numeric or date field cannot be
    /// coerced into its wire representation.
    pub fn to_payload(&self) -> Result<PromotionPayload> {
        Ok(PromotionPayload {
            title: self.title.clone(),
            promo_code: self.code.clone(),
            promo_type: self.promo_type.clone(),
            amount: parse_number(&self.amount, "amount")?,
            is_site_wide: self.is_site_wide == "true",
            start_date: parse_form_date(&self.start, "start")?,
            end_date: parse_form_date(&self.end, "end")?,
            product_id: if self.product_id.trim().is_empty() {
                None
            } else {
                Some(parse_number(&self.product_id, "product id")?)
            },
        })
    }

    /// Parses the identifier field.
    ///
    /// # Errors
    /// Returns [`Error::Form`] when the field is empty or not a number.
    pub fn promotion_id(&self) -> Result<i64> {
        parse_number(&self.id, "promotion id")
    }

    /// Resets every editable field to empty. The identifier field is kept.
    pub fn clear(&mut self) {
        self.title.clear();
        self.code.clear();
        self.promo_type.clear();
        self.amount.clear();
        self.is_site_wide.clear();
        self.start.clear();
        self.end.clear();
        self.product_id.clear();
    }

    /// Resets the identifier field along with every editable field.
    pub fn clear_all(&mut self) {
        self.id.clear();
        self.clear();
    }
}

fn parse_number(value: &str, field: &str) -> Result<i64> {
    value.trim().parse().map_err(|_| Error::Form {
        message: format!("{field} must be a whole number, got '{value}'"),
    })
}

fn parse_form_date(value: &str, field: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), FORM_DATE_FORMAT).map_err(|_| Error::Form {
        message: format!("{field} date must be YYYY-MM-DD, got '{value}'"),
    })
}
