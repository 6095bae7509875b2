//! Shared test utilities for the promotion console.
//!
//! Provides promotion fixtures and [`FakeApi`], a programmable in-memory
//! stand-in for the promotion service used to exercise the console
//! controller without HTTP.

#![allow(clippy::unwrap_used)]

use crate::{
    client::PromotionApi,
    entities::{Promotion, PromotionPayload},
    errors::{Error, Result},
};
use std::cell::RefCell;

/// A promotion whose date fields carry midnight timestamps, so it
/// round-trips the form losslessly.
pub fn midnight_promotion(id: i64) -> Promotion {
    promotion_with_times(id, "2024-06-01T00:00:00", "2024-08-31T00:00:00")
}

/// A promotion with explicit wire timestamps (ISO 8601, no timezone).
pub fn promotion_with_times(id: i64, start: &str, end: &str) -> Promotion {
    Promotion {
        id,
        title: "Summer Sale".to_string(),
        promo_code: "SUMMER10".to_string(),
        promo_type: "percentage".to_string(),
        amount: 10,
        is_site_wide: true,
        start_date: start.parse().unwrap(),
        end_date: end.parse().unwrap(),
        product_id: None,
    }
}

/// How the fake service should fail. Sticky until replaced.
#[derive(Clone, Debug)]
pub enum FailMode {
    NotFound(&'static str),
    Rejected(u16, &'static str),
    Server,
}

impl FailMode {
    fn to_error(&self) -> Error {
        match self {
            Self::NotFound(message) => Error::NotFound {
                message: (*message).to_string(),
            },
            Self::Rejected(status, message) => Error::Rejected {
                status: *status,
                message: (*message).to_string(),
            },
            Self::Server => Error::Server,
        }
    }
}

/// In-memory promotion service with programmable failures.
///
/// Single-threaded like the console itself, so interior mutability is a
/// plain `RefCell`. The fake records what the controller sent (`created`,
/// `last_query`) so tests can assert on the wire interaction.
#[derive(Default)]
pub struct FakeApi {
    pub promotions: RefCell<Vec<Promotion>>,
    pub fail: RefCell<Option<FailMode>>,
    /// Payloads received by `create`, in order
    pub created: RefCell<Vec<PromotionPayload>>,
    /// Query string of the most recent `search` call
    pub last_query: RefCell<Option<String>>,
}

impl FakeApi {
    pub fn with_promotions(promotions: Vec<Promotion>) -> Self {
        Self {
            promotions: RefCell::new(promotions),
            ..Self::default()
        }
    }

    /// Makes every subsequent call fail with `mode` until replaced.
    pub fn fail_with(&self, mode: FailMode) {
        *self.fail.borrow_mut() = Some(mode);
    }

    fn check_fail(&self) -> Result<()> {
        match self.fail.borrow().as_ref() {
            Some(mode) => Err(mode.to_error()),
            None => Ok(()),
        }
    }
}

fn promotion_from_payload(id: i64, payload: &PromotionPayload) -> Promotion {
    Promotion {
        id,
        title: payload.title.clone(),
        promo_code: payload.promo_code.clone(),
        promo_type: payload.promo_type.clone(),
        amount: payload.amount,
        is_site_wide: payload.is_site_wide,
        start_date: payload.start_date.and_hms_opt(0, 0, 0).unwrap(),
        end_date: payload.end_date.and_hms_opt(0, 0, 0).unwrap(),
        product_id: payload.product_id,
    }
}

impl PromotionApi for FakeApi {
    async fn create(&self, payload: &PromotionPayload) -> Result<Promotion> {
        self.check_fail()?;
        self.created.borrow_mut().push(payload.clone());
        let id = self
            .promotions
            .borrow()
            .iter()
            .map(|p| p.id)
            .max()
            .unwrap_or(0)
            + 1;
        let promotion = promotion_from_payload(id, payload);
        self.promotions.borrow_mut().push(promotion.clone());
        Ok(promotion)
    }

    async fn retrieve(&self, id: i64) -> Result<Promotion> {
        self.check_fail()?;
        self.promotions
            .borrow()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| Error::NotFound {
                message: format!("Promotion {id} not found"),
            })
    }

    async fn update(&self, id: i64, payload: &PromotionPayload) -> Result<Promotion> {
        self.check_fail()?;
        let mut promotions = self.promotions.borrow_mut();
        let slot = promotions
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| Error::NotFound {
                message: format!("Promotion {id} not found"),
            })?;
        *slot = promotion_from_payload(id, payload);
        Ok(slot.clone())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.check_fail()?;
        self.promotions.borrow_mut().retain(|p| p.id != id);
        Ok(())
    }

    async fn activate(&self, _id: i64) -> Result<()> {
        self.check_fail()
    }

    async fn deactivate(&self, _id: i64) -> Result<()> {
        self.check_fail()
    }

    async fn search(&self, query: &str) -> Result<Vec<Promotion>> {
        *self.last_query.borrow_mut() = Some(query.to_string());
        self.check_fail()?;
        Ok(self.promotions.borrow().clone())
    }
}
