//! Wire schemas for the promotion REST service.

/// Promotion entity and request/response body definitions
pub mod promotion;

pub use promotion::{ApiMessage, Promotion, PromotionPayload};
