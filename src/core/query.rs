//! Search query construction from the current form fields.
//!
//! Filter-eligible fields are evaluated in one fixed precedence order -
//! site-wide flag, title, promotion code, promotion type - as mutually
//! exclusive alternatives: the first populated field contributes exactly
//! one `key=value` term and every later field is ignored even if populated.
//! An entirely empty form yields an empty string, which the client turns
//! into an unfiltered list request.

use crate::core::form::FormState;

/// Derives the URL query string for a list/search request.
///
/// Values are URL-encoded. The site-wide filter participates only when the
/// form token is exactly `"true"`; its term is always `status=true`.
#[must_use]
pub fn search_query(form: &FormState) -> String {
    if form.is_site_wide == "true" {
        return "status=true".to_string();
    }
    if !form.title.is_empty() {
        return format!("title={}", urlencoding::encode(&form.title));
    }
    if !form.code.is_empty() {
        return format!("promo_code={}", urlencoding::encode(&form.code));
    }
    if !form.promo_type.is_empty() {
        return format!("promo_type={}", urlencoding::encode(&form.promo_type));
    }
    String::new()
}
