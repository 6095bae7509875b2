//! REST client for the promotion service.
//!
//! [`PromotionApi`] is the seam the console controller is written against;
//! [`PromotionServiceClient`] is the `reqwest`-backed implementation that
//! talks to the real service. There are no retries, timeouts, auth headers,
//! or caching: every call is a single request whose outcome is terminal.

use crate::{
    entities::{ApiMessage, Promotion, PromotionPayload},
    errors::{Error, Result},
};
use reqwest::{Response, StatusCode};
use tracing::debug;

/// Operations the promotion service exposes.
///
/// Activate, deactivate, and delete return no entity; the service answers
/// them with a status message (or nothing at all), which the console
/// replaces with its own fixed flash strings.
#[allow(async_fn_in_trait)] // single-threaded console, no Send bound needed
pub trait PromotionApi {
    async fn create(&self, payload: &PromotionPayload) -> Result<Promotion>;
    async fn retrieve(&self, id: i64) -> Result<Promotion>;
    async fn update(&self, id: i64, payload: &PromotionPayload) -> Result<Promotion>;
    async fn delete(&self, id: i64) -> Result<()>;
    async fn activate(&self, id: i64) -> Result<()>;
    async fn deactivate(&self, id: i64) -> Result<()>;
    /// Lists promotions, filtered by `query` when it is non-empty.
    async fn search(&self, query: &str) -> Result<Vec<Promotion>>;
}

/// HTTP client bound to one promotion service.
#[derive(Clone)]
pub struct PromotionServiceClient {
    base_url: String,
    client: reqwest::Client,
}

impl PromotionServiceClient {
    /// Creates a client for the service at `base_url` (scheme and host,
    /// without the `/promotions` path).
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub(crate) fn collection_url(&self) -> String {
        format!("{}/promotions", self.base_url)
    }

    pub(crate) fn member_url(&self, id: i64) -> String {
        format!("{}/promotions/{id}", self.base_url)
    }

    pub(crate) fn activation_url(&self, id: i64) -> String {
        format!("{}/promotions/{id}/activate", self.base_url)
    }
}

impl PromotionApi for PromotionServiceClient {
    async fn create(&self, payload: &PromotionPayload) -> Result<Promotion> {
        debug!(title = %payload.title, "POST {}", self.collection_url());
        let res = self
            .client
            .post(self.collection_url())
            .json(payload)
            .send()
            .await?;
        parse_entity(res).await
    }

    async fn retrieve(&self, id: i64) -> Result<Promotion> {
        let res = self.client.get(self.member_url(id)).send().await?;
        parse_entity(res).await
    }

    async fn update(&self, id: i64, payload: &PromotionPayload) -> Result<Promotion> {
        let res = self
            .client
            .put(self.member_url(id))
            .json(payload)
            .send()
            .await?;
        parse_entity(res).await
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let res = self.client.delete(self.member_url(id)).send().await?;
        check_status(res).await.map(drop)
    }

    async fn activate(&self, id: i64) -> Result<()> {
        let res = self.client.put(self.activation_url(id)).send().await?;
        check_status(res).await.map(drop)
    }

    async fn deactivate(&self, id: i64) -> Result<()> {
        let res = self.client.delete(self.activation_url(id)).send().await?;
        check_status(res).await.map(drop)
    }

    async fn search(&self, query: &str) -> Result<Vec<Promotion>> {
        let url = if query.is_empty() {
            self.collection_url()
        } else {
            format!("{}?{}", self.collection_url(), query)
        };
        debug!("GET {url}");
        let res = self.client.get(url).send().await?;
        let res = check_status(res).await?;
        res.json().await.map_err(|_| Error::Server)
    }
}

async fn parse_entity(res: Response) -> Result<Promotion> {
    let res = check_status(res).await?;
    // A success body that does not match the entity schema is treated as a
    // server failure rather than a partially populated record.
    res.json().await.map_err(|_| Error::Server)
}

/// Passes successful responses through and maps failures onto the error
/// taxonomy, preferring the server-supplied `{message}` body.
async fn check_status(res: Response) -> Result<Response> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }
    let message = res
        .json::<ApiMessage>()
        .await
        .ok()
        .map(|body| body.message);
    Err(classify_failure(status, message))
}

fn classify_failure(status: StatusCode, message: Option<String>) -> Error {
    match (status, message) {
        (StatusCode::NOT_FOUND, Some(message)) => Error::NotFound { message },
        (StatusCode::NOT_FOUND, None) => Error::NotFound {
            message: crate::errors::SERVER_ERROR_MESSAGE.to_string(),
        },
        (status, Some(message)) if status.is_client_error() => Error::Rejected {
            status: status.as_u16(),
            message,
        },
        _ => Error::Server,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_use_the_canonical_prefix() {
        let client = PromotionServiceClient::new("http://localhost:8080/");
        assert_eq!(client.collection_url(), "http://localhost:8080/promotions");
        assert_eq!(client.member_url(42), "http://localhost:8080/promotions/42");
        assert_eq!(
            client.activation_url(42),
            "http://localhost:8080/promotions/42/activate"
        );
    }

    #[test]
    fn not_found_carries_the_server_message() {
        let err = classify_failure(
            StatusCode::NOT_FOUND,
            Some("Promotion 999 not found".to_string()),
        );
        assert!(matches!(err, Error::NotFound { message } if message == "Promotion 999 not found"));
    }

    #[test]
    fn structured_client_errors_become_rejections() {
        let err = classify_failure(
            StatusCode::CONFLICT,
            Some("Promotion code already exists".to_string()),
        );
        assert!(
            matches!(err, Error::Rejected { status: 409, message } if message == "Promotion code already exists")
        );
    }

    #[test]
    fn everything_else_is_a_generic_server_failure() {
        assert!(matches!(
            classify_failure(StatusCode::INTERNAL_SERVER_ERROR, Some("boom".to_string())),
            Error::Server
        ));
        assert!(matches!(
            classify_failure(StatusCode::BAD_REQUEST, None),
            Error::Server
        ));
    }
}
