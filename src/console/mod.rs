//! Console layer - the controller binding operator actions to the service.
//!
//! [`Console`] owns all mutable UI state: the single-slot edit form, the
//! last rendered results table, the flash message, and the request sequence
//! counter. One handler exists per operator action; each is deterministic,
//! performs at most one service call, and reports its outcome only through
//! that state. Handlers never return errors - every failure ends up in the
//! flash area.
//!
//! Completions carry a monotonically increasing sequence token. A
//! completion whose token is no longer current is discarded without
//! touching any state, so a slow request can never overwrite the result of
//! one dispatched after it.

/// Interactive line-oriented command loop
pub mod repl;

use crate::{
    client::PromotionApi,
    core::{form::FormState, query, table},
    entities::Promotion,
    errors::SERVER_ERROR_MESSAGE,
};
use tracing::{debug, info};

/// Flash text for any successful create/update/retrieve/list/search.
pub const SUCCESS_MESSAGE: &str = "Success";
/// Flash text after a successful delete, regardless of the response body.
pub const DELETED_MESSAGE: &str = "Promotion has been Deleted!";
/// Flash text after a successful activate.
pub const ACTIVATED_MESSAGE: &str = "Promotion has been Activated!";
/// Flash text after a successful deactivate.
pub const DEACTIVATED_MESSAGE: &str = "Promotion has been Deactivated!";

/// The promotion admin console: one edit form, one results table, one
/// flash message, bound to a promotion service.
pub struct Console<S> {
    service: S,
    /// The single-slot edit form, mirroring at most one promotion
    pub form: FormState,
    flash: String,
    results: Option<String>,
    request_seq: u64,
}

impl<S: PromotionApi> Console<S> {
    /// Creates a console with an empty form bound to `service`.
    pub fn new(service: S) -> Self {
        Self {
            service,
            form: FormState::new(),
            flash: String::new(),
            results: None,
            request_seq: 0,
        }
    }

    /// The current flash message, empty when the last action is pending.
    #[must_use]
    pub fn flash(&self) -> &str {
        &self.flash
    }

    /// The last rendered results table, if a list/search has completed.
    #[must_use]
    pub fn results(&self) -> Option<&str> {
        self.results.as_deref()
    }

    /// Creates a promotion from the form; on success the form redisplays
    /// the server's returned entity (including its assigned id).
    pub async fn create(&mut self) {
        self.flash.clear();
        let payload = match self.form.to_payload() {
            Ok(payload) => payload,
            Err(err) => {
                self.flash = err.user_message();
                return;
            }
        };
        info!(title = %payload.title, "creating promotion");
        let token = self.begin_request();
        let outcome = self.service.create(&payload).await;
        if self.is_stale(token) {
            debug!(token, "discarding stale create completion");
            return;
        }
        match outcome {
            Ok(promotion) => {
                self.form.apply_entity(&promotion);
                self.flash = SUCCESS_MESSAGE.to_string();
            }
            // Form left as-is so the operator can correct and resubmit.
            Err(err) => self.flash = err.user_message(),
        }
    }

    /// Replaces the promotion identified by the form's id field with the
    /// form's contents (full replace, no partial update).
    pub async fn update(&mut self) {
        self.flash.clear();
        let (id, payload) = match self.form.promotion_id().and_then(|id| {
            let payload = self.form.to_payload()?;
            Ok((id, payload))
        }) {
            Ok(parts) => parts,
            Err(err) => {
                self.flash = err.user_message();
                return;
            }
        };
        info!(id, "updating promotion");
        let token = self.begin_request();
        let outcome = self.service.update(id, &payload).await;
        if self.is_stale(token) {
            debug!(token, "discarding stale update completion");
            return;
        }
        match outcome {
            Ok(promotion) => {
                self.form.apply_entity(&promotion);
                self.flash = SUCCESS_MESSAGE.to_string();
            }
            Err(err) => self.flash = err.user_message(),
        }
    }

    /// Fetches the promotion identified by the form's id field into the
    /// form. On failure the editable fields are cleared and the failure
    /// message is flashed.
    pub async fn retrieve(&mut self) {
        self.flash.clear();
        let id = match self.form.promotion_id() {
            Ok(id) => id,
            Err(err) => {
                self.flash = err.user_message();
                return;
            }
        };
        info!(id, "retrieving promotion");
        let token = self.begin_request();
        let outcome = self.service.retrieve(id).await;
        if self.is_stale(token) {
            debug!(token, "discarding stale retrieve completion");
            return;
        }
        match outcome {
            Ok(promotion) => {
                self.form.apply_entity(&promotion);
                self.flash = SUCCESS_MESSAGE.to_string();
            }
            Err(err) => {
                self.form.clear();
                self.flash = err.user_message();
            }
        }
    }

    /// Deletes the promotion identified by the form's id field. The fixed
    /// success message is shown regardless of the response body; any
    /// failure is reported generically.
    pub async fn delete(&mut self) {
        self.transition(Action::Delete).await;
    }

    /// Activates the promotion identified by the form's id field. No
    /// entity comes back, so the form is cleared rather than repopulated.
    pub async fn activate(&mut self) {
        self.transition(Action::Activate).await;
    }

    /// Deactivates the promotion identified by the form's id field.
    pub async fn deactivate(&mut self) {
        self.transition(Action::Deactivate).await;
    }

    /// Lists all promotions, unfiltered.
    pub async fn list(&mut self) {
        self.fetch_results(String::new()).await;
    }

    /// Searches promotions using the filter derived from the form fields.
    pub async fn search(&mut self) {
        let query = query::search_query(&self.form);
        self.fetch_results(query).await;
    }

    /// Resets the identifier field, the form, and the flash message.
    /// No network call is involved.
    pub fn clear(&mut self) {
        self.form.clear_all();
        self.flash.clear();
    }

    /// The id-only state transitions share one shape: parse the id, make
    /// the call, clear the editable fields and flash a fixed message on
    /// success, flash the generic server-error string on failure.
    async fn transition(&mut self, action: Action) {
        self.flash.clear();
        let id = match self.form.promotion_id() {
            Ok(id) => id,
            Err(err) => {
                self.flash = err.user_message();
                return;
            }
        };
        info!(id, action = action.name(), "promotion state transition");
        let token = self.begin_request();
        let outcome = match action {
            Action::Delete => self.service.delete(id).await,
            Action::Activate => self.service.activate(id).await,
            Action::Deactivate => self.service.deactivate(id).await,
        };
        if self.is_stale(token) {
            debug!(token, "discarding stale {} completion", action.name());
            return;
        }
        match outcome {
            Ok(()) => {
                self.form.clear();
                self.flash = action.success_message().to_string();
            }
            Err(_) => self.flash = SERVER_ERROR_MESSAGE.to_string(),
        }
    }

    async fn fetch_results(&mut self, query: String) {
        self.flash.clear();
        info!(query = %query, "listing promotions");
        let token = self.begin_request();
        let outcome = self.service.search(&query).await;
        if self.is_stale(token) {
            debug!(token, "discarding stale search completion");
            return;
        }
        match outcome {
            Ok(promotions) => {
                self.show_results(&promotions);
                self.flash = SUCCESS_MESSAGE.to_string();
            }
            Err(err) => self.flash = err.user_message(),
        }
    }

    /// Renders the results table and designates the first entity, if any,
    /// as the new form target. An empty sequence leaves the form alone.
    fn show_results(&mut self, promotions: &[Promotion]) {
        self.results = Some(table::render(promotions));
        if let Some(first) = promotions.first() {
            self.form.apply_entity(first);
        }
    }

    pub(crate) fn begin_request(&mut self) -> u64 {
        self.request_seq += 1;
        self.request_seq
    }

    pub(crate) fn is_stale(&self, token: u64) -> bool {
        token != self.request_seq
    }
}

enum Action {
    Delete,
    Activate,
    Deactivate,
}

impl Action {
    const fn name(&self) -> &'static str {
        match self {
            Self::Delete => "delete",
            Self::Activate => "activate",
            Self::Deactivate => "deactivate",
        }
    }

    const fn success_message(&self) -> &'static str {
        match self {
            Self::Delete => DELETED_MESSAGE,
            Self::Activate => ACTIVATED_MESSAGE,
            Self::Deactivate => DEACTIVATED_MESSAGE,
        }
    }
}
