//! Core console logic - framework-agnostic form, query, and rendering operations.

/// Form synchronization between promotion entities and the edit form
pub mod form;
/// Search query construction from form fields
pub mod query;
/// Results table rendering
pub mod table;
