//! Preview pipeline: session state, debounced rendering and export.
//!
//! ```text
//! edit -> Session -> formatter -> Debouncer<String>        \
//!                 -> style     -> Debouncer<StyleOptions>   -> Renderer::draw
//! export -> Renderer::export -> HistoryStore::save
//! ```
//!
//! # Error Handling Strategy
//!
//! Renderer failures are logged and never stop the pipeline: a failed draw keeps
//! the previous preview, and a failed export is returned to the caller after the
//! history save has still been attempted. Logo uploads are the only validated
//! input and fail with a typed [`LogoError`](crate::logo::LogoError) before any
//! state changes.

pub mod controller;
pub mod session;

pub use controller::PreviewController;
pub use session::Session;
