//! QR Studio - payload formatting and configuration history for styled barcodes
//!
//! The crate covers the parts of a barcode designer that carry real logic:
//!
//! - Formatting structured form input (URL, email, phone, text, contact card)
//!   into the literal payload string
//! - A persisted, deduplicating, newest-first history of configurations
//! - A debounced preview pipeline that feeds an external renderer
//!
//! Symbol encoding and drawing are delegated to a [`render::Renderer`]
//! implementation supplied by the host application.
//!
//! # Example
//!
//! ```
//! use qr_studio::formatter::format_form;
//! use qr_studio::models::{FormDataMap, PayloadType};
//!
//! let mut form_data = FormDataMap::default();
//! form_data.email.to = "a@b.com".to_string();
//! form_data.email.subject = "Hi there".to_string();
//! assert_eq!(
//!     format_form(PayloadType::Email, &form_data),
//!     "mailto:a@b.com?subject=Hi%20there"
//! );
//! ```

pub mod cli;
pub mod config;
pub mod debounce;
pub mod formatter;
pub mod logo;
pub mod models;
pub mod preview;
pub mod render;
pub mod storage;
pub mod utils;

// Re-export commonly used types
pub use config::StudioConfig;
pub use debounce::Debouncer;
pub use formatter::{format_form, format_payload};
pub use models::{FormDataMap, PayloadType, SaveCandidate, SavedEntry, StyleOptions};
pub use preview::{PreviewController, Session};
pub use render::{ExportFormat, RenderRequest, Renderer};
pub use storage::{FileStore, HistoryStore, KeyValueStore, MemoryStore};
