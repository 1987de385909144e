//! Data models for barcode configurations.
//!
//! - [`PayloadType`] and the per-type field structs (`UrlFields`, `EmailFields`, ...)
//! - [`FormDataMap`] - the form state of every payload type at once
//! - [`StyleOptions`] - colors, gradient and shapes handed to the renderer
//! - [`SavedEntry`] - one snapshot in the configuration history
//!
//! Serialized field names follow the history blob format (`qrType`, `formData`,
//! `customization`), so older blobs keep loading.

pub mod deserializers;
pub mod entry;
pub mod payload;
pub mod style;

pub use entry::{SaveCandidate, SavedEntry};
pub use payload::{
    ContactFields, EmailFields, FormDataMap, Payload, PayloadFields, PayloadType, PhoneFields,
    TextFields, UrlFields,
};
pub use style::{
    CornerDotShape, CornerSquareShape, DotShape, GradientMode, PRESET_COLORS, StyleOptions,
};
