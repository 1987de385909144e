pub mod environment;
pub mod text;
pub mod timestamps;

pub use environment::{HOME_ENV_VAR, get_data_dir};
pub use text::{single_line, truncate_preview};
pub use timestamps::format_saved_at;
