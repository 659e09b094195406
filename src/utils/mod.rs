pub mod environment;
pub mod paths;
pub mod terminal;

pub use environment::get_config_path;
pub use paths::{format_path_with_tilde, read_to_string_limited, validate_file_size};
pub use terminal::{sanitize, sanitize_preview};
