pub mod environment;
pub mod paths;
pub mod terminal;

pub use environment::{HISTORY_ENV_VAR, get_history_path};
pub use paths::format_path_with_tilde;
pub use terminal::{single_line, strip_ansi_codes};
