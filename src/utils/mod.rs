pub mod helper;

pub use helper::{escape_html, format_account, truncate_string};
