mod load_dotenv;
mod time;

pub use load_dotenv::load_dotenv;
pub use time::{format_display, format_iso_local, format_timestamp, now_local};

pub mod base_path;
