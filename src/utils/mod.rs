pub mod app_time;
pub mod format;
pub mod time_utils;

pub use format::format_currency;
pub use time_utils::{parse_iso_timestamp, to_iso_timestamp};
