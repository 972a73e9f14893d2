mod report;
mod watch;

pub use report::{read_records, report};
pub use watch::watch;
