mod calculator;
mod parser;
mod scheduler;
mod source;
mod store;

pub use calculator::days_remaining;
pub use parser::{parse_target_date, DateParseError};
pub use scheduler::RefreshScheduler;
pub use source::CountdownSource;
pub use store::{CountdownReceiver, CountdownStore};
