pub mod history;
pub mod indicator;

pub use history::HistoryPoint;
pub use indicator::{Indicator, RateSnapshot};
