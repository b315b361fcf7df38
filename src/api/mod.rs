pub mod dto;
pub mod indicator;
pub mod utils;

pub use indicator::{DEFAULT_BASE_URL, IndicatorApi};
