use chrono::NaiveDate;
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

/// One day of a currency's historical series.
#[derive(Clone, Debug, Getters, new, PartialEq, Eq)]
pub struct HistoryPoint {
    date: NaiveDate,
    value: Decimal,
}
