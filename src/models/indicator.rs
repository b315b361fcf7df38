use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

/// One indicator from the current-rates response, e.g. the observed dollar.
/// `value` is the rate in `unit` (CLP-denominated for every currency).
#[derive(Clone, Debug, Getters, new)]
pub struct Indicator {
    code: String,
    name: String,
    unit: String,
    value: Decimal,
}

impl Indicator {
    /// Selector label: the provided name, or the uppercased code when the
    /// source gave none.
    pub fn label(&self) -> String {
        if self.name.is_empty() {
            self.code.to_uppercase()
        } else {
            self.name.clone()
        }
    }
}

/// The full current-rates response at one point in time. Fetched fresh on
/// every conversion, never cached.
#[derive(Clone, Debug, Default, Getters, new)]
pub struct RateSnapshot {
    indicators: Vec<Indicator>,
}

impl RateSnapshot {
    pub fn get(&self, code: &str) -> Option<&Indicator> {
        self.indicators.iter().find(|i| i.code() == code)
    }

    pub fn len(&self) -> usize {
        self.indicators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indicators.is_empty()
    }
}
