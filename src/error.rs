use thiserror::Error;

/// Failures talking to the indicator API.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Network(String),

    #[error("Unexpected response format: {0}")]
    Format(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Network(e.to_string())
    }
}

/// Conversion failures. Each variant carries its own user-visible message.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConvertError {
    #[error("Enter an amount greater than zero")]
    InvalidAmount,

    #[error("Currency {0} is not available in the current rates")]
    CurrencyUnavailable(String),

    #[error("No exchange rate published for {0}")]
    RateMissing(String),
}
