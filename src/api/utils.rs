use chrono::{DateTime, NaiveDate};
use reqwest::Client;
use serde_json::Value;

use crate::error::ApiError;

pub async fn make_request(client: &Client, url: &str) -> Result<Value, ApiError> {
    let res = client.get(url).send().await?;

    if !res.status().is_success() {
        return Err(ApiError::Network(format!("Request failed: {}", res.status())));
    }

    let text = res.text().await?;
    serde_json::from_str::<Value>(&text).map_err(|e| ApiError::Format(e.to_string()))
}

/// The API serves `fecha` as an RFC 3339 timestamp; plain dates also occur.
pub fn parse_api_date(date_str: &str) -> Option<NaiveDate> {
    DateTime::parse_from_rfc3339(date_str)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDate::parse_from_str(date_str, "%Y-%m-%d"))
        .ok()
}
