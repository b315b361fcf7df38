use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use super::dto::{IndicatorDto, SeriesDto};
use super::utils::make_request;
use crate::error::ApiError;
use crate::models::{HistoryPoint, RateSnapshot};

pub const DEFAULT_BASE_URL: &str = "https://mindicador.cl/api";

/// Client for the indicator API: current rates at `{base}` and one
/// currency's daily history at `{base}/{code}`.
pub struct IndicatorApi {
    client: Client,
    base_url: String,
}

impl IndicatorApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn fetch_rates(&self) -> Result<RateSnapshot, ApiError> {
        debug!("Fetching current rates");
        let data = make_request(&self.client, &self.base_url).await?;
        let snapshot = snapshot_from_value(data)?;
        debug!(indicators = snapshot.len(), "Parsed rate snapshot");
        Ok(snapshot)
    }

    /// Returns the series in wire order (newest first). Absent or empty
    /// `serie` yields an empty vector, not an error.
    pub async fn fetch_history(&self, code: &str) -> Result<Vec<HistoryPoint>, ApiError> {
        debug!(code, "Fetching history");
        let url = format!("{}/{}", self.base_url, code);
        let data = make_request(&self.client, &url).await?;

        let series: SeriesDto =
            serde_json::from_value(data).map_err(|e| ApiError::Format(e.to_string()))?;

        Ok(series
            .serie()
            .iter()
            .filter_map(|point| point.to_history_point())
            .collect())
    }
}

/// Builds a snapshot from the mixed current-rates object, keeping only the
/// entries that carry a numeric, non-zero value.
pub fn snapshot_from_value(data: Value) -> Result<RateSnapshot, ApiError> {
    let Value::Object(entries) = data else {
        return Err(ApiError::Format("expected a JSON object".to_string()));
    };

    let indicators = entries
        .into_iter()
        .filter_map(|(_, value)| serde_json::from_value::<IndicatorDto>(value).ok())
        .filter(|dto| !dto.valor().is_zero())
        .map(|dto| dto.to_indicator())
        .collect();

    Ok(RateSnapshot::new(indicators))
}
