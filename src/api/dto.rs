use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::Deserialize;

use super::utils::parse_api_date;
use crate::models::{HistoryPoint, Indicator};

/// One entry of the current-rates object. Metadata keys of the response
/// (`version`, `autor`, `fecha`) do not deserialize into this shape and are
/// filtered out by the caller.
#[derive(Debug, Deserialize, Getters, new)]
pub struct IndicatorDto {
    codigo: String,
    nombre: Option<String>,
    unidad_medida: Option<String>,
    valor: Decimal,
}

impl IndicatorDto {
    pub fn to_indicator(&self) -> Indicator {
        Indicator::new(
            self.codigo.clone(),
            self.nombre.clone().unwrap_or_default(),
            self.unidad_medida.clone().unwrap_or_default(),
            self.valor,
        )
    }
}

#[derive(Debug, Deserialize, Getters, new)]
pub struct SeriesDto {
    #[serde(default)]
    serie: Vec<SeriesPointDto>,
}

/// One point of a history series, newest first in the wire order.
#[derive(Clone, Debug, Deserialize, Getters, new)]
pub struct SeriesPointDto {
    fecha: String,
    valor: Decimal,
}

impl SeriesPointDto {
    /// `None` when the date cannot be parsed; such points are skipped.
    pub fn to_history_point(&self) -> Option<HistoryPoint> {
        parse_api_date(&self.fecha).map(|date| HistoryPoint::new(date, self.valor))
    }
}
