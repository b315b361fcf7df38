use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;

use crate::models::HistoryPoint;

pub const HISTORY_WINDOW: usize = 10;

/// Prepared chart state for one currency's recent history. The app owns at
/// most one instance and replaces it wholesale on each successful render,
/// so stale charts never outlive the conversion that produced them.
pub struct ChartView {
    title: String,
    unit: String,
    labels: Vec<String>,
    points: Vec<(f64, f64)>,
    y_bounds: [f64; 2],
}

impl ChartView {
    /// `history` arrives newest first. Takes the most recent
    /// [`HISTORY_WINDOW`] points and plots them oldest-to-newest. Returns
    /// `None` for an empty series; the caller shows a message instead.
    pub fn from_history(code: &str, unit: &str, history: &[HistoryPoint]) -> Option<Self> {
        if history.is_empty() {
            return None;
        }

        let mut window: Vec<&HistoryPoint> = history.iter().take(HISTORY_WINDOW).collect();
        window.reverse();

        let labels = window.iter().map(|p| format_date(p.date())).collect();
        let points: Vec<(f64, f64)> = window
            .iter()
            .enumerate()
            .map(|(i, p)| (i as f64, p.value().to_f64().unwrap_or(0.0)))
            .collect();

        let mut min = f64::MAX;
        let mut max = f64::MIN;
        for (_, value) in &points {
            min = min.min(*value);
            max = max.max(*value);
        }

        // A flat series still needs a visible y-range
        let y_bounds = if (max - min).abs() < f64::EPSILON {
            [min - 1.0, max + 1.0]
        } else {
            let padding = (max - min) * 0.05;
            [min - padding, max + padding]
        };

        Some(Self {
            title: format!("10-day history ({})", code.to_uppercase()),
            unit: unit.to_string(),
            labels,
            points,
            y_bounds,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    pub fn x_bounds(&self) -> [f64; 2] {
        [0.0, self.points.len().saturating_sub(1).max(1) as f64]
    }

    pub fn y_bounds(&self) -> [f64; 2] {
        self.y_bounds
    }
}

fn format_date(date: &NaiveDate) -> String {
    date.format("%d-%m-%Y").to_string()
}
