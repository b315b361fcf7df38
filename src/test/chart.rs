#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::app::chart::{ChartView, HISTORY_WINDOW};
    use crate::models::HistoryPoint;

    fn point(date: &str, value: Decimal) -> HistoryPoint {
        HistoryPoint::new(
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            value,
        )
    }

    #[test]
    fn empty_history_produces_no_chart() {
        assert!(ChartView::from_history("usd", "Pesos", &[]).is_none());
    }

    #[test]
    fn plots_newest_first_series_in_chronological_order() {
        let history = vec![
            point("2024-01-10", dec!(900)),
            point("2024-01-09", dec!(890)),
        ];

        let view = ChartView::from_history("usd", "Pesos", &history).unwrap();

        assert_eq!(view.labels(), ["09-01-2024", "10-01-2024"]);
        assert_eq!(view.points(), [(0.0, 890.0), (1.0, 900.0)]);
        assert_eq!(view.title(), "10-day history (USD)");
        assert_eq!(view.unit(), "Pesos");
    }

    #[test]
    fn takes_at_most_ten_most_recent_points() {
        // Twelve days, newest first: 12-01 down to 01-01
        let history: Vec<HistoryPoint> = (0..12)
            .map(|i| {
                let day = 12 - i;
                point(
                    &format!("2024-01-{day:02}"),
                    Decimal::from(900 + day),
                )
            })
            .collect();

        let view = ChartView::from_history("uf", "Pesos", &history).unwrap();

        assert_eq!(view.points().len(), HISTORY_WINDOW);
        // The oldest plotted day is the tenth most recent one
        assert_eq!(view.labels().first().map(String::as_str), Some("03-01-2024"));
        assert_eq!(view.labels().last().map(String::as_str), Some("12-01-2024"));
        assert_eq!(view.points()[0], (0.0, 903.0));
        assert_eq!(view.points()[9], (9.0, 912.0));
    }

    #[test]
    fn y_bounds_cover_the_plotted_values() {
        let history = vec![
            point("2024-01-10", dec!(900)),
            point("2024-01-09", dec!(890)),
        ];

        let view = ChartView::from_history("usd", "Pesos", &history).unwrap();
        let [y_min, y_max] = view.y_bounds();

        assert!(y_min < 890.0);
        assert!(y_max > 900.0);
    }

    #[test]
    fn flat_series_still_has_a_visible_range() {
        let history = vec![
            point("2024-01-10", dec!(900)),
            point("2024-01-09", dec!(900)),
        ];

        let view = ChartView::from_history("usd", "Pesos", &history).unwrap();
        let [y_min, y_max] = view.y_bounds();

        assert!(y_min < y_max);
    }
}
