use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, List, ListItem, ListState, Paragraph},
};

use crate::app::chart::ChartView;
use crate::models::RateSnapshot;

#[allow(clippy::too_many_arguments)]
pub fn render(
    frame: &mut Frame,
    snapshot: &RateSnapshot,
    list_state: &mut ListState,
    amount_input: &str,
    result: &Option<String>,
    error: &Option<String>,
    status: &Option<String>,
    chart: &Option<ChartView>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let title = Paragraph::new("Currency Converter")
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(title, chunks[0]);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(34), Constraint::Min(0)])
        .split(chunks[1]);

    render_selector(frame, snapshot, list_state, main[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(main[1]);

    let amount = Paragraph::new(amount_input.to_string())
        .block(Block::default().title("Amount (CLP)").borders(Borders::ALL));
    frame.render_widget(amount, right[0]);

    let result_text = result.as_deref().unwrap_or("");
    let result_widget = Paragraph::new(result_text)
        .style(Style::default().fg(Color::Green))
        .block(Block::default().title("Result").borders(Borders::ALL));
    frame.render_widget(result_widget, right[1]);

    render_chart(frame, chart, right[2]);

    render_message_line(frame, error, status, chunks[2]);
}

fn render_selector(
    frame: &mut Frame,
    snapshot: &RateSnapshot,
    list_state: &mut ListState,
    area: ratatui::layout::Rect,
) {
    if snapshot.is_empty() {
        let empty_message = Paragraph::new("No currencies to display.\nPress r to reload.")
            .style(Style::default().fg(Color::Yellow))
            .block(Block::default().title("Currencies").borders(Borders::ALL));
        frame.render_widget(empty_message, area);
        return;
    }

    let items: Vec<ListItem> = snapshot
        .indicators()
        .iter()
        .map(|indicator| ListItem::new(indicator.label()))
        .collect();

    let list = List::new(items)
        .block(Block::default().title("Currencies").borders(Borders::ALL))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, area, list_state);
}

fn render_chart(frame: &mut Frame, chart: &Option<ChartView>, area: ratatui::layout::Rect) {
    let Some(view) = chart else {
        let placeholder = Paragraph::new("No history to display yet. Enter an amount and press Enter.")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().title("History").borders(Borders::ALL));
        frame.render_widget(placeholder, area);
        return;
    };

    let datasets = vec![
        Dataset::default()
            .name(view.title())
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(view.points()),
    ];

    let mut x_labels: Vec<Span> = Vec::new();
    if let Some(first) = view.labels().first() {
        x_labels.push(Span::raw(first.clone()));
    }
    if view.labels().len() > 1 {
        if let Some(last) = view.labels().last() {
            x_labels.push(Span::raw(last.clone()));
        }
    }

    let [y_min, y_max] = view.y_bounds();
    let y_labels = vec![
        Span::raw(format!("{y_min:.2}")),
        Span::raw(format!("{y_max:.2}")),
    ];

    let chart_widget = Chart::new(datasets)
        .block(Block::default().title("History").borders(Borders::ALL))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds(view.x_bounds())
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title(view.unit().to_string())
                .style(Style::default().fg(Color::Gray))
                .bounds(view.y_bounds())
                .labels(y_labels),
        );

    frame.render_widget(chart_widget, area);
}

fn render_message_line(
    frame: &mut Frame,
    error: &Option<String>,
    status: &Option<String>,
    area: ratatui::layout::Rect,
) {
    let (text, color) = if let Some(error) = error {
        (error.clone(), Color::Red)
    } else if let Some(status) = status {
        (status.clone(), Color::Yellow)
    } else {
        (
            "↑/↓ select currency | 0-9 edit amount | Enter convert | r reload rates | q quit"
                .to_string(),
            Color::DarkGray,
        )
    };

    let message = Paragraph::new(text)
        .style(Style::default().fg(color))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(message, area);
}
