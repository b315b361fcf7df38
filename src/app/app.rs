use std::io;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    widgets::ListState,
};
use tracing::{error, warn};

use crate::{
    api::IndicatorApi,
    app::{chart::ChartView, convert, ui},
    models::RateSnapshot,
};

pub struct App {
    api: IndicatorApi,
    snapshot: RateSnapshot,
    list_state: ListState,
    amount_input: String,
    result: Option<String>,
    error: Option<String>,
    status: Option<String>,
    chart: Option<ChartView>,
}

impl App {
    pub fn new(api: IndicatorApi) -> Self {
        Self {
            api,
            snapshot: RateSnapshot::default(),
            list_state: ListState::default(),
            amount_input: String::new(),
            result: None,
            error: None,
            status: None,
            chart: None,
        }
    }

    fn show_error(&mut self, message: &str) {
        self.error = Some(message.to_string());
    }

    fn clear_error(&mut self) {
        self.error = None;
    }

    fn show_status(&mut self, message: &str) {
        self.status = Some(message.to_string());
    }

    fn clear_status(&mut self) {
        self.status = None;
    }

    fn selected_code(&self) -> Option<String> {
        self.list_state
            .selected()
            .and_then(|i| self.snapshot.indicators().get(i))
            .map(|indicator| indicator.code().to_string())
    }

    /// Swaps in a freshly fetched snapshot, keeping the selection on the
    /// same currency when it survived the refresh.
    fn replace_snapshot(&mut self, snapshot: RateSnapshot, keep_code: &str) {
        let index = snapshot
            .indicators()
            .iter()
            .position(|i| i.code() == keep_code);

        self.snapshot = snapshot;

        if let Some(index) = index {
            self.list_state.select(Some(index));
        } else if self.snapshot.is_empty() {
            self.list_state.select(None);
        } else {
            self.list_state.select(Some(0));
        }
    }

    /// Initial load: fetch current rates and populate the selector. Failures
    /// surface in the error area, the app keeps running.
    pub async fn load_rates(&mut self) {
        match self.api.fetch_rates().await {
            Ok(snapshot) => {
                if snapshot.is_empty() {
                    warn!("No indicators with numeric values in response");
                    self.show_error("No currencies available.");
                    self.list_state.select(None);
                } else {
                    self.list_state.select(Some(0));
                    self.clear_error();
                }
                self.snapshot = snapshot;
            }
            Err(e) => {
                error!(error = %e, "Failed to load rates");
                self.show_error(&e.to_string());
            }
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.run_app(&mut terminal).await;

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    async fn run_app<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            terminal.draw(|frame| {
                ui::render(
                    frame,
                    &self.snapshot,
                    &mut self.list_state,
                    &self.amount_input,
                    &self.result,
                    &self.error,
                    &self.status,
                    &self.chart,
                )
            })?;

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => {
                        self.amount_input.push(c);
                    }
                    KeyCode::Backspace => {
                        self.amount_input.pop();
                    }
                    KeyCode::Down => {
                        let indicators = self.snapshot.indicators();
                        if !indicators.is_empty() {
                            let i = match self.list_state.selected() {
                                Some(i) => {
                                    if i >= indicators.len() - 1 {
                                        0
                                    } else {
                                        i + 1
                                    }
                                }
                                None => 0,
                            };
                            self.list_state.select(Some(i));
                        }
                    }
                    KeyCode::Up => {
                        let indicators = self.snapshot.indicators();
                        if !indicators.is_empty() {
                            let i = match self.list_state.selected() {
                                Some(i) => {
                                    if i == 0 {
                                        indicators.len() - 1
                                    } else {
                                        i - 1
                                    }
                                }
                                None => 0,
                            };
                            self.list_state.select(Some(i));
                        }
                    }
                    KeyCode::Char('r') => {
                        self.show_status("Refreshing rates...");
                        terminal.draw(|frame| {
                            ui::render(
                                frame,
                                &self.snapshot,
                                &mut self.list_state,
                                &self.amount_input,
                                &self.result,
                                &self.error,
                                &self.status,
                                &self.chart,
                            )
                        })?;

                        self.load_rates().await;
                        self.clear_status();
                    }
                    KeyCode::Enter => {
                        self.clear_error();
                        self.result = None;

                        let Some(code) = self.selected_code() else {
                            self.show_error("Select a currency first.");
                            continue;
                        };

                        let amount = match convert::parse_amount(&self.amount_input) {
                            Ok(amount) => amount,
                            Err(e) => {
                                warn!(input = %self.amount_input, "Invalid amount entered");
                                self.show_error(&e.to_string());
                                continue;
                            }
                        };

                        // Rates are fetched fresh for every conversion
                        self.show_status("Fetching rates...");
                        terminal.draw(|frame| {
                            ui::render(
                                frame,
                                &self.snapshot,
                                &mut self.list_state,
                                &self.amount_input,
                                &self.result,
                                &self.error,
                                &self.status,
                                &self.chart,
                            )
                        })?;

                        let rates_result = self.api.fetch_rates().await;
                        self.clear_status();

                        let snapshot = match rates_result {
                            Ok(snapshot) => snapshot,
                            Err(e) => {
                                error!(error = %e, "Failed to fetch rates");
                                self.show_error(&e.to_string());
                                continue;
                            }
                        };
                        self.replace_snapshot(snapshot, &code);

                        let converted = match convert::convert(amount, &code, &self.snapshot) {
                            Ok(converted) => converted,
                            Err(e) => {
                                warn!(code, error = %e, "Conversion rejected");
                                self.show_error(&e.to_string());
                                continue;
                            }
                        };
                        self.result = Some(format!("{:.2} {}", converted, code.to_uppercase()));

                        let unit = self
                            .snapshot
                            .get(&code)
                            .map(|indicator| indicator.unit().to_string())
                            .unwrap_or_default();

                        self.show_status("Fetching history...");
                        terminal.draw(|frame| {
                            ui::render(
                                frame,
                                &self.snapshot,
                                &mut self.list_state,
                                &self.amount_input,
                                &self.result,
                                &self.error,
                                &self.status,
                                &self.chart,
                            )
                        })?;

                        let history_result = self.api.fetch_history(&code).await;
                        self.clear_status();

                        match history_result {
                            Ok(history) => {
                                match ChartView::from_history(&code, &unit, &history) {
                                    // Replacing the view drops the previous chart
                                    Some(view) => self.chart = Some(view),
                                    None => {
                                        warn!(code, "No historical data in response");
                                        self.show_error(
                                            "No historical data available for this currency.",
                                        );
                                    }
                                }
                            }
                            Err(e) => {
                                error!(code, error = %e, "Failed to fetch history");
                                self.show_error(&e.to_string());
                            }
                        }
                    }
                    _ => {}
                }
            }
        }
    }
}
