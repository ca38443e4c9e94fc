//! Ratatui-based terminal UI.
//!
//! The TUI shows category and tenor selectors, the rate bar chart, and the
//! key-insights cards. Every selection change rebuilds the `DashboardView`
//! before the next draw.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::pipeline::DashboardView;
use crate::data::RateTable;
use crate::domain::{Category, Insight, Selection, TenorBucket, Trend, fmt_difference, fmt_rate};
use crate::error::AppError;
use crate::report::{CREATED_BY, SUBTITLE, TITLE, contact_line};

mod bar_chart;
pub mod theme;

use bar_chart::{RateBarChart, chart_bars};

/// Directory for snapshots written with the `e` key.
const EXPORT_DIR: &str = "exports";

/// Start the TUI.
pub fn run(table: RateTable, selection: Selection, top_n: usize) -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::runtime(format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(table, selection, top_n);
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::runtime(format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::runtime(format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

struct App {
    table: RateTable,
    selection: Selection,
    top_n: usize,
    view: DashboardView,
    export_dir: PathBuf,
    status: String,
}

impl App {
    fn new(table: RateTable, selection: Selection, top_n: usize) -> Self {
        let view = DashboardView::build(&table, selection, top_n);
        Self {
            table,
            selection,
            top_n,
            view,
            export_dir: PathBuf::from(EXPORT_DIR),
            status: "Ready.".to_string(),
        }
    }

    fn event_loop<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::runtime(format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::runtime(format!("Event poll error: {e}")))?
            {
                continue;
            }

            match event::read().map_err(|e| AppError::runtime(format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code) {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Apply one key press. Returns `true` when the app should quit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Up => self.select_category(self.selection.category.prev()),
            KeyCode::Down => self.select_category(self.selection.category.next()),
            KeyCode::Left => self.select_tenor(self.selection.tenor.prev()),
            KeyCode::Right => self.select_tenor(self.selection.tenor.next()),
            KeyCode::Char(c @ '1'..='3') => {
                let i = (c as u8 - b'1') as usize;
                self.select_category(Category::ALL[i]);
            }
            KeyCode::Char(c @ '5'..='8') => {
                let i = (c as u8 - b'5') as usize;
                self.select_tenor(TenorBucket::ALL[i]);
            }
            KeyCode::Char('e') => self.export_snapshot(),
            _ => {}
        }
        false
    }

    fn select_category(&mut self, category: Category) {
        self.selection.category = category;
        self.recompute();
        self.status = format!("category: {}", category.display_name());
    }

    fn select_tenor(&mut self, tenor: TenorBucket) {
        self.selection.tenor = tenor;
        self.recompute();
        self.status = format!("tenor: {}", tenor.display_name());
    }

    fn recompute(&mut self) {
        log::debug!("selection changed: {:?}", self.selection);
        self.view = DashboardView::build(&self.table, self.selection, self.top_n);
    }

    fn export_snapshot(&mut self) {
        match crate::io::write_timestamped_snapshot(&self.export_dir, &self.view) {
            Ok(path) => {
                self.status = format!("Wrote snapshot: {}", path.display());
            }
            Err(err) => {
                log::error!("snapshot export failed: {err}");
                self.status = format!("Export failed: {err}");
            }
        }
    }

    fn draw(&self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(6),
                Constraint::Length(3),
            ])
            .split(size);

        self.draw_header(frame, chunks[0]);
        self.draw_category_selector(frame, chunks[1]);
        self.draw_tenor_selector(frame, chunks[2]);
        self.draw_chart(frame, chunks[3]);
        self.draw_insights(frame, chunks[4]);
        self.draw_footer(frame, chunks[5]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                TITLE,
                Style::default()
                    .fg(theme::color(theme::WHITE))
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("{SUBTITLE}, {}", contact_line()),
                Style::default().fg(theme::color(theme::LIGHT)),
            )),
        ];

        let p = Paragraph::new(Text::from(lines))
            .style(Style::default().bg(theme::color(theme::ACCENT)))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_category_selector(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let labels: Vec<(&str, bool)> = Category::ALL
            .iter()
            .map(|c| (c.display_name(), *c == self.selection.category))
            .collect();
        let line = selector_line(&labels, theme::PRIMARY);
        let p = Paragraph::new(line).block(Block::default().title("Category ↑/↓ 1-3").borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_tenor_selector(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let labels: Vec<(&str, bool)> = TenorBucket::ALL
            .iter()
            .map(|t| (t.display_name(), *t == self.selection.tenor))
            .collect();
        let line = selector_line(&labels, theme::SECONDARY);
        let p = Paragraph::new(line).block(Block::default().title("Duration ←/→ 5-8").borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_chart(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default().title("Interest Rate Comparison").borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);

        let Some(x_bounds) = self.view.x_bounds else {
            let msg = Paragraph::new("No institution offers this tenor.")
                .style(Style::default().fg(theme::WARNING));
            frame.render_widget(msg, inner);
            return;
        };

        let mut chart_area = inner;
        if let Some(diagnostic) = self.view.diagnostic.as_ref().filter(|_| inner.height > 0) {
            let notice = Paragraph::new(diagnostic.as_str())
                .style(Style::default().fg(theme::WARNING).add_modifier(Modifier::BOLD));
            frame.render_widget(notice, Rect { height: 1, ..inner });
            chart_area = Rect {
                y: inner.y + 1,
                height: inner.height.saturating_sub(1),
                ..inner
            };
        }

        let bars = chart_bars(&self.view);
        let widget = RateBarChart {
            bars: &bars,
            x_bounds,
            x_label: "rate (%)",
        };
        frame.render_widget(widget, chart_area);
    }

    fn draw_insights(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default().title("Key Insights").borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.view.insights.is_empty() {
            frame.render_widget(Paragraph::new("(none)").style(Style::default().fg(theme::MUTED)), inner);
            return;
        }

        let n = self.view.insights.len() as u32;
        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, n); n as usize])
            .split(inner);

        for (insight, card) in self.view.insights.iter().zip(cards.iter()) {
            let p = Paragraph::new(Text::from(insight_lines(insight)))
                .alignment(Alignment::Left)
                .block(Block::default().borders(Borders::LEFT));
            frame.render_widget(p, *card);
        }
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "↑/↓ category  ←/→ tenor  e export  q quit";
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(theme::MUTED)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(theme::WARNING)),
            Span::raw(" | "),
            Span::styled(
                format!("{CREATED_BY} · {}", contact_line()),
                Style::default().fg(theme::color(theme::PRIMARY)),
            ),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

/// Render a row of selector "buttons"; the selected one is filled with `fill`.
fn selector_line<'a>(labels: &[(&'a str, bool)], fill: theme::Rgb) -> Line<'a> {
    let mut spans = Vec::with_capacity(labels.len() * 2);
    for (i, (label, selected)) in labels.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if *selected {
            Style::default()
                .fg(theme::color(theme::WHITE))
                .bg(theme::color(fill))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme::color(fill))
        };
        spans.push(Span::styled(format!(" {label} "), style));
    }
    Line::from(spans)
}

/// Lines for one insight card: trend + name, then rate + delta.
fn insight_lines(insight: &Insight) -> Vec<Line<'static>> {
    let (arrow, color) = match insight.trend {
        Some(Trend::Up) => (Trend::Up.arrow(), theme::POSITIVE),
        Some(Trend::Down) => (Trend::Down.arrow(), theme::NEGATIVE),
        Some(Trend::Flat) => (Trend::Flat.arrow(), theme::MUTED),
        None => ("?", theme::MUTED),
    };

    vec![
        Line::from(vec![
            Span::styled(arrow, Style::default().fg(color)),
            Span::raw(" "),
            Span::styled(
                insight.institution.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(
                fmt_rate(insight.rate),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(
                format!("({})", fmt_difference(insight.difference)),
                Style::default().fg(color),
            ),
        ]),
    ]
}
