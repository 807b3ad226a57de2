//! Ratatui-based terminal UI.
//!
//! The TUI provides a form panel for choosing the resume file, job position,
//! and job description, then renders the evaluation dashboard: score gauge,
//! strengths/weaknesses, profile highlights, and recommendations.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Wrap},
    Terminal,
};

use crate::app::pipeline::{self, RunOutput};
use crate::cli::SubmitArgs;
use crate::domain::{BulletItem, SubmitRequest};
use crate::error::AppError;
use crate::webhook::{validate_resume_path, WebhookClient};

/// Start the TUI.
pub fn run(args: SubmitArgs) -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::internal(format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(args);
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode()
            .map_err(|e| AppError::internal(format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::internal(format!(
                "Failed to enter alternate screen: {e}"
            )));
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

/// Editable form fields, in display order.
const FIELD_COUNT: usize = 3;
const FIELD_FILE: usize = 0;
const FIELD_POSITION: usize = 1;

struct App {
    client: WebhookClient,
    file_input: String,
    position_input: String,
    description_input: String,
    selected_field: usize,
    editing: bool,
    status: String,
    run: Option<RunOutput>,
}

impl App {
    fn new(args: SubmitArgs) -> Self {
        let file_input = args
            .file
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        Self {
            client: WebhookClient::from_env(),
            file_input,
            position_input: args.position,
            description_input: args.description,
            selected_field: 0,
            editing: false,
            status: "Fill in the form and press 's' to submit.".to_string(),
            run: None,
        }
    }

    fn event_loop<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::internal(format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::internal(format!("Event poll error: {e}")))?
            {
                continue;
            }

            match event::read().map_err(|e| AppError::internal(format!("Event read error: {e}")))? {
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

    /// Returns true when the app should quit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        if self.editing {
            self.handle_field_edit(code);
            return false;
        }

        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Up => {
                if self.selected_field > 0 {
                    self.selected_field -= 1;
                }
            }
            KeyCode::Down => {
                if self.selected_field < FIELD_COUNT - 1 {
                    self.selected_field += 1;
                }
            }
            KeyCode::Enter => {
                self.editing = true;
                self.status =
                    "Editing field. Enter to apply, Esc to cancel editing.".to_string();
            }
            KeyCode::Char('s') => self.submit(),
            KeyCode::Char('e') => self.export(),
            _ => {}
        }

        false
    }

    fn handle_field_edit(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc | KeyCode::Enter => {
                self.editing = false;
                self.status = "Press 's' to submit.".to_string();
            }
            KeyCode::Backspace => {
                self.selected_value_mut().pop();
            }
            KeyCode::Char(c) => {
                self.selected_value_mut().push(c);
            }
            _ => {}
        }
    }

    fn selected_value_mut(&mut self) -> &mut String {
        match self.selected_field {
            FIELD_FILE => &mut self.file_input,
            FIELD_POSITION => &mut self.position_input,
            _ => &mut self.description_input,
        }
    }

    fn request(&self) -> SubmitRequest {
        SubmitRequest {
            file: PathBuf::from(self.file_input.trim()),
            job_position: self.position_input.clone(),
            job_description: self.description_input.clone(),
        }
    }

    /// Submit the form. The HTTP call blocks, so a second submission cannot
    /// start while one is outstanding.
    fn submit(&mut self) {
        let request = self.request();
        if let Err(err) = validate_resume_path(&request.file) {
            self.status = err.to_string();
            return;
        }

        // Clear previous results before the new request, like the form resets
        // its report panel on re-submit.
        self.run = None;
        self.status = "Submitting resume...".to_string();

        match pipeline::run_submit(&self.client, &request) {
            Ok(run) => {
                self.status = if run.report.warnings.is_empty() {
                    "Report received.".to_string()
                } else {
                    format!(
                        "Report received with {} warning(s); see dashboard.",
                        run.report.warnings.len()
                    )
                };
                self.run = Some(run);
            }
            Err(err) => {
                self.status = err.to_string();
            }
        }
    }

    fn export(&mut self) {
        let Some(run) = &self.run else {
            self.status = "Nothing to export yet; submit a resume first.".to_string();
            return;
        };

        let path = PathBuf::from(format!(
            "cvscan_report_{}.json",
            run.submitted_at.format("%Y%m%d_%H%M%S")
        ));
        match crate::io::write_report_json(&path, &pipeline::report_file(run, &self.position_input))
        {
            Ok(()) => {
                self.status = format!("Wrote report: {}", path.display());
            }
            Err(err) => {
                self.status = format!("Export failed: {err}");
            }
        }
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(size);

        self.draw_header(frame, chunks[0]);
        self.draw_body(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(vec![
            Span::styled("cvscan", Style::default().fg(Color::Cyan)),
            Span::raw(" — resume evaluation"),
        ]));
        lines.push(Line::from(Span::styled(
            format!("webhook: {}", self.client.url()),
            Style::default().fg(Color::Gray),
        )));

        let p = Paragraph::new(Text::from(lines)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_body(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        if self.run.is_none() {
            self.draw_form(frame, area);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(7)])
            .split(area);

        self.draw_dashboard(frame, chunks[0]);
        self.draw_form(frame, chunks[1]);
    }

    fn draw_form(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let file_label = if self.file_input.trim().is_empty() {
            "(none — .pdf or .docx)".to_string()
        } else {
            self.file_input.clone()
        };

        let items = vec![
            ListItem::new(format!("File: {file_label}")),
            ListItem::new(format!("Position: {}", self.position_input)),
            ListItem::new(format!(
                "Description: {}",
                truncate(&self.description_input, 60)
            )),
        ];

        let list = List::new(items)
            .block(Block::default().title("Submission").borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");

        let mut state = ratatui::widgets::ListState::default();
        state.select(Some(self.selected_field));
        frame.render_stateful_widget(list, area, &mut state);

        if self.editing {
            let hint = Paragraph::new("Editing…")
                .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
            let rect = Rect {
                x: area.x + 2,
                y: area.y + area.height.saturating_sub(2),
                width: area.width.saturating_sub(4),
                height: 1,
            };
            frame.render_widget(hint, rect);
        }
    }

    fn draw_dashboard(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let Some(run) = &self.run else {
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        self.draw_gauge(frame, chunks[0], run);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);

        let halves = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(columns[0]);

        self.draw_bullets(frame, halves[0], "Strengths", &run.report.strengths, Color::Green);
        self.draw_bullets(frame, halves[1], "Weaknesses", &run.report.weaknesses, Color::Red);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(columns[1]);

        self.draw_profile(frame, right[0], run);
        self.draw_recommendations(frame, right[1], run);
    }

    fn draw_gauge(&self, frame: &mut ratatui::Frame<'_>, area: Rect, run: &RunOutput) {
        // The widget needs a 0..=1 ratio; the raw percent stays in the label.
        let ratio = (run.report.score_percent() / 100.0).clamp(0.0, 1.0);
        let gauge = Gauge::default()
            .block(
                Block::default()
                    .title("Overall Match Score")
                    .borders(Borders::ALL),
            )
            .gauge_style(Style::default().fg(Color::Magenta))
            .ratio(ratio)
            .label(format!(
                "{} ({:.0}%)",
                run.report.score_display(),
                run.report.score_percent()
            ));
        frame.render_widget(gauge, area);
    }

    fn draw_bullets(
        &self,
        frame: &mut ratatui::Frame<'_>,
        area: Rect,
        title: &str,
        items: &[BulletItem],
        color: Color,
    ) {
        let list_items: Vec<ListItem> = if items.is_empty() {
            vec![ListItem::new(Span::styled(
                "(none)",
                Style::default().fg(Color::Gray),
            ))]
        } else {
            items
                .iter()
                .map(|item| {
                    let line = match &item.label {
                        Some(label) => Line::from(vec![
                            Span::styled(
                                format!("{label}: "),
                                Style::default().add_modifier(Modifier::BOLD),
                            ),
                            Span::raw(item.text.clone()),
                        ]),
                        None => Line::from(item.text.clone()),
                    };
                    ListItem::new(line)
                })
                .collect()
        };

        let list = List::new(list_items).block(
            Block::default()
                .title(Span::styled(title.to_string(), Style::default().fg(color)))
                .borders(Borders::ALL),
        );
        frame.render_widget(list, area);
    }

    fn draw_profile(&self, frame: &mut ratatui::Frame<'_>, area: Rect, run: &RunOutput) {
        let mut lines: Vec<Line> = Vec::new();
        if !run.report.profile.intro.is_empty() {
            lines.push(Line::from(run.report.profile.intro.clone()));
        }
        for group in &run.report.profile.groups {
            lines.push(Line::from(Span::styled(
                format!("{}:", group.title),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            for item in &group.items {
                lines.push(Line::from(format!("  • {item}")));
            }
        }
        if lines.is_empty() {
            lines.push(Line::from(Span::styled(
                "(no profile summary)",
                Style::default().fg(Color::Gray),
            )));
        }

        let p = Paragraph::new(Text::from(lines))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title("Profile Highlights")
                    .borders(Borders::ALL),
            );
        frame.render_widget(p, area);
    }

    fn draw_recommendations(&self, frame: &mut ratatui::Frame<'_>, area: Rect, run: &RunOutput) {
        let mut lines: Vec<Line> = Vec::new();
        if !run.report.recommendations.intro.is_empty() {
            lines.push(Line::from(run.report.recommendations.intro.clone()));
        }
        for (idx, item) in run.report.recommendations.items.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{}. ", idx + 1),
                    Style::default().fg(Color::Magenta),
                ),
                Span::raw(item.clone()),
            ]));
        }
        for warning in &run.report.warnings {
            lines.push(Line::from(Span::styled(
                format!("! {warning}"),
                Style::default().fg(Color::Yellow),
            )));
        }
        if lines.is_empty() {
            lines.push(Line::from(Span::styled(
                "(no recommendations)",
                Style::default().fg(Color::Gray),
            )));
        }

        let p = Paragraph::new(Text::from(lines))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title("Recommendations")
                    .borders(Borders::ALL),
            );
        frame.render_widget(p, area);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "↑/↓ select  Enter edit  s submit  e export  q quit";
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_preserves_short_strings() {
        assert_eq!(truncate("short", 10), "short");
        let long = "a".repeat(20);
        let cut = truncate(&long, 10);
        assert!(cut.chars().count() <= 10);
        assert!(cut.ends_with('…'));
    }
}
