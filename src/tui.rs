//! Full-screen terminal UI hosting the comparison form.
//!
//!   - Header: title + tagline
//!   - Two username fields (Tab/Shift-Tab to switch, Enter to submit)
//!   - Inline field errors and resolved avatar URLs
//!   - Scrollable report pane (PageUp/PageDown), Esc or Ctrl+C to quit

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedSender};

use crate::form::{AvatarLookup, ComparisonForm, FieldId};
use crate::models::{ComparisonRequest, CompatibilityReport};
use crate::query::{ComparisonCache, QueryState};
use crate::services::GitHubProfileService;

/// Completed background work delivered into the draw loop.
enum AppEvent {
    ComparisonFinished {
        request: ComparisonRequest,
        outcome: Result<CompatibilityReport, String>,
    },
    AvatarResolved {
        field: FieldId,
        url: String,
    },
}

struct App {
    form: ComparisonForm,
    query: QueryState,
    /// The submission currently on screen; outcomes for any other request
    /// are stale and discarded.
    current: Option<ComparisonRequest>,
    scroll: u16,
}

impl App {
    fn new() -> Self {
        Self {
            form: ComparisonForm::new(),
            query: QueryState::Idle,
            current: None,
            scroll: 0,
        }
    }
}

/// Run the TUI until the user quits. Terminal state is restored on exit
/// regardless of outcome.
pub async fn run(cache: ComparisonCache, profiles: GitHubProfileService) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let result = event_loop(&mut terminal, cache, profiles).await;

    // Restore terminal regardless of result.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cache: ComparisonCache,
    profiles: GitHubProfileService,
) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<AppEvent>();
    let mut app = App::new();

    loop {
        terminal.draw(|f| draw_ui(f, &app))?;

        // Drain completed background work.
        while let Ok(app_event) = rx.try_recv() {
            match app_event {
                AppEvent::ComparisonFinished { request, outcome } => {
                    // A stale outcome (submission replaced meanwhile) is dropped.
                    if app.current.as_ref() == Some(&request) {
                        app.form.settle();
                        app.scroll = 0;
                        app.query = match outcome {
                            Ok(report) => QueryState::Resolved(report),
                            Err(message) => QueryState::Failed(message),
                        };
                    }
                }
                AppEvent::AvatarResolved { field, url } => {
                    app.form.set_avatar(field, url);
                }
            }
        }

        // Poll for terminal events (non-blocking, 50ms timeout).
        if !event::poll(Duration::from_millis(50))? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            match (key.code, key.modifiers) {
                (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Esc, _) => break,
                (KeyCode::Tab, _) | (KeyCode::Down, _) => app.form.focus_next(),
                (KeyCode::BackTab, _) | (KeyCode::Up, _) => app.form.focus_prev(),
                (KeyCode::PageDown, _) => app.scroll = app.scroll.saturating_add(2),
                (KeyCode::PageUp, _) => app.scroll = app.scroll.saturating_sub(2),
                (KeyCode::Enter, _) => {
                    if let Some(request) = app.form.submit() {
                        app.current = Some(request.clone());
                        app.query = QueryState::Pending;
                        let cache = cache.clone();
                        let tx = tx.clone();
                        tokio::spawn(async move {
                            let outcome = cache
                                .get_or_fetch(&request)
                                .await
                                .map_err(|e| e.to_string());
                            // Receiver may be gone if the UI already exited.
                            let _ = tx.send(AppEvent::ComparisonFinished { request, outcome });
                        });
                    }
                }
                (KeyCode::Backspace, _) => {
                    if let Some(lookup) = app.form.backspace() {
                        spawn_avatar_lookup(&profiles, lookup, &tx);
                    }
                }
                (KeyCode::Char(ch), modifiers) if !modifiers.contains(KeyModifiers::CONTROL) => {
                    if let Some(lookup) = app.form.push_char(ch) {
                        spawn_avatar_lookup(&profiles, lookup, &tx);
                    }
                }
                _ => {}
            }
        }
    }

    Ok(())
}

/// Fire-and-forget avatar lookup; only successes are delivered, so a failed
/// lookup simply leaves the field's avatar untouched.
fn spawn_avatar_lookup(
    profiles: &GitHubProfileService,
    lookup: AvatarLookup,
    tx: &UnboundedSender<AppEvent>,
) {
    let profiles = profiles.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        if let Some(url) = profiles.fetch_avatar(&lookup.username).await {
            let _ = tx.send(AppEvent::AvatarResolved {
                field: lookup.field,
                url,
            });
        }
    });
}

fn draw_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Length(6), // form fields
            Constraint::Length(2), // submit / status
            Constraint::Min(0),    // results
        ])
        .split(f.area());

    draw_header(f, chunks[0]);
    draw_form(f, chunks[1], app);
    draw_status(f, chunks[2], app);
    draw_results(f, chunks[3], app);
}

fn draw_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "GitMatch",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Find your perfect GitHub collaboration match",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(header, area);
}

fn draw_form(f: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (id, column) in FieldId::ALL.into_iter().zip(columns.iter()) {
        draw_field(f, *column, app, id);
    }
}

fn draw_field(f: &mut Frame, area: Rect, app: &App, id: FieldId) {
    let field = app.form.field(id);
    let focused = app.form.focused() == id;

    let border_style = if focused {
        Style::default().fg(Color::Magenta)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let value_line = if field.value.is_empty() {
        Line::from(Span::styled(
            id.placeholder(),
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        let mut spans = vec![Span::raw(field.value.clone())];
        if focused {
            spans.push(Span::styled("█", Style::default().fg(Color::Magenta)));
        }
        Line::from(spans)
    };

    let mut lines = vec![value_line];
    if let Some(error) = field.error {
        lines.push(Line::from(Span::styled(
            error,
            Style::default().fg(Color::Red),
        )));
    } else if let Some(avatar) = &field.avatar_url {
        lines.push(Line::from(Span::styled(
            avatar.clone(),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(id.label()),
    );
    f.render_widget(widget, area);
}

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let submit_label = if app.form.is_submitting() {
        Span::styled("Matching...", Style::default().fg(Color::Yellow))
    } else {
        Span::styled(
            "Find Match",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )
    };

    let mut lines = vec![Line::from(vec![
        submit_label,
        Span::styled(
            "   Enter submit · Tab switch field · PgUp/PgDn scroll · Esc quit",
            Style::default().fg(Color::DarkGray),
        ),
    ])];

    if let QueryState::Failed(message) = &app.query {
        lines.push(Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Red),
        )));
    }

    f.render_widget(Paragraph::new(lines), area);
}

fn draw_results(f: &mut Frame, area: Rect, app: &App) {
    let lines: Vec<Line> = match &app.query {
        QueryState::Idle | QueryState::Failed(_) => Vec::new(),
        QueryState::Pending => vec![Line::from(Span::styled(
            "Analyzing compatibility...",
            Style::default().fg(Color::Yellow),
        ))],
        QueryState::Resolved(report) => report_lines(report),
    };

    let widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::TOP).title("Results"))
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));
    f.render_widget(widget, area);
}

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
    ))
}

/// Every field of the validated report is rendered verbatim.
fn report_lines(report: &CompatibilityReport) -> Vec<Line<'static>> {
    let insights = &report.valuable_insights;
    vec![
        Line::from(Span::styled(
            report.match_type.clone(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(report.compatibility_summary.clone()),
        Line::default(),
        heading("Strengths & Opportunities"),
        Line::from(report.strengths_and_opportunities.clone()),
        Line::default(),
        heading("Collaboration Plan"),
        Line::from(report.collaboration_plan.clone()),
        Line::default(),
        heading("Valuable Insights"),
        Line::from(vec![
            Span::styled("Activity Trends: ", Style::default().fg(Color::Cyan)),
            Span::raw(insights.activity_trends.clone()),
        ]),
        Line::from(vec![
            Span::styled("Repository Impact: ", Style::default().fg(Color::Cyan)),
            Span::raw(insights.repository_impact.clone()),
        ]),
        Line::from(vec![
            Span::styled("Follower Engagement: ", Style::default().fg(Color::Cyan)),
            Span::raw(insights.follower_engagement.clone()),
        ]),
        Line::default(),
        Line::from(Span::styled(
            report.motivational_message.clone(),
            Style::default().add_modifier(Modifier::ITALIC),
        )),
    ]
}
