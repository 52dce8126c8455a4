use std::io;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Wrap};

use intern_portal::config::PortalConfig;
use intern_portal::document::{
    DISPLAY_NAME, Medal, PARTICIPANT_COUNT, REFERRAL_CODE, RewardCard, TOP_PERFORMER,
    TOTAL_DONATIONS, TOTAL_RAISED,
};
use intern_portal::login::{LoginField, SubmitOutcome};
use intern_portal::persist::LocalStore;
use intern_portal::provider::spawn_provider;
use intern_portal::route::{DEFAULT_DASHBOARD_NAME, Route};
use intern_portal::state::{AppState, Delta, PageContext, ProviderCommand, apply_delta};
use intern_portal::theme::{Palette, Theme};

struct App {
    state: AppState,
    store: LocalStore,
    should_quit: bool,
    cmd_tx: Option<mpsc::Sender<ProviderCommand>>,
    dashboard_name: String,
}

impl App {
    fn new(
        context: PageContext,
        store: LocalStore,
        cmd_tx: Option<mpsc::Sender<ProviderCommand>>,
    ) -> Self {
        let dashboard_name = match &context.route {
            Route::Dashboard { name } => name.clone(),
            _ => DEFAULT_DASHBOARD_NAME.to_string(),
        };
        Self {
            state: AppState::new(context),
            store,
            should_quit: false,
            cmd_tx,
            dashboard_name,
        }
    }

    fn start(&mut self) {
        let cmd = self.state.begin_load();
        self.dispatch(cmd);
    }

    fn on_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }
        if key.code == KeyCode::F(2) {
            self.toggle_theme();
            return;
        }
        if self.state.route == Route::Login {
            self.on_login_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('d') => {
                let name = self.dashboard_name.clone();
                self.go(Route::Dashboard { name });
            }
            KeyCode::Char('l') => self.go(Route::Leaderboard),
            KeyCode::Char('o') | KeyCode::Esc => self.go(Route::Login),
            KeyCode::Char('r') => {
                let cmd = self.state.reload();
                self.dispatch(cmd);
            }
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Char('c') => self.state.console_open = !self.state.console_open,
            KeyCode::Char('?') => self.state.help_overlay = !self.state.help_overlay,
            _ => {}
        }
    }

    fn on_login_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.state.login.focus_next()
            }
            KeyCode::Backspace => self.state.login.backspace(),
            KeyCode::Enter => self.submit_login(),
            KeyCode::Char(ch) => self.state.login.input(ch),
            _ => {}
        }
    }

    fn submit_login(&mut self) {
        let SubmitOutcome::Navigate { route, email } = self.state.login.submit() else {
            return;
        };
        if let Err(err) = self.store.set_user_email(&email) {
            self.state
                .push_log(format!("[WARN] Could not remember email: {err:#}"));
        }
        if let Route::Dashboard { name } = &route {
            self.dashboard_name = name.clone();
        }
        self.go(route);
    }

    fn go(&mut self, route: Route) {
        self.state
            .push_log(format!("[INFO] Opening {}", route.to_path()));
        let cmd = self.state.navigate(route);
        self.dispatch(cmd);
    }

    fn dispatch(&mut self, cmd: Option<ProviderCommand>) {
        let Some(cmd) = cmd else {
            return;
        };
        let Some(tx) = &self.cmd_tx else {
            self.state.push_log("[INFO] Data fetch unavailable");
            return;
        };
        if tx.send(cmd).is_err() {
            self.state.push_log("[WARN] Data request failed");
        }
    }

    fn toggle_theme(&mut self) {
        let next = self.state.theme.toggled();
        self.state.theme = next;
        self.state
            .push_log(format!("[INFO] Theme set to {}", next.as_str()));
        if let Err(err) = self.store.set_theme(next) {
            self.state
                .push_log(format!("[WARN] Could not save theme: {err:#}"));
        }
    }
}

fn main() -> io::Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    let config = PortalConfig::from_env();
    let store = LocalStore::open(config.prefs_dir.as_deref());
    let route = std::env::args()
        .nth(1)
        .map(|arg| Route::parse(&arg))
        .unwrap_or(Route::Login);
    let context = PageContext {
        route,
        theme: store.theme(),
    };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let (tx, rx) = mpsc::channel();
    let (cmd_tx, cmd_rx) = mpsc::channel();
    spawn_provider(config, tx, cmd_rx);

    let mut app = App::new(context, store, Some(cmd_tx));
    app.start();
    let res = run_app(&mut terminal, &mut app, rx);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("error: {err}");
    }
    Ok(())
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    rx: mpsc::Receiver<Delta>,
) -> io::Result<()> {
    let tick_rate = Duration::from_millis(250);
    let mut last_tick = Instant::now();

    loop {
        while let Ok(delta) = rx.try_recv() {
            apply_delta(&mut app.state, delta);
        }

        terminal.draw(|f| ui(f, app))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key);
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn ui(frame: &mut Frame, app: &App) {
    let state = &app.state;
    let palette = state.theme.palette();
    let base = Style::default().fg(palette.fg).bg(palette.bg);
    frame.render_widget(Block::default().style(base), frame.size());

    let console_height = if state.console_open { 6 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(console_height),
            Constraint::Length(1),
        ])
        .split(frame.size());

    render_header(frame, chunks[0], state, &palette);

    match state.route {
        Route::Login => render_login(frame, chunks[1], state, &palette),
        Route::Dashboard { .. } => render_dashboard(frame, chunks[1], state, &palette),
        Route::Leaderboard => render_leaderboard(frame, chunks[1], state, &palette),
    }

    if state.console_open {
        let console = Paragraph::new(console_text(state))
            .block(Block::default().title("Console").borders(Borders::ALL))
            .style(Style::default().fg(palette.muted));
        frame.render_widget(console, chunks[2]);
    }

    let footer = Paragraph::new(footer_text(state)).style(Style::default().fg(palette.muted));
    frame.render_widget(footer, chunks[3]);

    if state.help_overlay {
        render_help_overlay(frame, frame.size(), &palette);
    }
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(18)])
        .split(area);

    let title = format!(
        "  /\\   INTERN PORTAL | {} | {}\n /__\\\n  ||",
        state.route.title(),
        state.route.to_path()
    );
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, cols[0]);

    let toggle_color = toggle_color(state.theme, &palette);
    let toggle = Paragraph::new(state.theme.toggle_label())
        .style(Style::default().fg(toggle_color))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(toggle, cols[1]);
}

fn footer_text(state: &AppState) -> String {
    match state.route {
        Route::Login => {
            "Type to fill | Tab/↑/↓ Field | Enter Sign in | F2 Theme | Esc Quit".to_string()
        }
        _ => "d Dashboard | l Leaderboard | r Reload | t Theme | c Console | o Log out | ? Help | q Quit"
            .to_string(),
    }
}

fn render_login(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let popup = centered_rect(60, 70, area);
    let block = Block::default()
        .title("Intern Login")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let intro = Paragraph::new("Sign in to see your referrals and rewards.")
        .style(Style::default().fg(palette.muted));
    frame.render_widget(intro, rows[0]);

    let form = &state.login;
    render_input(
        frame,
        rows[1],
        "Full Name",
        &form.name,
        form.focus == LoginField::Name,
        form.is_invalid(LoginField::Name),
        palette,
    );
    if form.is_invalid(LoginField::Name) {
        render_invalid_feedback(frame, rows[2], "Please enter your full name.", palette);
    }
    render_input(
        frame,
        rows[3],
        "Email",
        &form.email,
        form.focus == LoginField::Email,
        form.is_invalid(LoginField::Email),
        palette,
    );
    if form.is_invalid(LoginField::Email) {
        render_invalid_feedback(frame, rows[4], "Please enter your email.", palette);
    }

    let hint = Paragraph::new("Press Enter to sign in")
        .style(Style::default().fg(palette.muted))
        .alignment(Alignment::Center);
    frame.render_widget(hint, rows[5]);
}

fn render_input(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    focused: bool,
    invalid: bool,
    palette: &Palette,
) {
    let border = if invalid {
        palette.danger
    } else if focused {
        palette.accent
    } else {
        palette.muted
    };
    let text = if focused {
        format!("{value}_")
    } else {
        value.to_string()
    };
    let input = Paragraph::new(text).block(
        Block::default()
            .title(label.to_string())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );
    frame.render_widget(input, area);
}

fn render_invalid_feedback(frame: &mut Frame, area: Rect, msg: &str, palette: &Palette) {
    let feedback = Paragraph::new(msg.to_string()).style(Style::default().fg(palette.danger));
    frame.render_widget(feedback, area);
}

fn render_dashboard(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(1)])
        .split(area);

    let stats = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(rows[0]);

    let doc = &state.document;
    render_stat(frame, stats[0], "Intern", doc.text(DISPLAY_NAME), palette);
    render_stat(frame, stats[1], "Referral Code", doc.text(REFERRAL_CODE), palette);
    let donations = doc.text(TOTAL_DONATIONS).map(|total| format!("₹{total}"));
    render_stat(
        frame,
        stats[2],
        "Total Donations",
        donations.as_deref(),
        palette,
    );

    let rewards_block = Block::default().title("Rewards").borders(Borders::ALL);
    let rewards_area = rewards_block.inner(rows[1]);
    frame.render_widget(rewards_block, rows[1]);

    let cards: Vec<&RewardCard> = doc.reward_cards().collect();
    if cards.is_empty() {
        let msg = if state.loading {
            "Loading rewards..."
        } else {
            "No rewards to show"
        };
        let empty = Paragraph::new(msg).style(Style::default().fg(palette.muted));
        frame.render_widget(empty, rewards_area);
        return;
    }

    let constraints = vec![Constraint::Ratio(1, cards.len() as u32); cards.len()];
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(rewards_area);
    for (card, col) in cards.iter().zip(cols.iter()) {
        render_reward_card(frame, *col, card, palette);
    }
}

fn render_stat(frame: &mut Frame, area: Rect, title: &str, value: Option<&str>, palette: &Palette) {
    let stat = Paragraph::new(value.unwrap_or_default().to_string())
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title.to_string())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.accent)),
        );
    frame.render_widget(stat, area);
}

fn render_reward_card(frame: &mut Frame, area: Rect, card: &RewardCard, palette: &Palette) {
    let (border, badge_color) = if card.unlocked {
        (palette.success, palette.success)
    } else {
        (palette.muted, palette.secondary)
    };
    let lines = vec![
        Line::styled(
            format!("{} {}", icon_glyph(&card.icon), card.name),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::from(card.description.clone()),
        Line::from(""),
        Line::styled(
            format!("{} {}", icon_glyph(card.badge.icon), card.badge.label),
            Style::default().fg(badge_color),
        ),
        Line::styled(
            format!("{} {}", icon_glyph("fa-coins"), card.requirement),
            Style::default().fg(palette.muted),
        ),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        );
    frame.render_widget(paragraph, area);
}

fn render_leaderboard(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(4)])
        .split(area);

    let doc = &state.document;
    let header = Row::new(vec!["#", "Name", "Referral", "Raised", "Status"])
        .style(Style::default().add_modifier(Modifier::BOLD));
    let body: Vec<Row> = doc
        .leaderboard_rows()
        .map(|row| {
            Row::new(vec![
                Cell::from(row.position.to_string())
                    .style(Style::default().add_modifier(Modifier::BOLD)),
                Cell::from(row.name.clone()),
                Cell::from(row.referral.clone()).style(Style::default().fg(palette.accent)),
                Cell::from(row.total.clone()),
                Cell::from(format!(
                    "{} {}",
                    icon_glyph(row.medal.icon()),
                    row.medal.label()
                ))
                .style(Style::default().fg(medal_color(row.medal, palette))),
            ])
        })
        .collect();

    let title = if body.is_empty() && state.loading {
        "Leaderboard (loading...)"
    } else {
        "Leaderboard"
    };
    let widths = [
        Constraint::Length(4),
        Constraint::Min(12),
        Constraint::Length(16),
        Constraint::Length(10),
        Constraint::Length(18),
    ];
    let table = Table::new(body, widths)
        .header(header)
        .block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(table, rows[0]);

    let stats = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(rows[1]);
    render_stat(frame, stats[0], "Top Performer", doc.text(TOP_PERFORMER), palette);
    let raised = doc.text(TOTAL_RAISED).map(|total| format!("₹{total}"));
    render_stat(frame, stats[1], "Total Raised", raised.as_deref(), palette);
    render_stat(
        frame,
        stats[2],
        "Participants",
        doc.text(PARTICIPANT_COUNT),
        palette,
    );
}

fn toggle_color(theme: Theme, palette: &Palette) -> Color {
    if theme.toggle_class().contains("outline-warning") {
        palette.warning
    } else {
        palette.accent
    }
}

fn medal_color(medal: Medal, palette: &Palette) -> Color {
    match medal.class() {
        "text-warning" => palette.warning,
        "text-secondary" => palette.secondary,
        "text-danger" => palette.danger,
        _ => palette.muted,
    }
}

fn icon_glyph(icon: &str) -> &'static str {
    match icon.rsplit(' ').next().unwrap_or_default() {
        "fa-gift" => "🎁",
        "fa-tshirt" => "👕",
        "fa-certificate" => "📜",
        "fa-gem" => "💎",
        "fa-medal" => "🥈",
        "fa-award" => "🥉",
        "fa-star" => "⭐",
        "fa-check-circle" => "✔",
        "fa-lock" => "🔒",
        "fa-coins" => "🪙",
        _ => "•",
    }
}

fn console_text(state: &AppState) -> String {
    if state.logs.is_empty() {
        return "No messages yet".to_string();
    }
    let start = state.logs.len().saturating_sub(4);
    state
        .logs
        .iter()
        .skip(start)
        .cloned()
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_help_overlay(frame: &mut Frame, area: Rect, palette: &Palette) {
    let popup_area = centered_rect(60, 60, area);
    frame.render_widget(Clear, popup_area);

    let text = [
        "Intern Portal - Help",
        "",
        "Pages:",
        "  d            Dashboard",
        "  l            Leaderboard",
        "  o / Esc      Log out",
        "",
        "General:",
        "  r            Reload page data",
        "  t / F2       Toggle theme",
        "  c            Toggle console",
        "  ?            Toggle help",
        "  q            Quit",
    ]
    .join("\n");

    let help = Paragraph::new(text)
        .block(Block::default().title("Help").borders(Borders::ALL))
        .style(Style::default().fg(palette.fg).bg(palette.bg));
    frame.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
