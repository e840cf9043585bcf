//! TUI rendering for Tumble using ratatui.

pub mod die;
mod input;
mod theme;

pub use input::{InputPump, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, spinner_frame, styles};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap},
};

use tumble_engine::{App, Phase};

/// Widest the board panel gets; picked so both end-of-session banners fit on
/// one line between the borders.
const BOARD_WIDTH: u16 = 60;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let options = app.options();
    let palette = palette(options);
    let glyphs = glyphs(options);
    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Min(1),    // Board
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_board(frame, app, chunks[0], &palette);
    draw_status_bar(frame, app, chunks[1], &palette, &glyphs);
}

fn draw_board(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let options = app.options();
    let session = app.session();

    let die_style = match session.phase() {
        Phase::Rolling { .. } => Style::default().fg(palette.warning),
        Phase::Won { .. } => Style::default().fg(palette.success),
        Phase::Lost { .. } => Style::default().fg(palette.error),
        _ => Style::default().fg(palette.text_primary),
    };
    let art = if session.is_rolling() {
        die::in_motion_art(app.tick_count(), options)
    } else {
        die::face_art(session.current_face(), options.ascii_only)
    };

    let mut lines: Vec<Line> = vec![Line::from("")];
    for row in art {
        lines.push(Line::from(Span::styled(*row, die_style)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Roll Limit: ", styles::label(palette)),
        Span::styled(session.roll_limit().to_string(), styles::value(palette)),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Roll Count: ", styles::label(palette)),
        Span::styled(session.roll_count().to_string(), styles::value(palette)),
    ]));
    if let Some(hidden) = session.hidden_face() {
        lines.push(Line::from(vec![
            Span::styled("Target Face: ", styles::label(palette)),
            Span::styled(hidden.to_string(), styles::value(palette)),
        ]));
    }
    match session.phase() {
        Phase::Won { .. } => {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Congratulations! You've rolled the target face!",
                styles::win_banner(palette),
            )));
        }
        Phase::Lost { .. } => {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "You didn't get the target face within the roll limit...",
                styles::lose_banner(palette),
            )));
        }
        _ => {}
    }

    // Center a fixed-width board in the available area.
    let board_width = BOARD_WIDTH.min(area.width);
    let board_height = (lines.len() as u16 + 2).min(area.height);
    let board_area = Rect {
        x: area.x + area.width.saturating_sub(board_width) / 2,
        y: area.y + area.height.saturating_sub(board_height) / 2,
        width: board_width,
        height: board_height,
    };

    let block = Block::default()
        .title(Span::styled(" Dice Roller ", styles::title(palette)))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.bg_border))
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(palette.bg_panel));

    let board = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(board, board_area);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let session = app.session();

    let (status_text, status_style) = match session.phase() {
        Phase::NotStarted => ("Ready".to_string(), Style::default().fg(palette.text_secondary)),
        Phase::InProgress { .. } => (
            format!(
                "Roll {} of {}",
                session.roll_count() + 1,
                session.roll_limit()
            ),
            Style::default().fg(palette.text_secondary),
        ),
        Phase::Rolling { .. } => {
            let spinner = spinner_frame(app.tick_count(), app.options());
            (
                format!("{spinner} Rolling..."),
                Style::default().fg(palette.primary),
            )
        }
        Phase::Won { .. } => (
            format!("{} Won", glyphs.won),
            Style::default().fg(palette.success),
        ),
        Phase::Lost { .. } => (
            format!("{} Lost", glyphs.lost),
            Style::default().fg(palette.error),
        ),
    };

    // Key hints based on phase
    let hints = match session.phase() {
        Phase::NotStarted => vec![
            Span::styled("r", styles::key_highlight(palette)),
            Span::styled(" roll  ", styles::key_hint(palette)),
            Span::styled("s", styles::key_highlight(palette)),
            Span::styled(" start  ", styles::key_hint(palette)),
            Span::styled("+/-", styles::key_highlight(palette)),
            Span::styled(" limit  ", styles::key_hint(palette)),
            Span::styled("q", styles::key_highlight(palette)),
            Span::styled(" quit ", styles::key_hint(palette)),
        ],
        Phase::InProgress { .. } => vec![
            Span::styled("r", styles::key_highlight(palette)),
            Span::styled(" roll  ", styles::key_hint(palette)),
            Span::styled("+/-", styles::key_highlight(palette)),
            Span::styled(" limit  ", styles::key_hint(palette)),
            Span::styled("n", styles::key_highlight(palette)),
            Span::styled(" reset  ", styles::key_hint(palette)),
            Span::styled("q", styles::key_highlight(palette)),
            Span::styled(" quit ", styles::key_hint(palette)),
        ],
        Phase::Rolling { .. } => vec![
            Span::styled("+/-", styles::key_highlight(palette)),
            Span::styled(" limit  ", styles::key_hint(palette)),
            Span::styled("n", styles::key_highlight(palette)),
            Span::styled(" reset  ", styles::key_hint(palette)),
            Span::styled("q", styles::key_highlight(palette)),
            Span::styled(" quit ", styles::key_hint(palette)),
        ],
        Phase::Won { .. } | Phase::Lost { .. } => vec![
            Span::styled("n", styles::key_highlight(palette)),
            Span::styled(" new game  ", styles::key_hint(palette)),
            Span::styled("+/-", styles::key_highlight(palette)),
            Span::styled(" limit  ", styles::key_hint(palette)),
            Span::styled("q", styles::key_highlight(palette)),
            Span::styled(" quit ", styles::key_hint(palette)),
        ],
    };

    let mut spans = vec![
        Span::raw(" "),
        Span::styled(status_text, status_style),
        Span::styled(format!("  {}  ", glyphs.separator), styles::key_hint(palette)),
    ];
    spans.extend(hints);

    let status = Paragraph::new(Line::from(spans));
    frame.render_widget(status, area);
}
