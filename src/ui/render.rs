use crate::app::{AppMode, RenderState};
use crate::engine::{Action, Operator};
use crate::theme::ThemeId;
use crate::ui::theme::Palette;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

/// Size of the calculator body in cells
pub const BODY_WIDTH: u16 = 36;
pub const BODY_HEIGHT: u16 = 23;

const KEY_HEIGHT: u16 = 3;

/// Keypad layout: each key with the number of columns it spans
pub const KEYPAD: [&[(Action, u16)]; 5] = [
    &[
        (Action::Digit(7), 1),
        (Action::Digit(8), 1),
        (Action::Digit(9), 1),
        (Action::Delete, 1),
    ],
    &[
        (Action::Digit(4), 1),
        (Action::Digit(5), 1),
        (Action::Digit(6), 1),
        (Action::Operator(Operator::Add), 1),
    ],
    &[
        (Action::Digit(1), 1),
        (Action::Digit(2), 1),
        (Action::Digit(3), 1),
        (Action::Operator(Operator::Subtract), 1),
    ],
    &[
        (Action::DecimalPoint, 1),
        (Action::Digit(0), 1),
        (Action::Operator(Operator::Divide), 1),
        (Action::Operator(Operator::Multiply), 1),
    ],
    &[(Action::Reset, 2), (Action::Equals, 2)],
];

const HELP_LINES: [&str; 9] = [
    "0-9 .     enter a number",
    "+ - * /   choose an operator",
    "Enter =   calculate",
    "Bksp      delete last digit",
    "Esc c     reset",
    "t F1-F3   switch theme",
    "Left/Right scroll long values",
    "y         copy the display",
    "?  q      help / quit",
];

/// Centre a `width` x `height` box inside `area`, shrinking to fit
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

pub fn render_app(frame: &mut Frame, state: &RenderState) {
    let palette = Palette::for_theme(state.theme);
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        area,
    );

    let body = centered(area, BODY_WIDTH, BODY_HEIGHT);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Length(1), // spacer
            Constraint::Length(1), // expression
            Constraint::Length(3), // display
            Constraint::Length(1), // spacer
            Constraint::Min(0),    // keypad or help
            Constraint::Length(1), // status
        ])
        .split(body);

    frame.render_widget(render_header(state.theme, &palette), rows[0]);
    frame.render_widget(
        render_expression(&state.expression, &palette),
        rows[2],
    );
    render_display(frame, rows[3], state, &palette);

    match state.mode {
        AppMode::Help => frame.render_widget(render_help(&palette), rows[5]),
        _ => render_keypad(frame, rows[5], &palette),
    }

    frame.render_widget(render_status(state.status.as_deref(), &palette), rows[6]);
}

/// Title on the left, theme switcher on the right
pub fn render_header(theme: ThemeId, palette: &Palette) -> Paragraph<'static> {
    let text_style = Style::default().fg(palette.screen_text);
    let mut spans = vec![
        Span::styled("calc", text_style.add_modifier(Modifier::BOLD)),
        Span::raw("            "),
        Span::styled("THEME ", text_style),
    ];

    for candidate in ThemeId::ALL {
        let style = if candidate == theme {
            Style::default()
                .fg(palette.equals_key_text)
                .bg(palette.equals_key)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.screen_text).bg(palette.keypad)
        };
        spans.push(Span::styled(format!(" {} ", candidate.number()), style));
    }

    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Left)
        .style(Style::default().bg(palette.background))
}

pub fn render_expression(expression: &str, palette: &Palette) -> Paragraph<'static> {
    Paragraph::new(expression.to_string())
        .alignment(Alignment::Right)
        .style(Style::default().fg(palette.dimmed).bg(palette.background))
}

fn render_display(frame: &mut Frame, area: Rect, state: &RenderState, palette: &Palette) {
    let block = Block::default().style(Style::default().bg(palette.screen));
    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: 1,
    };
    frame.render_widget(block, area);

    let (more_left, more_right) = state.scroll_hints(usize::from(inner.width));
    let text_style = Style::default()
        .fg(palette.screen_text)
        .bg(palette.screen)
        .add_modifier(Modifier::BOLD);
    let hint_style = Style::default().fg(palette.dimmed).bg(palette.screen);

    let mut spans = Vec::new();
    if more_left {
        spans.push(Span::styled("‹", hint_style));
    }
    let hint_cols = usize::from(more_left) + usize::from(more_right);
    let visible = state.visible_display(usize::from(inner.width).saturating_sub(hint_cols));
    spans.push(Span::styled(visible, text_style));
    if more_right {
        spans.push(Span::styled("›", hint_style));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Right),
        inner,
    );
}

fn key_style(action: Action, palette: &Palette) -> Style {
    let style = match action {
        Action::Delete | Action::Reset => Style::default()
            .fg(palette.function_key_text)
            .bg(palette.function_key),
        Action::Equals => Style::default()
            .fg(palette.equals_key_text)
            .bg(palette.equals_key),
        _ => Style::default().fg(palette.key_text).bg(palette.key),
    };
    style.add_modifier(Modifier::BOLD)
}

pub fn render_key(action: Action, palette: &Palette) -> Paragraph<'static> {
    Paragraph::new(vec![Line::from(""), Line::from(action.label())])
        .alignment(Alignment::Center)
        .style(key_style(action, palette))
}

fn render_keypad(frame: &mut Frame, area: Rect, palette: &Palette) {
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.keypad)),
        area,
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(KEYPAD.iter().map(|_| Constraint::Length(KEY_HEIGHT)))
        .split(area);

    for (row, keys) in rows.iter().zip(KEYPAD.iter()) {
        let total: u16 = keys.iter().map(|(_, span)| span).sum();
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(
                keys.iter()
                    .map(|(_, span)| Constraint::Ratio(u32::from(*span), u32::from(total))),
            )
            .spacing(1)
            .split(*row);

        for (cell, (action, _)) in cells.iter().zip(keys.iter()) {
            frame.render_widget(render_key(*action, palette), *cell);
        }
    }
}

pub fn render_help(palette: &Palette) -> Paragraph<'static> {
    let lines: Vec<Line> = HELP_LINES.iter().map(|l| Line::from(*l)).collect();
    Paragraph::new(lines)
        .alignment(Alignment::Left)
        .style(Style::default().fg(palette.screen_text).bg(palette.keypad))
}

pub fn render_status(status: Option<&str>, palette: &Palette) -> Paragraph<'static> {
    let text = status.unwrap_or("? help  q quit").to_string();
    Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(palette.dimmed).bg(palette.background))
}
