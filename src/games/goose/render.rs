//! Goose game rendering: the tappable goose, floating coin particles,
//! upgrade shop, and log.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::input::ClickState;
use crate::widgets::{format_number, ClickableList};

use super::actions;
use super::state::GooseState;

/// Goose art, idle state.
const GOOSE_ART: &[&str] = &[
    "       __      ",
    "     >(o )___  ",
    "      (  ._> / ",
    "       `---'   ",
];

/// Goose art, "pressed" state right after a tap.
const GOOSE_TAP_ART: &[&str] = &[
    "       __      ",
    "     >(O )===  ",
    "      (  ,_> \\ ",
    "       `---'   ",
];

pub fn render(state: &GooseState, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    // Horizontal split: show the log panel on the right when wide enough
    let (main_area, log_area) = if area.width >= 80 {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);
        (columns[0], Some(columns[1]))
    } else {
        (area, None)
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(12), // goose display
            Constraint::Length(4),  // shop
            Constraint::Min(3),     // log (narrow) or padding
        ])
        .split(main_area);

    render_goose_display(state, f, chunks[0], click_state);
    render_shop(state, f, chunks[1], click_state);

    match log_area {
        Some(log_area) => render_log(state, f, log_area),
        None => render_log(state, f, chunks[2]),
    }
}

/// The goose itself: stats header, particles, art. The whole panel is one
/// big tap target.
fn render_goose_display(
    state: &GooseState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let border_color = if state.purchase_flash > 0 {
        Color::White
    } else if state.click_flash > 0 {
        Color::Yellow
    } else {
        Color::Green
    };

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            format!(" ⛁ {} coins", format_number(state.coins)),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                " {}/click · {}/sec · {} taps",
                format_number(state.coins_per_click()),
                format_number(state.coins_per_second()),
                format_number(state.total_taps)
            ),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    // One particle row: the most recent particles drift sideways as they age
    let center = (area.width / 2) as i16;
    let mut particle_spans: Vec<(u16, &str)> = Vec::new();
    for p in state.particles.iter().rev().take(3) {
        let col = (center + p.col_offset).max(0) as u16;
        particle_spans.push((col, p.text.as_str()));
    }
    particle_spans.sort_by_key(|&(col, _)| col);
    let mut particle_line = String::new();
    for (col, text) in particle_spans {
        let col = col as usize;
        if col > particle_line.len() {
            particle_line.push_str(&" ".repeat(col - particle_line.len()));
        }
        particle_line.push_str(text);
    }
    lines.push(Line::from(Span::styled(
        particle_line,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )));

    let art = if state.click_flash > 0 {
        GOOSE_TAP_ART
    } else {
        GOOSE_ART
    };
    let goose_color = if state.click_flash > 0 {
        Color::White
    } else {
        Color::Green
    };
    let pad = (area.width.saturating_sub(15) / 2) as usize;
    for row in art {
        lines.push(Line::from(Span::styled(
            format!("{}{}", " ".repeat(pad), row),
            Style::default().fg(goose_color),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("{}[G] HONK!", " ".repeat(pad)),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )));

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(" Goose "),
    );
    f.render_widget(widget, area);

    let mut cs = click_state.borrow_mut();
    cs.add_click_target(area, actions::TAP_GOOSE);
}

/// Upgrade shop. Unaffordable rows render dim but stay tappable; the model
/// rejects the purchase.
fn render_shop(
    state: &GooseState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let row_style = |affordable: bool| {
        if affordable {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    };

    let click_cost = state.click_power_upgrade_cost();
    let auto_cost = state.auto_clicker_upgrade_cost();

    let mut cl = ClickableList::new();
    cl.push_clickable(
        Line::from(Span::styled(
            format!(
                " [C] Click power Lv.{} — {} coins",
                state.click_power_level,
                format_number(click_cost)
            ),
            row_style(state.coins >= click_cost),
        )),
        actions::UPGRADE_CLICK_POWER,
    );
    cl.push_clickable(
        Line::from(Span::styled(
            format!(
                " [A] Auto-clicker Lv.{} — {} coins",
                state.auto_clicker_level,
                format_number(auto_cost)
            ),
            row_style(state.coins >= auto_cost),
        )),
        actions::UPGRADE_AUTO_CLICKER,
    );

    let mut cs = click_state.borrow_mut();
    cl.register_targets(area, &mut cs, 1, 1);

    let widget = Paragraph::new(cl.into_lines()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta))
            .title(" Upgrades "),
    );
    f.render_widget(widget, area);
}

fn render_log(state: &GooseState, f: &mut Frame, area: Rect) {
    let visible_height = area.height.saturating_sub(2) as usize;
    let start = state.log.len().saturating_sub(visible_height);

    let log_lines: Vec<Line> = state.log[start..]
        .iter()
        .map(|entry| {
            if entry.is_important {
                Line::from(Span::styled(
                    &entry.text,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(&entry.text, Style::default().fg(Color::Gray)))
            }
        })
        .collect();

    let widget = Paragraph::new(log_lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue))
                .title(" Log "),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}
