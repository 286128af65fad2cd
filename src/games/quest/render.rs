//! Quest game rendering: season header, quest board, booster shop, and log.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::input::{is_narrow_layout, ClickState};
use crate::widgets::{format_number, ClickableList};

use super::actions;
use super::state::{QuestState, SEASON_COIN_TOTAL, TICKET_PRICE};

pub fn render(state: &QuestState, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    if is_narrow_layout(area.width) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // header
                Constraint::Length(5), // quests
                Constraint::Length(5), // shop
                Constraint::Min(3),    // log
            ])
            .split(area);
        render_header(state, f, chunks[0]);
        render_quests(state, f, chunks[1], click_state);
        render_shop(state, f, chunks[2], click_state);
        render_log(state, f, chunks[3]);
    } else {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);
        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(5),
                Constraint::Min(5),
            ])
            .split(columns[0]);
        render_header(state, f, left[0]);
        render_quests(state, f, left[1], click_state);
        render_shop(state, f, left[2], click_state);
        render_log(state, f, columns[1]);
    }
}

/// Season header: coin balance, character level, and the season coin pool.
fn render_header(state: &QuestState, f: &mut Frame, area: Rect) {
    let border_color = if state.purchase_flash > 0 {
        Color::White
    } else {
        Color::Yellow
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" ⛁ {} coins", format_number(state.coins)),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("   🧑 level {}", state.character_level),
                Style::default().fg(Color::Cyan),
            ),
        ]),
        Line::from(Span::styled(
            format!(
                " Season pool: {} coins · tickets: {}",
                format_number(SEASON_COIN_TOTAL),
                state.tickets_bought
            ),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let header = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(" Quest Board "),
    );
    f.render_widget(header, area);
}

/// One-time quests. Completed quests render dim and lose their click target.
fn render_quests(
    state: &QuestState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let mut cl = ClickableList::new();
    let reward = state.quest_reward();

    for (i, quest) in state.quests.iter().enumerate() {
        if quest.completed {
            cl.push(Line::from(Span::styled(
                format!(" ✓ {}", quest.kind.name()),
                Style::default().fg(Color::DarkGray),
            )));
        } else {
            cl.push_clickable(
                Line::from(vec![
                    Span::styled(
                        format!(" [{}] ", quest.kind.key().to_ascii_uppercase()),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(quest.kind.name(), Style::default().fg(Color::White)),
                    Span::styled(
                        format!("  +{}", format_number(reward)),
                        Style::default().fg(Color::Green),
                    ),
                ]),
                actions::COMPLETE_QUEST_BASE + i as u16,
            );
        }
    }

    let mut cs = click_state.borrow_mut();
    cl.register_targets(area, &mut cs, 1, 1);

    let widget = Paragraph::new(cl.into_lines()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green))
            .title(" Quests "),
    );
    f.render_widget(widget, area);
}

/// Ticket and booster shop. Unaffordable rows render dim but stay tappable;
/// the model rejects the purchase.
fn render_shop(
    state: &QuestState,
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

    let mut cl = ClickableList::new();
    cl.push_clickable(
        Line::from(Span::styled(
            format!(" [B] Lottery ticket — {} coins", format_number(TICKET_PRICE)),
            row_style(state.coins >= TICKET_PRICE),
        )),
        actions::BUY_TICKET,
    );
    cl.push_clickable(
        Line::from(Span::styled(
            format!(
                " [S] Speed booster Lv.{} — {} coins",
                state.speed_level,
                format_number(state.speed_upgrade_cost())
            ),
            row_style(state.coins >= state.speed_upgrade_cost()),
        )),
        actions::UPGRADE_SPEED,
    );
    cl.push_clickable(
        Line::from(Span::styled(
            format!(
                " [R] Reward booster Lv.{} — {} coins",
                state.reward_level,
                format_number(state.reward_upgrade_cost())
            ),
            row_style(state.coins >= state.reward_upgrade_cost()),
        )),
        actions::UPGRADE_REWARD,
    );

    let mut cs = click_state.borrow_mut();
    cl.register_targets(area, &mut cs, 1, 1);

    let widget = Paragraph::new(cl.into_lines()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta))
            .title(" Shop "),
    );
    f.render_widget(widget, area);
}

fn render_log(state: &QuestState, f: &mut Frame, area: Rect) {
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
