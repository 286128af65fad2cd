mod games;
mod input;
mod notify;
mod time;
mod widgets;

use std::{cell::RefCell, io, rc::Rc};

use games::{create_game, AppState, GameChoice};
use input::{pixel_x_to_col, pixel_y_to_row, ClickState, InputEvent};
use notify::Notifier;
use ratzilla::event::{KeyCode, MouseButton, MouseEventKind};
use ratzilla::ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph};
use ratzilla::ratatui::{Frame, Terminal};
use ratzilla::{DomBackend, WebRenderer};
use time::FrameClock;
use widgets::ClickableList;

// Shell-level action IDs. Games start their own IDs at 10.
const PLAY_QUEST: u16 = 1;
const PLAY_GOOSE: u16 = 2;
const LEAVE_GAME: u16 = 3;

/// Refresh cadence for passive income and the stats display.
const REFRESH_INTERVAL_MS: u32 = 1_000;

/// Query the grid container's bounding rect and convert pixel coordinates
/// to a terminal cell.
fn dom_pixel_to_cell(mouse_x: u32, mouse_y: u32, cs: &ClickState) -> Option<(u16, u16)> {
    let window = web_sys::window()?;
    let document = window.document()?;

    // DomBackend creates a <div> as the grid container inside <body>.
    let grid = document.query_selector("body > div").ok()??;
    let rect = grid.get_bounding_client_rect();

    let click_x = mouse_x as f64 - rect.left();
    let click_y = mouse_y as f64 - rect.top();

    let col = pixel_x_to_col(click_x, rect.width(), cs.terminal_cols)?;
    let row = pixel_y_to_row(click_y, rect.height(), cs.terminal_rows)?;
    Some((col, row))
}

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

fn main() -> io::Result<()> {
    console_error_panic_hook::set_once();

    let app = Rc::new(RefCell::new(AppState::Menu));
    let click_state = Rc::new(RefCell::new(ClickState::new()));
    let notifier = Rc::new(Notifier::from_environment());
    let clock = Rc::new(RefCell::new(FrameClock::new(REFRESH_INTERVAL_MS)));

    let backend = DomBackend::new()?;
    let mut terminal = Terminal::new(backend)?;

    // Mouse/touch click handler
    terminal.on_mouse_event({
        let app = app.clone();
        let click_state = click_state.clone();
        let notifier = notifier.clone();
        move |mouse_event| {
            if mouse_event.kind != MouseEventKind::ButtonDown(MouseButton::Left) {
                return;
            }

            let cs = click_state.borrow();
            if cs.terminal_rows == 0 || cs.terminal_cols == 0 {
                return;
            }
            let action_id = cs.hit_test(mouse_event.col, mouse_event.row);
            drop(cs);

            let Some(action_id) = action_id else {
                return;
            };

            let mut app = app.borrow_mut();
            match &mut *app {
                AppState::Menu => match action_id {
                    PLAY_QUEST => {
                        *app = AppState::Playing {
                            game: create_game(&GameChoice::Quest),
                        };
                    }
                    PLAY_GOOSE => {
                        *app = AppState::Playing {
                            game: create_game(&GameChoice::Goose),
                        };
                    }
                    _ => {}
                },
                AppState::Playing { game } => {
                    if action_id == LEAVE_GAME {
                        *app = AppState::Menu;
                    } else {
                        game.handle_input(&InputEvent::Click(action_id));
                        notifier.publish(game.drain_events());
                    }
                }
            }
        }
    });

    // Keyboard handler
    terminal.on_key_event({
        let app = app.clone();
        let notifier = notifier.clone();
        move |key_event| {
            let mut app = app.borrow_mut();
            match &mut *app {
                AppState::Menu => match key_event.code {
                    KeyCode::Char('1') => {
                        *app = AppState::Playing {
                            game: create_game(&GameChoice::Quest),
                        };
                    }
                    KeyCode::Char('2') => {
                        *app = AppState::Playing {
                            game: create_game(&GameChoice::Goose),
                        };
                    }
                    _ => {}
                },
                AppState::Playing { game } => match key_event.code {
                    KeyCode::Esc => {
                        *app = AppState::Menu;
                    }
                    KeyCode::Char(c) => {
                        game.handle_input(&InputEvent::Key(c));
                        notifier.publish(game.drain_events());
                    }
                    _ => {}
                },
            }
        }
    });

    terminal.draw_web({
        let click_state = click_state.clone();
        move |f| {
            // Passive income + stats refresh, batched to the refresh interval
            if let Some(elapsed_ms) = clock.borrow_mut().update(now_ms()) {
                let mut app = app.borrow_mut();
                if let AppState::Playing { game } = &mut *app {
                    game.tick(elapsed_ms);
                    notifier.publish(game.drain_events());
                }
            }

            let app = app.borrow();
            let size = f.area();

            {
                let mut cs = click_state.borrow_mut();
                cs.terminal_cols = size.width;
                cs.terminal_rows = size.height;
                cs.clear_targets();
            }

            // Main layout: title, content, help
            let main_chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Min(10),
                    Constraint::Length(3),
                ])
                .split(size);

            render_title(f, &app, main_chunks[0]);

            match &*app {
                AppState::Menu => render_menu(f, main_chunks[1], &click_state),
                AppState::Playing { game } => game.render(f, main_chunks[1], &click_state),
            }

            render_help(f, &app, main_chunks[2], &click_state);
        }
    });

    Ok(())
}

fn render_title(f: &mut Frame, app: &AppState, area: Rect) {
    let title = match app {
        AppState::Menu => "Tap Goose — pick a game",
        AppState::Playing { .. } => "Tap Goose",
    };
    let widget = Paragraph::new(Line::from(Span::styled(
        title,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    )
    .alignment(Alignment::Center);
    f.render_widget(widget, area);
}

fn render_menu(f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let mut cl = ClickableList::new();
    cl.push(Line::from(""));
    cl.push_clickable(
        Line::from(vec![
            Span::styled(
                " [1] ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("Quest Board", Style::default().fg(Color::White)),
            Span::styled(
                " — quests, tickets, boosters",
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        PLAY_QUEST,
    );
    cl.push(Line::from(""));
    cl.push_clickable(
        Line::from(vec![
            Span::styled(
                " [2] ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("Goose Tapper", Style::default().fg(Color::White)),
            Span::styled(
                " — tap, upgrade, idle",
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        PLAY_GOOSE,
    );

    let mut cs = click_state.borrow_mut();
    cl.register_targets(area, &mut cs, 1, 1);

    let widget = Paragraph::new(cl.into_lines()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green))
            .title(" Games "),
    );
    f.render_widget(widget, area);
}

fn render_help(f: &mut Frame, app: &AppState, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let help_text = match app {
        AppState::Menu => "tap a game, or press its number",
        AppState::Playing { .. } => "[Esc] back to menu",
    };
    let widget = Paragraph::new(Line::from(Span::styled(
        help_text,
        Style::default().fg(Color::DarkGray),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    )
    .alignment(Alignment::Center);
    f.render_widget(widget, area);

    if matches!(app, AppState::Playing { .. }) {
        let mut cs = click_state.borrow_mut();
        cs.add_click_target(area, LEAVE_GAME);
    }
}
