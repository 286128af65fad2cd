//! Goose game: tap the goose for coins, with geometric-cost upgrades and
//! passive income from an auto-clicker.

pub mod actions;
pub mod logic;
pub mod render;
pub mod state;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::games::{Game, GameEvent};
use crate::input::{ClickState, InputEvent};

use state::GooseState;

pub struct GooseGame {
    pub state: GooseState,
}

impl GooseGame {
    pub fn new() -> Self {
        Self {
            state: GooseState::new(),
        }
    }
}

impl Game for GooseGame {
    fn handle_input(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Key(key) => match key {
                'g' | ' ' => {
                    logic::tap(&mut self.state);
                    true
                }
                'c' => {
                    logic::upgrade_click_power(&mut self.state);
                    true
                }
                'a' => {
                    logic::upgrade_auto_clicker(&mut self.state);
                    true
                }
                _ => false,
            },
            InputEvent::Click(id) => match *id {
                actions::TAP_GOOSE => {
                    logic::tap(&mut self.state);
                    true
                }
                actions::UPGRADE_CLICK_POWER => {
                    logic::upgrade_click_power(&mut self.state);
                    true
                }
                actions::UPGRADE_AUTO_CLICKER => {
                    logic::upgrade_auto_clicker(&mut self.state);
                    true
                }
                _ => false,
            },
        }
    }

    fn tick(&mut self, elapsed_ms: u32) {
        logic::tick(&mut self.state, elapsed_ms);
    }

    fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.state.events)
    }

    fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        render::render(&self.state, f, area, click_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tap_via_key_and_click() {
        let mut game = GooseGame::new();
        assert!(game.handle_input(&InputEvent::Key('g')));
        assert!(game.handle_input(&InputEvent::Click(actions::TAP_GOOSE)));
        assert_eq!(game.state.coins, 2);
        assert_eq!(game.state.total_taps, 2);
    }

    #[test]
    fn space_also_taps() {
        let mut game = GooseGame::new();
        assert!(game.handle_input(&InputEvent::Key(' ')));
        assert_eq!(game.state.total_taps, 1);
    }

    #[test]
    fn upgrade_via_input() {
        let mut game = GooseGame::new();
        game.state.coins = 10;
        assert!(game.handle_input(&InputEvent::Key('c')));
        assert_eq!(game.state.click_power_level, 2);
    }

    #[test]
    fn unknown_input_not_consumed() {
        let mut game = GooseGame::new();
        assert!(!game.handle_input(&InputEvent::Key('z')));
        assert!(!game.handle_input(&InputEvent::Click(999)));
        assert_eq!(game.state.total_taps, 0);
    }

    #[test]
    fn tick_applies_passive_income() {
        let mut game = GooseGame::new();
        game.state.auto_clicker_level = 3;
        game.tick(2_000);
        assert_eq!(game.state.coins, 6);
    }

    #[test]
    fn drain_events_empties_queue() {
        let mut game = GooseGame::new();
        game.state.coins = 10;
        game.handle_input(&InputEvent::Key('c'));
        assert_eq!(game.drain_events().len(), 1);
        assert!(game.drain_events().is_empty());
    }
}
