//! Game trait, variant selection, and the domain events games emit.

pub mod goose;
pub mod quest;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, InputEvent};

/// A domain event produced by a game mutation.
///
/// Games push these into their state; the main loop drains them after every
/// dispatch and hands them to the notifier. The games themselves never
/// perform any I/O.
#[derive(Clone, Debug, PartialEq)]
pub enum GameEvent {
    /// A one-time quest was completed and its reward paid out.
    QuestCompleted { quest: String, reward: u64 },
    /// The character (or an upgrade) reached a new level.
    LevelUp { level: u32 },
    /// A prize was won (e.g. a lottery ticket was bought).
    PrizeWon { prize: String },
}

/// Trait that all games implement.
pub trait Game {
    /// Handle an input event. Returns true if the event was consumed.
    fn handle_input(&mut self, event: &InputEvent) -> bool;

    /// Advance time-dependent logic by `elapsed_ms` milliseconds.
    fn tick(&mut self, elapsed_ms: u32);

    /// Take the domain events emitted since the last drain.
    fn drain_events(&mut self) -> Vec<GameEvent>;

    /// Render the game into the given area.
    fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>);
}

/// Which game the player has selected (or is choosing).
#[derive(Clone, Debug, PartialEq)]
pub enum GameChoice {
    Quest,
    Goose,
}

/// Top-level application state.
pub enum AppState {
    /// Showing game selection menu.
    Menu,
    /// Playing a game.
    Playing { game: Box<dyn Game> },
}

/// Create a fresh game instance from a choice. The caller owns the instance;
/// leaving a game discards the session.
pub fn create_game(choice: &GameChoice) -> Box<dyn Game> {
    match choice {
        GameChoice::Quest => Box::new(quest::QuestGame::new()),
        GameChoice::Goose => Box::new(goose::GooseGame::new()),
    }
}
