//! Quest game: one-time quests, a ticket shop, and two linear-cost boosters.

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

use state::{QuestKind, QuestState};

pub struct QuestGame {
    pub state: QuestState,
}

impl QuestGame {
    pub fn new() -> Self {
        Self {
            state: QuestState::new(),
        }
    }

    fn dispatch_click(&mut self, action_id: u16) -> bool {
        match action_id {
            actions::BUY_TICKET => {
                logic::buy_ticket(&mut self.state);
                true
            }
            actions::UPGRADE_SPEED => {
                logic::upgrade_speed(&mut self.state);
                true
            }
            actions::UPGRADE_REWARD => {
                logic::upgrade_reward(&mut self.state);
                true
            }
            id if id >= actions::COMPLETE_QUEST_BASE => {
                let idx = (id - actions::COMPLETE_QUEST_BASE) as usize;
                match QuestKind::all().get(idx) {
                    Some(&kind) => {
                        logic::complete_quest(&mut self.state, kind);
                        true
                    }
                    None => false,
                }
            }
            _ => false,
        }
    }
}

impl Game for QuestGame {
    fn handle_input(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Key(key) => {
                if let Some(&kind) = QuestKind::all().iter().find(|k| k.key() == *key) {
                    logic::complete_quest(&mut self.state, kind);
                    return true;
                }
                match key {
                    'b' => {
                        logic::buy_ticket(&mut self.state);
                        true
                    }
                    's' => {
                        logic::upgrade_speed(&mut self.state);
                        true
                    }
                    'r' => {
                        logic::upgrade_reward(&mut self.state);
                        true
                    }
                    _ => false,
                }
            }
            InputEvent::Click(id) => self.dispatch_click(*id),
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
