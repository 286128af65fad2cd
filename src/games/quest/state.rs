//! Quest game state definitions.

use crate::games::GameEvent;

/// Base reward for completing a quest, multiplied by the reward level.
pub const QUEST_REWARD_BASE: u64 = 10;
/// Flat price of one lottery ticket.
pub const TICKET_PRICE: u64 = 50;
/// Base cost of the speed booster; scales linearly with its level.
pub const SPEED_UPGRADE_BASE_COST: u64 = 25;
/// Base cost of the reward booster; scales linearly with its level.
pub const REWARD_UPGRADE_BASE_COST: u64 = 30;
/// Character level with both boosters at their base level.
pub const CHARACTER_LEVEL_BASE: u32 = 1;
/// Coin pool of the current season, shown in the header.
pub const SEASON_COIN_TOTAL: u64 = 1_000;

/// The fixed, closed set of quests. Unknown quest identifiers cannot be
/// represented, so they are rejected at the parsing boundary rather than
/// silently accepted into the flag set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuestKind {
    Telegram,
    Dzen,
    Portal,
}

impl QuestKind {
    /// All quests in display order.
    pub fn all() -> &'static [QuestKind] {
        &[QuestKind::Telegram, QuestKind::Dzen, QuestKind::Portal]
    }

    /// Stable string identifier.
    pub fn id(&self) -> &'static str {
        match self {
            QuestKind::Telegram => "telegram",
            QuestKind::Dzen => "dzen",
            QuestKind::Portal => "portal",
        }
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            QuestKind::Telegram => "Subscribe to the Telegram channel",
            QuestKind::Dzen => "Subscribe to the Dzen feed",
            QuestKind::Portal => "Join the corporate portal",
        }
    }

    /// Key to complete this quest.
    pub fn key(&self) -> char {
        match self {
            QuestKind::Telegram => 't',
            QuestKind::Dzen => 'd',
            QuestKind::Portal => 'p',
        }
    }

    /// Parse a string identifier. Unknown identifiers are rejected.
    pub fn parse(id: &str) -> Option<QuestKind> {
        QuestKind::all().iter().copied().find(|k| k.id() == id)
    }
}

/// A single quest and its completion flag.
#[derive(Clone, Debug)]
pub struct Quest {
    pub kind: QuestKind,
    /// Monotone: once true, never reverts.
    pub completed: bool,
}

/// Log entry shown in the message panel.
#[derive(Clone, Debug)]
pub struct QuestLogEntry {
    pub text: String,
    pub is_important: bool,
}

/// Full state of a quest game session.
///
/// Owned by the presentation layer that created it; all mutation goes through
/// the operations in `logic`.
pub struct QuestState {
    /// Current coin balance. Never goes negative: purchases are all-or-nothing.
    pub coins: u64,
    /// The fixed quest set, in display order.
    pub quests: Vec<Quest>,
    /// Speed booster level (base 1).
    pub speed_level: u32,
    /// Reward booster level (base 1).
    pub reward_level: u32,
    /// Derived from the booster levels; recomputed after every upgrade.
    pub character_level: u32,
    /// Lottery tickets bought so far.
    pub tickets_bought: u32,
    /// Domain events emitted since the last drain.
    pub events: Vec<GameEvent>,
    /// Message log.
    pub log: Vec<QuestLogEntry>,
    /// Purchase feedback flash, in milliseconds remaining.
    pub purchase_flash: u32,
}

impl QuestState {
    pub fn new() -> Self {
        Self {
            coins: 0,
            quests: QuestKind::all()
                .iter()
                .map(|&kind| Quest {
                    kind,
                    completed: false,
                })
                .collect(),
            speed_level: 1,
            reward_level: 1,
            character_level: CHARACTER_LEVEL_BASE,
            tickets_bought: 0,
            events: Vec::new(),
            log: vec![QuestLogEntry {
                text: "Welcome to the quest board!".into(),
                is_important: true,
            }],
            purchase_flash: 0,
        }
    }

    /// Current reward for completing a quest.
    pub fn quest_reward(&self) -> u64 {
        QUEST_REWARD_BASE * self.reward_level as u64
    }

    /// Cost of the next speed booster level (linear).
    pub fn speed_upgrade_cost(&self) -> u64 {
        SPEED_UPGRADE_BASE_COST * self.speed_level as u64
    }

    /// Cost of the next reward booster level (linear).
    pub fn reward_upgrade_cost(&self) -> u64 {
        REWARD_UPGRADE_BASE_COST * self.reward_level as u64
    }

    /// Whether the given quest has been completed.
    pub fn is_completed(&self, kind: QuestKind) -> bool {
        self.quests
            .iter()
            .any(|q| q.kind == kind && q.completed)
    }

    pub fn add_log(&mut self, text: &str, is_important: bool) {
        self.log.push(QuestLogEntry {
            text: text.to_string(),
            is_important,
        });
        if self.log.len() > 50 {
            self.log.remove(0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_baseline() {
        let state = QuestState::new();
        assert_eq!(state.coins, 0);
        assert_eq!(state.character_level, 1);
        assert_eq!(state.speed_level, 1);
        assert_eq!(state.reward_level, 1);
        assert_eq!(state.tickets_bought, 0);
        assert!(state.quests.iter().all(|q| !q.completed));
    }

    #[test]
    fn base_reward_and_costs() {
        let state = QuestState::new();
        assert_eq!(state.quest_reward(), 10);
        assert_eq!(state.speed_upgrade_cost(), 25);
        assert_eq!(state.reward_upgrade_cost(), 30);
    }

    #[test]
    fn costs_scale_linearly_with_level() {
        let mut state = QuestState::new();
        state.speed_level = 4;
        state.reward_level = 3;
        assert_eq!(state.speed_upgrade_cost(), 100);
        assert_eq!(state.reward_upgrade_cost(), 90);
        assert_eq!(state.quest_reward(), 30);
    }

    #[test]
    fn parse_known_and_unknown_ids() {
        assert_eq!(QuestKind::parse("telegram"), Some(QuestKind::Telegram));
        assert_eq!(QuestKind::parse("dzen"), Some(QuestKind::Dzen));
        assert_eq!(QuestKind::parse("portal"), Some(QuestKind::Portal));
        assert_eq!(QuestKind::parse("vk"), None);
        assert_eq!(QuestKind::parse(""), None);
    }

    #[test]
    fn log_truncation() {
        let mut state = QuestState::new();
        for i in 0..60 {
            state.add_log(&format!("msg {}", i), false);
        }
        assert!(state.log.len() <= 50);
    }
}
