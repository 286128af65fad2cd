//! Semantic action IDs for quest game click targets.
//!
//! Registered during render and dispatched via `InputEvent::Click`.
//! IDs below 10 are reserved for the application shell.

// ── Quests (base + quest index 0..2) ───────────────────────────
pub const COMPLETE_QUEST_BASE: u16 = 10;

// ── Shop ───────────────────────────────────────────────────────
pub const BUY_TICKET: u16 = 20;
pub const UPGRADE_SPEED: u16 = 21;
pub const UPGRADE_REWARD: u16 = 22;
