//! Semantic action IDs for goose game click targets.
//!
//! Registered during render and dispatched via `InputEvent::Click`.
//! IDs below 10 are reserved for the application shell.

// ── Core actions ───────────────────────────────────────────────
pub const TAP_GOOSE: u16 = 10;

// ── Shop ───────────────────────────────────────────────────────
pub const UPGRADE_CLICK_POWER: u16 = 20;
pub const UPGRADE_AUTO_CLICKER: u16 = 21;
