//! Goose game state definitions.

use crate::games::GameEvent;

/// Base cost of the click-power upgrade; grows geometrically per level.
pub const CLICK_POWER_BASE_COST: f64 = 10.0;
/// Base cost of the auto-clicker upgrade; grows geometrically per level.
pub const AUTO_CLICKER_BASE_COST: f64 = 50.0;
/// Cost growth factor per level for both upgrades.
pub const COST_GROWTH_RATE: f64 = 1.15;

/// A floating text particle ("+N" rising from the goose when tapped).
#[derive(Clone, Debug)]
pub struct Particle {
    /// Text to display.
    pub text: String,
    /// Column offset from the center of the goose display.
    pub col_offset: i16,
    /// Remaining lifetime in milliseconds.
    pub life_ms: u32,
}

/// Log entry for the goose game.
#[derive(Clone, Debug)]
pub struct GooseLogEntry {
    pub text: String,
    pub is_important: bool,
}

/// Full state of a goose tapping session.
///
/// Yields are linear in the upgrade levels (one coin per click-power level,
/// one coin per second per auto-clicker level); costs are geometric. Owned by
/// the presentation layer that created it.
pub struct GooseState {
    /// Current coin balance. Never goes negative: purchases are all-or-nothing.
    pub coins: u64,
    /// Total goose taps, informational only.
    pub total_taps: u64,
    /// Click-power upgrade level (base 1).
    pub click_power_level: u32,
    /// Auto-clicker upgrade level (base 0; no passive income until bought).
    pub auto_clicker_level: u32,
    /// Domain events emitted since the last drain.
    pub events: Vec<GameEvent>,
    /// Message log.
    pub log: Vec<GooseLogEntry>,
    /// Active floating particles.
    pub particles: Vec<Particle>,
    /// Tap feedback flash, in milliseconds remaining.
    pub click_flash: u32,
    /// Purchase feedback flash, in milliseconds remaining.
    pub purchase_flash: u32,
    /// Simple RNG state for particle spread.
    pub rng_state: u32,
}

impl GooseState {
    pub fn new() -> Self {
        Self {
            coins: 0,
            total_taps: 0,
            click_power_level: 1,
            auto_clicker_level: 0,
            events: Vec::new(),
            log: vec![GooseLogEntry {
                text: "Honk! Tap the goose!".into(),
                is_important: true,
            }],
            particles: Vec::new(),
            click_flash: 0,
            purchase_flash: 0,
            rng_state: 42,
        }
    }

    /// Coins earned per tap: one per click-power level.
    pub fn coins_per_click(&self) -> u64 {
        self.click_power_level as u64
    }

    /// Passive income rate: one coin per second per auto-clicker level.
    pub fn coins_per_second(&self) -> u64 {
        self.auto_clicker_level as u64
    }

    /// Cost of the next click-power level: `⌊10 × 1.15^(level-1)⌋`.
    pub fn click_power_upgrade_cost(&self) -> u64 {
        (CLICK_POWER_BASE_COST * COST_GROWTH_RATE.powi(self.click_power_level as i32 - 1)) as u64
    }

    /// Cost of the next auto-clicker level: `⌊50 × 1.15^level⌋`.
    /// No offset because the base level is 0.
    pub fn auto_clicker_upgrade_cost(&self) -> u64 {
        (AUTO_CLICKER_BASE_COST * COST_GROWTH_RATE.powi(self.auto_clicker_level as i32)) as u64
    }

    pub fn add_log(&mut self, text: &str, is_important: bool) {
        self.log.push(GooseLogEntry {
            text: text.to_string(),
            is_important,
        });
        if self.log.len() > 50 {
            self.log.remove(0);
        }
    }

    /// Xorshift step for particle spread. Not a statistical RNG.
    pub fn next_random(&mut self) -> u32 {
        let mut x = self.rng_state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.rng_state = x;
        x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_baseline() {
        let state = GooseState::new();
        assert_eq!(state.coins, 0);
        assert_eq!(state.total_taps, 0);
        assert_eq!(state.click_power_level, 1);
        assert_eq!(state.auto_clicker_level, 0);
        assert_eq!(state.coins_per_click(), 1);
        assert_eq!(state.coins_per_second(), 0);
    }

    #[test]
    fn initial_upgrade_costs() {
        let state = GooseState::new();
        // 10 × 1.15^0 and 50 × 1.15^0
        assert_eq!(state.click_power_upgrade_cost(), 10);
        assert_eq!(state.auto_clicker_upgrade_cost(), 50);
    }

    #[test]
    fn upgrade_costs_grow_geometrically() {
        let mut state = GooseState::new();
        state.click_power_level = 2;
        assert_eq!(state.click_power_upgrade_cost(), 11); // ⌊10 × 1.15⌋

        state.click_power_level = 11;
        let expected = (10.0 * 1.15f64.powi(10)) as u64;
        assert_eq!(state.click_power_upgrade_cost(), expected);

        state.auto_clicker_level = 1;
        assert_eq!(state.auto_clicker_upgrade_cost(), 57); // ⌊50 × 1.15⌋
    }

    #[test]
    fn yields_are_linear_in_level() {
        let mut state = GooseState::new();
        state.click_power_level = 7;
        state.auto_clicker_level = 4;
        assert_eq!(state.coins_per_click(), 7);
        assert_eq!(state.coins_per_second(), 4);
    }

    #[test]
    fn next_random_advances_state() {
        let mut state = GooseState::new();
        let a = state.next_random();
        let b = state.next_random();
        assert_ne!(a, b);
    }

    #[test]
    fn log_truncation() {
        let mut state = GooseState::new();
        for i in 0..60 {
            state.add_log(&format!("msg {}", i), false);
        }
        assert!(state.log.len() <= 50);
    }
}
