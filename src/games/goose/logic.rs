//! Goose game logic: pure functions over `GooseState`, fully testable.
//!
//! Every fallible operation reports failure by returning `false` and leaves
//! the state untouched; nothing here panics or performs I/O.

use crate::games::GameEvent;

use super::state::{GooseState, Particle};

/// Tap the goose. Always succeeds; returns the number of coins earned.
pub fn tap(state: &mut GooseState) -> u64 {
    let earned = state.coins_per_click();
    state.coins += earned;
    state.total_taps += 1;
    state.click_flash = 300;

    // Floating "+N" feedback over the goose
    let col_offset = (state.next_random() % 13) as i16 - 6; // -6..+6
    let life_ms = 800 + (state.next_random() % 400);
    state.particles.push(Particle {
        text: format!("+{}", earned),
        col_offset,
        life_ms,
    });
    if state.particles.len() > 20 {
        state.particles.remove(0);
    }

    earned
}

/// Buy the next click-power level (geometric cost).
/// Returns false when unaffordable.
pub fn upgrade_click_power(state: &mut GooseState) -> bool {
    let cost = state.click_power_upgrade_cost();
    if state.coins < cost {
        state.add_log("Not enough coins!", false);
        return false;
    }
    state.coins -= cost;
    state.click_power_level += 1;
    state.purchase_flash = 800;
    state.events.push(GameEvent::LevelUp {
        level: state.click_power_level,
    });
    state.add_log(
        &format!("Click power is now Lv.{}!", state.click_power_level),
        true,
    );
    true
}

/// Buy the next auto-clicker level (geometric cost).
/// Returns false when unaffordable.
pub fn upgrade_auto_clicker(state: &mut GooseState) -> bool {
    let cost = state.auto_clicker_upgrade_cost();
    if state.coins < cost {
        state.add_log("Not enough coins!", false);
        return false;
    }
    state.coins -= cost;
    state.auto_clicker_level += 1;
    state.purchase_flash = 800;
    state.events.push(GameEvent::LevelUp {
        level: state.auto_clicker_level,
    });
    state.add_log(
        &format!("Auto-clicker is now Lv.{}!", state.auto_clicker_level),
        true,
    );
    true
}

/// Accrue passive income for the elapsed wall-clock time.
/// Adds `⌊coins_per_second × elapsed_ms / 1000⌋`; a no-op when the rate is
/// zero. Returns the amount added.
pub fn passive_income(state: &mut GooseState, elapsed_ms: u32) -> u64 {
    let rate = state.coins_per_second();
    if rate == 0 || elapsed_ms == 0 {
        return 0;
    }
    let earned = rate * elapsed_ms as u64 / 1000;
    state.coins += earned;
    earned
}

/// Advance the game by `elapsed_ms`: passive income plus UI timer decay.
pub fn tick(state: &mut GooseState, elapsed_ms: u32) {
    passive_income(state, elapsed_ms);

    state.click_flash = state.click_flash.saturating_sub(elapsed_ms);
    state.purchase_flash = state.purchase_flash.saturating_sub(elapsed_ms);
    for p in &mut state.particles {
        p.life_ms = p.life_ms.saturating_sub(elapsed_ms);
    }
    state.particles.retain(|p| p.life_ms > 0);
}
