//! Quest game logic: pure functions over `QuestState`, fully testable.
//!
//! Every fallible operation reports failure by returning `false` and leaves
//! the state untouched; nothing here panics or performs I/O.

use crate::games::GameEvent;

use super::state::{QuestKind, QuestState, CHARACTER_LEVEL_BASE, TICKET_PRICE};

/// Complete a quest. Pays out `quest_reward()` exactly once per quest;
/// a repeated completion is a no-op that returns false.
pub fn complete_quest(state: &mut QuestState, kind: QuestKind) -> bool {
    let quest = match state.quests.iter_mut().find(|q| q.kind == kind) {
        Some(q) => q,
        None => return false,
    };
    if quest.completed {
        state.add_log("Quest already completed!", false);
        return false;
    }
    quest.completed = true;

    let reward = state.quest_reward();
    state.coins += reward;
    state.events.push(GameEvent::QuestCompleted {
        quest: kind.name().to_string(),
        reward,
    });
    state.add_log(
        &format!("Quest completed! Earned {} coins.", reward),
        true,
    );
    true
}

/// Buy a lottery ticket at the flat price. Returns false when unaffordable.
pub fn buy_ticket(state: &mut QuestState) -> bool {
    if state.coins < TICKET_PRICE {
        state.add_log("Not enough coins!", false);
        return false;
    }
    state.coins -= TICKET_PRICE;
    state.tickets_bought += 1;
    state.purchase_flash = 800;
    state.events.push(GameEvent::PrizeWon {
        prize: format!("Lottery ticket #{}", state.tickets_bought),
    });
    state.add_log("Ticket bought!", true);
    true
}

/// Upgrade the speed booster (linear cost). Returns false when unaffordable.
pub fn upgrade_speed(state: &mut QuestState) -> bool {
    let cost = state.speed_upgrade_cost();
    if state.coins < cost {
        state.add_log("Not enough coins!", false);
        return false;
    }
    state.coins -= cost;
    state.speed_level += 1;
    level_up(state);
    state.add_log("Quest speed increased!", false);
    true
}

/// Upgrade the reward booster (linear cost). Returns false when unaffordable.
pub fn upgrade_reward(state: &mut QuestState) -> bool {
    let cost = state.reward_upgrade_cost();
    if state.coins < cost {
        state.add_log("Not enough coins!", false);
        return false;
    }
    state.coins -= cost;
    state.reward_level += 1;
    level_up(state);
    state.add_log("Quest reward increased!", false);
    true
}

/// Recompute the derived character level after a booster purchase.
/// Each booster purchase raises it by exactly one.
fn level_up(state: &mut QuestState) {
    state.character_level =
        CHARACTER_LEVEL_BASE + (state.speed_level - 1) + (state.reward_level - 1);
    state.purchase_flash = 800;
    state.events.push(GameEvent::LevelUp {
        level: state.character_level,
    });
}

/// Advance time-dependent state. The quest game has no passive income, so
/// this only decays the purchase feedback flash.
pub fn tick(state: &mut QuestState, elapsed_ms: u32) {
    state.purchase_flash = state.purchase_flash.saturating_sub(elapsed_ms);
}

/// Grant coins directly. Test-only: production earns coins through quests.
#[cfg(test)]
pub fn add_coins(state: &mut QuestState, amount: u64) {
    state.coins += amount;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quest_pays_reward_once() {
        let mut state = QuestState::new();
        assert!(complete_quest(&mut state, QuestKind::Telegram));
        assert_eq!(state.coins, 10);
        assert!(state.is_completed(QuestKind::Telegram));

        // Second completion: no-op that reports failure
        assert!(!complete_quest(&mut state, QuestKind::Telegram));
        assert_eq!(state.coins, 10);
    }

    #[test]
    fn quest_order_does_not_matter() {
        let mut a = QuestState::new();
        complete_quest(&mut a, QuestKind::Telegram);
        complete_quest(&mut a, QuestKind::Portal);
        complete_quest(&mut a, QuestKind::Dzen);

        let mut b = QuestState::new();
        complete_quest(&mut b, QuestKind::Dzen);
        complete_quest(&mut b, QuestKind::Dzen);
        complete_quest(&mut b, QuestKind::Portal);
        complete_quest(&mut b, QuestKind::Telegram);
        complete_quest(&mut b, QuestKind::Portal);

        assert_eq!(a.coins, 30);
        assert_eq!(b.coins, 30);
    }

    #[test]
    fn reward_scales_with_reward_level() {
        let mut state = QuestState::new();
        state.reward_level = 3;
        complete_quest(&mut state, QuestKind::Dzen);
        assert_eq!(state.coins, 30);
    }

    #[test]
    fn ticket_requires_funds() {
        let mut state = QuestState::new();
        state.coins = 49;
        assert!(!buy_ticket(&mut state));
        assert_eq!(state.coins, 49);
        assert_eq!(state.tickets_bought, 0);

        state.coins = 50;
        assert!(buy_ticket(&mut state));
        assert_eq!(state.coins, 0);
        assert_eq!(state.tickets_bought, 1);
    }

    #[test]
    fn upgrades_deduct_cost_and_raise_levels() {
        let mut state = QuestState::new();
        state.coins = 55;
        assert!(upgrade_speed(&mut state)); // cost 25
        assert_eq!(state.coins, 30);
        assert_eq!(state.speed_level, 2);
        assert_eq!(state.character_level, 2);

        assert!(upgrade_reward(&mut state)); // cost 30
        assert_eq!(state.coins, 0);
        assert_eq!(state.reward_level, 2);
        assert_eq!(state.character_level, 3);
    }

    #[test]
    fn upgrade_fails_without_funds_and_leaves_state_unchanged() {
        let mut state = QuestState::new();
        state.coins = 24;
        assert!(!upgrade_speed(&mut state));
        assert_eq!(state.coins, 24);
        assert_eq!(state.speed_level, 1);
        assert_eq!(state.character_level, 1);
    }

    #[test]
    fn character_level_is_sum_of_booster_offsets() {
        let mut state = QuestState::new();
        state.coins = 10_000;
        for _ in 0..3 {
            upgrade_speed(&mut state);
        }
        for _ in 0..2 {
            upgrade_reward(&mut state);
        }
        // 1 + (4-1) + (3-1)
        assert_eq!(state.character_level, 6);
    }

    #[test]
    fn events_emitted_for_quest_ticket_and_level() {
        let mut state = QuestState::new();
        complete_quest(&mut state, QuestKind::Portal);
        state.coins = 100;
        upgrade_speed(&mut state);
        buy_ticket(&mut state);

        assert_eq!(state.events.len(), 3);
        assert!(matches!(
            state.events[0],
            GameEvent::QuestCompleted { reward: 10, .. }
        ));
        assert_eq!(state.events[1], GameEvent::LevelUp { level: 2 });
        assert!(matches!(state.events[2], GameEvent::PrizeWon { .. }));
    }

    #[test]
    fn failed_operations_emit_no_events() {
        let mut state = QuestState::new();
        buy_ticket(&mut state);
        upgrade_speed(&mut state);
        upgrade_reward(&mut state);
        assert!(state.events.is_empty());
    }

    #[test]
    fn flash_decays_with_tick() {
        let mut state = QuestState::new();
        state.coins = 25;
        upgrade_speed(&mut state);
        assert!(state.purchase_flash > 0);
        tick(&mut state, 1_000);
        assert_eq!(state.purchase_flash, 0);
        // Decaying past zero saturates
        tick(&mut state, 1_000);
        assert_eq!(state.purchase_flash, 0);
    }

    /// The reference session: three quests at base reward, a failed ticket
    /// purchase, a coin grant, then a successful one.
    #[test]
    fn reference_session() {
        let mut state = QuestState::new();
        assert!(complete_quest(&mut state, QuestKind::Telegram));
        assert!(complete_quest(&mut state, QuestKind::Dzen));
        assert!(complete_quest(&mut state, QuestKind::Portal));
        assert_eq!(state.coins, 30);

        assert!(!buy_ticket(&mut state));
        assert_eq!(state.coins, 30);

        add_coins(&mut state, 60);
        assert_eq!(state.coins, 90);
        assert!(buy_ticket(&mut state));
        assert_eq!(state.coins, 40);
        assert_eq!(state.tickets_bought, 1);
    }
}
