use crate::sim::battle::{Action, Battle, Side};
use crate::sim::switching::is_trapped;

/// Actions `side` may choose this turn: usable moves in slot order, Struggle
/// when none is usable, then switches in roster order.
pub fn legal_actions(battle: &Battle, side: Side) -> Vec<Action> {
    let team = battle.team(side);
    let foe = battle.team(side.other()).active();
    let user = team.active();
    if user.is_fainted() {
        return team.replacements().map(Action::Switch).collect();
    }
    if let Some(slot) = user.locked_move() {
        return vec![Action::Move(slot)];
    }

    let gravity = battle.field.gravity();
    let v = &user.volatiles;
    let choice_lock = user.item.is_choice().then_some(user.last_move).flatten();
    let mut actions: Vec<Action> = user
        .moves
        .iter()
        .enumerate()
        .filter(|(slot, move_slot)| {
            let data = move_slot.data;
            let slot = *slot;
            move_slot.pp > 0
                && !v.disable.is_some_and(|(disabled, _)| disabled == slot)
                && !(v.taunt > 0 && !data.is_damaging())
                && !(v.torment && user.last_move == Some(slot))
                && !(v.heal_block > 0 && data.flags.heals)
                && !(foe.volatiles.imprison && !foe.is_fainted() && foe.knows(data))
                && !(gravity && data.flags.gravity_blocked)
                && choice_lock.map_or(true, |locked| locked == slot)
                && v.encore.map_or(true, |(encored, _)| encored == slot)
        })
        .map(|(slot, _)| Action::Move(slot))
        .collect();
    if actions.is_empty() {
        actions.push(Action::Struggle);
    }
    if !is_trapped(user, foe, gravity) {
        actions.extend(team.replacements().map(Action::Switch));
    }
    actions
}
