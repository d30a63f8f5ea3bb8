//! Expectiminimax over the battle turn.
//!
//! A turn expands as: AI choice (MAX), foe reply (MIN), move order, then for
//! each mover its chance layers in [`LAYERS`] order followed by its move,
//! end-of-turn chance, replacements for fainted actives, then the next ply.
//! The second mover's layers are built from the position the first move left
//! behind. Alpha-beta
//! windows only span a MAX layer and the MIN layer directly below it; every
//! chance node starts the layers under it with a fresh window, so pruning
//! returns exactly what the full tree would.

pub mod transposition;

use serde::Serialize;

use crate::evaluate::{evaluate, sleep_clause, win, VICTORY};
use crate::sim::battle::{Action, Battle, Side};
use crate::sim::chance::{layer_outcomes, residual_outcomes, Branch, LAYERS};
use crate::sim::end_of_turn::resolve_end_of_turn;
use crate::sim::legal::legal_actions;
use crate::sim::order::{determine_order, Order};
use crate::sim::resolve::resolve_move;
use crate::sim::switching::{perform_switch, SwitchKind};
use crate::weights::Weights;

pub use transposition::TranspositionTable;

/// Which of several equally scored candidates a side keeps.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum TieBreak {
    /// Keep the earliest candidate in legal-action order.
    #[default]
    FirstConsidered,
    /// Keep the latest.
    LastConsidered,
}

impl TieBreak {
    pub fn improves(self, score: i64, best: i64) -> bool {
        match self {
            TieBreak::FirstConsidered => score > best,
            TieBreak::LastConsidered => score >= best,
        }
    }

    /// A MIN layer whose value can no longer change the MAX choice above it.
    fn cuts(self, beta: i64, alpha: i64) -> bool {
        match self {
            TieBreak::FirstConsidered => beta <= alpha,
            TieBreak::LastConsidered => beta < alpha,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct SearchParams {
    pub prune: bool,
    pub tie_break: TieBreak,
    pub use_cache: bool,
    pub sleep_clause: bool,
    /// Damage roll percent applied to every hit, 85..=100.
    pub damage_roll: u8,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            prune: true,
            tie_break: TieBreak::FirstConsidered,
            use_cache: true,
            sleep_clause: true,
            damage_roll: 100,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct Decision {
    pub action: Action,
    pub score: i64,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SearchStats {
    /// Positions where the AI chose a move.
    pub nodes: u64,
    pub evaluations: u64,
    pub cache_hits: u64,
    pub cache_lookups: u64,
}

/// Depth that is never consumed. The search then only stops at positions that
/// end the battle, so bounding it is up to the caller: a battle in which
/// neither side can make progress never returns.
pub const UNLIMITED_DEPTH: u32 = u32::MAX;

const ALPHA_START: i64 = -VICTORY - 1;
const BETA_START: i64 = VICTORY + 1;

pub struct Expectiminimax<'w> {
    weights: &'w Weights,
    params: SearchParams,
    cache: TranspositionTable,
    nodes: u64,
    evaluations: u64,
}

impl<'w> Expectiminimax<'w> {
    pub fn new(weights: &'w Weights, params: SearchParams) -> Self {
        Self {
            weights,
            params,
            cache: TranspositionTable::new(),
            nodes: 0,
            evaluations: 0,
        }
    }

    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    pub fn stats(&self) -> SearchStats {
        SearchStats {
            nodes: self.nodes,
            evaluations: self.evaluations,
            cache_hits: self.cache.hit_counter(),
            cache_lookups: self.cache.lookup_counter(),
        }
    }

    /// Best AI action and its minimum expected score `depth` turns ahead.
    /// Every call starts from an empty transposition table and zeroed stats.
    ///
    /// Panics if the AI has no legal action or only the foe still has a
    /// fainted active to replace.
    pub fn search(&mut self, battle: &Battle, depth: u32) -> Decision {
        assert!(
            !(battle.foe.needs_replacement() && !battle.ai.needs_replacement()),
            "the foe's replacement must be applied before searching"
        );
        self.cache = TranspositionTable::new();
        self.nodes = 0;
        self.evaluations = 0;
        let decision = if depth == 0 {
            let actions = legal_actions(battle, Side::Ai);
            assert!(!actions.is_empty(), "the AI has no legal action");
            Decision {
                action: actions[0],
                score: self.evaluate(battle),
            }
        } else if battle.ai.needs_replacement() {
            let (action, score) = self.replacement_layer(battle, depth, true);
            Decision {
                action: action.unwrap_or(Action::Switch(battle.ai.active)),
                score,
            }
        } else {
            self.choose_own_move(battle, depth, true)
        };
        let stats = self.stats();
        log::debug!(
            "chose {} at depth {depth} with score {}",
            battle.describe(Side::Ai, decision.action),
            decision.score
        );
        log::trace!(
            "{} nodes, {} evaluations, cache {}/{} hits",
            stats.nodes,
            stats.evaluations,
            stats.cache_hits,
            stats.cache_lookups
        );
        decision
    }

    /// Minimum expected score of `ai_action` over every foe reply.
    pub fn score_action(&mut self, battle: &Battle, ai_action: Action, depth: u32) -> i64 {
        self.choose_opponent_move(battle, ai_action, depth, ALPHA_START)
    }

    /// Expected score once both sides have chosen, averaging a speed tie.
    pub fn score_selection(
        &mut self,
        battle: &Battle,
        ai_action: Action,
        foe_action: Action,
        depth: u32,
    ) -> i64 {
        match determine_order(battle, ai_action, foe_action) {
            Order::First(side) => self.score_ordered(battle, side, ai_action, foe_action, depth),
            Order::Tie => {
                let ai_first = self.score_ordered(battle, Side::Ai, ai_action, foe_action, depth);
                let foe_first = self.score_ordered(battle, Side::Foe, ai_action, foe_action, depth);
                (ai_first + foe_first) / 2
            }
        }
    }

    /// Expected score with `first` moving first.
    pub fn score_ordered(
        &mut self,
        battle: &Battle,
        first: Side,
        ai_action: Action,
        foe_action: Action,
        depth: u32,
    ) -> i64 {
        let turn = Turn {
            first,
            ai_action,
            foe_action,
        };
        self.continue_turn(battle.clone(), &turn, 0, depth)
    }

    fn evaluate(&mut self, battle: &Battle) -> i64 {
        self.evaluations += 1;
        evaluate(battle, self.weights)
    }

    fn choose_own_move(&mut self, battle: &Battle, depth: u32, root: bool) -> Decision {
        self.nodes += 1;
        let actions = legal_actions(battle, Side::Ai);
        assert!(!actions.is_empty(), "the AI has no legal action");
        let tie_break = self.params.tie_break;
        let mut alpha = ALPHA_START;
        let mut best = actions[0];
        for &action in &actions {
            let beta = self.choose_opponent_move(battle, action, depth, alpha);
            if root {
                log::debug!("{}: {beta}", battle.describe(Side::Ai, action));
            }
            if tie_break.improves(beta, alpha) {
                alpha = beta;
                best = action;
            }
            if self.params.prune && tie_break == TieBreak::FirstConsidered && alpha >= VICTORY {
                break;
            }
        }
        Decision {
            action: best,
            score: alpha,
        }
    }

    fn choose_opponent_move(
        &mut self,
        battle: &Battle,
        ai_action: Action,
        depth: u32,
        alpha: i64,
    ) -> i64 {
        let replies = legal_actions(battle, Side::Foe);
        assert!(!replies.is_empty(), "the foe has no legal action");
        let tie_break = self.params.tie_break;
        let mut beta = BETA_START;
        let mut best_reply = replies[0];
        for &reply in &replies {
            let score = self.score_selection(battle, ai_action, reply, depth);
            if score <= beta {
                best_reply = reply;
                beta = score;
            }
            if self.params.prune && tie_break.cuts(beta, alpha) {
                break;
            }
        }
        log::trace!(
            "{} answered by {} for {beta}",
            battle.describe(Side::Ai, ai_action),
            battle.describe(Side::Foe, best_reply)
        );
        beta
    }

    /// Resolves the movers from `step` on, then the end of turn. A mover
    /// that fainted or was dragged in this turn loses its action.
    fn continue_turn(&mut self, battle: Battle, turn: &Turn, step: usize, depth: u32) -> i64 {
        let Some(&side) = turn.order().get(step) else {
            return self.end_of_turn(&battle, turn.first, depth);
        };
        let active = battle.team(side).active();
        if active.is_fainted() || active.volatiles.moved {
            return self.continue_turn(battle, turn, step + 1, depth);
        }
        let branch = Branch::new(self.params.damage_roll);
        self.chance_layer(&battle, turn, step, 0, branch, depth)
    }

    fn chance_layer(
        &mut self,
        battle: &Battle,
        turn: &Turn,
        step: usize,
        layer: usize,
        partial: Branch,
        depth: u32,
    ) -> i64 {
        let side = turn.order()[step];
        let Some(&kind) = LAYERS.get(layer) else {
            return self.resolve_step(battle.clone(), turn, step, &partial, depth);
        };
        let outcomes = layer_outcomes(kind, battle, side, turn.action(side), &partial);
        outcomes.expectation(|branch| {
            self.chance_layer(battle, turn, step, layer + 1, *branch, depth)
        })
    }

    fn resolve_step(
        &mut self,
        mut battle: Battle,
        turn: &Turn,
        step: usize,
        branch: &Branch,
        depth: u32,
    ) -> i64 {
        let side = turn.order()[step];
        let outcome = resolve_move(&mut battle, side, turn.action(side), branch);
        if let Some(score) = win(&battle) {
            return score;
        }
        if let Some(kind) = outcome.self_switch {
            if !outcome.user_fainted && battle.team(side).has_replacement() {
                return self.self_switch(&battle, side, kind, turn, step + 1, depth);
            }
        }
        self.continue_turn(battle, turn, step + 1, depth)
    }

    /// U-turn or Baton Pass: the user's controller picks the replacement and
    /// the turn carries on from the next mover.
    fn self_switch(
        &mut self,
        battle: &Battle,
        side: Side,
        kind: SwitchKind,
        turn: &Turn,
        step: usize,
        depth: u32,
    ) -> i64 {
        let gravity = battle.field.gravity();
        let options: Vec<usize> = battle.team(side).replacements().collect();
        let mut best: Option<i64> = None;
        for index in options {
            let mut next = battle.clone();
            perform_switch(next.team_mut(side), index, gravity, kind);
            let score = match win(&next) {
                Some(score) => score,
                None => self.continue_turn(next, turn, step, depth),
            };
            best = Some(match (best, side) {
                (None, _) => score,
                (Some(best), Side::Ai) => best.max(score),
                (Some(best), Side::Foe) => best.min(score),
            });
        }
        best.unwrap_or_else(|| self.end_of_turn(battle, turn.first, depth))
    }

    fn end_of_turn(&mut self, battle: &Battle, first: Side, depth: u32) -> i64 {
        let outcomes = residual_outcomes(battle);
        outcomes.expectation(|residual| {
            let mut next = battle.clone();
            resolve_end_of_turn(&mut next, first, residual);
            self.after_turn(next, depth)
        })
    }

    fn after_turn(&mut self, battle: Battle, depth: u32) -> i64 {
        if let Some(score) = win(&battle) {
            return score;
        }
        if self.params.sleep_clause {
            if let Some(score) = sleep_clause(&battle.ai).or_else(|| sleep_clause(&battle.foe)) {
                return score;
            }
        }
        if battle.ai.needs_replacement() || battle.foe.needs_replacement() {
            return self.replacement_layer(&battle, depth, false).1;
        }
        self.next_ply(&battle, depth)
    }

    /// Sends in replacements for fainted actives: MAX over the AI's choices,
    /// MIN over the foe's inside it. Depth is not consumed. At the root the
    /// AI then moves at the same depth; otherwise the next ply follows.
    fn replacement_layer(
        &mut self,
        battle: &Battle,
        depth: u32,
        root: bool,
    ) -> (Option<Action>, i64) {
        let choices = |side: Side| -> Vec<Option<usize>> {
            let team = battle.team(side);
            if team.needs_replacement() {
                team.replacements().map(Some).collect()
            } else {
                vec![None]
            }
        };
        let ai_choices = choices(Side::Ai);
        let foe_choices = choices(Side::Foe);
        let gravity = battle.field.gravity();
        let tie_break = self.params.tie_break;

        let mut alpha = ALPHA_START;
        let mut best = ai_choices[0];
        for &ai_choice in &ai_choices {
            let mut beta = BETA_START;
            for &foe_choice in &foe_choices {
                let mut next = battle.clone();
                if let Some(index) = ai_choice {
                    perform_switch(&mut next.ai, index, gravity, SwitchKind::Forced);
                }
                if let Some(index) = foe_choice {
                    perform_switch(&mut next.foe, index, gravity, SwitchKind::Forced);
                }
                beta = beta.min(self.after_replacement(next, depth, root));
                if self.params.prune && tie_break.cuts(beta, alpha) {
                    break;
                }
            }
            if tie_break.improves(beta, alpha) {
                alpha = beta;
                best = ai_choice;
            }
            if self.params.prune && tie_break == TieBreak::FirstConsidered && alpha >= VICTORY {
                break;
            }
        }
        (best.map(Action::Switch), alpha)
    }

    fn after_replacement(&mut self, battle: Battle, depth: u32, root: bool) -> i64 {
        if let Some(score) = win(&battle) {
            return score;
        }
        // Entry hazards can knock out the replacement.
        if battle.ai.needs_replacement() || battle.foe.needs_replacement() {
            return self.replacement_layer(&battle, depth, root).1;
        }
        if root {
            self.choose_own_move(&battle, depth, true).score
        } else {
            self.next_ply(&battle, depth)
        }
    }

    fn next_ply(&mut self, battle: &Battle, depth: u32) -> i64 {
        let depth = match depth {
            UNLIMITED_DEPTH => depth,
            _ => depth.saturating_sub(1),
        };
        if depth == 0 {
            return self.evaluate(battle);
        }
        let key = self
            .params
            .use_cache
            .then(|| TranspositionTable::key(battle, depth));
        if let Some(score) = key.and_then(|key| self.cache.get(key)) {
            return score;
        }
        let score = self.choose_own_move(battle, depth, false).score;
        if let Some(key) = key {
            self.cache.insert(key, score);
        }
        score
    }
}

/// Both sides' choices for the turn being expanded.
struct Turn {
    first: Side,
    ai_action: Action,
    foe_action: Action,
}

impl Turn {
    fn order(&self) -> [Side; 2] {
        [self.first, self.first.other()]
    }

    fn action(&self, side: Side) -> Action {
        match side {
            Side::Ai => self.ai_action,
            Side::Foe => self.foe_action,
        }
    }
}
