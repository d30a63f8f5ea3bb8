pub mod model;

use crate::model::BattleFile;
use anyhow::Context;
use pokemon_ai_core::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_DEPTH: u32 = 2;

#[derive(Debug, Clone)]
pub struct CliOptions {
    pub battle_path: Option<PathBuf>,
    pub weights_path: Option<PathBuf>,
    pub depth: u32,
    pub parallel: bool,
    pub prune: bool,
    pub use_cache: bool,
    pub random_seed: Option<u64>,
    pub json: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            battle_path: None,
            weights_path: None,
            depth: DEFAULT_DEPTH,
            parallel: false,
            prune: true,
            use_cache: true,
            random_seed: None,
            json: false,
        }
    }
}

pub fn load_battle(path: &Path) -> anyhow::Result<Battle> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read battle file at {}", path.display()))?;
    let parsed: BattleFile = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse JSON from {}", path.display()))?;
    parsed
        .build()
        .with_context(|| format!("Invalid battle in {}", path.display()))
}

pub fn load_weights(path: Option<&Path>) -> anyhow::Result<Weights> {
    let Some(path) = path else {
        return Ok(Weights::builtin().clone());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read weights file at {}", path.display()))?;
    Weights::parse(&raw).with_context(|| format!("Invalid weights in {}", path.display()))
}

/// Scores every root action on its own thread with its own search and cache,
/// then picks among them in legal-action order exactly as the sequential
/// search does.
pub fn search_parallel(
    battle: &Battle,
    weights: &Weights,
    params: SearchParams,
    depth: u32,
) -> Decision {
    if depth == 0 || battle.ai.needs_replacement() || battle.foe.needs_replacement() {
        return Expectiminimax::new(weights, params).search(battle, depth);
    }
    let actions = legal_actions(battle, Side::Ai);
    assert!(!actions.is_empty(), "the AI has no legal action");
    let scores: Vec<i64> = actions
        .par_iter()
        .map(|&action| {
            let score = Expectiminimax::new(weights, params).score_action(battle, action, depth);
            log::debug!("{}: {score}", battle.describe(Side::Ai, action));
            score
        })
        .collect();

    let mut best = Decision {
        action: actions[0],
        score: -VICTORY - 1,
    };
    for (&action, &score) in actions.iter().zip(&scores) {
        if params.tie_break.improves(score, best.score) {
            best = Decision { action, score };
        }
        if params.prune && params.tie_break == TieBreak::FirstConsidered && best.score >= VICTORY {
            break;
        }
    }
    best
}

pub fn decide(
    battle: &Battle,
    weights: &Weights,
    params: SearchParams,
    depth: u32,
    parallel: bool,
) -> Decision {
    if parallel {
        search_parallel(battle, weights, params, depth)
    } else {
        Expectiminimax::new(weights, params).search(battle, depth)
    }
}

#[derive(Debug, Serialize)]
pub struct Report {
    #[serde(flatten)]
    pub decision: Decision,
    pub description: String,
    pub confidence: f64,
}

impl Report {
    pub fn new(battle: &Battle, decision: Decision) -> Self {
        let description = match decision.action {
            Action::Switch(_) => {
                let text = battle.describe(Side::Ai, decision.action);
                text.replacen("switch", "Switch", 1)
            }
            _ => format!("Use {}", battle.describe(Side::Ai, decision.action)),
        };
        Self {
            decision,
            description,
            confidence: confidence(decision.score),
        }
    }

    pub fn line(&self) -> String {
        format!(
            "{} for a minimum expected score of {} (confidence {:.2}%)",
            self.description,
            self.decision.score,
            self.confidence * 100.0
        )
    }
}

pub fn run(opts: CliOptions) -> anyhow::Result<()> {
    let battle = match (&opts.battle_path, opts.random_seed) {
        (Some(path), _) => load_battle(path)?,
        (None, Some(seed)) => {
            let mut rng = SmallRng::seed_from_u64(seed);
            random_battle(&mut rng, &RandomBattleConfig::default())?
        }
        (None, None) => anyhow::bail!("Pass --battle FILE or --random SEED"),
    };
    if battle.is_terminal() {
        anyhow::bail!("The battle is already over");
    }
    if battle.foe.needs_replacement() && !battle.ai.needs_replacement() {
        anyhow::bail!("The foe's fainted Pokemon must be replaced before searching");
    }
    let weights = load_weights(opts.weights_path.as_deref())?;
    let params = SearchParams {
        prune: opts.prune,
        use_cache: opts.use_cache && weights.transposition_table != 0,
        ..SearchParams::default()
    };
    log::info!(
        "searching {} vs {} at depth {}{}",
        battle.ai.active().name(),
        battle.foe.active().name(),
        opts.depth,
        if opts.parallel { " (parallel)" } else { "" }
    );
    let decision = decide(&battle, &weights, params, opts.depth, opts.parallel);
    let report = Report::new(&battle, decision);
    if opts.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.line());
    }
    Ok(())
}
