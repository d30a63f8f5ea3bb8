use pokemon_battle_ai::{run, CliOptions};
use std::env;
use std::path::PathBuf;

fn usage() -> ! {
    eprintln!(
        "Usage: pokemon-battle-ai [DEPTH] [--battle battle.json] \
[--weights settings/evaluate.txt] [--depth N] [--parallel] [--no-prune] [--no-cache] \
[--random SEED] [--json]"
    );
    std::process::exit(1);
}

fn parse_args() -> anyhow::Result<CliOptions> {
    let mut opts = CliOptions::default();

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--battle" => {
                opts.battle_path = Some(args.next().map(PathBuf::from).ok_or_else(|| {
                    anyhow::anyhow!("--battle requires a path (e.g. --battle battle.json)")
                })?);
            }
            "--weights" => {
                opts.weights_path = Some(args.next().map(PathBuf::from).ok_or_else(|| {
                    anyhow::anyhow!(
                        "--weights requires a path (e.g. --weights settings/evaluate.txt)"
                    )
                })?);
            }
            "--depth" => {
                let val = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--depth requires a number"))?;
                opts.depth = val.parse()?;
            }
            "--random" => {
                let val = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--random requires a seed"))?;
                opts.random_seed = Some(val.parse()?);
            }
            "--parallel" => opts.parallel = true,
            "--no-prune" => opts.prune = false,
            "--no-cache" => opts.use_cache = false,
            "--json" => opts.json = true,
            "--help" | "-h" => usage(),
            other if !other.starts_with('-') => {
                opts.depth = other
                    .parse()
                    .map_err(|_| anyhow::anyhow!("Expected a search depth, got {other}"))?;
            }
            other => return Err(anyhow::anyhow!("Unknown argument {other}")),
        }
    }

    Ok(opts)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opts = parse_args()?;
    run(opts)
}
