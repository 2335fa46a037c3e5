use std::env;
use std::path::PathBuf;

use anyhow::Result;

use wcq_sim::adjustments::HistoryIndex;
use wcq_sim::group::GroupConfig;
use wcq_sim::group_data;
use wcq_sim::simulate::Simulation;
use wcq_sim::win_prob;

fn main() -> Result<()> {
    let cfg = match env::args().nth(1).map(PathBuf::from) {
        Some(path) => GroupConfig::from_json_file(&path)?,
        None => group_data::afc_group_c(),
    };
    cfg.validate()?;

    let trials = env::var("SIM_TRIALS")
        .ok()
        .and_then(|val| val.parse::<usize>().ok())
        .unwrap_or(cfg.trials)
        .max(1);
    let seed = env::var("SIM_SEED")
        .ok()
        .and_then(|val| val.parse::<u64>().ok());
    let verbose = env::var("SIM_VERBOSE").ok().as_deref() == Some("1");

    let history = HistoryIndex::build(&cfg.history);
    let probs = win_prob::compose_all(&cfg, &history)?;

    if verbose {
        for fp in &probs {
            println!(
                "{} vs {}: home {:.1}% draw {:.1}% away {:.1}%",
                fp.fixture.home,
                fp.fixture.away,
                fp.prob.home * 100.0,
                fp.prob.draw * 100.0,
                fp.prob.away * 100.0,
            );
        }
    }

    let sim = Simulation::new(&cfg, &probs)?;
    let outcome = sim.run(trials, seed);

    println!(
        "Chance of {} directly qualifying for World Cup: {:.2}%",
        cfg.target,
        outcome.direct_pct()
    );
    println!(
        "Chance of {} passing to the next round: {:.2}%",
        cfg.target,
        outcome.playoff_pct()
    );

    Ok(())
}
