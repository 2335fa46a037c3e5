use anyhow::{Result, anyhow};
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use crate::group::GroupConfig;
use crate::win_prob::{FixtureProb, OutcomeProb};

/// Trials handed to one worker under one RNG stream.
const BATCH_TRIALS: usize = 1024;

const DIRECT_SLOTS: usize = 2;
const PLAYOFF_SLOTS: usize = 4;

#[derive(Debug, Clone, Copy)]
struct ResolvedFixture {
    home: usize,
    away: usize,
    prob: OutcomeProb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TrialResult {
    Direct,
    Playoff,
    Out,
}

/// Immutable season-sampling state: baseline points in team-table order,
/// fixtures resolved to dense team indices, and the target's index.
#[derive(Debug, Clone)]
pub struct Simulation {
    baseline: Vec<i32>,
    fixtures: Vec<ResolvedFixture>,
    target: usize,
}

#[derive(Debug, Clone, Copy)]
pub struct SimOutcome {
    pub trials: usize,
    pub direct: usize,
    pub playoff: usize,
}

impl SimOutcome {
    pub fn direct_pct(&self) -> f64 {
        self.direct as f64 / self.trials as f64 * 100.0
    }

    pub fn playoff_pct(&self) -> f64 {
        self.playoff as f64 / self.trials as f64 * 100.0
    }
}

impl Simulation {
    pub fn new(cfg: &GroupConfig, probs: &[FixtureProb]) -> Result<Self> {
        let index_of = |code: &str| -> Result<usize> {
            cfg.teams
                .iter()
                .position(|team| team.code == code)
                .ok_or_else(|| anyhow!("unknown team code {code:?}"))
        };

        let baseline = cfg.teams.iter().map(|team| team.points).collect();
        let fixtures = probs
            .iter()
            .map(|fp| {
                Ok(ResolvedFixture {
                    home: index_of(&fp.fixture.home)?,
                    away: index_of(&fp.fixture.away)?,
                    prob: fp.prob,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        let target = index_of(&cfg.target)?;

        Ok(Self {
            baseline,
            fixtures,
            target,
        })
    }

    /// Runs the full trial count and tallies the target's finishes. Trials
    /// are dealt to fixed-size batches, each with its own ChaCha stream
    /// sub-seeded from the master seed, so the tally is identical for a
    /// given seed no matter how rayon schedules the batches.
    pub fn run(&self, trials: usize, seed: Option<u64>) -> SimOutcome {
        let mut master = match seed {
            Some(s) => ChaCha8Rng::seed_from_u64(s),
            None => ChaCha8Rng::from_entropy(),
        };

        let mut batches = Vec::with_capacity(trials.div_ceil(BATCH_TRIALS));
        let mut left = trials;
        while left > 0 {
            let len = left.min(BATCH_TRIALS);
            batches.push((master.next_u64(), len));
            left -= len;
        }

        let (direct, playoff) = batches
            .par_iter()
            .map(|&(batch_seed, len)| {
                let mut rng = ChaCha8Rng::seed_from_u64(batch_seed);
                let mut direct = 0usize;
                let mut playoff = 0usize;
                for _ in 0..len {
                    match self.run_trial(&mut rng) {
                        TrialResult::Direct => direct += 1,
                        TrialResult::Playoff => playoff += 1,
                        TrialResult::Out => {}
                    }
                }
                (direct, playoff)
            })
            .reduce(|| (0, 0), |a, b| (a.0 + b.0, a.1 + b.1));

        SimOutcome {
            trials,
            direct,
            playoff,
        }
    }

    /// One simulated season: sample every remaining fixture, award points,
    /// rank, classify the target's finish.
    fn run_trial(&self, rng: &mut impl Rng) -> TrialResult {
        let mut points = self.baseline.clone();
        for fixture in &self.fixtures {
            let sample: f64 = rng.gen_range(0.0..1.0);
            if sample < fixture.prob.home {
                points[fixture.home] += 3;
            } else if sample < fixture.prob.home + fixture.prob.draw {
                points[fixture.home] += 1;
                points[fixture.away] += 1;
            } else {
                points[fixture.away] += 3;
            }
        }

        let mut standings: Vec<(usize, i32)> = points.into_iter().enumerate().collect();
        // Stable sort: equal points keep team-table order, so ties resolve
        // the same way on every run.
        standings.sort_by(|a, b| b.1.cmp(&a.1));

        let mut position = standings.len();
        for (rank, &(team, _)) in standings.iter().enumerate() {
            if team == self.target {
                position = rank;
                break;
            }
        }

        if position < DIRECT_SLOTS {
            TrialResult::Direct
        } else if position < PLAYOFF_SLOTS {
            TrialResult::Playoff
        } else {
            TrialResult::Out
        }
    }
}
