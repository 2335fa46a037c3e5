use anyhow::Result;

use crate::adjustments::{self, HistoryIndex};
use crate::group::{Fixture, GroupConfig};

/// Baseline draw share before adjustments; domain-chosen, not derived.
const DRAW_BASE: f64 = 0.25;
/// Flat home-field addition applied after all other signals.
const HOME_ADV: f64 = 0.10;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutcomeProb {
    pub home: f64,
    pub draw: f64,
    pub away: f64,
}

impl OutcomeProb {
    pub fn uniform() -> Self {
        Self {
            home: 1.0 / 3.0,
            draw: 1.0 / 3.0,
            away: 1.0 / 3.0,
        }
    }

    pub fn sum(&self) -> f64 {
        self.home + self.draw + self.away
    }
}

/// A remaining fixture paired with its composed outcome distribution.
#[derive(Debug, Clone)]
pub struct FixtureProb {
    pub fixture: Fixture,
    pub prob: OutcomeProb,
}

/// Logistic expectation from the rating difference. Equal ratings give
/// exactly 0.5.
pub fn elo_win_prob(home_rating: i32, away_rating: i32) -> f64 {
    1.0 / (1.0 + 10.0_f64.powf(f64::from(away_rating - home_rating) / 400.0))
}

/// Combines strength, ranking, form and home advantage into one normalized
/// three-way distribution. Only missing team data can fail here; that is a
/// configuration error and aborts the run.
pub fn compose_fixture_prob(
    cfg: &GroupConfig,
    history: &HistoryIndex,
    fixture: &Fixture,
) -> Result<OutcomeProb> {
    let mut home = elo_win_prob(cfg.rating(&fixture.home)?, cfg.rating(&fixture.away)?);
    let draw = DRAW_BASE;
    let mut away = 1.0 - (home + draw);

    let rank = adjustments::rank_boost(cfg, &fixture.home, &fixture.away)?;
    home += rank.home;
    away += rank.away;

    let form = adjustments::form_boost(cfg, history, &fixture.home, &fixture.away)?;
    home += form.home;
    away += form.away;

    home += HOME_ADV;

    Ok(normalized(home, draw, away))
}

/// Distributions for every remaining fixture, in configuration order.
pub fn compose_all(cfg: &GroupConfig, history: &HistoryIndex) -> Result<Vec<FixtureProb>> {
    cfg.remaining
        .iter()
        .map(|fixture| {
            let prob = compose_fixture_prob(cfg, history, fixture)?;
            Ok(FixtureProb {
                fixture: fixture.clone(),
                prob,
            })
        })
        .collect()
}

/// Clamps negatives to zero and rescales to a unit sum. A fully clamped
/// triple falls back to uniform rather than dividing by zero.
fn normalized(home: f64, draw: f64, away: f64) -> OutcomeProb {
    let home = home.max(0.0);
    let draw = draw.max(0.0);
    let away = away.max(0.0);

    let total = home + draw + away;
    if total <= 0.0 {
        return OutcomeProb::uniform();
    }
    OutcomeProb {
        home: home / total,
        draw: draw / total,
        away: away / total,
    }
}
