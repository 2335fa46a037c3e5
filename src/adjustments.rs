use std::collections::HashMap;

use anyhow::Result;

use crate::group::{Fixture, GroupConfig, MatchStatus};

/// Full boost granted at the group's widest ranking gap.
pub const RANK_BOOST_MAX: f64 = 0.05;
/// Full per-match form swing at the group's widest rating gap.
pub const FORM_BOOST_MAX: f64 = 0.05;

const UNDERDOG_DRAW_WEIGHT: f64 = 0.6;
const FAVORITE_DRAW_WEIGHT: f64 = 0.5;

/// Additive probability adjustment for the two sides of one fixture.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoostPair {
    pub home: f64,
    pub away: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TeamResult {
    Win,
    Draw,
    Loss,
}

/// Historical fixtures indexed under both participants, built once at
/// startup and shared read-only across every composed fixture.
#[derive(Debug, Default)]
pub struct HistoryIndex {
    by_team: HashMap<String, Vec<Fixture>>,
}

impl HistoryIndex {
    pub fn build(history: &[Fixture]) -> Self {
        let mut by_team: HashMap<String, Vec<Fixture>> = HashMap::new();
        for fixture in history {
            by_team
                .entry(fixture.home.clone())
                .or_default()
                .push(fixture.clone());
            by_team
                .entry(fixture.away.clone())
                .or_default()
                .push(fixture.clone());
        }
        Self { by_team }
    }

    fn for_team(&self, code: &str) -> &[Fixture] {
        self.by_team.get(code).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Boost from relative world ranking, scaled by how far apart the two
/// ranking numbers sit within the group's overall span. The side favored
/// follows the sign of `ranking(home) - ranking(away)` literally: a
/// negative difference boosts the away side.
pub fn rank_boost(cfg: &GroupConfig, home: &str, away: &str) -> Result<BoostPair> {
    let spread = cfg.rank_spread();
    if spread == 0 {
        return Ok(BoostPair::default());
    }

    let diff = cfg.ranking(home)? - cfg.ranking(away)?;
    if diff < 0 {
        Ok(BoostPair {
            home: 0.0,
            away: RANK_BOOST_MAX * f64::from(-diff) / f64::from(spread),
        })
    } else {
        Ok(BoostPair {
            home: RANK_BOOST_MAX * f64::from(diff) / f64::from(spread),
            away: 0.0,
        })
    }
}

/// Summed head-to-head form signal for both sides of a fixture. Underdogs
/// earn credit for taking points off stronger opponents; favorites are
/// docked for dropping them. Each contribution is weighted by the rating
/// gap in that historical match.
pub fn form_boost(
    cfg: &GroupConfig,
    history: &HistoryIndex,
    home: &str,
    away: &str,
) -> Result<BoostPair> {
    Ok(BoostPair {
        home: team_form(cfg, history, home)?,
        away: team_form(cfg, history, away)?,
    })
}

fn team_form(cfg: &GroupConfig, history: &HistoryIndex, code: &str) -> Result<f64> {
    let spread = cfg.rating_spread();
    if spread == 0 {
        return Ok(0.0);
    }

    let mut total = 0.0;
    for fixture in history.for_team(code) {
        let Some(result) = result_for(code, fixture) else {
            continue;
        };
        let opponent = if fixture.home == code {
            &fixture.away
        } else {
            &fixture.home
        };
        total += boost_penalty(cfg, code, opponent, result, spread)?;
    }
    Ok(total)
}

fn result_for(team: &str, fixture: &Fixture) -> Option<TeamResult> {
    let was_home = fixture.home == team;
    match (fixture.status, was_home) {
        (MatchStatus::HomeWin, true) | (MatchStatus::AwayWin, false) => Some(TeamResult::Win),
        (MatchStatus::Draw, _) => Some(TeamResult::Draw),
        (MatchStatus::HomeWin, false) | (MatchStatus::AwayWin, true) => Some(TeamResult::Loss),
        (MatchStatus::NotPlayedYet, _) => None,
    }
}

fn boost_penalty(
    cfg: &GroupConfig,
    team: &str,
    opponent: &str,
    result: TeamResult,
    rating_spread: i32,
) -> Result<f64> {
    let team_rating = cfg.rating(team)?;
    let opp_rating = cfg.rating(opponent)?;

    let weight = f64::from((team_rating - opp_rating).abs()) / f64::from(rating_spread);
    let base = FORM_BOOST_MAX * weight;

    let value = if team_rating < opp_rating {
        match result {
            TeamResult::Win => base,
            TeamResult::Draw => UNDERDOG_DRAW_WEIGHT * base,
            TeamResult::Loss => 0.0,
        }
    } else {
        match result {
            TeamResult::Win => 0.0,
            TeamResult::Draw => -FAVORITE_DRAW_WEIGHT * base,
            TeamResult::Loss => -base,
        }
    };
    Ok(value)
}
