use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

pub const DEFAULT_TRIALS: usize = 10_000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamEntry {
    pub code: String,
    /// Elo-style strength rating.
    pub rating: i32,
    /// World ranking position; a lower number is a stronger team.
    pub ranking: i32,
    /// Points already banked before the remaining fixtures.
    pub points: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    HomeWin,
    Draw,
    AwayWin,
    NotPlayedYet,
}

impl MatchStatus {
    pub fn is_resolved(self) -> bool {
        self != MatchStatus::NotPlayedYet
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fixture {
    pub home: String,
    pub away: String,
    pub status: MatchStatus,
}

/// One qualification group, frozen at the moment the simulation starts.
/// Team order is canonical: standings ties keep this order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupConfig {
    pub teams: Vec<TeamEntry>,
    pub remaining: Vec<Fixture>,
    pub history: Vec<Fixture>,
    pub target: String,
    #[serde(default = "default_trials")]
    pub trials: usize,
}

fn default_trials() -> usize {
    DEFAULT_TRIALS
}

impl GroupConfig {
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("read group config {}", path.display()))?;
        let cfg: GroupConfig = serde_json::from_str(&raw)
            .with_context(|| format!("parse group config {}", path.display()))?;
        Ok(cfg)
    }

    /// Rejects anything the model cannot simulate. A fixture naming a team
    /// missing from the table is unrecoverable, so the whole run aborts
    /// before any output.
    pub fn validate(&self) -> Result<()> {
        if self.teams.is_empty() {
            return Err(anyhow!("group config has no teams"));
        }
        if self.trials == 0 {
            return Err(anyhow!("trial count must be at least 1"));
        }
        self.entry(&self.target)
            .context("target team missing from team table")?;

        for fixture in &self.remaining {
            self.check_fixture_teams(fixture, "remaining")?;
            if fixture.status.is_resolved() {
                return Err(anyhow!(
                    "remaining fixture {} vs {} already carries a result",
                    fixture.home,
                    fixture.away
                ));
            }
        }
        for fixture in &self.history {
            self.check_fixture_teams(fixture, "historical")?;
            if !fixture.status.is_resolved() {
                return Err(anyhow!(
                    "historical fixture {} vs {} has no result",
                    fixture.home,
                    fixture.away
                ));
            }
        }
        Ok(())
    }

    fn check_fixture_teams(&self, fixture: &Fixture, kind: &str) -> Result<()> {
        for code in [&fixture.home, &fixture.away] {
            self.entry(code).with_context(|| {
                format!("{kind} fixture {} vs {}", fixture.home, fixture.away)
            })?;
        }
        Ok(())
    }

    fn entry(&self, code: &str) -> Result<&TeamEntry> {
        self.teams
            .iter()
            .find(|team| team.code == code)
            .ok_or_else(|| anyhow!("unknown team code {code:?}"))
    }

    pub fn rating(&self, code: &str) -> Result<i32> {
        self.entry(code).map(|team| team.rating)
    }

    pub fn ranking(&self, code: &str) -> Result<i32> {
        self.entry(code).map(|team| team.ranking)
    }

    /// Widest rating gap in the group (max minus min).
    pub fn rating_spread(&self) -> i32 {
        spread(self.teams.iter().map(|team| team.rating))
    }

    /// Widest ranking gap in the group (max minus min).
    pub fn rank_spread(&self) -> i32 {
        spread(self.teams.iter().map(|team| team.ranking))
    }
}

fn spread(values: impl Iterator<Item = i32>) -> i32 {
    let mut min = i32::MAX;
    let mut max = i32::MIN;
    let mut seen = false;
    for value in values {
        min = min.min(value);
        max = max.max(value);
        seen = true;
    }
    if seen { max - min } else { 0 }
}
