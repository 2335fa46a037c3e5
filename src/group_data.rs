use crate::group::{DEFAULT_TRIALS, Fixture, GroupConfig, MatchStatus, TeamEntry};

/// Snapshot of AFC third-round Group C before the final matchdays: Elo
/// ratings, FIFA rankings and banked points for the six teams, the eleven
/// fixtures still to play, and every group result so far.
pub fn afc_group_c() -> GroupConfig {
    GroupConfig {
        teams: vec![
            team("jpn", 1888, 13, 16),
            team("aus", 1718, 43, 7),
            team("idn", 1317, 134, 6),
            team("sau", 1535, 75, 6),
            team("bhr", 1528, 77, 6),
            team("chn", 1422, 98, 6),
        ],
        remaining: vec![
            upcoming("aus", "idn"),
            upcoming("jpn", "bhr"),
            upcoming("sau", "chn"),
            upcoming("jpn", "sau"),
            upcoming("chn", "aus"),
            upcoming("idn", "bhr"),
            upcoming("idn", "chn"),
            upcoming("aus", "jpn"),
            upcoming("bhr", "sau"),
            upcoming("jpn", "idn"),
            upcoming("chn", "bhr"),
        ],
        history: vec![
            played("idn", "sau", MatchStatus::HomeWin),
            played("idn", "jpn", MatchStatus::AwayWin),
            played("chn", "idn", MatchStatus::HomeWin),
            played("bhr", "idn", MatchStatus::Draw),
            played("idn", "aus", MatchStatus::Draw),
            played("chn", "jpn", MatchStatus::AwayWin),
            played("idn", "jpn", MatchStatus::AwayWin),
            played("jpn", "aus", MatchStatus::Draw),
            played("sau", "jpn", MatchStatus::AwayWin),
            played("bhr", "jpn", MatchStatus::AwayWin),
            played("idn", "sau", MatchStatus::HomeWin),
            played("aus", "sau", MatchStatus::Draw),
            played("sau", "bhr", MatchStatus::Draw),
            played("sau", "jpn", MatchStatus::AwayWin),
            played("chn", "sau", MatchStatus::AwayWin),
            played("chn", "jpn", MatchStatus::AwayWin),
            played("bhr", "chn", MatchStatus::AwayWin),
            played("chn", "idn", MatchStatus::HomeWin),
            played("aus", "chn", MatchStatus::HomeWin),
            played("chn", "sau", MatchStatus::AwayWin),
            played("bhr", "aus", MatchStatus::Draw),
            played("bhr", "chn", MatchStatus::Draw),
            played("sau", "bhr", MatchStatus::Draw),
            played("bhr", "idn", MatchStatus::Draw),
            played("bhr", "jpn", MatchStatus::AwayWin),
            played("bhr", "aus", MatchStatus::Draw),
            played("aus", "sau", MatchStatus::Draw),
            played("jpn", "aus", MatchStatus::Draw),
            played("aus", "chn", MatchStatus::HomeWin),
            played("idn", "aus", MatchStatus::Draw),
        ],
        target: "idn".to_string(),
        trials: DEFAULT_TRIALS,
    }
}

fn team(code: &str, rating: i32, ranking: i32, points: i32) -> TeamEntry {
    TeamEntry {
        code: code.to_string(),
        rating,
        ranking,
        points,
    }
}

fn upcoming(home: &str, away: &str) -> Fixture {
    Fixture {
        home: home.to_string(),
        away: away.to_string(),
        status: MatchStatus::NotPlayedYet,
    }
}

fn played(home: &str, away: &str, status: MatchStatus) -> Fixture {
    Fixture {
        home: home.to_string(),
        away: away.to_string(),
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_group_is_valid() {
        afc_group_c().validate().unwrap();
    }

    #[test]
    fn builtin_group_survives_a_json_round_trip() {
        let cfg = afc_group_c();
        let json = serde_json::to_string(&cfg).unwrap();
        let back: GroupConfig = serde_json::from_str(&json).unwrap();
        back.validate().unwrap();
        assert_eq!(back.teams.len(), cfg.teams.len());
        assert_eq!(back.remaining.len(), cfg.remaining.len());
        assert_eq!(back.history.len(), cfg.history.len());
        assert_eq!(back.target, cfg.target);
    }
}
