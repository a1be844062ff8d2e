use crate::config::toml_config::StandingsScoring;
use crate::domain::model::{SeasonBet, Standings, StandingsKind};
use crate::utils::error::{BetError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionScore {
    pub points: u32,
    pub kind: StandingsKind,
}

/// Head-to-head outcome for one team's driver pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMatch {
    pub points: u32,
    /// Driver the bet ranks ahead of the teammate.
    pub bet_leader: String,
    /// Driver currently ahead in the standings.
    pub standings_leader: String,
}

/// Scores a season tip position by position against the standings.
///
/// Without a bet every position is listed with zero points. Fails when the
/// standings lack a position inside the scored range.
pub fn score_season(
    bet: Option<&SeasonBet>,
    standings: &Standings,
    kind: StandingsKind,
    cfg: &StandingsScoring,
) -> Result<BTreeMap<u32, PositionScore>> {
    let mut scores = BTreeMap::new();

    for position in 1..=cfg.range {
        let actual = standings
            .at(position)
            .ok_or(BetError::MissingStanding { position })?;

        let mut points = 0;
        if bet.and_then(|b| b.pick(kind, position)) == Some(actual) {
            points += cfg.hit;
            if position == 1 {
                points += cfg.champion;
            }
        }
        scores.insert(position, PositionScore { points, kind });
    }

    tracing::debug!(
        ?kind,
        total = scores.values().map(|s| s.points).sum::<u32>(),
        "season tip scored"
    );
    Ok(scores)
}

/// Awards `cfg.team_match` per team where the bet orders the two teammates
/// the same way the driver standings do.
///
/// Teams with a driver missing from either the bet or the standings are left
/// out of the result.
pub fn team_matches(
    bet: &SeasonBet,
    standings: &Standings,
    pairs: &BTreeMap<String, [String; 2]>,
    cfg: &StandingsScoring,
) -> BTreeMap<String, TeamMatch> {
    let mut out = BTreeMap::new();

    for (team, [lead, mate]) in pairs {
        let bet_positions = (
            bet.position_of(StandingsKind::Drivers, lead),
            bet.position_of(StandingsKind::Drivers, mate),
        );
        let standing_positions = (standings.position_of(lead), standings.position_of(mate));

        let ((Some(lead_bet), Some(mate_bet)), (Some(lead_now), Some(mate_now))) =
            (bet_positions, standing_positions)
        else {
            tracing::debug!(team = %team, "team pair incomplete, skipping head-to-head");
            continue;
        };

        let bet_leader = if lead_bet < mate_bet { lead } else { mate };
        let standings_leader = if lead_now < mate_now { lead } else { mate };
        let points = if bet_leader == standings_leader {
            cfg.team_match
        } else {
            0
        };

        out.insert(
            team.clone(),
            TeamMatch {
                points,
                bet_leader: bet_leader.clone(),
                standings_leader: standings_leader.clone(),
            },
        );
    }

    out
}
