use crate::config::{load_json, Command, ScoringConfig};
use crate::core::locks::{current_race, BetLocks};
use crate::core::podium::PodiumValidator;
use crate::core::report::{render_race, render_season};
use crate::core::scoring::{jokers_left, score_race, validate_jokers};
use crate::core::season::{score_season, team_matches};
use crate::domain::model::{
    RaceGuess, RaceResult, RaceWeekend, SeasonBet, Standings, StandingsKind, Submission,
};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::io::Write;
use std::path::Path;

/// Runs one CLI command, writing its report to `out`.
pub fn run<W: Write>(command: Command, out: &mut W) -> Result<()> {
    match command {
        Command::Validate {
            first,
            second,
            third,
            form,
        } => {
            let submission = match form {
                Some(path) => {
                    let fields: serde_json::Map<String, serde_json::Value> = load_json(&path)?;
                    PodiumValidator.validate_form(&fields)?
                }
                None => {
                    let submission = Submission::new(first, second, third);
                    submission.validate()?;
                    submission
                }
            };
            tracing::info!("✅ Podium tip accepted");
            writeln!(out, "{}", serde_json::to_string_pretty(&submission)?)?;
        }
        Command::ScoreRace {
            guess,
            result,
            config,
            jokers_used,
            format,
        } => {
            let scoring = load_scoring(config.as_deref())?;
            let guess: RaceGuess = load_json(&guess)?;
            // 投注時已擋下重複的頒獎台選擇，這裡再檢查一次
            guess.podium.validate()?;
            if guess.joker {
                validate_jokers(jokers_used, scoring.race.max_jokers)?;
                tracing::info!(
                    "🃏 Joker played, {} left after this race",
                    jokers_left(jokers_used + 1, scoring.race.max_jokers)
                );
            }
            let result: Option<RaceResult> = result.map(load_json).transpose()?;
            if result.is_none() {
                tracing::info!("No result yet, scoring as pending");
            }

            let breakdown = score_race(result.as_ref(), &guess, &scoring.race);
            tracing::info!("✅ Race tip scored: {} points", breakdown.total());
            writeln!(out, "{}", render_race(&breakdown, format)?)?;
        }
        Command::ScoreSeason {
            bet,
            standings,
            kind,
            config,
            format,
        } => {
            let scoring = load_scoring(config.as_deref())?;
            let bet: Option<SeasonBet> = bet.map(load_json).transpose()?;
            let standings: Standings = load_json(&standings)?;
            let cfg = scoring.season.for_kind(kind);

            let scores = score_season(bet.as_ref(), &standings, kind, cfg)?;
            writeln!(out, "{}", render_season(&scores, format)?)?;

            if let (Some(bet), StandingsKind::Drivers) = (&bet, kind) {
                let matches = team_matches(bet, &standings, &scoring.teams, cfg);
                let points: u32 = matches.values().map(|m| m.points).sum();
                tracing::info!("🏁 Teammate head-to-heads: {} points", points);
                writeln!(out, "{}", serde_json::to_string_pretty(&matches)?)?;
            }
        }
        Command::Locks { schedule, at } => {
            let weekends: Vec<RaceWeekend> = load_json(&schedule)?;
            let now = at.unwrap_or_else(chrono::Utc::now);

            match current_race(&weekends, now) {
                Some(weekend) => {
                    let locks = BetLocks::at(weekend, now);
                    tracing::info!("📅 Current round {}: {}", weekend.round, weekend.name);
                    let report = serde_json::json!({
                        "round": weekend.round,
                        "name": weekend.name,
                        "locks": locks,
                    });
                    writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
                }
                None => tracing::warn!("Calendar is empty, nothing to lock"),
            }
        }
    }

    Ok(())
}

fn load_scoring(path: Option<&Path>) -> Result<ScoringConfig> {
    let config = match path {
        Some(path) => {
            tracing::info!("📁 Loading scoring config from: {}", path.display());
            ScoringConfig::from_file(path)?
        }
        None => ScoringConfig::default(),
    };

    // 驗證配置
    config.validate()?;
    Ok(config)
}
