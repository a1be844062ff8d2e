use crate::config::toml_config::RaceScoring;
use crate::domain::model::{PodiumPosition, RaceGuess, RaceResult, ScoreBreakdown};
use crate::utils::error::{BetError, Result};

pub const FASTEST_LAP: &str = "fastest_lap";
pub const QUALI: &str = "quali";
pub const SAFETY_CAR: &str = "safety_car";
pub const SPRINT: &str = "sprint";
pub const DRIVER_OF_THE_DAY: &str = "driver_of_the_day";
pub const BONUS: &str = "bonus";

/// Categories decided on Sunday. Only these are multiplied by a joker.
pub const RACE_DAY_CATEGORIES: [&str; 7] = [
    "first",
    "second",
    "third",
    FASTEST_LAP,
    SAFETY_CAR,
    DRIVER_OF_THE_DAY,
    BONUS,
];

/// Rejects a joker when the player already used `used` of `max` jokers on
/// other weekends.
pub fn validate_jokers(used: u32, max: u32) -> Result<()> {
    if used >= max {
        tracing::warn!(used, max, "joker rejected, none left");
        return Err(BetError::JokerLimitExceeded { used, max });
    }
    Ok(())
}

/// Jokers still available to a player.
pub fn jokers_left(used: u32, max: u32) -> u32 {
    max.saturating_sub(used)
}

/// Scores one race tip against the official result.
///
/// `result` is `None` until the race has been run; the breakdown still lists
/// every category so a pending tip renders with zeros.
pub fn score_race(
    result: Option<&RaceResult>,
    guess: &RaceGuess,
    cfg: &RaceScoring,
) -> ScoreBreakdown {
    let mut breakdown = ScoreBreakdown::default();

    for position in PodiumPosition::ALL {
        let category = position.field_name();
        breakdown.add(category, 0.0);

        let (Some(result), Some(pick)) = (result, guess.podium.get(position)) else {
            continue;
        };
        if result.podium().contains(&pick) {
            breakdown.add(category, cfg.podium_presence);
        }
        if result.podium_at(position) == pick {
            breakdown.add(category, cfg.exact_position);
            if position == PodiumPosition::First {
                breakdown.add(category, cfg.winner_bonus);
            }
        }
    }

    let mut others: Vec<(&str, Option<&str>, Option<&str>)> = vec![
        (
            FASTEST_LAP,
            guess.fastest_lap.as_deref(),
            result.map(|r| r.fastest_lap.as_str()),
        ),
        (QUALI, guess.quali.as_deref(), result.map(|r| r.quali.as_str())),
        (
            SAFETY_CAR,
            guess.safety_car.as_deref(),
            result.and_then(|r| r.safety_car.as_deref()),
        ),
        (
            DRIVER_OF_THE_DAY,
            guess.driver_of_the_day.as_deref(),
            result.and_then(|r| r.driver_of_the_day.as_deref()),
        ),
    ];
    if let Some(sprint) = result.and_then(|r| r.sprint.as_deref()) {
        others.push((SPRINT, guess.sprint.as_deref(), Some(sprint)));
    }

    for (category, guessed, actual) in others {
        breakdown.add(category, 0.0);
        let (Some(guessed), Some(actual)) = (guessed, actual) else {
            continue;
        };
        let hit = if category == SAFETY_CAR {
            match (guessed.trim().parse::<f64>(), actual.trim().parse::<f64>()) {
                (Ok(g), Ok(a)) => g == a,
                _ => {
                    tracing::warn!(guessed, actual, "safety car count is not numeric, skipping");
                    continue;
                }
            }
        } else {
            guessed == actual
        };
        if hit {
            breakdown.add(category, cfg.exact_hit);
        }
    }

    let bonus = if guess.bonus_ok { cfg.bonus_points } else { 0.0 };
    breakdown.add(BONUS, bonus);

    if guess.joker {
        for category in RACE_DAY_CATEGORIES {
            if let Some(points) = breakdown.entries.get_mut(category) {
                *points *= cfg.joker_multiplier;
            }
        }
    }

    tracing::debug!(joker = guess.joker, total = breakdown.total(), "race tip scored");
    breakdown
}
