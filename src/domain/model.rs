use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One of the three ranked podium places, in finishing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PodiumPosition {
    First,
    Second,
    Third,
}

impl PodiumPosition {
    pub const ALL: [PodiumPosition; 3] = [
        PodiumPosition::First,
        PodiumPosition::Second,
        PodiumPosition::Third,
    ];

    /// Name of the form field carrying this pick.
    pub fn field_name(self) -> &'static str {
        match self {
            PodiumPosition::First => "first",
            PodiumPosition::Second => "second",
            PodiumPosition::Third => "third",
        }
    }
}

/// Podium tip as read from the betting form.
///
/// Empty strings are normalized to `None` on construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub first: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub second: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub third: Option<String>,
}

impl Submission {
    pub fn new<A, B, C>(first: Option<A>, second: Option<B>, third: Option<C>) -> Self
    where
        A: Into<String>,
        B: Into<String>,
        C: Into<String>,
    {
        Self {
            first: normalize(first.map(Into::into)),
            second: normalize(second.map(Into::into)),
            third: normalize(third.map(Into::into)),
        }
    }

    pub fn get(&self, position: PodiumPosition) -> Option<&str> {
        match position {
            PodiumPosition::First => self.first.as_deref(),
            PodiumPosition::Second => self.second.as_deref(),
            PodiumPosition::Third => self.third.as_deref(),
        }
    }

    /// Filled picks in first, second, third order.
    pub fn filled_picks(&self) -> impl Iterator<Item = &str> + '_ {
        PodiumPosition::ALL
            .into_iter()
            .filter_map(move |position| self.get(position))
    }
}

fn normalize(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn empty_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(normalize(value))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Text(String),
    Integer(i64),
    Float(f64),
}

/// Counts such as the safety car tip arrive either as `"2"` or `2`.
fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<StringOrNumber> = Option::deserialize(deserializer)?;
    Ok(value
        .map(|v| match v {
            StringOrNumber::Text(text) => text,
            StringOrNumber::Integer(n) => n.to_string(),
            StringOrNumber::Float(n) => n.to_string(),
        })
        .filter(|v| !v.is_empty()))
}

/// Official outcome of one race weekend, by driver code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceResult {
    pub quali: String,
    #[serde(default)]
    pub sprint: Option<String>,
    pub fastest_lap: String,
    pub first: String,
    pub second: String,
    pub third: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub safety_car: Option<String>,
    #[serde(default)]
    pub driver_of_the_day: Option<String>,
}

impl RaceResult {
    pub fn podium(&self) -> [&str; 3] {
        [&self.first, &self.second, &self.third]
    }

    pub fn podium_at(&self, position: PodiumPosition) -> &str {
        match position {
            PodiumPosition::First => &self.first,
            PodiumPosition::Second => &self.second,
            PodiumPosition::Third => &self.third,
        }
    }
}

/// A user's tip for one race weekend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RaceGuess {
    #[serde(default)]
    pub quali: Option<String>,
    #[serde(default)]
    pub sprint: Option<String>,
    #[serde(default)]
    pub fastest_lap: Option<String>,
    #[serde(flatten)]
    pub podium: Submission,
    #[serde(default, deserialize_with = "string_or_number")]
    pub safety_car: Option<String>,
    #[serde(default)]
    pub driver_of_the_day: Option<String>,
    /// Whether an admin marked the bonus question answer as correct.
    #[serde(default)]
    pub bonus_ok: bool,
    /// Joker played on this weekend; multiplies the race day points.
    #[serde(default)]
    pub joker: bool,
}

/// Points per category, in insertion-independent (alphabetical) order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub entries: BTreeMap<String, f64>,
}

impl ScoreBreakdown {
    pub fn add(&mut self, category: &str, points: f64) {
        *self.entries.entry(category.to_string()).or_insert(0.0) += points;
    }

    pub fn get(&self, category: &str) -> Option<f64> {
        self.entries.get(category).copied()
    }

    pub fn total(&self) -> f64 {
        self.entries.values().sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum StandingsKind {
    Drivers,
    Teams,
}

/// Season-long standings tip. Index 0 holds the tip for position 1.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonBet {
    #[serde(default)]
    pub drivers: Vec<Option<String>>,
    #[serde(default)]
    pub teams: Vec<Option<String>>,
}

impl SeasonBet {
    pub fn pick(&self, kind: StandingsKind, position: u32) -> Option<&str> {
        let picks = match kind {
            StandingsKind::Drivers => &self.drivers,
            StandingsKind::Teams => &self.teams,
        };
        let index = usize::try_from(position).ok()?.checked_sub(1)?;
        picks.get(index)?.as_deref().filter(|p| !p.is_empty())
    }

    /// Position the bet gives to `code`, if it was tipped at all.
    pub fn position_of(&self, kind: StandingsKind, code: &str) -> Option<u32> {
        let picks = match kind {
            StandingsKind::Drivers => &self.drivers,
            StandingsKind::Teams => &self.teams,
        };
        picks
            .iter()
            .position(|p| p.as_deref() == Some(code))
            .and_then(|i| u32::try_from(i + 1).ok())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingEntry {
    pub position: u32,
    pub name: String,
}

/// Championship table keyed by position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<StandingEntry>", into = "Vec<StandingEntry>")]
pub struct Standings {
    by_position: BTreeMap<u32, String>,
}

impl Standings {
    pub fn at(&self, position: u32) -> Option<&str> {
        self.by_position.get(&position).map(String::as_str)
    }

    pub fn position_of(&self, name: &str) -> Option<u32> {
        self.by_position
            .iter()
            .find(|(_, n)| n.as_str() == name)
            .map(|(p, _)| *p)
    }

    pub fn len(&self) -> usize {
        self.by_position.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_position.is_empty()
    }
}

impl From<Vec<StandingEntry>> for Standings {
    fn from(entries: Vec<StandingEntry>) -> Self {
        Self {
            by_position: entries.into_iter().map(|e| (e.position, e.name)).collect(),
        }
    }
}

impl From<Standings> for Vec<StandingEntry> {
    fn from(standings: Standings) -> Self {
        standings
            .by_position
            .into_iter()
            .map(|(position, name)| StandingEntry { position, name })
            .collect()
    }
}

/// Betting window of a single race weekend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceWeekend {
    pub round: u32,
    pub name: String,
    pub quali_start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub sprint_start: Option<DateTime<Utc>>,
    pub race_start: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_normalizes_empty_strings() {
        let submission = Submission::new(Some(""), Some("VER"), None::<String>);
        assert_eq!(submission.first, None);
        assert_eq!(submission.second.as_deref(), Some("VER"));
        assert_eq!(submission.filled_picks().collect::<Vec<_>>(), vec!["VER"]);
    }

    #[test]
    fn test_submission_keeps_whitespace_tokens() {
        let submission = Submission::new(Some(" "), None::<String>, None::<String>);
        assert_eq!(submission.first.as_deref(), Some(" "));
    }

    #[test]
    fn test_submission_deserializes_empty_as_absent() {
        let submission: Submission =
            serde_json::from_str(r#"{"first": "", "second": "LEC"}"#).unwrap();
        assert_eq!(submission, Submission::new(None::<String>, Some("LEC"), None::<String>));
    }

    #[test]
    fn test_safety_car_accepts_numbers_and_strings() {
        let guess: RaceGuess = serde_json::from_str(r#"{"safety_car": 2}"#).unwrap();
        assert_eq!(guess.safety_car.as_deref(), Some("2"));

        let guess: RaceGuess = serde_json::from_str(r#"{"safety_car": 1.5}"#).unwrap();
        assert_eq!(guess.safety_car.as_deref(), Some("1.5"));

        let guess: RaceGuess = serde_json::from_str(r#"{"safety_car": "3"}"#).unwrap();
        assert_eq!(guess.safety_car.as_deref(), Some("3"));

        let guess: RaceGuess = serde_json::from_str(r#"{"safety_car": null}"#).unwrap();
        assert_eq!(guess.safety_car, None);
    }

    #[test]
    fn test_result_safety_car_as_number() {
        let result: RaceResult = serde_json::from_str(
            r#"{"quali": "LEC", "fastest_lap": "VER", "first": "VER",
                "second": "LEC", "third": "HAM", "safety_car": 0}"#,
        )
        .unwrap();
        assert_eq!(result.safety_car.as_deref(), Some("0"));
        assert_eq!(result.driver_of_the_day, None);
    }

    #[test]
    fn test_standings_from_entries() {
        let standings: Standings = serde_json::from_str(
            r#"[{"position": 2, "name": "LEC"}, {"position": 1, "name": "VER"}]"#,
        )
        .unwrap();
        assert_eq!(standings.at(1), Some("VER"));
        assert_eq!(standings.position_of("LEC"), Some(2));
        assert_eq!(standings.len(), 2);
    }

    #[test]
    fn test_season_bet_positions_are_one_based() {
        let bet = SeasonBet {
            drivers: vec![Some("VER".into()), None, Some("HAM".into())],
            teams: vec![],
        };
        assert_eq!(bet.pick(StandingsKind::Drivers, 1), Some("VER"));
        assert_eq!(bet.pick(StandingsKind::Drivers, 2), None);
        assert_eq!(bet.pick(StandingsKind::Drivers, 0), None);
        assert_eq!(bet.position_of(StandingsKind::Drivers, "HAM"), Some(3));
        assert_eq!(bet.pick(StandingsKind::Teams, 1), None);
    }
}
