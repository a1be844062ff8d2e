use crate::domain::model::StandingsKind;
use crate::utils::error::{BetError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_range, validate_unique,
    Validate,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

const MAX_RACE_POINTS: f64 = 100.0;

/// Scoring rules loaded from TOML. Every section may be omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default)]
    pub race: RaceScoring,
    #[serde(default)]
    pub season: SeasonScoring,
    /// Team code to its two drivers, used for head-to-head season points.
    #[serde(default = "default_team_pairs")]
    pub teams: BTreeMap<String, [String; 2]>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RaceScoring {
    /// Guessed driver finished somewhere on the podium.
    pub podium_presence: f64,
    /// Guessed driver finished in exactly the guessed place.
    pub exact_position: f64,
    /// Extra for calling the winner.
    pub winner_bonus: f64,
    /// Pole, sprint winner, fastest lap, safety car count and driver of the day.
    pub exact_hit: f64,
    pub bonus_points: f64,
    /// Factor applied to race day points when the tip plays a joker.
    pub joker_multiplier: f64,
    /// Jokers each player may use over a season.
    pub max_jokers: u32,
}

impl Default for RaceScoring {
    fn default() -> Self {
        Self {
            podium_presence: 0.5,
            exact_position: 0.5,
            winner_bonus: 1.0,
            exact_hit: 1.0,
            bonus_points: 1.0,
            joker_multiplier: 2.0,
            max_jokers: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeasonScoring {
    pub drivers: StandingsScoring,
    pub teams: StandingsScoring,
}

impl Default for SeasonScoring {
    fn default() -> Self {
        Self {
            drivers: StandingsScoring {
                champion: 10,
                hit: 2,
                team_match: 1,
                range: 20,
            },
            teams: StandingsScoring {
                champion: 5,
                hit: 2,
                team_match: 0,
                range: 10,
            },
        }
    }
}

impl SeasonScoring {
    pub fn for_kind(&self, kind: StandingsKind) -> &StandingsScoring {
        match kind {
            StandingsKind::Drivers => &self.drivers,
            StandingsKind::Teams => &self.teams,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsScoring {
    pub champion: u32,
    pub hit: u32,
    #[serde(default)]
    pub team_match: u32,
    /// Number of table positions that are tipped and scored.
    pub range: u32,
}

/// Current grid; override with a `[teams]` table when line-ups change.
fn default_team_pairs() -> BTreeMap<String, [String; 2]> {
    [
        ("MER", "ANT", "RUS"),
        ("REB", "VER", "TSU"),
        ("FER", "LEC", "HAM"),
        ("MCL", "NOR", "PIA"),
        ("ALP", "GAS", "DOO"),
        ("KIK", "HUL", "BOR"),
        ("RBS", "LAW", "HAD"),
        ("HAS", "OCO", "BEA"),
        ("WIL", "SAI", "ALB"),
        ("ASM", "ALO", "STR"),
    ]
    .into_iter()
    .map(|(team, a, b)| (team.to_string(), [a.to_string(), b.to_string()]))
    .collect()
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            race: RaceScoring::default(),
            season: SeasonScoring::default(),
            teams: default_team_pairs(),
        }
    }
}

impl ScoringConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// 從 TOML 檔案載入計分規則
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析計分規則
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(BetError::from)
    }

    /// 替換環境變數 (例如 ${WINNER_BONUS})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| BetError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證計分規則的合理性
    pub fn validate_config(&self) -> Result<()> {
        let race = &self.race;
        for (field, value) in [
            ("race.podium_presence", race.podium_presence),
            ("race.exact_position", race.exact_position),
            ("race.winner_bonus", race.winner_bonus),
            ("race.exact_hit", race.exact_hit),
            ("race.bonus_points", race.bonus_points),
            ("race.joker_multiplier", race.joker_multiplier),
        ] {
            validate_range(field, value, 0.0, MAX_RACE_POINTS)?;
        }

        validate_positive_number("season.drivers.range", self.season.drivers.range as usize, 1)?;
        validate_positive_number("season.teams.range", self.season.teams.range as usize, 1)?;

        // 車隊內兩位車手必須不同
        for (team, drivers) in &self.teams {
            let field = format!("teams.{}", team);
            validate_non_empty_string(&field, team)?;
            for driver in drivers {
                validate_non_empty_string(&field, driver)?;
            }
            validate_unique(&field, drivers.iter())?;
        }

        Ok(())
    }
}

impl Validate for ScoringConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
