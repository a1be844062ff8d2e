use anyhow::Result;
use podium_bet::config::load_json;
use podium_bet::core::locks::{current_race, BetLocks};
use podium_bet::core::report::{render_race, OutputFormat};
use podium_bet::core::scoring::score_race;
use podium_bet::core::season::{score_season, team_matches};
use podium_bet::domain::model::{
    RaceGuess, RaceResult, RaceWeekend, SeasonBet, Standings, StandingsKind,
};
use podium_bet::utils::validation::Validate;
use podium_bet::{BetError, ScoringConfig};
use tempfile::TempDir;

/// 從 JSON 檔案讀取投注與結果並計分
#[test]
fn test_race_tip_from_files() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let guess_path = temp_dir.path().join("guess.json");
    let result_path = temp_dir.path().join("result.json");

    std::fs::write(
        &guess_path,
        r#"{
            "first": "VER", "second": "HAM", "third": "",
            "quali": "LEC", "fastest_lap": "PER", "sprint": "VER",
            "safety_car": "1", "bonus_ok": true
        }"#,
    )?;
    std::fs::write(
        &result_path,
        r#"{
            "quali": "LEC", "sprint": "VER", "fastest_lap": "VER",
            "first": "VER", "second": "LEC", "third": "HAM",
            "safety_car": "1.0"
        }"#,
    )?;

    let guess: RaceGuess = load_json(&guess_path)?;
    let result: RaceResult = load_json(&result_path)?;
    assert!(guess.podium.validate().is_ok());
    assert_eq!(guess.podium.third, None);

    let breakdown = score_race(Some(&result), &guess, &ScoringConfig::default().race);

    // first 2 + second 0.5 + quali 1 + sprint 1 + safety car 1 + bonus 1
    assert_eq!(breakdown.get("first"), Some(2.0));
    assert_eq!(breakdown.get("second"), Some(0.5));
    assert_eq!(breakdown.get("third"), Some(0.0));
    assert_eq!(breakdown.get("fastest_lap"), Some(0.0));
    assert_eq!(breakdown.total(), 6.5);

    let csv = render_race(&breakdown, OutputFormat::Csv)?;
    assert!(csv.ends_with("total,6.5\n"));
    Ok(())
}

#[test]
fn test_tip_with_duplicate_podium_is_rejected() -> Result<()> {
    let guess: RaceGuess =
        serde_json::from_str(r#"{"first": "VER", "second": "", "third": "VER"}"#)?;

    assert!(matches!(
        guess.podium.validate(),
        Err(BetError::DuplicatePodiumEntry)
    ));
    Ok(())
}

#[test]
fn test_custom_scoring_config_from_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("scoring.toml");
    std::fs::write(
        &config_path,
        r#"
[season.drivers]
champion = 20
hit = 1
team_match = 3
range = 3

[teams]
REB = ["VER", "PER"]
"#,
    )?;

    let config = ScoringConfig::from_file(&config_path)?;
    config.validate()?;

    let standings: Standings =
        serde_json::from_str(r#"[{"position": 1, "name": "VER"}, {"position": 2, "name": "PER"}, {"position": 3, "name": "LEC"}]"#)?;
    let bet = SeasonBet {
        drivers: vec![Some("VER".into()), Some("LEC".into()), Some("PER".into())],
        teams: vec![],
    };

    let cfg = config.season.for_kind(StandingsKind::Drivers);
    let scores = score_season(Some(&bet), &standings, StandingsKind::Drivers, cfg)?;
    assert_eq!(scores[&1].points, 21);
    assert_eq!(scores[&2].points, 0);

    let matches = team_matches(&bet, &standings, &config.teams, cfg);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches["REB"].points, 3);
    Ok(())
}

#[test]
fn test_missing_input_file_is_io_error() {
    let err = load_json::<RaceGuess, _>("/definitely/not/here.json").unwrap_err();
    assert!(matches!(err, BetError::IoError(_)));
}

#[test]
fn test_calendar_locks() -> Result<()> {
    let calendar: Vec<RaceWeekend> = serde_json::from_str(
        r#"[
            {"round": 1, "name": "Bahrain", "quali_start": "2022-03-19T15:00:00Z",
             "race_start": "2022-03-20T15:00:00Z"},
            {"round": 4, "name": "Emilia Romagna", "quali_start": "2022-04-22T14:00:00Z",
             "sprint_start": "2022-04-23T14:30:00Z", "race_start": "2022-04-24T13:00:00Z"}
        ]"#,
    )?;

    let now = "2022-04-23T15:00:00Z".parse()?;
    let weekend = current_race(&calendar, now).expect("calendar is not empty");
    assert_eq!(weekend.round, 4);

    let locks = BetLocks::at(weekend, now);
    assert!(locks.is_field_locked("quali"));
    assert!(locks.is_field_locked("sprint"));
    assert!(!locks.is_field_locked("first"));
    Ok(())
}
