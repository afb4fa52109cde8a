//! End-to-end runs of the settings pass over a quest config file

use clap::Parser;
use rqc_cli::{run, Args, CliError};
use serde_json::{json, Value};
use std::fs;
use std::path::Path;

const QUEST_CONFIG: &str = include_str!("../../rqc_core/tests/data/quest_config.json");

const SETTINGS: &str = r#"{
    // Double experience, everything else at host values
    "xpMultiplier": 2,
    "currencyMultiplier": 1,
    "repMultiplier": 1,
    "skillRewardChanceMultiplier": 1,
    "skillPointRewardMultiplier": 1,
    "useSpecificQuestType": true,
    "completionOnly": true,
    "dailyMinPlayerLevel": 5,
    "weeklyMinPlayerLevel": 15,
    "scavMinPlayerLevel": 1,
    "dailyNumberOfQuests": 4,
    "weeklyNumberOfQuests": 2,
    "scavNumberOfQuests": 1,
    "dailyResetTimer": 1.5,
    "weeklyResetTimer": 604800,
    "scavResetTimer": 86400
}"#;

fn args(dir: &Path) -> Args {
    let settings = dir.join("config.jsonc");
    let quest_config = dir.join("quest.json");
    let output = dir.join("patched.json");
    fs::write(&settings, SETTINGS).unwrap();
    fs::write(&quest_config, QUEST_CONFIG).unwrap();

    Args::try_parse_from([
        "rqc-apply",
        "--config",
        settings.to_str().unwrap(),
        "--quest-config",
        quest_config.to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
    ])
    .unwrap()
}

#[test]
fn test_patched_document_written() {
    let dir = tempfile::tempdir().unwrap();
    run(args(dir.path())).unwrap();

    let original: Value = serde_json::from_str(QUEST_CONFIG).unwrap();
    let patched: Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("patched.json")).unwrap()).unwrap();

    let daily = &patched["repeatableQuests"][0];
    let host_daily = &original["repeatableQuests"][0];
    assert_eq!(daily["rewardScaling"]["experience"], json!([200, 400]));
    assert_eq!(daily["types"], json!(["Completion"]));
    assert_eq!(daily["numQuests"], 4);
    assert_eq!(patched["repeatableQuests"][1]["numQuests"], 2);

    // Fractional daily timer rejects the whole reset timer group
    for index in 0..3 {
        assert_eq!(
            patched["repeatableQuests"][index]["resetTime"],
            original["repeatableQuests"][index]["resetTime"]
        );
    }

    assert_eq!(daily["rewardScaling"]["levels"], host_daily["rewardScaling"]["levels"]);
    assert_eq!(daily["rewardScaling"]["items"], host_daily["rewardScaling"]["items"]);
    assert_eq!(daily["rewardScaling"]["roubles"], host_daily["rewardScaling"]["roubles"]);
    assert_eq!(daily["locations"], host_daily["locations"]);
    assert_eq!(patched["redeemTime"], original["redeemTime"]);
}

#[test]
fn test_missing_quest_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let args = Args {
        config: None,
        quest_config: dir.path().join("absent.json"),
        output: Some(dir.path().join("patched.json")),
        verbose: false,
    };

    assert!(matches!(run(args), Err(CliError::Io { .. })));
    assert!(!dir.path().join("patched.json").exists());
}
