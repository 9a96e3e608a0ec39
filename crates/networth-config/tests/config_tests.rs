use networth_config::{Config, ConfigError, ConfigManager};
use tempfile::tempdir;

#[test]
fn default_config_matches_dashboard_defaults() {
    let cfg = Config::default();

    assert_eq!(cfg.locale, "es-ES");
    assert_eq!(cfg.currency, "EUR");
    assert_eq!(cfg.horizon_years, 15);
    assert_eq!(cfg.goal_net_worth, 100_000.0);
    assert_eq!(cfg.starting_balance, 7500.0);
}

#[test]
fn load_without_file_returns_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    assert!(!manager.config_path().exists());
    assert_eq!(manager.load().expect("load"), Config::default());
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"), dir.path().join("backups"));

    let mut cfg = Config::default();
    cfg.currency = "USD".to_string();
    cfg.locale = "en-US".to_string();
    cfg.horizon_years = 30;

    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded, cfg);
    assert!(!dir.path().join("config.json.tmp").exists());
}

#[test]
fn backups_round_trip_through_restore() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    let mut cfg = Config::default();
    cfg.goal_net_worth = 250_000.0;
    let name = manager.backup(&cfg, Some("Early retirement")).expect("backup");

    assert!(name.starts_with("config_"));
    assert!(name.ends_with("_early-retirement.json"));
    assert_eq!(manager.list_backups().expect("list"), vec![name.clone()]);
    assert_eq!(manager.restore(&name).expect("restore").goal_net_worth, 250_000.0);
    assert!(manager.restore("config_missing.json").is_err());
}

#[test]
fn restore_makes_backup_the_active_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    let mut cfg = Config::default();
    cfg.horizon_years = 3;
    manager.save(&cfg).expect("save");
    let name = manager.backup(&cfg, Some("three")).expect("backup");

    cfg.horizon_years = 9;
    manager.save(&cfg).expect("save");
    assert_eq!(manager.load().expect("load").horizon_years, 9);

    manager.restore(&name).expect("restore");
    assert_eq!(manager.load().expect("load").horizon_years, 3);
}

#[test]
fn restore_rejects_names_outside_backups_dir() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");
    manager.save(&Config::default()).expect("save");

    for name in ["../config.json", "backups/../../config/config.json", ".."] {
        let err = manager.restore(name).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBackupName(_)), "{name}");
    }
}

#[test]
fn backups_in_the_same_second_keep_distinct_names() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    let mut names = Vec::new();
    for goal in [1.0, 2.0, 3.0] {
        let mut cfg = Config::default();
        cfg.goal_net_worth = goal;
        names.push(manager.backup(&cfg, Some("same")).expect("backup"));
    }

    let mut unique = names.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), 3);
    assert_eq!(manager.list_backups().expect("list").len(), 3);
}
