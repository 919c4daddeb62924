use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_config_path_honors_home_override() {
    let home = tempfile::tempdir().unwrap();

    cargo_bin_cmd!("slidephant")
        .env("SLIDEPHANT_HOME", home.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(home.path().to_str().unwrap()))
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_init_writes_template() {
    let home = tempfile::tempdir().unwrap();

    cargo_bin_cmd!("slidephant")
        .env("SLIDEPHANT_HOME", home.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config at"));

    let contents = std::fs::read_to_string(home.path().join("config.toml")).unwrap();
    assert!(contents.contains("[theme]"));
}

#[test]
fn test_config_theme_sets_one_color() {
    let home = tempfile::tempdir().unwrap();

    cargo_bin_cmd!("slidephant")
        .env("SLIDEPHANT_HOME", home.path())
        .args(["config", "theme", "heading", "magenta"])
        .assert()
        .success()
        .stdout(predicate::str::contains("theme.heading"));

    let contents = std::fs::read_to_string(home.path().join("config.toml")).unwrap();
    assert!(contents.contains("heading = \"magenta\""));
    // The rest of the template, comments included, is still there.
    assert!(contents.contains("code = \"yellow\""));
    assert!(contents.contains('#'));
}

#[test]
fn test_config_theme_rejects_unknown_field() {
    let home = tempfile::tempdir().unwrap();

    cargo_bin_cmd!("slidephant")
        .env("SLIDEPHANT_HOME", home.path())
        .args(["config", "theme", "background", "red"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown theme field"));
}
