//! Contract: configuration resolution order.
//!
//! CLI flags > `TREEPICK_*` variables > `--config` file > `./treepick.toml`
//! > user config > defaults.

use crate::common::*;

const NESTED_TREE: &str = r#"{ "label": "top", "folders": [{ "label": "inner" }] }"#;

/// CONTRACT: `./treepick.toml` maps field names for the normalizer.
#[test]
fn contract_working_directory_config_is_read() {
    let env = TestEnv::new();
    env.write_project_file("tree.json", NESTED_TREE);
    env.write_project_file("treepick.toml", "[tree]\nnode = \"label\"\nbranch = \"folders\"\n");

    let result = env.run(&["show", "tree.json", "--ascii"]);
    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result.stdout.contains("[v] [ ] top [0]"), "stdout:\n{}", result.stdout);
    assert!(result.stdout.contains("[>] [ ] inner [0.0]"), "stdout:\n{}", result.stdout);
}

/// CONTRACT: User config applies when the working directory has none.
#[test]
fn contract_user_config_is_fallback() {
    let env = TestEnv::new();
    env.write_project_file("tree.json", NESTED_TREE);
    let user_config = env.config_home.path().join("treepick/config.toml");
    std::fs::create_dir_all(user_config.parent().unwrap()).unwrap();
    std::fs::write(&user_config, "[tree]\nnode = \"label\"\nbranch = \"folders\"\n").unwrap();

    let result = env.run(&["show", "tree.json", "--ascii"]);
    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result.stdout.contains("inner [0.0]"), "stdout:\n{}", result.stdout);
}

/// CONTRACT: Environment variables override config files.
#[test]
fn contract_env_overrides_file() {
    let env = TestEnv::new();
    env.write_project_file("tree.json", NESTED_TREE);
    env.write_project_file("treepick.toml", "[tree]\nnode = \"label\"\nbranch = \"dirs\"\n");

    let result = env.run_with_env(
        &["show", "tree.json", "--ascii"],
        &[("TREEPICK_BRANCH_KEY", "folders"), ("TREEPICK_CHECK", "checked")],
    );
    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result.stdout.contains("[x] inner [0.0]"), "stdout:\n{}", result.stdout);
}

/// CONTRACT: An explicit `--config` wins over `./treepick.toml` and warns
/// about unknown keys on stderr.
#[test]
fn contract_explicit_config_warns_unknown_keys() {
    let env = TestEnv::new();
    env.write_project_file("tree.json", NESTED_TREE);
    env.write_project_file("treepick.toml", "[tree]\nnode = \"name\"\n");
    env.write_project_file(
        "custom.toml",
        "[tree]\nnode = \"label\"\nbrnch = \"folders\"\n",
    );

    let result = env.run(&["show", "tree.json", "--config", "custom.toml", "--ascii"]);
    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result.stdout.contains("top [0]"), "stdout:\n{}", result.stdout);
    assert!(
        result.stderr.contains("brnch") && result.stderr.contains("branch"),
        "unknown key warning with suggestion expected.\nstderr: {}",
        result.stderr
    );
}

/// CONTRACT: A malformed explicit config is an error, not a silent default.
#[test]
fn contract_invalid_explicit_config_fails() {
    let env = TestEnv::new();
    env.write_project_file("tree.json", NESTED_TREE);
    env.write_project_file("bad.toml", "[tree]\ncheck = 5\n");

    let result = env.run(&["show", "tree.json", "--config", "bad.toml"]);
    assert!(!result.success);
    assert!(result.stderr.contains("bad.toml"), "stderr:\n{}", result.stderr);
}
