//! Contract: `--json` writes NDJSON events to stdout and nothing else.

use crate::common::*;

/// CONTRACT: Every stdout line in `--json` mode is a JSON object with an
/// `event` field, even with debug logging on.
#[test]
fn contract_json_stdout_is_pure_ndjson() {
    let env = TestEnv::new();
    env.write_project_file("tree.json", PICKER_TREE);
    env.write_project_file("treepick.toml", PICKER_CONFIG);

    let result = env.run(&[
        "apply",
        "tree.json",
        "--op",
        "change:branch:0.2",
        "--op",
        "unfold:0.1.0",
        "--tree",
        "--json",
        "-vv",
    ]);
    assert!(result.success, "stderr: {}", result.stderr);

    let events = result.events();
    assert!(!events.is_empty());
    for event in &events {
        assert!(event["event"].is_string(), "event without kind: {event}");
    }
    assert!(
        result.stderr.contains("commit"),
        "debug logs should go to stderr.\nstderr: {}",
        result.stderr
    );
}

/// CONTRACT: The tree event carries the canonical tree in camelCase.
#[test]
fn contract_show_json_tree_shape() {
    let env = TestEnv::new();
    env.write_project_file("treepick.toml", PICKER_CONFIG);

    let result = env.run_with_stdin(&["show", "-", "--json"], PICKER_TREE);
    assert!(result.success, "stderr: {}", result.stderr);

    let trees = result.events_of("tree");
    assert_eq!(trees.len(), 1);
    let tree = &trees[0]["tree"];
    assert_eq!(tree["node"]["name"], "root");
    assert_eq!(tree["node"]["path"], "/root");
    assert_eq!(tree["node"]["level"], "0");
    assert_eq!(tree["node"]["canOpen"], true);
    assert_eq!(tree["node"]["check"], -1);
    assert_eq!(tree["node"]["status"], "filled");
    assert_eq!(tree["branches"][0]["branches"][2]["node"]["path"], "/root/subroot-1/empty 3");
    assert_eq!(tree["leafs"][1]["path"], "/root/b.js");
    assert_eq!(trees[0]["id"], "picker");
}

/// CONTRACT: `show --raw` exports the configured input shape.
#[test]
fn contract_raw_export_uses_configured_keys() {
    let env = TestEnv::new();
    env.write_project_file("tree.json", PICKER_TREE);
    env.write_project_file("treepick.toml", PICKER_CONFIG);

    let result = env.run(&["show", "tree.json", "--raw"]);
    assert!(result.success, "stderr: {}", result.stderr);

    let raw: serde_json::Value = serde_json::from_str(&result.stdout).unwrap();
    assert_eq!(raw["sourceDir"], "root");
    assert_eq!(raw["dirs"][1]["sourceDir"], "subroot-2");
    assert_eq!(raw["dirs"][1]["dirs"][0]["sourceDir"], "empty 1");
    assert_eq!(raw["files"][2], "c.js");
}

/// CONTRACT: `request --json` prints the request the `[fetch]` section builds.
#[test]
fn contract_request_json() {
    let env = TestEnv::new();
    env.write_project_file(
        "treepick.toml",
        r#"[fetch]
method = "post"
url = "http://localhost:1234/list"
path_as = "dir"

[fetch.headers]
accept = "application/json"
"#,
    );

    let result = env.run(&["request", "/root/subroot-1", "--json"]);
    assert!(result.success, "stderr: {}", result.stderr);

    let events = result.events();
    assert_eq!(events.len(), 1);
    let request = &events[0];
    assert_eq!(request["method"], "POST");
    assert_eq!(request["url"], "http://localhost:1234/list");
    assert_eq!(request["data"]["dir"], "/root/subroot-1");
    assert_eq!(request["headers"]["accept"], "application/json");
    assert!(request["params"].as_object().unwrap().is_empty());
}
