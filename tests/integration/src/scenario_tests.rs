//! End-to-end reconciliation scenarios over realistic config files
//!
//! Each test copies a fixture from `test-fixtures/configs` into a sandbox
//! and drives the engine through one or more runs.

use pretty_assertions::assert_eq;
use recon_content::{Format, Value};
use recon_core::{ErrorKind, FailureReport, ReconcileRequest, run};
use recon_test_utils::{TestConfigDir, mapping};
use serde_json::json;

const SERVICE_YAML: &str = include_str!("../../../test-fixtures/configs/service.yaml");
const SERVICE_JSON: &str = include_str!("../../../test-fixtures/configs/service.json");
const BROKEN_JSON: &str = include_str!("../../../test-fixtures/configs/broken.json");
const BROKEN_YAML: &str = include_str!("../../../test-fixtures/configs/broken.yaml");

fn parse(format: Format, text: &str) -> Value {
    Value::Object(format.parse(text).unwrap())
}

#[test]
fn enabling_tls_in_a_hand_written_yaml_service() {
    // Aliases expand in place; `<<` stays an ordinary key
    let dir = TestConfigDir::new();
    let path = dir.write("service.yaml", SERVICE_YAML);

    let request = ReconcileRequest::present(
        &*path,
        mapping(json!({
            "server": {"tls": {"enabled": true, "cert": "/etc/svc/tls.pem"}}
        })),
    );
    let outcome = run(&request).unwrap();

    assert!(outcome.changed);
    assert_eq!(outcome.format, Format::Yaml);

    let written = dir.read("service.yaml");
    assert!(!written.contains('#'), "comments are not preserved");
    assert_eq!(
        parse(Format::Yaml, &written),
        json!({
            "defaults": {"timeout": 30, "retries": 3},
            "server": {
                "host": "0.0.0.0",
                "port": 8080,
                "tls": {"enabled": true, "cert": "/etc/svc/tls.pem"}
            },
            "upstreams": [
                {"name": "primary", "url": "http://10.0.0.1"},
                {"name": "secondary", "url": "http://10.0.0.2"}
            ],
            "client": {
                "<<": {"timeout": 30, "retries": 3},
                "user_agent": "svc/1.0"
            }
        })
    );

    let again = run(&request).unwrap();
    assert!(!again.changed);
    dir.assert_content("service.yaml", &written);
}

#[test]
fn dropping_features_from_a_json_service() {
    let dir = TestConfigDir::new();
    let path = dir.write("service.json", SERVICE_JSON);

    let request = ReconcileRequest::absent(
        &*path,
        mapping(json!({
            "features": null,
            "server": {"tls": null}
        })),
    );
    let outcome = run(&request).unwrap();

    assert!(outcome.changed);
    assert_eq!(outcome.format, Format::Json);
    assert_eq!(
        parse(Format::Json, &dir.read("service.json")),
        json!({
            "log_level": "info",
            "server": {"host": "0.0.0.0", "port": 8080}
        })
    );

    assert!(!run(&request).unwrap().changed);
}

#[test]
fn canonical_json_layout_is_stable() {
    let dir = TestConfigDir::new();
    let path = dir.write("service.json", SERVICE_JSON);

    let outcome = run(&ReconcileRequest::present(
        &*path,
        mapping(json!({"log_level": "debug"})),
    ))
    .unwrap();

    assert!(outcome.changed);
    dir.assert_content(
        "service.json",
        r#"{
  "features": [
    "metrics",
    "tracing"
  ],
  "log_level": "debug",
  "server": {
    "host": "0.0.0.0",
    "port": 8080,
    "tls": {
      "enabled": false
    }
  }
}
"#,
    );
}

#[test]
fn broken_files_are_reported_and_left_alone() {
    let dir = TestConfigDir::new();
    let cases = [
        ("broken.json", BROKEN_JSON, "JSON"),
        ("broken.yaml", BROKEN_YAML, "YAML"),
    ];

    for (name, content, format_name) in cases {
        let path = dir.write(name, content);
        let error = run(
            &ReconcileRequest::present(&*path, mapping(json!({"a": 1}))).with_backup(true),
        )
        .unwrap_err();

        let report = FailureReport::from(&error);
        assert!(report.failed);
        assert_eq!(report.kind, ErrorKind::ParseError);
        assert!(report.msg.contains(format_name), "{}", report.msg);
        assert!(report.msg.contains(name), "{}", report.msg);

        dir.assert_content(name, content);
        assert!(dir.backups(name).is_empty());
    }
}

#[test]
fn full_lifecycle_keeps_a_backup_of_every_overwrite() {
    let dir = TestConfigDir::new();
    let path = dir.path("app/settings.yaml");

    // Bootstrap: nothing to back up yet
    let created = run(&ReconcileRequest::present(&*path, mapping(json!({"name": "app"})))
        .with_format_hint(Some(Format::Yaml))
        .with_backup(true))
    .unwrap();
    assert!(created.changed);
    assert_eq!(created.backup_file, None);
    dir.assert_content("app/settings.yaml", "name: app\n");

    let grown = run(&ReconcileRequest::present(
        &*path,
        mapping(json!({"limits": {"cpu": 2, "memory": "high"}})),
    )
    .with_backup(true))
    .unwrap();
    assert!(grown.changed);
    assert!(grown.backup_file.is_some());

    let trimmed = run(&ReconcileRequest::absent(
        &*path,
        mapping(json!({"limits": {"memory": null}})),
    )
    .with_backup(true))
    .unwrap();
    assert!(trimmed.changed);
    dir.assert_content("app/settings.yaml", "limits:\n  cpu: 2\nname: app\n");

    let cleared = run(&ReconcileRequest::empty(&*path).with_backup(true)).unwrap();
    assert!(cleared.changed);
    dir.assert_content("app/settings.yaml", "{}\n");

    let unchanged = run(&ReconcileRequest::empty(&*path).with_backup(true)).unwrap();
    assert!(!unchanged.changed);
    assert_eq!(unchanged.backup_file, None);

    let backups = dir.backups("app/settings.yaml");
    assert_eq!(backups.len(), 3);
    let mut contents: Vec<String> = backups
        .iter()
        .map(|b| std::fs::read_to_string(b).unwrap())
        .collect();
    contents.sort();
    assert_eq!(
        contents,
        vec![
            "limits:\n  cpu: 2\n  memory: high\nname: app\n".to_string(),
            "limits:\n  cpu: 2\nname: app\n".to_string(),
            "name: app\n".to_string(),
        ]
    );
}

#[test]
fn dry_run_reports_the_change_without_writing() {
    let dir = TestConfigDir::new();
    let path = dir.write("service.yaml", SERVICE_YAML);

    let outcome = run(&ReconcileRequest::present(
        &*path,
        mapping(json!({"server": {"port": 9090}})),
    )
    .with_dry_run(true)
    .with_backup(true)
    .with_diff(true))
    .unwrap();

    assert!(outcome.changed);
    assert!(outcome.dry_run);
    assert_eq!(outcome.backup_file, None);
    let diff = outcome.diff.unwrap();
    assert!(diff.contains("-  port: 8080"), "{diff}");
    assert!(diff.contains("+  port: 9090"), "{diff}");

    dir.assert_content("service.yaml", SERVICE_YAML);
    assert!(dir.backups("service.yaml").is_empty());
}
