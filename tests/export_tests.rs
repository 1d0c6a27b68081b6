mod common;
use common::{rsp, setup_test_config, temp_out};
use std::fs;

#[test]
fn test_export_csv() {
    let cfg = setup_test_config("export_csv");
    let out = temp_out("export_csv", "csv");

    rsp()
        .args([
            "--config", &cfg, "export", "--format", "csv", "--file", &out, "--seed", "11",
            "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("day,employee,slot,kind"));
    assert!(content.contains("Mardi"));
    assert!(content.contains("Jesus"));
    assert!(content.contains("work"));
}

#[test]
fn test_export_json() {
    let cfg = setup_test_config("export_json");
    let out = temp_out("export_json", "json");

    rsp()
        .args([
            "--config", &cfg, "export", "--format", "json", "--file", &out, "--seed", "11",
            "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let records: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = records.as_array().expect("array of records");
    assert!(!rows.is_empty());
    assert!(content.contains("\"kind\": \"work\""));
}

#[test]
fn test_export_html() {
    let cfg = setup_test_config("export_html");
    let out = temp_out("export_html", "html");

    rsp()
        .args([
            "--config", &cfg, "export", "--format", "html", "--file", &out, "--seed", "11",
            "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported html");
    assert!(content.contains("<table>"));
    assert!(content.contains("<h2>Dimanche</h2>"));
}

#[test]
fn test_export_xlsx() {
    let cfg = setup_test_config("export_xlsx");
    let out = temp_out("export_xlsx", "xlsx");

    rsp()
        .args([
            "--config", &cfg, "export", "--format", "xlsx", "--file", &out, "--seed", "11",
            "--force",
        ])
        .assert()
        .success();

    let bytes = fs::read(&out).expect("read exported xlsx");
    assert!(!bytes.is_empty());
}

#[test]
fn test_export_pdf() {
    let cfg = setup_test_config("export_pdf");
    let out = temp_out("export_pdf", "pdf");

    rsp()
        .args([
            "--config", &cfg, "export", "--format", "pdf", "--file", &out, "--seed", "11",
            "--force",
        ])
        .assert()
        .success();

    let bytes = fs::read(&out).expect("read exported pdf");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_export_weekend_only_employee_has_no_weekday_rows() {
    let cfg = setup_test_config("export_weekend_only");
    let out = temp_out("export_weekend_only", "csv");

    rsp()
        .args([
            "--config", &cfg, "export", "--format", "csv", "--file", &out, "--seed", "3",
            "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    for line in content.lines().filter(|l| l.contains("Juliette")) {
        assert!(
            line.starts_with("Samedi") || line.starts_with("Dimanche"),
            "unexpected weekday row: {line}"
        );
    }
}
