mod common;
use common::{rsp, setup_test_config, temp_out};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_generate_writes_html_and_pdf() {
    let cfg = setup_test_config("generate_writes_html_and_pdf");
    let html = temp_out("generate_writes_html_and_pdf", "html");
    let pdf = temp_out("generate_writes_html_and_pdf", "pdf");

    rsp()
        .args([
            "--config", &cfg, "generate", "--seed", "7", "--html", &html, "--pdf", &pdf, "--force",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Using seed 7"));

    let doc = fs::read_to_string(&html).expect("read generated html");
    assert!(doc.contains("Weekly Shift Schedule"));
    assert!(doc.contains("<h2>Mardi</h2>"));
    assert!(doc.contains("<th>Jesus</th>"));
    assert!(doc.contains("#FF5733"));

    let pdf_bytes = fs::read(&pdf).expect("read generated pdf");
    assert!(pdf_bytes.starts_with(b"%PDF"));
}

#[test]
fn test_generate_same_seed_is_reproducible() {
    let cfg = setup_test_config("generate_same_seed");
    let html_a = temp_out("generate_same_seed_a", "html");
    let html_b = temp_out("generate_same_seed_b", "html");
    let pdf_a = temp_out("generate_same_seed_a", "pdf");
    let pdf_b = temp_out("generate_same_seed_b", "pdf");

    rsp()
        .args([
            "--config", &cfg, "generate", "--seed", "123", "--html", &html_a, "--pdf", &pdf_a,
            "--force",
        ])
        .assert()
        .success();

    rsp()
        .args([
            "--config", &cfg, "generate", "--seed", "123", "--html", &html_b, "--pdf", &pdf_b,
            "--force",
        ])
        .assert()
        .success();

    let a = fs::read_to_string(&html_a).expect("read first html");
    let b = fs::read_to_string(&html_b).expect("read second html");
    assert_eq!(a, b);
}

#[test]
fn test_generate_respects_strategy_flag() {
    let cfg = setup_test_config("generate_strategy_flag");
    let html = temp_out("generate_strategy_flag", "html");
    let pdf = temp_out("generate_strategy_flag", "pdf");

    rsp()
        .args([
            "--config",
            &cfg,
            "generate",
            "--seed",
            "5",
            "--strategy",
            "coin-flip",
            "--html",
            &html,
            "--pdf",
            &pdf,
            "--force",
        ])
        .assert()
        .success();

    assert!(fs::metadata(&html).is_ok());
    assert!(fs::metadata(&pdf).is_ok());
}

#[test]
fn test_generate_refuses_overwrite_without_force() {
    let cfg = setup_test_config("generate_no_overwrite");
    let html = temp_out("generate_no_overwrite", "html");
    let pdf = temp_out("generate_no_overwrite", "pdf");

    fs::write(&html, "existing document").expect("seed existing file");

    rsp()
        .args([
            "--config", &cfg, "generate", "--seed", "9", "--html", &html, "--pdf", &pdf,
        ])
        .write_stdin("n\n")
        .assert()
        .failure();

    let untouched = fs::read_to_string(&html).expect("read untouched html");
    assert_eq!(untouched, "existing document");
}
