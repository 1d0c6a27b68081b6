#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rsp() -> Command {
    cargo_bin_cmd!("rshiftplanner")
}

/// Roster used by the CLI tests: four employees over the full six-day
/// week, including the weekend-only and the early-close cases.
fn test_config_yaml() -> &'static str {
    r#"strategy: balanced
html_file: schedule.html
pdf_file: shift_schedule.pdf
employees:
- name: Jesus
  color: '#FF5733'
  weekly_hours: 39
- name: Sarah
  color: '#33FF57'
  weekly_hours: 39
  day_cutoff:
    day: Mercredi
    until: 17h00
- name: Sasa
  color: '#3375FF'
  weekly_hours: 25
- name: Juliette
  color: '#FF4081'
  weekly_hours: 15
  weekend_only: true
week:
- name: Mardi
  open: 8h00
  close: 20h30
- name: Mercredi
  open: 8h00
  close: 20h30
- name: Jeudi
  open: 8h00
  close: 20h30
- name: Vendredi
  open: 8h00
  close: 20h30
- name: Samedi
  open: 7h30
  close: 20h30
- name: Dimanche
  open: 8h00
  close: 14h00
"#
}

/// Write a unique roster config inside the system temp dir and return its path
pub fn setup_test_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rshiftplanner.conf", name));
    let cfg_path = path.to_string_lossy().to_string();
    fs::remove_file(&cfg_path).ok();
    fs::write(&cfg_path, test_config_yaml()).expect("write test config");
    cfg_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}
