use crate::core::assigner::Strategy;
use crate::models::employee::{DayCutoff, Employee};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Opening hours of one day of the week. Slot labels are generated from
/// these at 30-minute steps, inclusive of both endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayHours {
    pub name: String,
    pub open: String,
    pub close: String,
}

impl DayHours {
    pub fn new(name: &str, open: &str, close: &str) -> Self {
        Self {
            name: name.to_string(),
            open: open.to_string(),
            close: close.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_strategy")]
    pub strategy: Strategy,
    #[serde(default = "default_html_file")]
    pub html_file: String,
    #[serde(default = "default_pdf_file")]
    pub pdf_file: String,
    pub employees: Vec<Employee>,
    pub week: Vec<DayHours>,
}

fn default_strategy() -> Strategy {
    Strategy::Balanced
}
fn default_html_file() -> String {
    "schedule.html".to_string()
}
fn default_pdf_file() -> String {
    "shift_schedule.pdf".to_string()
}

impl Default for Config {
    /// The built-in roster: seven employees over a six-day week
    /// (Tuesday through Sunday, French day names).
    fn default() -> Self {
        let mut sarah = Employee::new("Sarah", "#33FF57", 39);
        sarah.day_cutoff = Some(DayCutoff {
            day: "Mercredi".to_string(),
            until: "17h00".to_string(),
        });

        let mut juliette = Employee::new("Juliette", "#FF4081", 15);
        juliette.weekend_only = true;

        Self {
            strategy: default_strategy(),
            html_file: default_html_file(),
            pdf_file: default_pdf_file(),
            employees: vec![
                Employee::new("Jesus", "#FF5733", 39),
                sarah,
                Employee::new("Sasa", "#3375FF", 25),
                Employee::new("Anna", "#F57F17", 25),
                Employee::new("Yael", "#9C27B0", 35),
                Employee::new("Nae", "#FFEB3B", 35),
                juliette,
            ],
            week: vec![
                DayHours::new("Mardi", "8h00", "20h30"),
                DayHours::new("Mercredi", "8h00", "20h30"),
                DayHours::new("Jeudi", "8h00", "20h30"),
                DayHours::new("Vendredi", "8h00", "20h30"),
                DayHours::new("Samedi", "7h30", "20h30"),
                DayHours::new("Dimanche", "8h00", "14h00"),
            ],
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rshiftplanner")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rshiftplanner")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rshiftplanner.conf")
    }

    /// Load configuration from the standard path, or return the built-in
    /// roster if no file exists yet.
    pub fn load() -> Self {
        Self::load_from(&Self::config_file())
    }

    /// Load configuration from an explicit path (used by `--config`).
    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            let content = fs::read_to_string(path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    /// Initialize the configuration directory and write the default roster.
    ///
    /// `custom_path` overrides the target file; in test mode nothing is
    /// written to the standard location.
    pub fn init_all(custom_path: Option<&str>, is_test: bool) -> io::Result<PathBuf> {
        let target = match custom_path {
            Some(p) => {
                let path = Path::new(p);
                if path.is_absolute() {
                    path.to_path_buf()
                } else {
                    Self::config_dir().join(path)
                }
            }
            None => Self::config_file(),
        };

        if custom_path.is_none() {
            fs::create_dir_all(Self::config_dir())?;
        } else if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }

        if !is_test || custom_path.is_some() {
            let yaml = serde_yaml::to_string(&Config::default())
                .map_err(|e| io::Error::other(e.to_string()))?;
            let mut file = fs::File::create(&target)?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", target);
        }

        Ok(target)
    }
}
