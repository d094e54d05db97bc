use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::core::calendar::CalendarWindow;
use crate::utils::date;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    /// First day of the materialized calendar window.
    #[serde(default = "default_window_start")]
    pub window_start: NaiveDate,
    /// Last day of the materialized calendar window (inclusive).
    #[serde(default = "default_window_end")]
    pub window_end: NaiveDate,
    /// Fixed "today" marker, mainly for tests. None = current local date.
    #[serde(default)]
    pub today: Option<NaiveDate>,
    #[serde(default = "default_holidays")]
    pub holidays: Vec<NaiveDate>,
    /// Priority order for known tracks; unknown tracks sort after these.
    #[serde(default = "default_track_order")]
    pub track_order: Vec<String>,
    /// Scenario pattern that anchors a project's start date.
    #[serde(default = "default_kickoff_pattern")]
    pub kickoff_pattern: String,
}

fn default_window_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
}

fn default_window_end() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 5, 10).unwrap()
}

fn default_holidays() -> Vec<NaiveDate> {
    // Italian public holidays covered by the default window
    [
        "2025-01-01",
        "2025-04-21",
        "2025-04-25",
        "2025-05-01",
        "2025-06-02",
        "2025-08-15",
        "2025-11-01",
        "2025-12-25",
        "2025-12-26",
    ]
    .iter()
    .filter_map(|s| date::parse_date(s))
    .collect()
}

fn default_track_order() -> Vec<String> {
    ["PB1", "PB2", "PS", "Biella"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_kickoff_pattern() -> String {
    r"Setup\(OR\)|Setup\(Pretest\)".to_string()
}

impl Default for Config {
    fn default() -> Self {
        let db_path = Self::database_file();
        Self {
            database: db_path.to_string_lossy().to_string(),
            window_start: default_window_start(),
            window_end: default_window_end(),
            today: None,
            holidays: default_holidays(),
            track_order: default_track_order(),
            kickoff_pattern: default_kickoff_pattern(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("ganttboard")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".ganttboard")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("ganttboard.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("ganttboard.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_name {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config).unwrap();
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(())
    }

    /// The calendar window the grids project onto. The "today" marker and
    /// the holiday set travel with it so the core never reads globals.
    pub fn window(&self) -> CalendarWindow {
        CalendarWindow::new(
            self.window_start,
            self.window_end,
            self.today.unwrap_or_else(date::today),
            self.holidays.iter().copied().collect(),
        )
    }
}
