use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::fs;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            let path = Config::config_file();
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                println!("{}", content);
            } else {
                warning(format!(
                    "No configuration file at {} (using defaults)",
                    path.display()
                ));
                let yaml = serde_yaml::to_string(cfg).map_err(|_| AppError::ConfigSave)?;
                println!("{}", yaml);
            }
            return Ok(());
        }

        if *check {
            if cfg.window_end < cfg.window_start {
                return Err(AppError::Config(format!(
                    "window_end ({}) precedes window_start ({})",
                    cfg.window_end, cfg.window_start
                )));
            }
            if cfg.track_order.is_empty() {
                warning("track_order is empty: every track will sort as unknown");
            }
            success("Configuration looks valid");
            return Ok(());
        }

        warning("Nothing to do: pass --print or --check");
    }
    Ok(())
}
