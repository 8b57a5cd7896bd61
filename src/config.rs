use std::env;
use std::io::{self, IsTerminal};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub color: bool,
    pub show_timing: bool,
    pub show_initial: bool,
    pub progress_threshold: usize,
    pub report_format: ReportFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: true,
            show_timing: true,
            show_initial: true,
            progress_threshold: 1_000_000,
            report_format: ReportFormat::Text,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            color: io::stdout().is_terminal()
                && env::var_os("NO_COLOR").is_none()
                && flag("SORTER_COLOR", defaults.color),
            show_timing: flag("SORTER_SHOW_TIMING", defaults.show_timing),
            show_initial: flag("SORTER_SHOW_INITIAL", defaults.show_initial),
            progress_threshold: env::var("SORTER_PROGRESS_THRESHOLD")
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.progress_threshold),
            report_format: env::var("SORTER_REPORT_FORMAT")
                .map(|v| match v.trim().to_lowercase().as_str() {
                    "json" => ReportFormat::Json,
                    _ => ReportFormat::Text,
                })
                .unwrap_or(defaults.report_format),
        }
    }

    /// Plain output: no color, no progress bar. What tests want.
    pub fn plain() -> Self {
        Self {
            color: false,
            progress_threshold: 0,
            ..Self::default()
        }
    }
}

fn flag(name: &str, default: bool) -> bool {
    match env::var(name) {
        Ok(value) => parse_flag(&value).unwrap_or(default),
        Err(_) => default,
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
