//! Scan-window configuration.
//!
//! The engine's contract does not hard-code a granularity or day window;
//! hosts pass a [`ScanConfig`] per call. The defaults match the group
//! "common free slots" feature: hourly samples over 08:00-22:00.

use crate::models::{ClockTime, InvalidBlockError};
use serde::Deserialize;
use std::env;

const DEFAULT_GRANULARITY_MINUTES: u16 = 60;
const DEFAULT_DAY_START: ClockTime = ClockTime(8 * 60);
const DEFAULT_DAY_END: ClockTime = ClockTime(22 * 60);

/// Sampling configuration for free-slot derivation and the comparison grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Sampling step in minutes
    pub granularity_minutes: u16,
    /// First sampled instant of each day (inclusive)
    pub day_start: ClockTime,
    /// End of the scanned window (exclusive)
    pub day_end: ClockTime,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            granularity_minutes: DEFAULT_GRANULARITY_MINUTES,
            day_start: DEFAULT_DAY_START,
            day_end: DEFAULT_DAY_END,
        }
    }
}

/// Raw TOML shape; every field optional, falling back to the defaults.
#[derive(Debug, Deserialize)]
struct ScanConfigInput {
    granularity_minutes: Option<u16>,
    day_start: Option<String>,
    day_end: Option<String>,
}

impl ScanConfig {
    /// Create a validated configuration from raw parts.
    pub fn new(
        granularity_minutes: u16,
        day_start: &str,
        day_end: &str,
    ) -> Result<Self, String> {
        let config = Self {
            granularity_minutes,
            day_start: parse_clock(day_start)?,
            day_end: parse_clock(day_end)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Create a configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `FREETIME_GRANULARITY_MINUTES` (optional, default: 60)
    /// - `FREETIME_DAY_START` (optional, default: "08:00"): HH:MM
    /// - `FREETIME_DAY_END` (optional, default: "22:00"): HH:MM
    ///
    /// # Errors
    /// Returns an error if a variable is set but unparseable, or the
    /// resulting window is invalid.
    pub fn from_env() -> Result<Self, String> {
        let defaults = Self::default();

        let granularity_minutes = match env::var("FREETIME_GRANULARITY_MINUTES") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| "FREETIME_GRANULARITY_MINUTES must be a number of minutes".to_string())?,
            Err(_) => defaults.granularity_minutes,
        };
        let day_start = match env::var("FREETIME_DAY_START") {
            Ok(raw) => parse_clock(&raw)?,
            Err(_) => defaults.day_start,
        };
        let day_end = match env::var("FREETIME_DAY_END") {
            Ok(raw) => parse_clock(&raw)?,
            Err(_) => defaults.day_end,
        };

        let config = Self {
            granularity_minutes,
            day_start,
            day_end,
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse a configuration from a TOML document.
    ///
    /// ```toml
    /// granularity_minutes = 30
    /// day_start = "08:00"
    /// day_end = "20:00"
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self, String> {
        let input: ScanConfigInput =
            toml::from_str(content).map_err(|e| format!("Invalid scan config TOML: {}", e))?;
        let defaults = Self::default();

        let config = Self {
            granularity_minutes: input
                .granularity_minutes
                .unwrap_or(defaults.granularity_minutes),
            day_start: match input.day_start {
                Some(raw) => parse_clock(&raw)?,
                None => defaults.day_start,
            },
            day_end: match input.day_end {
                Some(raw) => parse_clock(&raw)?,
                None => defaults.day_end,
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML configuration file.
    pub fn from_toml_file(path: impl AsRef<std::path::Path>) -> Result<Self, String> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read scan config file: {}", e))?;
        Self::from_toml_str(&content)
    }

    fn validate(&self) -> Result<(), String> {
        if self.granularity_minutes == 0 {
            return Err("granularity must be at least one minute".to_string());
        }
        if self.day_start >= self.day_end {
            return Err(format!(
                "day window must not be empty ({}-{})",
                self.day_start, self.day_end
            ));
        }
        Ok(())
    }
}

fn parse_clock(raw: &str) -> Result<ClockTime, String> {
    ClockTime::parse(raw).map_err(|e: InvalidBlockError| e.to_string())
}
