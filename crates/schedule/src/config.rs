//! # Schedule Configuration Module
//!
//! This module handles loading configuration for schedule derivation. Values
//! come from environment variables with defaults where appropriate.
//!
//! ## Environment Variables
//!
//! - `MEETSYNC_SLOT_MINUTES`: grid granularity in minutes (default: 10)
//! - `MEETSYNC_TIMEZONE`: IANA timezone for display formatting (default: "UTC")
//!
//! The timezone affects display formatting and day-separator placement only;
//! all occupancy bucketing operates on absolute instants.

use chrono::Duration;
use chrono_tz::Tz;
use eyre::{Result, WrapErr};
use std::env;

/// Configuration for schedule derivation and rendering.
///
/// Passed explicitly to the derivation functions; nothing in this crate reads
/// ambient application context.
#[derive(Debug, Clone)]
pub struct ScheduleConfig {
    /// Grid slot granularity in minutes.
    pub slot_minutes: i64,

    /// Organization timezone used to format slot labels and place
    /// day-separator rows.
    pub timezone: Tz,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            slot_minutes: 10,
            timezone: Tz::UTC,
        }
    }
}

impl ScheduleConfig {
    /// Creates a ScheduleConfig from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `MEETSYNC_SLOT_MINUTES` is not a positive integer
    /// or `MEETSYNC_TIMEZONE` is not a valid IANA timezone identifier.
    pub fn from_env() -> Result<Self> {
        let slot_minutes = env::var("MEETSYNC_SLOT_MINUTES")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<i64>()
            .wrap_err("Invalid MEETSYNC_SLOT_MINUTES value")?;

        if slot_minutes < 1 {
            eyre::bail!("MEETSYNC_SLOT_MINUTES must be at least 1");
        }

        let timezone = env::var("MEETSYNC_TIMEZONE")
            .unwrap_or_else(|_| "UTC".to_string())
            .parse::<Tz>()
            .map_err(|e| eyre::eyre!("Invalid MEETSYNC_TIMEZONE value: {e}"))?;

        Ok(Self {
            slot_minutes,
            timezone,
        })
    }

    /// The slot step as a chrono duration.
    pub fn slot_step(&self) -> Duration {
        Duration::minutes(self.slot_minutes)
    }
}
