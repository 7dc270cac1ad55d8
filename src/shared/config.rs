//! Application configuration. Catalog location, registration window, display zone.

use crate::adapters::policy::mock_cancel::DEFAULT_NON_CANCELLABLE;
use crate::domain::{DisplayZone, DomainError, RegistrationWindow};
use chrono::{DateTime, FixedOffset, Utc};
use serde::Deserialize;

pub const DEFAULT_REGISTRATION_OPEN: &str = "2025-12-01T08:00:00+07:00";
pub const DEFAULT_REGISTRATION_CLOSE: &str = "2025-12-31T23:59:59+07:00";
pub const DEFAULT_DISPLAY_OFFSET: &str = "+07:00";
pub const DEFAULT_DISPLAY_ZONE_LABEL: &str = "Asia/Bangkok";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Catalog location: http(s) URL or file path. Bundled sample when unset. Read from WORKSHOP_CATALOG_SOURCE.
    #[serde(default)]
    pub catalog_source: Option<String>,

    /// RFC 3339 instant the registration window opens. Read from WORKSHOP_REGISTRATION_OPEN.
    #[serde(default)]
    pub registration_open: Option<String>,

    /// RFC 3339 instant the registration window closes (inclusive). Read from WORKSHOP_REGISTRATION_CLOSE.
    #[serde(default)]
    pub registration_close: Option<String>,

    /// UTC offset for every rendered timestamp, e.g. "+07:00". Read from WORKSHOP_DISPLAY_OFFSET.
    #[serde(default)]
    pub display_offset: Option<String>,

    /// Name printed next to rendered timestamps. Read from WORKSHOP_DISPLAY_ZONE_LABEL.
    #[serde(default)]
    pub display_zone_label: Option<String>,

    /// Comma-separated workshop ids the mock cancel endpoint refuses. Read from WORKSHOP_NON_CANCELLABLE.
    #[serde(default)]
    pub non_cancellable: Option<String>,

    /// Fixed RFC 3339 "now" instead of the wall clock. Read from WORKSHOP_NOW.
    #[serde(default)]
    pub now_override: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("WORKSHOP"));
        if let Ok(path) = std::env::var("WORKSHOP_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        let mut cfg: Self = c.build()?.try_deserialize()?;
        // WORKSHOP_NOW is shorter than the field name; read it directly.
        if let Ok(s) = std::env::var("WORKSHOP_NOW") {
            cfg.now_override = Some(s);
        }
        Ok(cfg)
    }

    pub fn catalog_source(&self) -> Option<&str> {
        self.catalog_source.as_deref()
    }

    /// Registration window from config, defaulting to December 2025 (Asia/Bangkok).
    pub fn registration_window(&self) -> Result<RegistrationWindow, DomainError> {
        let open = parse_instant(
            "registration_open",
            self.registration_open
                .as_deref()
                .unwrap_or(DEFAULT_REGISTRATION_OPEN),
        )?;
        let close = parse_instant(
            "registration_close",
            self.registration_close
                .as_deref()
                .unwrap_or(DEFAULT_REGISTRATION_CLOSE),
        )?;
        RegistrationWindow::new(open, close).ok_or_else(|| {
            DomainError::Config(format!(
                "registration window opens ({}) after it closes ({})",
                open, close
            ))
        })
    }

    pub fn display_zone(&self) -> Result<DisplayZone, DomainError> {
        let raw = self
            .display_offset
            .as_deref()
            .unwrap_or(DEFAULT_DISPLAY_OFFSET);
        let offset: FixedOffset = raw
            .parse()
            .map_err(|e| DomainError::Config(format!("display_offset {:?}: {}", raw, e)))?;
        let label = self
            .display_zone_label
            .clone()
            .unwrap_or_else(|| DEFAULT_DISPLAY_ZONE_LABEL.to_string());
        Ok(DisplayZone::new(offset, label))
    }

    /// Workshop ids the mock cancel endpoint refuses. Defaults to `ws2`.
    pub fn non_cancellable_or_default(&self) -> Vec<String> {
        match self.non_cancellable.as_deref() {
            Some(list) => list
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            None => vec![DEFAULT_NON_CANCELLABLE.to_string()],
        }
    }

    /// Pinned clock, if configured.
    pub fn now_override(&self) -> Result<Option<DateTime<Utc>>, DomainError> {
        self.now_override
            .as_deref()
            .map(|s| parse_instant("now_override", s))
            .transpose()
    }
}

fn parse_instant(field: &str, raw: &str) -> Result<DateTime<Utc>, DomainError> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| DomainError::Config(format!("{} {:?}: {}", field, raw, e)))
}
