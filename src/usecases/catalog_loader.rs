//! Catalog loader. One fetch from the catalog source, decoded and validated into workshops.
//!
//! The payload is untrusted: records must match the strict `Workshop` shape and every
//! timestamp present must parse, otherwise the whole load fails.

use crate::domain::{LoadError, Workshop, WorkshopRecord};
use crate::ports::CatalogSource;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Minute-precision shapes with an explicit offset (RFC 3339 needs seconds).
const OFFSET_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M%:z", "%Y-%m-%dT%H:%M%z"];

/// Minute-precision UTC shape.
const UTC_MINUTE_FORMAT: &str = "%Y-%m-%dT%H:%MZ";

/// Local date-time shapes accepted without an offset. Interpreted in the display zone.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

pub struct CatalogLoader {
    source: Arc<dyn CatalogSource>,
    local_offset: FixedOffset,
}

impl CatalogLoader {
    /// # Arguments
    /// * `source` - Catalog source (HTTP, file, bundled sample)
    /// * `local_offset` - Offset applied to timestamps that carry none
    pub fn new(source: Arc<dyn CatalogSource>, local_offset: FixedOffset) -> Self {
        Self {
            source,
            local_offset,
        }
    }

    /// Fetch and parse the catalog. No retry, no partial result.
    pub async fn load(&self) -> Result<Vec<Workshop>, LoadError> {
        info!(source = %self.source.describe(), "loading workshops");
        let body = self.source.fetch().await?;
        let workshops = parse_catalog(&body, self.local_offset)?;
        info!(workshops = workshops.len(), "catalog loaded");
        Ok(workshops)
    }
}

/// Decode a catalog body into workshops.
pub fn parse_catalog(body: &str, local_offset: FixedOffset) -> Result<Vec<Workshop>, LoadError> {
    let records: Vec<WorkshopRecord> =
        serde_json::from_str(body).map_err(|e| LoadError::InvalidPayload(e.to_string()))?;

    let mut seen = HashSet::new();
    let mut workshops = Vec::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id.clone()) {
            warn!(id = %record.id, "duplicate workshop id");
            return Err(LoadError::DuplicateId(record.id));
        }
        workshops.push(into_workshop(record, local_offset)?);
    }
    Ok(workshops)
}

fn into_workshop(record: WorkshopRecord, local_offset: FixedOffset) -> Result<Workshop, LoadError> {
    let start_time = parse_field(&record.id, "start", record.start.as_deref(), local_offset)?;
    let end_time = parse_field(&record.id, "end", record.end.as_deref(), local_offset)?;
    debug!(id = %record.id, ?start_time, ?end_time, "parsed workshop");
    Ok(Workshop {
        id: record.id,
        title: record.title,
        level: record.level,
        description: record.description,
        start_time,
        end_time,
    })
}

/// Absent and empty strings mean "no schedule"; anything else must parse.
fn parse_field(
    workshop_id: &str,
    field: &'static str,
    raw: Option<&str>,
    local_offset: FixedOffset,
) -> Result<Option<DateTime<Utc>>, LoadError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    parse_timestamp(raw, local_offset)
        .map(Some)
        .ok_or_else(|| LoadError::InvalidTimestamp {
            workshop_id: workshop_id.to_string(),
            field,
            value: raw.to_string(),
        })
}

/// Parse an ISO-8601-like timestamp.
///
/// * With offset (`2025-12-09T10:25:00+07:00`, `2025-12-09T10:25+07:00`, `...Z`): taken as is.
/// * Without offset (`2025-12-09T10:25:00`, `2025-12-09T10:25:00.000`): local to `local_offset`.
/// * Date only (`2025-12-09`): UTC midnight.
pub fn parse_timestamp(raw: &str, local_offset: FixedOffset) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in OFFSET_DATETIME_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(raw, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, UTC_MINUTE_FORMAT) {
        return Some(naive.and_utc());
    }
    for fmt in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return local_offset
                .from_local_datetime(&naive)
                .single()
                .map(|dt| dt.with_timezone(&Utc));
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
