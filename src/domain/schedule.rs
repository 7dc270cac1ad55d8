//! Time rules: registration window gate, workshop status, display zone.
//!
//! All comparisons are on UTC instants; the display zone only affects rendering.

use chrono::{DateTime, Duration, FixedOffset, Offset, Utc};

use super::entities::{RegistrationWindow, WindowStatus, Workshop, WorkshopStatus};

/// Lead time in which an upcoming workshop is reported as starting soon.
pub const STARTING_SOON_HOURS: i64 = 24;

const DISPLAY_FORMAT: &str = "%d %b %Y %H:%M";

/// `open_time <= now <= close_time`, inclusive on both bounds.
pub fn is_open(now: DateTime<Utc>, window: &RegistrationWindow) -> bool {
    window.open_time() <= now && now <= window.close_time()
}

pub fn window_status(now: DateTime<Utc>, window: &RegistrationWindow) -> WindowStatus {
    if is_open(now, window) {
        WindowStatus::Open {
            open_time: window.open_time(),
            close_time: window.close_time(),
        }
    } else {
        WindowStatus::Closed {
            next_open: window.open_time(),
        }
    }
}

/// Derive the display status of a workshop. Workshops without a full schedule are upcoming.
pub fn workshop_status(workshop: &Workshop, now: DateTime<Utc>) -> WorkshopStatus {
    let Some((start, end)) = workshop.schedule() else {
        return WorkshopStatus::Upcoming;
    };
    if now > end {
        return WorkshopStatus::Ended;
    }
    if start <= now {
        return WorkshopStatus::InProgress;
    }
    let lead = start - now;
    if lead > Duration::zero() && lead <= Duration::hours(STARTING_SOON_HOURS) {
        WorkshopStatus::StartingSoon
    } else {
        WorkshopStatus::Upcoming
    }
}

/// Fixed timezone used for every rendered timestamp, independent of the host zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayZone {
    offset: FixedOffset,
    label: String,
}

impl DisplayZone {
    pub fn new(offset: FixedOffset, label: impl Into<String>) -> Self {
        Self {
            offset,
            label: label.into(),
        }
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn format(&self, ts: DateTime<Utc>) -> String {
        ts.with_timezone(&self.offset)
            .format(DISPLAY_FORMAT)
            .to_string()
    }

    /// `start → end (zone)`.
    pub fn format_range(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> String {
        format!("{} → {} ({})", self.format(start), self.format(end), self.label)
    }

    /// Human-readable registration window line.
    pub fn window_message(&self, status: &WindowStatus) -> String {
        match status {
            WindowStatus::Open {
                open_time,
                close_time,
            } => format!(
                "Registration is OPEN now. Period: {} – {} ({})",
                self.format(*open_time),
                self.format(*close_time),
                self.label
            ),
            WindowStatus::Closed { next_open } => format!(
                "Registration is CLOSED. Next open period starts at {} ({})",
                self.format(*next_open),
                self.label
            ),
        }
    }
}

impl Default for DisplayZone {
    /// Asia/Bangkok, UTC+7 with no daylight saving.
    fn default() -> Self {
        let offset = FixedOffset::east_opt(7 * 3600).unwrap_or_else(|| Utc.fix());
        Self::new(offset, "Asia/Bangkok")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Level;

    fn ts(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    fn december_window() -> RegistrationWindow {
        RegistrationWindow::new(
            ts("2025-12-01T08:00:00+07:00"),
            ts("2025-12-31T23:59:59+07:00"),
        )
        .unwrap()
    }

    fn workshop(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Workshop {
        Workshop {
            id: "ws1".to_string(),
            title: "Intro to JavaScript".to_string(),
            level: Level::Beginner,
            description: String::new(),
            start_time: start,
            end_time: end,
        }
    }

    #[test]
    fn test_is_open_inclusive_bounds() {
        let w = december_window();
        assert!(is_open(w.open_time(), &w));
        assert!(is_open(w.close_time(), &w));
        assert!(is_open(ts("2025-12-15T12:00:00+07:00"), &w));
        assert!(!is_open(w.open_time() - Duration::seconds(1), &w));
        assert!(!is_open(w.close_time() + Duration::seconds(1), &w));
    }

    #[test]
    fn test_window_rejects_inverted_bounds() {
        let a = ts("2025-12-31T00:00:00Z");
        let b = ts("2025-12-01T00:00:00Z");
        assert!(RegistrationWindow::new(a, b).is_none());
        assert!(RegistrationWindow::new(a, a).is_some());
    }

    #[test]
    fn test_workshop_status_table() {
        let now = ts("2025-12-15T12:00:00+07:00");
        let h = Duration::hours(1);

        let soon = workshop(Some(now + h), Some(now + h * 3));
        assert_eq!(workshop_status(&soon, now), WorkshopStatus::StartingSoon);

        let running = workshop(Some(now - h), Some(now + h));
        assert_eq!(workshop_status(&running, now), WorkshopStatus::InProgress);

        let ended = workshop(Some(now - h * 3), Some(now - h));
        assert_eq!(workshop_status(&ended, now), WorkshopStatus::Ended);

        let later = workshop(Some(now + h * 25), Some(now + h * 27));
        assert_eq!(workshop_status(&later, now), WorkshopStatus::Upcoming);

        let unscheduled = workshop(None, None);
        assert_eq!(workshop_status(&unscheduled, now), WorkshopStatus::Upcoming);

        let half = workshop(Some(now - h), None);
        assert_eq!(workshop_status(&half, now), WorkshopStatus::Upcoming);
    }

    #[test]
    fn test_status_boundaries() {
        let now = ts("2025-12-15T12:00:00Z");
        let start_now = workshop(Some(now), Some(now + Duration::hours(2)));
        assert_eq!(workshop_status(&start_now, now), WorkshopStatus::InProgress);

        let end_now = workshop(Some(now - Duration::hours(2)), Some(now));
        assert_eq!(workshop_status(&end_now, now), WorkshopStatus::InProgress);

        let exactly_24h = workshop(
            Some(now + Duration::hours(24)),
            Some(now + Duration::hours(26)),
        );
        assert_eq!(
            workshop_status(&exactly_24h, now),
            WorkshopStatus::StartingSoon
        );
    }

    #[test]
    fn test_display_zone_ignores_host_zone() {
        let zone = DisplayZone::default();
        assert_eq!(zone.format(ts("2025-12-01T01:00:00Z")), "01 Dec 2025 08:00");
        assert_eq!(zone.label(), "Asia/Bangkok");
    }

    #[test]
    fn test_window_messages() {
        let zone = DisplayZone::default();
        let w = december_window();

        let open = zone.window_message(&window_status(ts("2025-12-15T12:00:00+07:00"), &w));
        assert_eq!(
            open,
            "Registration is OPEN now. Period: 01 Dec 2025 08:00 – 31 Dec 2025 23:59 (Asia/Bangkok)"
        );

        let closed = zone.window_message(&window_status(ts("2026-01-02T00:00:00+07:00"), &w));
        assert_eq!(
            closed,
            "Registration is CLOSED. Next open period starts at 01 Dec 2025 08:00 (Asia/Bangkok)"
        );
    }
}
