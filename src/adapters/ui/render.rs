//! Plain-text rendering of store state. No terminal I/O here.

use crate::domain::{DisplayZone, Registration, Workshop, WorkshopStatus};

/// One catalog row: `title (level) [STATUS] | Time: a → b (zone)`.
pub fn workshop_line(workshop: &Workshop, status: WorkshopStatus, zone: &DisplayZone) -> String {
    let mut line = format!("{} ({}) [{}]", workshop.title, workshop.level, status);
    if let Some((start, end)) = workshop.schedule() {
        line.push_str(" | Time: ");
        line.push_str(&zone.format_range(start, end));
    }
    line
}

/// Detail pane: `title (level) | Time: a → b (zone) | description`.
pub fn workshop_detail(workshop: &Workshop, zone: &DisplayZone) -> String {
    let mut parts = vec![format!("{} ({})", workshop.title, workshop.level)];
    if let Some((start, end)) = workshop.schedule() {
        parts.push(format!("Time: {}", zone.format_range(start, end)));
    }
    parts.push(workshop.description.clone());
    parts.join(" | ")
}

/// `user → workshop title`.
pub fn registration_line(registration: &Registration, title: &str) -> String {
    format!("{} → {}", registration.user_name, title)
}
