use super::{util, Conflict, ConflictKind};
use crate::availability::{is_available_at, TimeWindow};
use crate::model::{AssignmentEntry, SlotRole, StaffDirectory, StaffProfile};
use crate::time::{format_time, TimeOfDay};

pub(super) fn detect_conflicts(
    entries: &[AssignmentEntry],
    staff: &StaffDirectory,
) -> Vec<Conflict> {
    let mut out = Vec::new();
    let mut resolved = Vec::with_capacity(entries.len());

    for profile in staff.iter() {
        check_profile(profile, &mut out);
    }

    for entry in entries {
        let Some(profile) = staff.get(&entry.initials) else {
            out.push(Conflict {
                kind: ConflictKind::MissingProfile,
                initials: entry.initials.clone(),
                message: format!(
                    "{} scheduled at {} ({}) has no team info.",
                    entry.initials, entry.block, entry.position
                ),
            });
            continue;
        };
        check_coverage(entry, profile, &mut out);
        resolved.push(entry);
    }

    for (key, positions) in util::group_bookings(resolved) {
        if positions.len() > 1 {
            out.push(Conflict {
                kind: ConflictKind::DoubleBooking,
                initials: key.initials.clone(),
                message: format!(
                    "{} is assigned to multiple positions at {}: {}",
                    key.initials,
                    key.block,
                    positions.join(", ")
                ),
            });
        }
    }

    out
}

fn check_profile(profile: &StaffProfile, out: &mut Vec<Conflict>) {
    let who = &profile.initials;

    if let Some((start, end)) = inverted(profile.shift()) {
        out.push(Conflict {
            kind: ConflictKind::InvalidShift,
            initials: who.clone(),
            message: format!(
                "{who} has invalid shift timing: ends at {} before it starts at {}.",
                format_time(Some(end)),
                format_time(Some(start))
            ),
        });
    }

    let meals = [
        (profile.first_meal(), ConflictKind::InvalidFirstMeal, "first"),
        (profile.second_meal(), ConflictKind::InvalidSecondMeal, "second"),
    ];
    for (window, kind, ordinal) in meals {
        if let Some((start, end)) = inverted(window) {
            out.push(Conflict {
                kind,
                initials: who.clone(),
                message: format!(
                    "{who} has {ordinal} meal ending before it starts: {} < {}.",
                    format_time(Some(end)),
                    format_time(Some(start))
                ),
            });
        }
    }
}

/// Bornes d'une fenêtre dont la fin précède le début ; ignorée si une borne est inconnue.
fn inverted(window: TimeWindow) -> Option<(TimeOfDay, TimeOfDay)> {
    match (window.start, window.end) {
        (Some(start), Some(end)) if end < start => Some((start, end)),
        _ => None,
    }
}

fn check_coverage(entry: &AssignmentEntry, profile: &StaffProfile, out: &mut Vec<Conflict>) {
    let who = &entry.initials;
    let block = &entry.block;
    let start_minute = block.start;
    let end_minute = block.last_minute();
    let at = |minute: u32| format_time(Some(TimeOfDay::from_minutes(minute)));

    let (kind, message) = match entry.slot_role() {
        SlotRole::Solo => {
            let missing: Vec<String> = [start_minute, end_minute]
                .into_iter()
                .filter(|&m| !is_available_at(profile, m))
                .map(at)
                .collect();
            if missing.is_empty() {
                return;
            }
            (
                ConflictKind::IncompleteCoverage,
                format!(
                    "{who} cannot cover full hour {block} ({}): not available at {}.",
                    entry.position,
                    missing.join(" and ")
                ),
            )
        }
        SlotRole::First => {
            if is_available_at(profile, start_minute) {
                return;
            }
            (
                ConflictKind::HourStart,
                format!(
                    "{who} is not available at the start of {block} ({}) at {}.",
                    entry.position,
                    at(start_minute)
                ),
            )
        }
        SlotRole::Last => {
            if is_available_at(profile, end_minute) {
                return;
            }
            (
                ConflictKind::HourEnd,
                format!(
                    "{who} is not available at the end of {block} ({}) at {}.",
                    entry.position,
                    at(end_minute)
                ),
            )
        }
        SlotRole::Middle => {
            let mid = block.midpoint();
            if is_available_at(profile, mid) {
                return;
            }
            (
                ConflictKind::MidHour,
                format!(
                    "{who} is not available mid-hour in {block} ({}) at {}.",
                    entry.position,
                    at(mid)
                ),
            )
        }
    };

    out.push(Conflict {
        kind,
        initials: who.clone(),
        message,
    });
}
