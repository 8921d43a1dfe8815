#![forbid(unsafe_code)]
use rotacheck::{
    check_conflict_messages, check_conflicts, parse_block_label, AssignmentEntry, Block,
    ConflictKind, StaffDirectory, StaffProfile,
};
use std::collections::BTreeSet;

fn block(label: &str) -> Block {
    parse_block_label(label, 60).unwrap()
}

fn shared(initials: &str, position: &str, label: &str, slot_index: usize, slot_count: usize) -> AssignmentEntry {
    AssignmentEntry {
        slot_index,
        slot_count,
        ..AssignmentEntry::solo(initials, position, block(label))
    }
}

fn rf() -> StaffProfile {
    StaffProfile::new("RF", "09:00", "17:00").with_first_meal("12:00", "12:30")
}

fn directory(profiles: Vec<StaffProfile>) -> StaffDirectory {
    profiles.into_iter().collect()
}

#[test]
fn solo_inside_shift_is_clean() {
    let staff = directory(vec![rf()]);
    let entries = vec![AssignmentEntry::solo("RF", "OP", block("0900 - 1000"))];
    assert!(check_conflicts(&entries, &staff).is_empty());
}

#[test]
fn solo_during_meal_cannot_cover_full_hour() {
    let staff = directory(vec![rf()]);
    let entries = vec![AssignmentEntry::solo("RF", "OP", block("1200 - 1300"))];
    let conflicts = check_conflicts(&entries, &staff);
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].kind, ConflictKind::IncompleteCoverage);
    assert_eq!(
        conflicts[0].message,
        "RF cannot cover full hour 1200 - 1300 (OP): not available at 12:00 PM."
    );
}

#[test]
fn solo_missing_both_ends_reports_once() {
    let staff = directory(vec![rf()]);
    let entries = vec![AssignmentEntry::solo("RF", "OP", block("1800 - 1900"))];
    let messages = check_conflict_messages(&entries, &staff);
    assert_eq!(
        messages,
        vec!["RF cannot cover full hour 1800 - 1900 (OP): not available at 6:00 PM and 6:59 PM."]
    );
}

#[test]
fn unknown_initials_have_no_team_info() {
    let staff = directory(vec![rf()]);
    let entries = vec![AssignmentEntry::solo("ZZ", "Green", block("1000 - 1100"))];
    let messages = check_conflict_messages(&entries, &staff);
    assert_eq!(messages, vec!["ZZ scheduled at 1000 - 1100 (Green) has no team info."]);
}

#[test]
fn double_booking_lists_positions_in_order() {
    let staff = directory(vec![StaffProfile::new("JD", "08:00", "18:00")]);
    let entries = vec![
        AssignmentEntry::solo("JD", "OP", block("1400 - 1500")),
        AssignmentEntry::solo("JD", "Green", block("1400 - 1500")),
    ];
    let messages = check_conflict_messages(&entries, &staff);
    assert_eq!(
        messages,
        vec!["JD is assigned to multiple positions at 1400 - 1500: OP, Green"]
    );
}

#[test]
fn same_person_in_different_blocks_is_not_double_booked() {
    let staff = directory(vec![StaffProfile::new("JD", "08:00", "18:00")]);
    let entries = vec![
        AssignmentEntry::solo("JD", "OP", block("1400 - 1500")),
        AssignmentEntry::solo("JD", "Green", block("1500 - 1600")),
    ];
    assert!(check_conflicts(&entries, &staff).is_empty());
}

#[test]
fn shared_cell_first_slot_checks_hour_start_only() {
    let staff = directory(vec![
        StaffProfile::new("AB", "15:30", "23:00"),
        StaffProfile::new("CD", "09:00", "17:00"),
    ]);
    let entries = vec![
        shared("AB", "Green", "1500 - 1600", 0, 2),
        shared("CD", "Green", "1500 - 1600", 1, 2),
    ];
    let conflicts = check_conflicts(&entries, &staff);
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].kind, ConflictKind::HourStart);
    assert_eq!(conflicts[0].initials.as_str(), "AB");
    assert_eq!(
        conflicts[0].message,
        "AB is not available at the start of 1500 - 1600 (Green) at 3:00 PM."
    );
}

#[test]
fn shared_cell_last_and_middle_slots() {
    let staff = directory(vec![
        StaffProfile::new("AB", "09:00", "17:00"),
        StaffProfile::new("CD", "09:00", "17:00").with_first_meal("15:15", "15:45"),
        StaffProfile::new("EF", "09:00", "15:30"),
    ]);
    let entries = vec![
        shared("AB", "OP", "1500 - 1600", 0, 3),
        shared("CD", "OP", "1500 - 1600", 1, 3),
        shared("EF", "OP", "1500 - 1600", 2, 3),
    ];
    let messages = check_conflict_messages(&entries, &staff);
    assert_eq!(
        messages,
        vec![
            "CD is not available mid-hour in 1500 - 1600 (OP) at 3:30 PM.",
            "EF is not available at the end of 1500 - 1600 (OP) at 3:59 PM.",
        ]
    );
}

#[test]
fn last_slot_ignores_hour_start() {
    let staff = directory(vec![
        StaffProfile::new("AB", "09:00", "17:00"),
        StaffProfile::new("CD", "15:30", "17:00"),
    ]);
    let entries = vec![
        shared("AB", "OP", "1500 - 1600", 0, 2),
        shared("CD", "OP", "1500 - 1600", 1, 2),
    ];
    assert!(check_conflicts(&entries, &staff).is_empty());
}

#[test]
fn inverted_windows_are_reported_per_profile() {
    let staff = directory(vec![
        StaffProfile::new("XX", "17:00", "09:00")
            .with_first_meal("13:00", "12:30")
            .with_second_meal("16:00", "15:00"),
    ]);
    let messages = check_conflict_messages(&[], &staff);
    assert_eq!(
        messages,
        vec![
            "XX has invalid shift timing: ends at 9:00 AM before it starts at 5:00 PM.",
            "XX has first meal ending before it starts: 12:30 PM < 1:00 PM.",
            "XX has second meal ending before it starts: 3:00 PM < 4:00 PM.",
        ]
    );
}

#[test]
fn unknown_bounds_skip_window_checks() {
    let staff = directory(vec![
        StaffProfile::new("XX", "", "09:00").with_second_meal("16:00", "")
    ]);
    assert!(check_conflicts(&[], &staff).is_empty());
}

#[test]
fn missing_profile_is_not_double_booked() {
    let staff = StaffDirectory::new();
    let entries = vec![
        AssignmentEntry::solo("ZZ", "OP", block("1000 - 1100")),
        AssignmentEntry::solo("ZZ", "Green", block("1000 - 1100")),
    ];
    let kinds: Vec<ConflictKind> = check_conflicts(&entries, &staff)
        .into_iter()
        .map(|c| c.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![ConflictKind::MissingProfile, ConflictKind::MissingProfile]
    );
}

#[test]
fn rules_are_emitted_in_battery_order() {
    let staff = directory(vec![
        rf(),
        StaffProfile::new("JD", "17:00", "08:00"),
    ]);
    let entries = vec![
        AssignmentEntry::solo("RF", "OP", block("1200 - 1300")),
        AssignmentEntry::solo("ZZ", "Green", block("1200 - 1300")),
        AssignmentEntry::solo("RF", "Green", block("1200 - 1300")),
    ];
    let kinds: Vec<ConflictKind> = check_conflicts(&entries, &staff)
        .into_iter()
        .map(|c| c.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            ConflictKind::InvalidShift,
            ConflictKind::IncompleteCoverage,
            ConflictKind::MissingProfile,
            ConflictKind::IncompleteCoverage,
            ConflictKind::DoubleBooking,
        ]
    );
}

#[test]
fn double_booking_does_not_depend_on_entry_order() {
    let staff = directory(vec![
        StaffProfile::new("JD", "08:00", "18:00"),
        StaffProfile::new("KL", "08:00", "18:00"),
    ]);
    let entries = vec![
        AssignmentEntry::solo("JD", "OP", block("1400 - 1500")),
        AssignmentEntry::solo("KL", "Green", block("1400 - 1500")),
        AssignmentEntry::solo("JD", "Green", block("1400 - 1500")),
        AssignmentEntry::solo("KL", "Red", block("1500 - 1600")),
        AssignmentEntry::solo("KL", "OP", block("1500 - 1600")),
    ];
    let mut reversed = entries.clone();
    reversed.reverse();

    let summarize = |entries: &[AssignmentEntry]| -> BTreeSet<(String, String, Vec<String>)> {
        let mut out = BTreeSet::new();
        for c in check_conflicts(entries, &staff) {
            assert_eq!(c.kind, ConflictKind::DoubleBooking);
            let (head, list) = c.message.split_once(": ").unwrap();
            let mut positions: Vec<String> = list.split(", ").map(str::to_string).collect();
            positions.sort();
            out.insert((c.initials.to_string(), head.to_string(), positions));
        }
        out
    };

    let forward = summarize(&entries[..]);
    assert_eq!(forward.len(), 2);
    assert_eq!(forward, summarize(&reversed[..]));

    assert_eq!(
        check_conflict_messages(&reversed, &staff)[0],
        "KL is assigned to multiple positions at 1500 - 1600: OP, Red"
    );
}

#[test]
fn inputs_are_left_untouched() {
    let staff = directory(vec![rf()]);
    let entries = vec![AssignmentEntry::solo("RF", "OP", block("1200 - 1300"))];
    let before = entries.clone();
    let first = check_conflict_messages(&entries, &staff);
    let second = check_conflict_messages(&entries, &staff);
    assert_eq!(entries, before);
    assert_eq!(first, second);
    assert_eq!(staff.len(), 1);
}
