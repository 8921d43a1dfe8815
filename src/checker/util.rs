use crate::model::{AssignmentEntry, Block, Initials};
use std::collections::HashMap;

/// Clé de regroupement des doubles affectations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(super) struct BookingKey<'a> {
    pub block: &'a Block,
    pub initials: &'a Initials,
}

/// Postes par (créneau, initiales), dans l'ordre de première apparition.
pub(super) fn group_bookings<'a, I>(entries: I) -> Vec<(BookingKey<'a>, Vec<&'a str>)>
where
    I: IntoIterator<Item = &'a AssignmentEntry>,
{
    let mut groups: Vec<(BookingKey<'a>, Vec<&'a str>)> = Vec::new();
    let mut index: HashMap<BookingKey<'a>, usize> = HashMap::new();

    for entry in entries {
        let key = BookingKey {
            block: &entry.block,
            initials: &entry.initials,
        };
        match index.get(&key) {
            Some(&pos) => groups[pos].1.push(entry.position.as_str()),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push((key, vec![entry.position.as_str()]));
            }
        }
    }

    groups
}
