use crate::model::StaffProfile;
use crate::time::TimeOfDay;

/// Fenêtre horaire [start, end) ; une borne inconnue ne contient rien.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: Option<TimeOfDay>,
    pub end: Option<TimeOfDay>,
}

impl TimeWindow {
    pub fn new(start: Option<TimeOfDay>, end: Option<TimeOfDay>) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, minute: u32) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start.minutes() <= minute && minute < end.minutes(),
            _ => false,
        }
    }
}

impl StaffProfile {
    pub fn shift(&self) -> TimeWindow {
        TimeWindow::new(self.shift_start, self.shift_end)
    }
    pub fn first_meal(&self) -> TimeWindow {
        TimeWindow::new(self.meal1_start, self.meal1_end)
    }
    pub fn second_meal(&self) -> TimeWindow {
        TimeWindow::new(self.meal2_start, self.meal2_end)
    }
}

/// En poste et hors pause repas à la minute `minute`.
///
/// Une pause qui se termine à `minute` ne bloque pas cette minute.
pub fn is_available_at(profile: &StaffProfile, minute: u32) -> bool {
    profile.shift().contains(minute)
        && !profile.first_meal().contains(minute)
        && !profile.second_meal().contains(minute)
}
