use crate::domain::model::RaceWeekend;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Hours after the race start during which a weekend still counts as current.
const CURRENT_RACE_GRACE_HOURS: i64 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Session {
    Quali,
    Sprint,
    Race,
}

impl Session {
    /// Session whose start closes betting on the given form field.
    pub fn for_field(field: &str) -> Option<Session> {
        match field {
            "quali" => Some(Session::Quali),
            "sprint" => Some(Session::Sprint),
            "first" | "second" | "third" | "fastest_lap" | "safety_car" | "driver_of_the_day"
            | "bonus" => Some(Session::Race),
            _ => None,
        }
    }
}

/// Which parts of a weekend's tip can no longer be changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BetLocks {
    pub quali: bool,
    pub sprint: bool,
    pub race: bool,
}

impl BetLocks {
    pub fn at(weekend: &RaceWeekend, now: DateTime<Utc>) -> Self {
        let started = |start: Option<DateTime<Utc>>| start.is_some_and(|s| now >= s);
        Self {
            quali: started(weekend.quali_start),
            sprint: started(weekend.sprint_start),
            race: started(Some(weekend.race_start)),
        }
    }

    pub fn is_locked(&self, session: Session) -> bool {
        match session {
            Session::Quali => self.quali,
            Session::Sprint => self.sprint,
            Session::Race => self.race,
        }
    }

    pub fn is_field_locked(&self, field: &str) -> bool {
        Session::for_field(field).is_some_and(|session| self.is_locked(session))
    }
}

/// Weekend open for betting at `now`: the earliest one whose race began no
/// more than six hours ago. After the finale the last round stays current.
pub fn current_race(weekends: &[RaceWeekend], now: DateTime<Utc>) -> Option<&RaceWeekend> {
    let cutoff = now - Duration::hours(CURRENT_RACE_GRACE_HOURS);

    weekends
        .iter()
        .filter(|w| w.race_start >= cutoff)
        .min_by_key(|w| w.race_start)
        .or_else(|| weekends.iter().max_by_key(|w| w.round))
}
