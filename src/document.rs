use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

use crate::day::Weekday;
use crate::time::TimeOfDay;

/// One contiguous occupied interval for one room on one day.
///
/// The interval is half-open: a class ending at 09:50 no longer
/// occupies the room at 09:50. `start_time < end_time` always holds
/// for stored slots; degenerate ranges are dropped during ingest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupiedSlot {
    pub day: Weekday,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    pub course: String,
    pub section: String,
}

/// A course section as parsed from one surviving CSV row. This is the
/// source-of-record; the per-day [`OccupiedSlot`]s in each room are a
/// projection of it used only for occupancy queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub course: String,
    pub title: String,
    pub section: String,
    pub crn: String,
    pub days: Vec<Weekday>,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    pub location: String,
    pub instructor: String,
}

impl Course {
    /// Display label used for the slot projection, e.g.
    /// `"CS101 - Intro to Computing"`.
    pub fn label(&self) -> String {
        format!("{} - {}", self.course, self.title)
    }
}

/// The frozen artifact shared between the normalizer and the query
/// engine: built once, persisted as JSON, loaded once at service
/// start, never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleDocument {
    pub rooms: HashMap<String, Vec<OccupiedSlot>>,
    pub courses: Vec<Course>,
    /// Lexicographically sorted room names.
    pub room_list: Vec<String>,
}

impl ScheduleDocument {
    pub fn slots(&self, room: &str) -> Option<&[OccupiedSlot]> {
        self.rooms.get(room).map(Vec::as_slice)
    }

    pub fn total_rooms(&self) -> usize {
        self.room_list.len()
    }
}

/// Accumulates courses during ingest and expands each into one slot
/// per meeting day in its room's list.
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    rooms: HashMap<String, Vec<OccupiedSlot>>,
    courses: Vec<Course>,
    room_names: BTreeSet<String>,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_course(&mut self, course: Course) {
        self.room_names.insert(course.location.clone());
        let label = course.label();
        let slots = self.rooms.entry(course.location.clone()).or_default();
        for &day in &course.days {
            slots.push(OccupiedSlot {
                day,
                start_time: course.start_time,
                end_time: course.end_time,
                course: label.clone(),
                section: course.section.clone(),
            });
        }
        self.courses.push(course);
    }

    pub fn finish(self) -> ScheduleDocument {
        ScheduleDocument {
            rooms: self.rooms,
            courses: self.courses,
            room_list: self.room_names.into_iter().collect(),
        }
    }
}
