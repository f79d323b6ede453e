use serde::{Deserialize, Serialize};
use std::fmt;

use crate::day::Weekday;
use crate::document::{OccupiedSlot, ScheduleDocument};
use crate::time::TimeOfDay;

/// A query the engine could not answer. None of these are fatal; the
/// transport layer maps them to structured client-facing responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    RoomNotFound(String),
    InvalidDay(String),
    InvalidTime(String),
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::RoomNotFound(room) => write!(f, "room '{room}' not found"),
            QueryError::InvalidDay(day) => {
                write!(f, "invalid day '{day}': must be Monday through Sunday")
            }
            QueryError::InvalidTime(time) => {
                write!(f, "invalid time '{time}': use HH:MM in 24-hour format")
            }
        }
    }
}

impl std::error::Error for QueryError {}

/// Validates the raw day and time strings of an availability query.
pub fn parse_query(day: &str, time: &str) -> Result<(Weekday, TimeOfDay), QueryError> {
    let day = day
        .parse::<Weekday>()
        .map_err(|_| QueryError::InvalidDay(day.trim().to_string()))?;
    let time = time
        .parse::<TimeOfDay>()
        .map_err(|_| QueryError::InvalidTime(time.trim().to_string()))?;
    Ok((day, time))
}

/// Returns the slot occupying the room at `(day, time)`, if any.
///
/// A slot matches when `start <= time < end` (half-open). Slots are
/// scanned in stored order and the first match wins; overlapping slots
/// are legal and never deduplicated.
pub fn occupying_class(
    slots: &[OccupiedSlot],
    day: Weekday,
    time: TimeOfDay,
) -> Option<&OccupiedSlot> {
    slots
        .iter()
        .find(|slot| slot.day == day && slot.start_time <= time && time < slot.end_time)
}

/// Returns the next class in the room strictly after `time` on `day`,
/// or `None` when no later class exists that day. When two slots start
/// at the same minute, the first one encountered in the scan wins.
pub fn next_class(slots: &[OccupiedSlot], day: Weekday, time: TimeOfDay) -> Option<&OccupiedSlot> {
    let mut next: Option<&OccupiedSlot> = None;
    for slot in slots {
        if slot.day != day || slot.start_time <= time {
            continue;
        }
        match next {
            Some(best) if slot.start_time >= best.start_time => {}
            _ => next = Some(slot),
        }
    }
    next
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomAvailability {
    pub room: String,
    pub next_class: Option<OccupiedSlot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomOccupied {
    pub room: String,
    pub current_class: OccupiedSlot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilitySummary {
    pub total_rooms: usize,
    pub available: usize,
    pub occupied: usize,
}

/// Campus-wide partition of rooms at one `(day, time)`. Both lists are
/// sorted lexicographically by room name, independent of map order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityReport {
    pub day: Weekday,
    pub time: TimeOfDay,
    pub available_rooms: Vec<RoomAvailability>,
    pub occupied_rooms: Vec<RoomOccupied>,
    pub summary: AvailabilitySummary,
}

pub fn availability(doc: &ScheduleDocument, day: Weekday, time: TimeOfDay) -> AvailabilityReport {
    let mut available_rooms = Vec::new();
    let mut occupied_rooms = Vec::new();
    for (room, slots) in &doc.rooms {
        match occupying_class(slots, day, time) {
            Some(slot) => occupied_rooms.push(RoomOccupied {
                room: room.clone(),
                current_class: slot.clone(),
            }),
            None => available_rooms.push(RoomAvailability {
                room: room.clone(),
                next_class: next_class(slots, day, time).cloned(),
            }),
        }
    }
    available_rooms.sort_by(|a, b| a.room.cmp(&b.room));
    occupied_rooms.sort_by(|a, b| a.room.cmp(&b.room));
    let summary = AvailabilitySummary {
        total_rooms: doc.total_rooms(),
        available: available_rooms.len(),
        occupied: occupied_rooms.len(),
    };
    AvailabilityReport {
        day,
        time,
        available_rooms,
        occupied_rooms,
        summary,
    }
}

/// One room's full schedule grouped into the seven fixed day buckets.
/// Every day is present even when empty; each bucket is sorted
/// ascending by start time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeekSchedule {
    #[serde(rename = "Monday")]
    pub monday: Vec<OccupiedSlot>,
    #[serde(rename = "Tuesday")]
    pub tuesday: Vec<OccupiedSlot>,
    #[serde(rename = "Wednesday")]
    pub wednesday: Vec<OccupiedSlot>,
    #[serde(rename = "Thursday")]
    pub thursday: Vec<OccupiedSlot>,
    #[serde(rename = "Friday")]
    pub friday: Vec<OccupiedSlot>,
    #[serde(rename = "Saturday")]
    pub saturday: Vec<OccupiedSlot>,
    #[serde(rename = "Sunday")]
    pub sunday: Vec<OccupiedSlot>,
}

impl WeekSchedule {
    pub fn day(&self, day: Weekday) -> &[OccupiedSlot] {
        match day {
            Weekday::Monday => &self.monday,
            Weekday::Tuesday => &self.tuesday,
            Weekday::Wednesday => &self.wednesday,
            Weekday::Thursday => &self.thursday,
            Weekday::Friday => &self.friday,
            Weekday::Saturday => &self.saturday,
            Weekday::Sunday => &self.sunday,
        }
    }

    fn day_mut(&mut self, day: Weekday) -> &mut Vec<OccupiedSlot> {
        match day {
            Weekday::Monday => &mut self.monday,
            Weekday::Tuesday => &mut self.tuesday,
            Weekday::Wednesday => &mut self.wednesday,
            Weekday::Thursday => &mut self.thursday,
            Weekday::Friday => &mut self.friday,
            Weekday::Saturday => &mut self.saturday,
            Weekday::Sunday => &mut self.sunday,
        }
    }
}

pub fn room_week(doc: &ScheduleDocument, room: &str) -> Result<WeekSchedule, QueryError> {
    let slots = doc
        .slots(room)
        .ok_or_else(|| QueryError::RoomNotFound(room.to_string()))?;
    let mut week = WeekSchedule::default();
    for slot in slots {
        week.day_mut(slot.day).push(slot.clone());
    }
    for day in Weekday::ALL {
        week.day_mut(day).sort_by_key(|slot| slot.start_time);
    }
    Ok(week)
}
