use serde::Deserialize;
use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::day::parse_day_codes;
use crate::document::{Course, DocumentBuilder, ScheduleDocument};
use crate::persistence::PersistenceResult;
use crate::time::parse_meeting_times;

/// One raw row of a course-listing CSV export. Columns that are absent
/// from a file default to empty strings; a row is never rejected for a
/// missing column.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct RawRow {
    #[serde(default, rename = "Status")]
    pub status: String,
    #[serde(default, rename = "Delivery Mode")]
    pub delivery_mode: String,
    #[serde(default, rename = "Location")]
    pub location: String,
    #[serde(default, rename = "Days")]
    pub days: String,
    #[serde(default, rename = "Times")]
    pub times: String,
    #[serde(default, rename = "Course")]
    pub course: String,
    #[serde(default, rename = "Title")]
    pub title: String,
    #[serde(default, rename = "Section")]
    pub section: String,
    #[serde(default, rename = "CRN")]
    pub crn: String,
    #[serde(default, rename = "Instructor")]
    pub instructor: String,
}

/// Why a row contributed nothing to the document. Skips are expected
/// and common; they are counted but never surfaced as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Cancelled,
    Online,
    NoLocation,
    UnparseableTimes,
    DegenerateTimes,
    NoDays,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SkipReason::Cancelled => "status is Cancelled",
            SkipReason::Online => "delivery mode is online",
            SkipReason::NoLocation => "location is empty or TBA",
            SkipReason::UnparseableTimes => "times field is not a 12-hour range",
            SkipReason::DegenerateTimes => "time range is empty or inverted",
            SkipReason::NoDays => "no recognized day codes",
        };
        f.write_str(text)
    }
}

/// Applies the per-row rejection pipeline, in order, and builds a
/// [`Course`] from any row that survives.
pub fn classify_row(row: RawRow) -> Result<Course, SkipReason> {
    if row.status == "Cancelled" {
        return Err(SkipReason::Cancelled);
    }
    if row.delivery_mode.contains("Online") {
        return Err(SkipReason::Online);
    }
    let location = row.location.trim();
    if location.is_empty() || location == "TBA" {
        return Err(SkipReason::NoLocation);
    }
    let (start_time, end_time) =
        parse_meeting_times(&row.times).ok_or(SkipReason::UnparseableTimes)?;
    if start_time >= end_time {
        return Err(SkipReason::DegenerateTimes);
    }
    let days = parse_day_codes(&row.days);
    if days.is_empty() {
        return Err(SkipReason::NoDays);
    }
    Ok(Course {
        course: row.course,
        title: row.title,
        section: row.section,
        crn: row.crn,
        days,
        start_time,
        end_time,
        location: location.to_string(),
        instructor: row.instructor,
    })
}

/// Counts for one normalization run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IngestSummary {
    pub files_read: usize,
    pub files_failed: usize,
    pub courses_kept: usize,
    pub rows_skipped: usize,
}

/// Reads every row of one CSV source. Any read or decode error fails
/// the whole file: rows parsed before the error are discarded.
pub fn read_courses<R: Read>(reader: R) -> PersistenceResult<(Vec<Course>, usize)> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut courses = Vec::new();
    let mut skipped = 0;
    for record in csv_reader.deserialize::<RawRow>() {
        match classify_row(record?) {
            Ok(course) => courses.push(course),
            Err(_) => skipped += 1,
        }
    }
    Ok((courses, skipped))
}

fn read_courses_from_path(path: &Path) -> PersistenceResult<(Vec<Course>, usize)> {
    let file = std::fs::File::open(path)?;
    read_courses(file)
}

/// Normalizes a set of CSV files into one [`ScheduleDocument`].
///
/// A file that fails to parse is logged and skipped entirely; the run
/// continues with the remaining files and never aborts.
pub fn ingest_files<P: AsRef<Path>>(paths: &[P]) -> (ScheduleDocument, IngestSummary) {
    let mut builder = DocumentBuilder::new();
    let mut summary = IngestSummary::default();
    for path in paths {
        let path = path.as_ref();
        match read_courses_from_path(path) {
            Ok((courses, skipped)) => {
                summary.files_read += 1;
                summary.courses_kept += courses.len();
                summary.rows_skipped += skipped;
                for course in courses {
                    builder.add_course(course);
                }
            }
            Err(err) => {
                warn!("skipping {}: {err}", path.display());
                summary.files_failed += 1;
            }
        }
    }
    let document = builder.finish();
    info!(
        rooms = document.room_list.len(),
        courses = document.courses.len(),
        skipped = summary.rows_skipped,
        "normalization complete"
    );
    (document, summary)
}

/// Normalizes every `*.csv` file in a directory, in sorted path order.
pub fn ingest_dir<P: AsRef<Path>>(dir: P) -> PersistenceResult<(ScheduleDocument, IngestSummary)> {
    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
        })
        .collect();
    paths.sort();
    Ok(ingest_files(&paths))
}
