use super::{PersistenceError, PersistenceResult};
use crate::document::ScheduleDocument;
use std::fs::File;
use std::path::Path;

pub fn save_document_to_json<P: AsRef<Path>>(
    document: &ScheduleDocument,
    path: P,
) -> PersistenceResult<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, document)?;
    Ok(())
}

pub fn load_document_from_json<P: AsRef<Path>>(path: P) -> PersistenceResult<ScheduleDocument> {
    let file = File::open(path)?;
    let document: ScheduleDocument = serde_json::from_reader(file)?;
    validate_document(&document)?;
    Ok(document)
}

/// Checks the invariants the serialized form cannot express: every
/// stored slot must cover a non-empty half-open interval.
pub fn validate_document(document: &ScheduleDocument) -> PersistenceResult<()> {
    for (room, slots) in &document.rooms {
        for slot in slots {
            if slot.start_time >= slot.end_time {
                return Err(PersistenceError::InvalidData(format!(
                    "room '{room}' has a slot with start {} not before end {}",
                    slot.start_time, slot.end_time
                )));
            }
        }
    }
    Ok(())
}
