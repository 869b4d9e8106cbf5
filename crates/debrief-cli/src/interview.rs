use anyhow::{Context, Result};
use debrief::models::interview::InterviewRecord;
use debrief::transcript::label_speakers;
use std::fs;
use std::path::Path;

/// Read an interview record from a JSON file as stored
pub fn read_interview(path: &Path) -> Result<InterviewRecord> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read interview file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse interview file {}", path.display()))
}

/// Read an interview record for questioning.
///
/// When the record names the candidate, the transcript's speaker tags are replaced by
/// display names before anything else sees it.
pub fn load_interview(path: &Path) -> Result<InterviewRecord> {
    let mut record = read_interview(path)?;
    if let Some(name) = record.subject_name().map(String::from) {
        record.transcript = label_speakers(&record.transcript, &name);
    }
    Ok(record)
}
