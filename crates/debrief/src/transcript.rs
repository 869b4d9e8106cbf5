//! Helpers for the flattened `Agent: ... / User: ...` transcript text.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

pub const AGENT_TAG: &str = "Agent:";
pub const USER_TAG: &str = "User:";

lazy_static! {
    static ref LINE_BREAK: Regex = Regex::new(r"\r\n|\r|\n").unwrap();
}

/// Swap the raw speaker tags for display names and separate turns with blank lines
pub fn label_speakers(transcript: &str, candidate_name: &str) -> String {
    let labelled = transcript
        .replace(AGENT_TAG, "**AI interviewer:**")
        .replace(USER_TAG, &format!("**{}:**", candidate_name));
    LINE_BREAK.replace_all(&labelled, "\n\n").into_owned()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SpeakerWordCounts {
    pub interviewer: usize,
    pub candidate: usize,
}

#[derive(Clone, Copy)]
enum Speaker {
    Interviewer,
    Candidate,
}

/// Count words spoken by each side. Untagged lines belong to the previous speaker.
pub fn speaker_word_counts(transcript: &str) -> SpeakerWordCounts {
    let mut counts = SpeakerWordCounts::default();
    let mut speaker = None;

    for line in transcript.lines() {
        let line = line.trim_start();
        let words = if let Some(rest) = line.strip_prefix(AGENT_TAG) {
            speaker = Some(Speaker::Interviewer);
            rest
        } else if let Some(rest) = line.strip_prefix(USER_TAG) {
            speaker = Some(Speaker::Candidate);
            rest
        } else {
            line
        };

        let n = words.split_whitespace().count();
        match speaker {
            Some(Speaker::Interviewer) => counts.interviewer += n,
            Some(Speaker::Candidate) => counts.candidate += n,
            None => {}
        }
    }

    counts
}
