//! Renders an interview into the context document handed to the model.
//!
//! The document always carries four sections in a fixed order:
//! `Interview Transcript`, `Analytics Summary`, `Call Analysis` and
//! `Question Summaries`. Every scalar field is written as `label: value`;
//! a missing value becomes the bare marker [`NOT_AVAILABLE`] so no line ever
//! disappears from the document.

use std::fmt::Display;

use crate::models::analytics::{Analytics, QuestionSummary};
use crate::models::call_analysis::CallAnalysis;

pub const NOT_AVAILABLE: &str = "N/A";

pub const TRANSCRIPT_HEADER: &str = "Interview Transcript:";
pub const ANALYTICS_HEADER: &str = "Analytics Summary:";
pub const CALL_ANALYSIS_HEADER: &str = "Call Analysis:";
pub const QUESTION_SUMMARIES_HEADER: &str = "Question Summaries:";

/// Build the context document for one interview. Never fails.
pub fn format_context(
    transcript: &str,
    analytics: Option<&Analytics>,
    call_analysis: Option<&CallAnalysis>,
) -> String {
    let mut out = String::with_capacity(transcript.len() + 1024);

    out.push_str(TRANSCRIPT_HEADER);
    out.push('\n');
    out.push_str(transcript);
    out.push_str("\n\n");

    render_analytics(&mut out, analytics);
    out.push('\n');
    render_call_analysis(&mut out, call_analysis);
    out.push('\n');
    render_question_summaries(&mut out, analytics.map(Analytics::question_summaries));

    out
}

fn render_analytics(out: &mut String, analytics: Option<&Analytics>) {
    out.push_str(ANALYTICS_HEADER);
    out.push('\n');

    let overall_score = analytics.and_then(|a| a.overall_score);
    let overall_feedback = analytics.and_then(|a| a.overall_feedback.as_deref());
    let communication_score = analytics.and_then(Analytics::communication_score);
    let communication_feedback = analytics.and_then(Analytics::communication_feedback);
    let general_intelligence = analytics.and_then(|a| a.general_intelligence.as_deref());

    push_field(out, "Overall Hiring Score", with_unit(overall_score, "%"));
    push_field(out, "Overall Feedback", text(overall_feedback));
    push_field(out, "Communication Score", with_unit(communication_score, "/10"));
    push_field(out, "Communication Feedback", text(communication_feedback));
    push_field(out, "General Intelligence", text(general_intelligence));
}

fn render_call_analysis(out: &mut String, call_analysis: Option<&CallAnalysis>) {
    out.push_str(CALL_ANALYSIS_HEADER);
    out.push('\n');

    let sentiment = call_analysis
        .and_then(|c| c.user_sentiment)
        .map(|s| s.to_string());
    let summary = call_analysis.and_then(|c| c.call_summary.as_deref());
    let completion = call_analysis.and_then(|c| c.call_completion_rating.as_deref());
    let task_completion = call_analysis.and_then(|c| c.agent_task_completion_rating.as_deref());

    push_field(out, "User Sentiment", text(sentiment.as_deref()));
    push_field(out, "Call Summary", text(summary));
    push_field(out, "Completion Rating", text(completion));
    push_field(out, "Task Completion", text(task_completion));
}

fn render_question_summaries(out: &mut String, summaries: Option<&[QuestionSummary]>) {
    out.push_str(QUESTION_SUMMARIES_HEADER);
    out.push('\n');

    let summaries = summaries.unwrap_or_default();
    if summaries.is_empty() {
        out.push_str(NOT_AVAILABLE);
        return;
    }

    let blocks: Vec<String> = summaries
        .iter()
        .enumerate()
        .map(|(index, qs)| {
            format!(
                "Q{}: {}\nAnswer Summary: {}",
                index + 1,
                text(qs.question.as_deref()),
                text(qs.summary.as_deref())
            )
        })
        .collect();
    out.push_str(&blocks.join("\n\n"));
}

fn push_field(out: &mut String, label: &str, value: String) {
    out.push_str("- ");
    out.push_str(label);
    out.push_str(": ");
    out.push_str(&value);
    out.push('\n');
}

// Blank text is treated the same as a missing field.
fn text(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

fn with_unit<T: Display>(value: Option<T>, unit: &str) -> String {
    match value {
        Some(v) => format!("{}{}", v, unit),
        None => NOT_AVAILABLE.to_string(),
    }
}
