//! These models represent the objects passed around by the analyst
//!
//! There are a few related formats we need to interact with:
//! - interview records, supplied by whatever stored the completed call
//! - conversation messages, kept by the caller for display
//! - openai messages, sent from the dispatcher to the LLM
//!
//! Interview records keep the field names of the payloads they arrive in (camelCase for
//! analytics, snake_case for call analysis) so they can be deserialized without translation.
pub mod analytics;
pub mod call_analysis;
pub mod interview;
pub mod message;
pub mod role;
