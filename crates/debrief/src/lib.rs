pub mod analyst;
pub mod context;
pub mod conversation;
pub mod errors;
pub mod insights;
pub mod models;
pub mod prompt;
pub mod prompt_template;
pub mod providers;
pub mod transcript;
