mod interview;
mod prompt;
mod session;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use console::style;
use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use debrief::analyst::Analyst;
use debrief::insights::{skill_scores, word_distribution};
use debrief::models::interview::InterviewRecord;
use debrief::providers::configs::{OpenAiProviderConfig, OPENAI_HOST, OPENAI_MODEL};
use debrief::providers::openai::OpenAiProvider;
use interview::{load_interview, read_interview};
use prompt::cliclack::{print_markdown, CliclackPrompt};
use session::Session;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args)]
struct ProviderArgs {
    /// OpenAI API Key (can also be set via OPENAI_API_KEY environment variable)
    #[arg(long)]
    api_key: Option<String>,

    /// Model to use
    #[arg(short, long, default_value = OPENAI_MODEL)]
    model: String,

    /// Base URL of the chat completion endpoint
    #[arg(long, default_value = OPENAI_HOST)]
    host: String,
}

#[derive(Subcommand)]
enum Command {
    /// Ask questions about an interview in an interactive session
    Chat {
        /// Interview record (JSON)
        #[arg(short, long)]
        interview: PathBuf,

        #[command(flatten)]
        provider: ProviderArgs,
    },

    /// Answer a single question and exit
    Ask {
        /// Interview record (JSON)
        #[arg(short, long)]
        interview: PathBuf,

        /// The question to ask
        #[arg(short, long)]
        question: String,

        #[command(flatten)]
        provider: ProviderArgs,
    },

    /// Print derived skill scores and word counts
    Insights {
        /// Interview record (JSON)
        #[arg(short, long)]
        interview: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Chat {
            interview,
            provider,
        } => {
            let record = load_interview(&interview)?;
            let analyst = create_analyst(provider)?;
            let mut session = Session::new(analyst, record, Box::new(CliclackPrompt::new()));
            session.start().await?;
        }
        Command::Ask {
            interview,
            question,
            provider,
        } => {
            let record = load_interview(&interview)?;
            let analyst = create_analyst(provider)?;
            let answer = analyst.ask(&record, &question).await?;
            print_markdown(&answer, "zenburn");
        }
        Command::Insights { interview } => {
            let record = read_interview(&interview)?;
            print_insights(&record);
        }
    }
    Ok(())
}

fn create_analyst(args: ProviderArgs) -> Result<Analyst> {
    let api_key = args
        .api_key
        .or_else(|| env::var("OPENAI_API_KEY").ok())
        .context("API key must be provided via --api-key or OPENAI_API_KEY environment variable")?;

    let provider = OpenAiProvider::new(OpenAiProviderConfig {
        host: args.host,
        api_key,
        model: args.model,
    })?;
    Ok(Analyst::new(Arc::new(provider)))
}

fn print_insights(record: &InterviewRecord) {
    println!("{}", style("Skills").bold());
    for skill in skill_scores(record.analytics.as_ref(), record.call_analysis.as_ref()) {
        println!("  {:<14} {:>5.1}", skill.skill, skill.score);
    }

    println!();
    println!("{}", style("Words spoken").bold());
    for count in word_distribution(&record.transcript, record.candidate_name.as_deref()) {
        println!("  {:<14} {:>5}", count.label, count.value);
    }
}
