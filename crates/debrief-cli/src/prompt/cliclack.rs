use std::io::{self, Write};

use anyhow::Result;
use bat::WrappingMode;
use cliclack::{input, spinner};
use console::style;
use debrief::models::message::Message;
use debrief::models::role::Role;

use super::{Input, Prompt, Theme};

pub struct CliclackPrompt {
    spinner: cliclack::ProgressBar,
    theme: Theme,
}

impl CliclackPrompt {
    pub fn new() -> Self {
        CliclackPrompt {
            spinner: spinner(),
            theme: Theme::Dark,
        }
    }
}

/// Render markdown through bat, falling back to plain text if highlighting fails
pub fn print_markdown(content: &str, theme: &str) {
    let printed = bat::PrettyPrinter::new()
        .input(bat::Input::from_bytes(content.as_bytes()))
        .theme(theme)
        .language("Markdown")
        .wrapping_mode(WrappingMode::Character)
        .print();
    if printed.is_err() {
        println!("{}", content);
    }
}

impl Prompt for CliclackPrompt {
    fn render(&mut self, message: &Message) {
        let theme = match self.theme {
            Theme::Light => "GitHub",
            Theme::Dark => "zenburn",
        };

        match message.role {
            Role::Assistant => print_markdown(message.text(), theme),
            Role::User => println!("{}", style(message.text()).dim()),
        }

        println!();
        let _ = io::stdout().flush();
    }

    fn show_busy(&mut self) {
        self.spinner = spinner();
        self.spinner.start("analyzing the interview");
    }

    fn hide_busy(&mut self) {
        self.spinner.stop("");
    }

    fn get_input(&mut self) -> Result<Input> {
        let message_text: String = input("Question:   [Help: /?]")
            .placeholder("")
            .required(false)
            .interact()?;
        let message_text = message_text.trim();

        if message_text.is_empty() {
            // Blank questions are never sent
            Ok(Input::ask_again())
        } else if message_text.eq_ignore_ascii_case("/exit")
            || message_text.eq_ignore_ascii_case("/quit")
            || message_text.eq_ignore_ascii_case("exit")
        {
            Ok(Input::exit())
        } else if message_text.eq_ignore_ascii_case("/t") {
            self.theme = match self.theme {
                Theme::Light => {
                    println!("Switching to Dark theme");
                    Theme::Dark
                }
                Theme::Dark => {
                    println!("Switching to Light theme");
                    Theme::Light
                }
            };
            Ok(Input::ask_again())
        } else if message_text.eq_ignore_ascii_case("/?") {
            println!("Commands:");
            println!("/exit - Exit the session");
            println!("/t - Toggle Light/Dark theme");
            println!("/? - Display this help message");
            Ok(Input::ask_again())
        } else {
            Ok(Input::message(message_text))
        }
    }

    fn close(&self) {
        // No cleanup required
    }
}
