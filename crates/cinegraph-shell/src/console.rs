//! Line-oriented console the shell prompts through.

use dialoguer::Input;

use crate::error::{Result, ShellError};

/// Prompt-and-answer I/O. Blocking by nature: every answer is user-paced.
pub trait Console {
    /// Show `prompt` and read one line. `InputClosed` once no more input can arrive.
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    /// Print a block of text.
    fn say(&mut self, text: &str);
}

/// The interactive terminal.
#[derive(Debug, Default)]
pub struct TerminalConsole;

impl Console for TerminalConsole {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| {
                tracing::debug!(error = %e, "Console input closed");
                ShellError::InputClosed
            })
    }

    fn say(&mut self, text: &str) {
        println!("{text}");
    }
}
