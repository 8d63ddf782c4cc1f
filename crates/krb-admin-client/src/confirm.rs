use std::io::{BufRead, Write};

use anyhow::Context as _;

/// Asks the user before something that can not be undone
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> anyhow::Result<bool>;
}

/// Prompts on stderr and reads the answer from stdin. Only `y` or `yes`
/// (any case) count as agreement.
#[derive(Debug, Default)]
pub struct StdinConfirm;

/// Used for `--yes`
#[derive(Debug, Default)]
pub struct AssumeYes;

impl Confirm for StdinConfirm {
    fn confirm(&mut self, prompt: &str) -> anyhow::Result<bool> {
        eprint!("{prompt} [y/N] ");
        std::io::stderr().flush().context("failed to show prompt")?;
        let mut answer = String::new();
        std::io::stdin()
            .lock()
            .read_line(&mut answer)
            .context("failed to read answer")?;
        Ok(is_yes(&answer))
    }
}

impl Confirm for AssumeYes {
    fn confirm(&mut self, prompt: &str) -> anyhow::Result<bool> {
        tracing::info!(prompt, "confirmation skipped");
        Ok(true)
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
