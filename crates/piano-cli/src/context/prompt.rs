use std::io::{BufRead, Write};

use piano_api::{AlwaysConfirm, Confirm};

/// How delete confirmations are answered.
#[derive(Debug, Clone)]
pub enum Prompter {
    /// `--yes`: never ask.
    AssumeYes,
    /// Ask on stderr, read the answer from stdin. `hint` follows the question
    /// (e.g. `[y/N]`).
    Stdin { hint: String },
}

impl Confirm for Prompter {
    async fn confirm(&self, prompt: &str) -> bool {
        match self {
            Self::AssumeYes => AlwaysConfirm.confirm(prompt).await,
            Self::Stdin { hint } => {
                let question = format!("{prompt} {hint} ");
                tokio::task::spawn_blocking(move || ask(&question))
                    .await
                    .unwrap_or_else(|error| {
                        tracing::warn!(%error, "confirmation prompt failed; treating as no");
                        false
                    })
            }
        }
    }
}

fn ask(question: &str) -> bool {
    let mut stderr = std::io::stderr().lock();
    let _ = write!(stderr, "{question}");
    let _ = stderr.flush();

    let mut line = String::new();
    match std::io::stdin().lock().read_line(&mut line) {
        Ok(_) => is_yes(&line),
        Err(error) => {
            tracing::warn!(%error, "could not read confirmation; treating as no");
            false
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes" | "是" | "确定"
    )
}
