// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Interactive demo. Type, use the emacs bindings, press `Tab` to complete a word from a
//! small vocabulary and `Enter` to submit. `Ctrl+C` exits.
//!
//! ```text
//! cargo run --bin line_editor_demo -- --latency-ms 500
//! tail -f line_editor_demo.log
//! ```

use std::{io::{Write, stdout},
          time::Duration};

use clap::Parser;
use crossterm::{QueueableCommand,
                cursor::MoveToColumn,
                event::{Event, EventStream, KeyCode, KeyEvent, KeyModifiers},
                style::Print,
                terminal::{Clear, ClearType, disable_raw_mode, enable_raw_mode}};
use miette::IntoDiagnostic;
use r3bl_line_editor::{CompletionProvider, Editor, EditorConfig, EditorDriver,
                       HISTORY_SIZE_MAX, LineSnapshot, PinnedFuture, SubmitHandler,
                       TracingConfig, init_tracing};
use tracing_core::LevelFilter;

const VOCABULARY: &[&str] = &[
    "activate", "backward", "buffer", "complete", "cursor", "deactivate", "forward",
    "history", "kill", "refresh", "submit", "yank",
];

#[derive(Debug, Parser)]
#[command(bin_name = "line_editor_demo")]
#[command(about = "Try out the line editor in your terminal")]
#[command(version)]
struct CLIArg {
    #[arg(long, default_value = "line_editor_demo.log", help = "File to write logs to")]
    log_file: String,

    #[arg(long, default_value_t = LevelFilter::DEBUG, help = "off, error, warn, info, debug or trace")]
    log_level: LevelFilter,

    #[arg(
        long,
        default_value_t = 250,
        help = "Simulated delay for completion and submission, in milliseconds"
    )]
    latency_ms: u64,

    #[arg(long, default_value_t = HISTORY_SIZE_MAX, help = "Number of submitted lines to remember")]
    history_size: usize,

    #[arg(long, default_value = "> ")]
    prompt: String,
}

// `tokio::main` expands to an `.expect()` on runtime creation.
#[tokio::main]
#[allow(clippy::unwrap_in_result)]
async fn main() -> miette::Result<()> {
    let cli_arg = CLIArg::parse();

    init_tracing(
        TracingConfig::new_file(Some(cli_arg.log_file.clone()))
            .with_level_filter(cli_arg.log_level),
    )?;
    tracing::info!(?cli_arg, "start");

    let latency = Duration::from_millis(cli_arg.latency_ms);
    let prompt = cli_arg.prompt;

    let mut editor = Editor::new(EditorConfig {
        history_max_size: cli_arg.history_size,
        start_active: true,
    });
    let render_prompt = prompt.clone();
    editor.on_change(move |line| render_line(&render_prompt, line));

    let _raw_mode = RawMode::start()?;
    render_line(&prompt, &LineSnapshot::default());

    let mut driver = EditorDriver::new(editor, Box::pin(EventStream::new()))
        .with_completion_provider(VocabularyCompletion { latency })
        .with_submit_handler(EchoSubmit { latency, prompt });

    while let Some(event) = driver.next_unhandled().await? {
        if is_ctrl_c(&event) {
            break;
        }
        tracing::trace!(?event, "ignored");
    }

    tracing::info!(history = ?driver.editor().history().entries(), "exit");
    Ok(())
}

fn is_ctrl_c(event: &Event) -> bool {
    matches!(
        event,
        Event::Key(KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        })
    )
}

/// Redraw the whole line and put the terminal cursor where the editor's cursor is.
fn render_line(prompt: &str, line: &LineSnapshot) {
    let column = prompt.chars().count() + line.cursor;
    let column = u16::try_from(column).unwrap_or(u16::MAX);

    let mut stdout = stdout();
    let result = stdout
        .queue(MoveToColumn(0))
        .and_then(|it| it.queue(Clear(ClearType::CurrentLine)))
        .and_then(|it| it.queue(Print(prompt)))
        .and_then(|it| it.queue(Print(&line.text)))
        .and_then(|it| it.queue(MoveToColumn(column)))
        .and_then(|it| it.flush());

    if let Err(error) = result {
        tracing::warn!(%error, "render failed");
    }
}

/// Restores cooked mode when dropped.
#[derive(Debug)]
struct RawMode;

impl RawMode {
    fn start() -> miette::Result<Self> {
        enable_raw_mode().into_diagnostic()?;
        Ok(Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        _ = disable_raw_mode();
        println!();
    }
}

/// Completes the word before the cursor with the first vocabulary word it prefixes.
#[derive(Debug)]
struct VocabularyCompletion {
    latency: Duration,
}

impl CompletionProvider for VocabularyCompletion {
    fn complete(&mut self, line: LineSnapshot) -> PinnedFuture<Option<String>> {
        let latency = self.latency;
        Box::pin(async move {
            tokio::time::sleep(latency).await;
            let before_cursor: String = line.text.chars().take(line.cursor).collect();
            let prefix = before_cursor.rsplit(' ').next().unwrap_or_default();
            complete_word(prefix).map(str::to_string)
        })
    }

    fn session_ended(&mut self) { tracing::debug!("completion session ended"); }
}

fn complete_word(prefix: &str) -> Option<&'static str> {
    if prefix.is_empty() {
        return None;
    }
    VOCABULARY
        .iter()
        .copied()
        .find(|word| word.len() > prefix.len() && word.starts_with(prefix))
        .map(|word| &word[prefix.len()..])
}

/// Prints each submitted line above a fresh prompt.
#[derive(Debug)]
struct EchoSubmit {
    latency: Duration,
    prompt: String,
}

impl SubmitHandler for EchoSubmit {
    fn submit(&mut self, text: String, line: LineSnapshot) -> PinnedFuture<()> {
        let latency = self.latency;
        let prompt = self.prompt.clone();
        Box::pin(async move {
            tokio::time::sleep(latency).await;
            let mut stdout = stdout();
            let result = stdout
                .queue(MoveToColumn(0))
                .and_then(|it| it.queue(Clear(ClearType::CurrentLine)))
                .and_then(|it| it.queue(Print(format!("you typed: {text}\r\n"))));
            if let Err(error) = result {
                tracing::warn!(%error, "echo failed");
            }
            render_line(&prompt, &line);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_complete_word() {
        assert_eq!(complete_word("hist"), Some("ory"));
        assert_eq!(complete_word("b"), Some("ackward"));
        assert_eq!(complete_word("yank"), None);
        assert_eq!(complete_word("zzz"), None);
        assert_eq!(complete_word(""), None);
    }
}
