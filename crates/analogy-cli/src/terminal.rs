//! Terminal stand-ins for the browser facilities the form uses.

use analogy_core::form::{clipboard_unavailable, Environment, Notice, NoticeLevel};
use analogy_core::{AnalogyError, AnalogyResult};
use base64::Engine;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{IsTerminal, Write};
use std::sync::Mutex;
use std::time::Duration;

#[derive(Default)]
pub struct TerminalEnvironment {
    spinner: Mutex<Option<ProgressBar>>,
}

impl Environment for TerminalEnvironment {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Success => println!("{} {}", "✓".green().bold(), notice.message),
            NoticeLevel::Error => eprintln!("{} {}", "✗".red().bold(), notice.message),
        }
    }

    fn open_url(&self, url: &str) -> AnalogyResult<()> {
        open::that(url).map_err(|e| AnalogyError::environment(e.to_string()))
    }

    /// Writes through the OSC 52 escape sequence, which most terminal
    /// emulators forward to the system clipboard.
    fn write_clipboard(&self, text: &str) -> AnalogyResult<()> {
        let mut stdout = std::io::stdout();
        if !stdout.is_terminal() {
            return Err(clipboard_unavailable());
        }
        let encoded = base64::engine::general_purpose::STANDARD.encode(text);
        write!(stdout, "\x1b]52;c;{}\x07", encoded)?;
        stdout.flush()?;
        Ok(())
    }

    fn busy_changed(&self, busy: bool) {
        let Ok(mut spinner) = self.spinner.lock() else {
            return;
        };
        if busy {
            let bar = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
                bar.set_style(style);
            }
            bar.set_message("Generating...");
            bar.enable_steady_tick(Duration::from_millis(80));
            *spinner = Some(bar);
        } else if let Some(bar) = spinner.take() {
            bar.finish_and_clear();
        }
    }
}
