//! Terminal implementation of the conversation view.

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use medchat_application::ConversationView;
use medchat_domain::{Conversation, Source};
use std::sync::Mutex;
use std::time::Duration;

/// Renders the conversation to the terminal as it grows.
///
/// Also keeps the append-only [`Conversation`] log, so the transcript can be
/// formatted again later (e.g. as HTML). Printing an entry when it is
/// appended is the terminal's version of scrolling to the newest message.
pub struct TerminalView {
    conversation: Mutex<Conversation>,
    spinner: Mutex<Option<ProgressBar>>,
    show_spinner: bool,
}

impl TerminalView {
    pub fn new() -> Self {
        Self {
            conversation: Mutex::new(Conversation::new()),
            spinner: Mutex::new(None),
            show_spinner: true,
        }
    }

    /// Disable the busy spinner (for --quiet).
    pub fn with_spinner(mut self, show: bool) -> Self {
        self.show_spinner = show;
        self
    }

    /// Snapshot of the conversation log so far.
    pub fn conversation(&self) -> Conversation {
        self.conversation.lock().unwrap().clone()
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap()
    }
}

impl Default for TerminalView {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationView for TerminalView {
    fn on_user_message(&self, text: &str) {
        self.conversation.lock().unwrap().push_user(text);

        println!();
        println!("{}", "👤 Tu:".cyan().bold());
        for line in text.lines() {
            println!("  {line}");
        }
    }

    fn on_agent_message(&self, text: &str, sources: &[Source]) {
        self.conversation
            .lock()
            .unwrap()
            .push_agent(text, sources.to_vec());

        println!();
        println!("{}", "🤖 Agente:".green().bold());
        for line in text.lines() {
            println!("  {line}");
        }
        if !sources.is_empty() {
            println!();
            println!("  {}", "📚 Fonti:".cyan().bold());
            for source in sources {
                println!("    📎 {}: {}", source.label(), source.href());
            }
        }
    }

    fn on_error(&self, message: &str) {
        eprintln!();
        eprintln!("{} {}", "⚠".red().bold(), message.red());
    }

    fn on_busy_start(&self) {
        if !self.show_spinner {
            return;
        }
        let bar = ProgressBar::new_spinner();
        bar.set_style(Self::spinner_style());
        bar.set_message("Sto elaborando la tua domanda...");
        bar.enable_steady_tick(Duration::from_millis(100));
        *self.spinner.lock().unwrap() = Some(bar);
    }

    fn on_busy_end(&self) {
        if let Some(bar) = self.spinner.lock().unwrap().take() {
            bar.finish_and_clear();
        }
    }
}
