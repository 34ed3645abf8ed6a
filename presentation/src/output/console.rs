//! Console output formatter for single-question mode

use crate::output::markup;
use colored::Colorize;
use medchat_domain::{AnswerResult, Conversation};

/// Formats a final answer for the terminal.
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Plain text: the answer followed by a sources block, if any.
    pub fn format_text(answer: &AnswerResult) -> String {
        let mut output = String::new();
        output.push_str(&answer.text);
        output.push('\n');

        if !answer.sources.is_empty() {
            output.push('\n');
            output.push_str(&format!("{}\n", "📚 Fonti:".cyan().bold()));
            for source in &answer.sources {
                output.push_str(&format!("  📎 {}: {}\n", source.label(), source.href()));
            }
        }

        output
    }

    /// Format as JSON
    pub fn format_json(answer: &AnswerResult) -> String {
        serde_json::to_string_pretty(answer).unwrap_or_else(|_| "{}".to_string())
    }

    /// The conversation rendered as sanitized HTML markup.
    pub fn format_html(conversation: &Conversation) -> String {
        markup::render_conversation(conversation)
    }
}
