//! Sanitized HTML rendering of the conversation.
//!
//! This is a security boundary: [`escape_html`] runs before every other
//! transformation, and the linkifier only wraps text that has already been
//! escaped, so user or backend content can never become live markup.

use medchat_domain::{Conversation, Message, MessageRole, Source};
use regex::{Captures, Regex};
use std::sync::LazyLock;

// A URL run ends at whitespace or a raw `<`. Escaped text contains no raw
// `<`, so in practice the run ends at whitespace or at an inserted <br>.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"https?://[^\s<]+").unwrap());

/// Escape every character with special meaning in HTML.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Turn raw text into display-ready markup: escape, then line breaks, then
/// clickable links. Single pass; input must be raw (unescaped) text.
pub fn format_text(text: &str) -> String {
    let escaped = escape_html(text);
    let with_breaks = escaped.replace('\n', "<br>");
    linkify(&with_breaks)
}

fn linkify(escaped: &str) -> String {
    URL_PATTERN
        .replace_all(escaped, |caps: &Captures<'_>| {
            let url = &caps[0];
            format!(
                "<a href=\"{url}\" target=\"_blank\" rel=\"noopener noreferrer\" \
                 class=\"message__link\">{url}</a>"
            )
        })
        .into_owned()
}

/// Render one citation as a link. Label and href are escaped, never
/// linkified, since the entry is already structured as a link.
pub fn render_source_link(source: &Source) -> String {
    let title = escape_html(source.label());
    let url = escape_html(source.href());
    format!(
        "<a href=\"{url}\" target=\"_blank\" rel=\"noopener noreferrer\" \
         class=\"message__source-link\">📎 {title}</a>"
    )
}

/// Render the titled sources block, or nothing when there are no sources.
pub fn render_sources(sources: &[Source]) -> String {
    if sources.is_empty() {
        return String::new();
    }
    let links: String = sources.iter().map(render_source_link).collect();
    format!(
        "<div class=\"message__sources\">\
         <div class=\"message__sources-title\">📚 Fonti:</div>{links}</div>"
    )
}

/// Render one message bubble with its avatar and optional sources.
pub fn render_message(message: &Message) -> String {
    let (class, avatar) = match message.role {
        MessageRole::User => ("message--user", "👤"),
        MessageRole::Agent => ("message--agent", "🤖"),
    };
    let body = format_text(&message.text);
    let sources = render_sources(&message.sources);
    format!(
        "<div class=\"message {class}\">\
         <div class=\"message__avatar\">{avatar}</div>\
         <div class=\"message__content\">\
         <div class=\"message__bubble\">{body}{sources}</div></div></div>"
    )
}

/// Render the whole conversation log, oldest first.
pub fn render_conversation(conversation: &Conversation) -> String {
    conversation
        .messages()
        .iter()
        .map(render_message)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_covers_all_special_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">&'"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;"
        );
    }

    #[test]
    fn test_plain_text_passes_through_unchanged() {
        assert_eq!(format_text("ciao mondo"), "ciao mondo");
    }

    #[test]
    fn test_injected_markup_is_inert() {
        let formatted = format_text("<script>alert('x')</script>");
        assert!(!formatted.contains("<script"));
        assert!(formatted.starts_with("&lt;script&gt;"));
    }

    #[test]
    fn test_newlines_become_breaks() {
        assert_eq!(format_text("riga uno\nriga due"), "riga uno<br>riga due");
    }

    #[test]
    fn test_urls_become_links_that_open_safely() {
        let formatted = format_text("vedi https://example.org/a?b=1 per i dettagli");
        assert!(formatted.contains(
            "<a href=\"https://example.org/a?b=1\" target=\"_blank\" \
             rel=\"noopener noreferrer\" class=\"message__link\">https://example.org/a?b=1</a>"
        ));
        assert!(formatted.ends_with(" per i dettagli"));
    }

    #[test]
    fn test_url_stops_at_an_inserted_line_break() {
        let formatted = format_text("https://example.org\nseconda riga");
        assert!(formatted.contains("href=\"https://example.org\""));
        assert!(formatted.contains("</a><br>seconda riga"));
    }

    #[test]
    fn test_escaping_precedes_linkification() {
        // Markup smuggled inside a URL is escaped before the linkifier runs,
        // so the wrapped text carries entities, never raw tags.
        let formatted = format_text("https://x.it/<script>");
        assert!(!formatted.contains("<script"));
        assert!(formatted.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_source_link_with_title_and_url() {
        let link = render_source_link(&Source::new("WHO", "https://x"));
        assert_eq!(
            link,
            "<a href=\"https://x\" target=\"_blank\" rel=\"noopener noreferrer\" \
             class=\"message__source-link\">📎 WHO</a>"
        );
    }

    #[test]
    fn test_source_link_fallbacks() {
        let url_only = Source {
            title: None,
            url: Some("https://y".to_string()),
        };
        assert!(render_source_link(&url_only).contains("📎 https://y"));

        let bare = Source::default();
        let link = render_source_link(&bare);
        assert!(link.contains("href=\"#\""));
        assert!(link.contains("📎 Fonte"));
    }

    #[test]
    fn test_source_fields_are_escaped_not_linkified() {
        let sneaky = Source::new("<b>titolo</b>", "https://x/\"quoted\"");
        let link = render_source_link(&sneaky);
        assert!(!link.contains("<b>"));
        assert!(link.contains("&lt;b&gt;titolo&lt;/b&gt;"));
        assert!(link.contains("https://x/&quot;quoted&quot;"));
        // Exactly the one anchor produced by the template
        assert_eq!(link.matches("<a ").count(), 1);
    }

    #[test]
    fn test_sources_block_only_when_non_empty() {
        assert_eq!(render_sources(&[]), "");
        let block = render_sources(&[Source::new("WHO", "https://x")]);
        assert!(block.contains("📚 Fonti:"));
        assert_eq!(block.matches("<a ").count(), 1);
    }

    #[test]
    fn test_conversation_rendering_keeps_roles_and_order() {
        let mut conversation = Conversation::new();
        conversation.push_user("Che cos'è l'ipertensione?");
        conversation.push_agent("Una condizione...", vec![Source::new("WHO", "https://x")]);

        let html = render_conversation(&conversation);
        let user_at = html.find("message--user").unwrap();
        let agent_at = html.find("message--agent").unwrap();
        assert!(user_at < agent_at);
        assert!(html.contains("message__sources"));
    }
}
