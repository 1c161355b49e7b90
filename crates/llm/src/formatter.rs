//! Line classification of free-text model replies
//!
//! Each non-blank line becomes one [`ResponseLine`]. There is no state carried
//! between lines and no check that the labels match the prompt's fields.

use serde::{Deserialize, Serialize};

/// Marker that starts a bullet line
pub const BULLET_MARKER: char = '-';

/// One display block of a model reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResponseLine {
    /// `label: content`, split at the first colon. `content` keeps its leading space.
    Header { label: String, content: String },

    /// Line starting with the bullet marker, verbatim
    Bullet { text: String },

    /// Anything else, verbatim
    Plain { text: String },
}

impl ResponseLine {
    /// Classify a single non-blank line
    pub fn classify(line: &str) -> Self {
        if line.starts_with(BULLET_MARKER) {
            return Self::Bullet {
                text: line.to_string(),
            };
        }

        match line.split_once(':') {
            Some((label, content)) => Self::Header {
                label: label.trim().to_string(),
                content: content.to_string(),
            },
            None => Self::Plain {
                text: line.to_string(),
            },
        }
    }

    /// Markdown rendering: `**Label**:content`, others verbatim
    pub fn to_markdown(&self) -> String {
        match self {
            Self::Header { label, content } => format!("**{}**:{}", label, content),
            Self::Bullet { text } | Self::Plain { text } => text.clone(),
        }
    }
}

/// Split a raw reply into display lines, skipping blank ones
pub fn format_response(raw: &str) -> Vec<ResponseLine> {
    raw.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty())
        .map(ResponseLine::classify)
        .collect()
}

/// Markdown document for a formatted reply, one block per line
pub fn render_markdown(lines: &[ResponseLine]) -> String {
    lines
        .iter()
        .map(ResponseLine::to_markdown)
        .collect::<Vec<_>>()
        .join("\n")
}

/// HTML fragment for a formatted reply. Consecutive bullets share one `<ul>`.
pub fn render_html(lines: &[ResponseLine]) -> String {
    let mut html = String::new();
    let mut in_list = false;

    for line in lines {
        let is_bullet = matches!(line, ResponseLine::Bullet { .. });
        if in_list && !is_bullet {
            html.push_str("</ul>\n");
            in_list = false;
        }

        match line {
            ResponseLine::Header { label, content } => {
                html.push_str(&format!(
                    "<p><strong>{}</strong>:{}</p>\n",
                    html_escape::encode_text(label),
                    html_escape::encode_text(content)
                ));
            }
            ResponseLine::Bullet { text } => {
                if !in_list {
                    html.push_str("<ul>\n");
                    in_list = true;
                }
                let item = text.trim_start_matches(BULLET_MARKER).trim_start();
                html.push_str(&format!("<li>{}</li>\n", html_escape::encode_text(item)));
            }
            ResponseLine::Plain { text } => {
                html.push_str(&format!("<p>{}</p>\n", html_escape::encode_text(text)));
            }
        }
    }

    if in_list {
        html.push_str("</ul>\n");
    }

    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(label: &str, content: &str) -> ResponseLine {
        ResponseLine::Header {
            label: label.to_string(),
            content: content.to_string(),
        }
    }

    fn bullet(text: &str) -> ResponseLine {
        ResponseLine::Bullet {
            text: text.to_string(),
        }
    }

    fn plain(text: &str) -> ResponseLine {
        ResponseLine::Plain {
            text: text.to_string(),
        }
    }

    #[test]
    fn test_three_kinds() {
        let lines = format_response("Author: George Orwell\n- Sold 30 million\nA classic.");
        assert_eq!(
            lines,
            vec![
                header("Author", " George Orwell"),
                bullet("- Sold 30 million"),
                plain("A classic."),
            ]
        );
    }

    #[test]
    fn test_blank_lines_skipped() {
        let lines = format_response("\n\nGenre: Dystopian\n   \n\t\nA classic.\n");
        assert_eq!(lines, vec![header("Genre", " Dystopian"), plain("A classic.")]);
        assert!(format_response("").is_empty());
        assert!(format_response(" \n \n").is_empty());
    }

    #[test]
    fn test_split_at_first_colon_only() {
        let lines = format_response("Publication Year: 1949: first edition");
        assert_eq!(lines, vec![header("Publication Year", " 1949: first edition")]);
    }

    #[test]
    fn test_bullet_with_colon_stays_bullet() {
        let lines = format_response("- Bestseller lists: NYT, Sunday Times");
        assert_eq!(lines, vec![bullet("- Bestseller lists: NYT, Sunday Times")]);
    }

    #[test]
    fn test_indented_bullet_is_not_a_bullet() {
        // Marker must be the first character of the raw line
        let lines = format_response("  - Approximate lifetime sales: 30 million");
        assert_eq!(lines, vec![header("- Approximate lifetime sales", " 30 million")]);

        let lines = format_response("  - Animal Farm");
        assert_eq!(lines, vec![plain("  - Animal Farm")]);
    }

    #[test]
    fn test_label_trimmed_and_empty_content() {
        let lines = format_response("  Sales Information :");
        assert_eq!(lines, vec![header("Sales Information", "")]);
    }

    #[test]
    fn test_crlf_lines() {
        let lines = format_response("Author: Frank Herbert\r\n\r\n- 20 million copies\r\n");
        assert_eq!(
            lines,
            vec![header("Author", " Frank Herbert"), bullet("- 20 million copies")]
        );
    }

    #[test]
    fn test_render_markdown() {
        let lines = format_response("Author: George Orwell\n- Sold 30 million\nA classic.");
        assert_eq!(
            render_markdown(&lines),
            "**Author**: George Orwell\n- Sold 30 million\nA classic."
        );
    }

    #[test]
    fn test_render_html_groups_bullets() {
        let lines = format_response("Sales Information:\n- 30 million\n- Time 100\nDone.");
        let html = render_html(&lines);
        assert_eq!(
            html,
            "<p><strong>Sales Information</strong>:</p>\n<ul>\n<li>30 million</li>\n<li>Time 100</li>\n</ul>\n<p>Done.</p>\n"
        );
    }

    #[test]
    fn test_render_html_escapes_model_text() {
        let lines = format_response("<b>Author</b>: <script>alert(1)</script>\n- a & b");
        let html = render_html(&lines);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("a &amp; b"));
        assert!(html.ends_with("</ul>\n"));
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(header("Author", " George Orwell")).unwrap();
        assert_eq!(json["kind"], "header");
        assert_eq!(json["label"], "Author");
        assert_eq!(json["content"], " George Orwell");
    }
}
