//! Prompt template for book information requests

/// Fields the model is asked to fill, in prompt order
pub const FIELD_LABELS: [&str; 7] = [
    "Author",
    "Genre",
    "Publication Year",
    "Summary",
    "Sales Information",
    "Similar Books",
    "Other Books by This Author",
];

/// Book information template; `{book_title}` is the only substitution slot
pub const BOOK_PROMPT: &str = r#"Provide detailed information about the book '{book_title}' in the following format:
Author:
Genre:
Publication Year:
Summary (200 words):
Sales Information:
- Approximate lifetime sales
- Notable sales achievements (bestseller lists, records, etc.)
Similar Books (3 recommendations):
Other Books by This Author (3-5 notable works):

Please ensure all information is accurate and well-formatted.
If exact sales figures are not available, provide best estimates and indicate this."#;

/// Prompt asking for information about `book_title`
#[allow(clippy::literal_string_with_formatting_args)]
pub fn book_prompt(book_title: &str) -> String {
    BOOK_PROMPT.replacen("{book_title}", book_title, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_has_single_slot() {
        assert_eq!(BOOK_PROMPT.matches("{book_title}").count(), 1);
    }

    #[test]
    fn test_prompt_contains_title_and_labels() {
        for title in ["1984", "Don Quixote", "The Hitchhiker's Guide to the Galaxy", "{book_title}"] {
            let prompt = book_prompt(title);
            assert!(prompt.contains(title), "missing title {title}");
            for label in FIELD_LABELS {
                assert!(prompt.contains(label), "missing label {label}");
            }
        }
    }

    #[test]
    fn test_prompt_asks_for_estimates() {
        let prompt = book_prompt("Dune");
        assert!(prompt.contains("Summary (200 words):"));
        assert!(prompt.contains("provide best estimates"));
        assert!(prompt.contains("Similar Books (3 recommendations):"));
        assert!(prompt.contains("(3-5 notable works)"));
    }
}
