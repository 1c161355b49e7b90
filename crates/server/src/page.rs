//! Single-page HTML rendering

use bookinfo_llm::{render_html, LookupOutcome};
use html_escape::{encode_double_quoted_attribute, encode_text};

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; max-width: 46rem; margin: 2rem auto; padding: 0 1rem; color: #262730; }
form { display: flex; flex-direction: column; gap: 0.5rem; margin: 1.5rem 0; }
input[type=text] { padding: 0.5rem; font-size: 1rem; }
button, a.button { align-self: flex-start; padding: 0.4rem 1rem; border: 1px solid #ccc; border-radius: 0.4rem; background: #fff; color: inherit; text-decoration: none; cursor: pointer; }
.warning { background: #fffce7; border-radius: 0.4rem; padding: 0.8rem; }
.error { background: #ffecec; border-radius: 0.4rem; padding: 0.8rem; white-space: pre-line; }
.results { border: 1px solid #e6e6e6; border-radius: 0.4rem; padding: 0.5rem 1rem; margin-bottom: 1rem; }
footer { margin-top: 2rem; border-top: 1px solid #e6e6e6; padding-top: 0.5rem; font-style: italic; }
"#;

/// Submit button label while the model is answering
pub const PENDING_LABEL: &str = "Fetching book information using Ollama...";

/// The page with the form, optionally followed by a submission's outcome
pub fn render_page(title_value: &str, outcome: Option<&LookupOutcome>) -> String {
    let results = outcome.map(render_outcome).unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Book Information Assistant</title>
<style>{style}</style>
</head>
<body>
<h1>&#128218; Book Information Assistant</h1>
<p>Enter a book title to get detailed information including the author, genre,
sales figures, summary, similar book recommendations, and other works by the same author.</p>
<form method="post" action="/lookup" onsubmit="var b=this.querySelector('button');b.disabled=true;b.textContent='{pending}';">
<label for="book_title">Enter Book Title:</label>
<input type="text" id="book_title" name="book_title" placeholder="e.g., 1984" value="{title}">
<button type="submit">Get Information</button>
</form>
{results}<footer>Powered by Ollama</footer>
</body>
</html>
"#,
        style = STYLE,
        pending = PENDING_LABEL,
        title = encode_double_quoted_attribute(title_value),
        results = results,
    )
}

/// Results region for one outcome
pub fn render_outcome(outcome: &LookupOutcome) -> String {
    match outcome {
        LookupOutcome::Warning { message } => {
            format!("<div class=\"warning\">{}</div>\n", encode_text(message))
        }
        LookupOutcome::Error { message } => {
            format!("<div class=\"error\">{}</div>\n", encode_text(message))
        }
        // "Search Another Book" reloads the whole page rather than clearing in place
        LookupOutcome::Info { lines, .. } => format!(
            "<section class=\"results\">\n<h2>Book Information</h2>\n{}</section>\n<a class=\"button\" href=\"/\">Search Another Book</a>\n",
            render_html(lines)
        ),
    }
}
