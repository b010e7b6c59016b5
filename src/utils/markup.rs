use crate::models::responses::BookRecord;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters kept verbatim when a book name becomes a path segment. Matches
/// the component encoding the viewer page expects for its filename segment.
const PATH_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, PATH_COMPONENT).to_string()
}

/// Book names come from the backend unvalidated and must never reach the
/// markup unescaped.
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Navigation target for one book: `file_id` is appended only when the
/// record carries one.
pub fn view_href(user_id: i64, book: &BookRecord) -> String {
    let encoded_name = encode_component(&book.name);
    match &book.file_id {
        Some(file_id) => format!(
            "/view/{}?user_id={}&file_id={}",
            encoded_name, user_id, file_id
        ),
        None => format!("/view/{}?user_id={}", encoded_name, user_id),
    }
}

pub fn render_unauthenticated() -> String {
    r#"<div class="no-books">
  <h3>🔐 Authorization required</h3>
  <p>Open this app through the Telegram bot to access your books.</p>
</div>"#
        .to_string()
}

pub fn render_empty(user_id: i64) -> String {
    format!(
        r#"<div class="no-books">
  <h3>📖 You have no books yet</h3>
  <p>Use the <b>📤 Upload book</b> button in the bot to add PDF files.</p>
  <p><small>Your ID: {}</small></p>
</div>"#,
        user_id
    )
}

pub fn render_book_list(user_id: i64, books: &[BookRecord]) -> String {
    let mut items = String::new();
    for book in books {
        items.push_str(&format!(
            "    <li><a href=\"{}\" class=\"book-item\">📄 {}</a></li>\n",
            view_href(user_id, book),
            escape_html(&book.name)
        ));
    }

    format!(
        r#"<ul class="book-list">
{}  </ul>
  <div class="user-id-note">Your ID: {}</div>"#,
        items, user_id
    )
}

pub fn render_error() -> String {
    r#"<div class="no-books">
  <h3>❌ Load failure</h3>
  <p>Could not load your book list. Try again later.</p>
</div>"#
        .to_string()
}

/// Full document shell around a rendered content region.
pub fn page(content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>My Books</title>
  <style>
    body {{ font-family: -apple-system, sans-serif; margin: 0; padding: 16px; }}
    h1 {{ font-size: 20px; }}
    .book-list {{ list-style: none; padding: 0; }}
    .book-item {{ display: block; padding: 12px; margin-bottom: 8px;
                  border-radius: 8px; background: #f3f4f6; text-decoration: none; }}
    .no-books {{ text-align: center; margin-top: 40px; color: #374151; }}
    .user-id-note {{ text-align: center; margin-top: 20px; color: #6b7280; font-size: 12px; }}
  </style>
</head>
<body>
  <h1>📚 My Books</h1>
  <div id="content">
{}
  </div>
</body>
</html>"#,
        content
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(name: &str, file_id: Option<&str>) -> BookRecord {
        BookRecord {
            name: name.to_string(),
            file_id: file_id.map(|id| id.to_string()),
        }
    }

    #[test]
    fn test_empty_state_names_the_user() {
        let html = render_empty(42);
        assert!(html.contains("42"));
        assert!(html.contains("no books yet"));
        assert!(!html.contains("<li>"));
    }

    #[test]
    fn test_single_book_without_file_id() {
        let html = render_book_list(7, &[book("Report.pdf", None)]);
        assert_eq!(html.matches("<li>").count(), 1);
        assert!(html.contains(r#"href="/view/Report.pdf?user_id=7""#));
        assert!(!html.contains("file_id"));
    }

    #[test]
    fn test_book_name_is_percent_encoded_and_file_id_appended() {
        let html = render_book_list(7, &[book("A B.pdf", Some("abc"))]);
        assert!(html.contains(r#"href="/view/A%20B.pdf?user_id=7&file_id=abc""#));
    }

    #[test]
    fn test_book_name_is_escaped_in_label() {
        let html = render_book_list(7, &[book("<b>sneaky</b>.pdf", None)]);
        assert!(html.contains("&lt;b&gt;sneaky&lt;/b&gt;.pdf"));
        assert!(!html.contains("<b>sneaky</b>"));
    }

    #[test]
    fn test_backend_order_is_preserved() {
        let html = render_book_list(7, &[book("z.pdf", None), book("a.pdf", None)]);
        let z = html.find("z.pdf").unwrap();
        let a = html.find("a.pdf").unwrap();
        assert!(z < a);
    }

    #[test]
    fn test_render_is_idempotent() {
        let books = [book("Report.pdf", Some("abc")), book("Notes.pdf", None)];
        assert_eq!(render_book_list(7, &books), render_book_list(7, &books));
        assert_eq!(render_empty(42), render_empty(42));
        assert_eq!(render_unauthenticated(), render_unauthenticated());
    }

    #[test]
    fn test_encode_component_matches_component_rules() {
        assert_eq!(encode_component("Report.pdf"), "Report.pdf");
        assert_eq!(encode_component("A B.pdf"), "A%20B.pdf");
        assert_eq!(encode_component("a&b?.pdf"), "a%26b%3F.pdf");
    }

    #[test]
    fn test_escape_html_covers_the_five_entities() {
        assert_eq!(
            escape_html(r#"<a href="x">&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_page_wraps_content_region() {
        let html = page("MARKER");
        assert!(html.contains(r#"<div id="content">"#));
        assert!(html.contains("MARKER"));
    }
}
