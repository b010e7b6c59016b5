use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug)]
pub struct HealthResponse {
    pub service: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookRecord {
    pub name: String,
    pub file_id: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct BookListResponse {
    #[serde(default)]
    pub books: Vec<BookRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_books_field_is_empty_list() {
        let parsed: BookListResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.books.is_empty());
    }

    #[test]
    fn test_file_id_is_optional() {
        let parsed: BookListResponse = serde_json::from_str(
            r#"{"books":[{"name":"Report.pdf"},{"name":"Notes.pdf","file_id":"abc"}]}"#,
        )
        .unwrap();

        assert_eq!(parsed.books.len(), 2);
        assert_eq!(parsed.books[0].file_id, None);
        assert_eq!(parsed.books[1].file_id.as_deref(), Some("abc"));
    }

    #[test]
    fn test_book_order_is_preserved() {
        let parsed: BookListResponse = serde_json::from_str(
            r#"{"books":[{"name":"b.pdf"},{"name":"a.pdf"},{"name":"c.pdf"}]}"#,
        )
        .unwrap();

        let names: Vec<&str> = parsed.books.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["b.pdf", "a.pdf", "c.pdf"]);
    }
}
