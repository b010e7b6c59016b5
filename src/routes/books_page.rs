use crate::models::host::HostContainer;
use crate::models::responses::BookRecord;
use crate::services::books::{BooksApi, LoadError};
use crate::utils::identity::resolve_user_id;
use crate::utils::markup::{
    page, render_book_list, render_empty, render_error, render_unauthenticated,
};
use axum::extract::{RawQuery, State};
use axum::response::Html;
use std::sync::Arc;
use tracing::error;

pub type SharedBooksApi = Arc<dyn BooksApi + Send + Sync>;
pub type SharedHost = Arc<dyn HostContainer>;

#[derive(Clone)]
pub struct AppState {
    pub books: SharedBooksApi,
    pub host: Option<SharedHost>,
}

/// One complete load sequence per request: resolve identity, fetch, render.
/// Every failure is absorbed here; the response is always a rendered page.
pub async fn book_list_page(
    RawQuery(query): RawQuery,
    State(state): State<AppState>,
) -> Html<String> {
    let query = query.unwrap_or_default();

    match load_books(&query, &state).await {
        Ok(content) => Html(page(&content)),
        Err(e) => {
            error!("Failed to load book list: {}", e);
            Html(page(&render_error()))
        }
    }
}

async fn load_books(query: &str, state: &AppState) -> Result<String, LoadError> {
    let user_id = resolve_user_id(query, state.host.as_deref());

    let books: Vec<BookRecord> = match user_id {
        Some(user_id) => state.books.list_books(user_id).await?,
        None => Vec::new(),
    };

    let content = match user_id {
        None => render_unauthenticated(),
        Some(user_id) if books.is_empty() => render_empty(user_id),
        Some(user_id) => render_book_list(user_id, &books),
    };

    Ok(content)
}
