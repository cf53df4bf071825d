use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use tracing::info;

use crate::database::{connect, DatabaseError};
use crate::models::Book;
use crate::repo::BookRepository;

#[derive(Clone)]
struct AppState {
    database_url: String,
}

pub fn build_app(database_url: String) -> Router {
    Router::new()
        .route("/books", get(list_books))
        .with_state(AppState { database_url })
}

/// Opens a connection for this request only
async fn list_books(
    State(state): State<AppState>,
) -> Result<Json<Vec<Book>>, (StatusCode, String)> {
    let mut conn = connect(&state.database_url)
        .await
        .map_err(database_error)?;

    let results = BookRepository::new(&mut conn)
        .all()
        .await
        .map_err(database_error)?;

    info!("Retrieved {} books from the DB", results.len());

    Ok(Json(results))
}

/// Build a 503 response for connection problems and a 500 for everything else
fn database_error(err: DatabaseError) -> (StatusCode, String) {
    let status = if err.is_connection_error() {
        StatusCode::SERVICE_UNAVAILABLE
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (status, err.to_string())
}
