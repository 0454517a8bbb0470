use axum::{
    Router,
    routing::{delete, get, post, put},
};
use storage::Database;

use super::handlers::{create_record, delete_record, list_records, sync_records, update_record};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_records))
        .route("/", post(create_record))
        .route("/batch", post(sync_records))
        .route("/:id", put(update_record))
        .route("/:id", delete(delete_record))
}
