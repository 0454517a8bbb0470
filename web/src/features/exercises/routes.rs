use axum::{Router, routing::get};
use storage::Database;

use super::handlers::list_categories;

pub fn routes() -> Router<Database> {
    Router::new().route("/categories", get(list_categories))
}
