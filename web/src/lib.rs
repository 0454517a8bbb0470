use axum::Router;
use storage::Database;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod error;
pub mod features;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Fit API",
        version = "1.0.0",
        description = "API documentation for the Fitness Tracking application"
    ),
    paths(
        features::health::handlers::health,
        features::exercises::handlers::list_categories,
        features::records::handlers::create_record,
        features::records::handlers::list_records,
        features::records::handlers::sync_records,
        features::records::handlers::update_record,
        features::records::handlers::delete_record,
    ),
    components(
        schemas(
            features::health::handlers::HealthResponse,
            storage::dto::exercise::CategoryWithExercises,
            storage::dto::record::RawNumber,
            storage::dto::record::CreateRecordRequest,
            storage::dto::record::UpdateRecordRequest,
            storage::dto::record::SyncRecordsRequest,
            storage::dto::record::SyncRecordsResponse,
            storage::dto::record::DeleteRecordResponse,
            storage::dto::record::RecordResponse,
            storage::dto::record::ExerciseInfo,
            storage::dto::record::CategoryInfo,
            storage::models::Category,
            storage::models::Exercise,
            storage::models::WorkoutRecord,
        )
    ),
    tags(
        (name = "health", description = "Service health endpoints"),
        (name = "exercises", description = "Exercise catalog endpoints"),
        (name = "records", description = "Workout record endpoints"),
    )
)]
pub struct ApiDoc;

/// Build the application router: feature routes, Swagger UI and CORS,
/// with the database handle as shared state.
pub fn app(db: Database) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(features::health::routes::routes())
        .nest("/api/exercises", features::exercises::routes::routes())
        .nest("/api/records", features::records::routes::routes())
        .layer(cors)
        .with_state(db)
}
