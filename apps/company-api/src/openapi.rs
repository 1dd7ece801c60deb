//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Base OpenAPI metadata (info, servers, tags) for the combined API.
///
/// The domain `ApiDoc`s are merged at the root with no path prefix (see
/// [`ApiDoc`]). utoipa's derive `nest(...)` rejects an empty `path`, so the
/// empty-prefix merge is performed at runtime instead, producing the same
/// flat, root-level paths the handlers declare.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Company Management API",
        version = "0.1.0",
        description = "Firestore-backed REST API for managing companies, tasks, and task templates",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    tags(
        (name = "Companies", description = "Company management endpoints (Firestore)"),
        (name = "Tasks", description = "Task management endpoints (Firestore)"),
        (name = "Templates", description = "Task template endpoints, including fan-out assignment")
    )
)]
struct ApiDocBase;

/// Combined OpenAPI documentation for all APIs
pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        ApiDocBase::openapi()
            .nest("", domain_companies::ApiDoc::openapi())
            .nest("", domain_tasks::ApiDoc::openapi())
            .nest("", domain_templates::ApiDoc::openapi())
    }
}
