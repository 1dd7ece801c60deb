use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
};
use axum_helpers::{
    UuidPath, ValidatedJson,
    errors::responses::{
        BadRequestUuidResponse, ForbiddenResponse, InternalServerErrorResponse, NotFoundResponse,
        ServiceUnavailableResponse, ValidationErrorResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use domain_companies::CompanyRepository;
use domain_tasks::{Task, TaskRepository};

use crate::error::TemplateResult;
use crate::models::{AssignTemplate, CreateTemplate, TaskTemplate, TemplateAssignment};
use crate::repository::TemplateRepository;
use crate::service::TemplateService;

/// OpenAPI documentation for the Templates API
#[derive(OpenApi)]
#[openapi(
    paths(list_templates, create_template, delete_template, assign_template),
    components(
        schemas(TaskTemplate, CreateTemplate, AssignTemplate, TemplateAssignment, Task),
        responses(
            NotFoundResponse,
            ValidationErrorResponse,
            BadRequestUuidResponse,
            ForbiddenResponse,
            ServiceUnavailableResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Templates", description = "Task template endpoints, including fan-out assignment (Firestore)")
    )
)]
pub struct ApiDoc;

/// Create the templates router with all HTTP endpoints.
pub fn router<T, C, K>(service: TemplateService<T, C, K>) -> Router
where
    T: TemplateRepository + 'static,
    C: CompanyRepository + 'static,
    K: TaskRepository + 'static,
{
    let shared_service = Arc::new(service);

    Router::new()
        .route("/getall_templates", get(list_templates))
        .route("/create_template", post(create_template))
        .route("/delete_template/{id}", delete(delete_template))
        .route("/assign_template/{id}", post(assign_template))
        .with_state(shared_service)
}

/// List all templates
#[utoipa::path(
    get,
    path = "/getall_templates",
    tag = "Templates",
    responses(
        (status = 200, description = "List of templates", body = Vec<TaskTemplate>),
        (status = 403, response = ForbiddenResponse),
        (status = 503, response = ServiceUnavailableResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_templates<T, C, K>(
    State(service): State<Arc<TemplateService<T, C, K>>>,
) -> TemplateResult<Json<Vec<TaskTemplate>>>
where
    T: TemplateRepository,
    C: CompanyRepository,
    K: TaskRepository,
{
    let templates = service.list_templates().await?;
    Ok(Json(templates))
}

/// Create a new template
#[utoipa::path(
    post,
    path = "/create_template",
    tag = "Templates",
    request_body = CreateTemplate,
    responses(
        (status = 201, description = "Template created successfully", body = TaskTemplate),
        (status = 422, response = ValidationErrorResponse),
        (status = 503, response = ServiceUnavailableResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_template<T, C, K>(
    State(service): State<Arc<TemplateService<T, C, K>>>,
    ValidatedJson(input): ValidatedJson<CreateTemplate>,
) -> TemplateResult<impl IntoResponse>
where
    T: TemplateRepository,
    C: CompanyRepository,
    K: TaskRepository,
{
    let template = service.create_template(input).await?;
    Ok((StatusCode::CREATED, Json(template)))
}

/// Delete a template
#[utoipa::path(
    delete,
    path = "/delete_template/{id}",
    tag = "Templates",
    params(
        ("id" = Uuid, Path, description = "Template ID")
    ),
    responses(
        (status = 204, description = "Template deleted successfully"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 503, response = ServiceUnavailableResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_template<T, C, K>(
    State(service): State<Arc<TemplateService<T, C, K>>>,
    UuidPath(id): UuidPath,
) -> TemplateResult<impl IntoResponse>
where
    T: TemplateRepository,
    C: CompanyRepository,
    K: TaskRepository,
{
    service.delete_template(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Assign a template to a set of companies
///
/// Creates one task per existing target company, copying the template's
/// title and description. Unknown companies are reported as skipped, and
/// individual store failures as failed; neither aborts the operation.
#[utoipa::path(
    post,
    path = "/assign_template/{id}",
    tag = "Templates",
    params(
        ("id" = Uuid, Path, description = "Template ID")
    ),
    request_body = AssignTemplate,
    responses(
        (status = 201, description = "Assignment processed", body = TemplateAssignment),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 422, response = ValidationErrorResponse),
        (status = 503, response = ServiceUnavailableResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn assign_template<T, C, K>(
    State(service): State<Arc<TemplateService<T, C, K>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<AssignTemplate>,
) -> TemplateResult<impl IntoResponse>
where
    T: TemplateRepository,
    C: CompanyRepository,
    K: TaskRepository,
{
    let outcome = service.assign_template(id, input).await?;
    Ok((StatusCode::CREATED, Json(outcome)))
}
