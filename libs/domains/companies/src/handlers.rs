use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
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

use crate::error::CompanyResult;
use crate::models::{Company, CreateCompany, UpdateCompany};
use crate::repository::CompanyRepository;
use crate::service::CompanyService;

/// OpenAPI documentation for the Companies API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_companies,
        get_company,
        create_company,
        update_company,
        delete_company,
    ),
    components(
        schemas(Company, CreateCompany, UpdateCompany),
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
        (name = "Companies", description = "Company management endpoints (Firestore)")
    )
)]
pub struct ApiDoc;

/// Create the companies router with all HTTP endpoints.
///
/// Paths are the flat, verb-prefixed surface this API has always exposed.
pub fn router<R: CompanyRepository + 'static>(service: CompanyService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/getall_companies", get(list_companies))
        .route("/get_company/{id}", get(get_company))
        .route("/create_company", post(create_company))
        .route("/update_company/{id}", put(update_company))
        .route("/delete_company/{id}", delete(delete_company))
        .with_state(shared_service)
}

/// List all companies
#[utoipa::path(
    get,
    path = "/getall_companies",
    tag = "Companies",
    responses(
        (status = 200, description = "List of companies", body = Vec<Company>),
        (status = 403, response = ForbiddenResponse),
        (status = 503, response = ServiceUnavailableResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_companies<R: CompanyRepository>(
    State(service): State<Arc<CompanyService<R>>>,
) -> CompanyResult<Json<Vec<Company>>> {
    let companies = service.list_companies().await?;
    Ok(Json(companies))
}

/// Fetch one company by ID
#[utoipa::path(
    get,
    path = "/get_company/{id}",
    tag = "Companies",
    params(
        ("id" = Uuid, Path, description = "Company ID")
    ),
    responses(
        (status = 200, description = "Company found", body = Company),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 503, response = ServiceUnavailableResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_company<R: CompanyRepository>(
    State(service): State<Arc<CompanyService<R>>>,
    UuidPath(id): UuidPath,
) -> CompanyResult<Json<Company>> {
    let company = service.get_company(id).await?;
    Ok(Json(company))
}

/// Create a new company
#[utoipa::path(
    post,
    path = "/create_company",
    tag = "Companies",
    request_body = CreateCompany,
    responses(
        (status = 201, description = "Company created successfully", body = Company),
        (status = 422, response = ValidationErrorResponse),
        (status = 503, response = ServiceUnavailableResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_company<R: CompanyRepository>(
    State(service): State<Arc<CompanyService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateCompany>,
) -> CompanyResult<impl IntoResponse> {
    let company = service.create_company(input).await?;
    Ok((StatusCode::CREATED, Json(company)))
}

/// Update a company
#[utoipa::path(
    put,
    path = "/update_company/{id}",
    tag = "Companies",
    params(
        ("id" = Uuid, Path, description = "Company ID")
    ),
    request_body = UpdateCompany,
    responses(
        (status = 200, description = "Company updated successfully", body = Company),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 422, response = ValidationErrorResponse),
        (status = 503, response = ServiceUnavailableResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_company<R: CompanyRepository>(
    State(service): State<Arc<CompanyService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateCompany>,
) -> CompanyResult<Json<Company>> {
    let company = service.update_company(id, input).await?;
    Ok(Json(company))
}

/// Delete a company
#[utoipa::path(
    delete,
    path = "/delete_company/{id}",
    tag = "Companies",
    params(
        ("id" = Uuid, Path, description = "Company ID")
    ),
    responses(
        (status = 204, description = "Company deleted successfully"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 503, response = ServiceUnavailableResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_company<R: CompanyRepository>(
    State(service): State<Arc<CompanyService<R>>>,
    UuidPath(id): UuidPath,
) -> CompanyResult<impl IntoResponse> {
    service.delete_company(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
