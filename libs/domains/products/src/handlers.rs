use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
};
use axum_helpers::{
    AuditEvent, AuditOutcome,
    errors::responses::{BadRequestJsonResponse, BadRequestPathResponse, InternalServerErrorResponse},
    extract_ip_from_headers, extract_user_agent,
};
use observability::ProductMetrics;
use observability::products::{OUTCOME_ERROR, OUTCOME_NOT_FOUND, OUTCOME_SUCCESS};
use serde_json::json;
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;
use utoipa::OpenApi;

use crate::entity;
use crate::error::ProductResult;
use crate::models::{CreateProduct, Product};
use crate::repository::ProductRepository;

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(list_products, create_product, get_product, delete_product),
    components(
        schemas(Product, CreateProduct),
        responses(BadRequestJsonResponse, BadRequestPathResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = entity::Model::TAG, description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the product router with all HTTP endpoints
///
/// Routes are relative; the application nests them under [`entity::Model::URL`].
pub fn router<R: ProductRepository + 'static>(repository: R) -> Router {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/{id}", get(get_product).delete(delete_product))
        .with_state(Arc::new(repository))
}

/// Time a store call and count failures.
async fn observe<T>(
    operation: &'static str,
    call: impl Future<Output = ProductResult<T>>,
) -> ProductResult<T> {
    let started = Instant::now();
    let result = call.await;
    ProductMetrics::record_store_duration(operation, started.elapsed());

    if result.is_err() {
        ProductMetrics::record_operation(operation, OUTCOME_ERROR);
    }

    result
}

/// List all products
#[utoipa::path(
    get,
    path = "",
    tag = entity::Model::TAG,
    responses(
        (status = 200, description = "List of products", body = Vec<Product>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(repository): State<Arc<R>>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = observe("list", repository.find_all()).await?;
    ProductMetrics::record_operation("list", OUTCOME_SUCCESS);
    Ok(Json(products))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = entity::Model::TAG,
    request_body = CreateProduct,
    responses(
        (status = 200, description = "Product created", body = Product),
        (status = 400, response = BadRequestJsonResponse),
        (status = 415, description = "Missing `Content-Type: application/json`"),
        (status = 422, description = "Body does not match the product schema"),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(repository): State<Arc<R>>,
    headers: HeaderMap,
    Json(input): Json<CreateProduct>,
) -> ProductResult<Json<Product>> {
    let product = observe("create", repository.save(input)).await?;
    ProductMetrics::record_operation("create", OUTCOME_SUCCESS);

    AuditEvent::new(
        "product.create",
        Some(format!("product:{}", product.id)),
        AuditOutcome::Success,
    )
    .with_ip(extract_ip_from_headers(&headers))
    .with_user_agent(extract_user_agent(&headers))
    .with_details(json!({
        "name": product.name,
        "price": product.price,
    }))
    .log();

    Ok(Json(product))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 400, response = BadRequestPathResponse),
        (status = 404, description = "Product not found"),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(repository): State<Arc<R>>,
    Path(id): Path<i64>,
) -> ProductResult<Response> {
    match observe("get", repository.find_by_id(id)).await? {
        Some(product) => {
            ProductMetrics::record_operation("get", OUTCOME_SUCCESS);
            Ok(Json(product).into_response())
        }
        None => {
            ProductMetrics::record_operation("get", OUTCOME_NOT_FOUND);
            Ok(StatusCode::NOT_FOUND.into_response())
        }
    }
}

/// Delete a product by ID
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Product successfully deleted"),
        (status = 400, response = BadRequestPathResponse),
        (status = 404, description = "Product not found"),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(repository): State<Arc<R>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> ProductResult<StatusCode> {
    if !observe("delete", repository.exists_by_id(id)).await? {
        ProductMetrics::record_operation("delete", OUTCOME_NOT_FOUND);
        return Ok(StatusCode::NOT_FOUND);
    }

    observe("delete", repository.delete_by_id(id)).await?;
    ProductMetrics::record_operation("delete", OUTCOME_SUCCESS);

    AuditEvent::new(
        "product.delete",
        Some(format!("product:{}", id)),
        AuditOutcome::Success,
    )
    .with_ip(extract_ip_from_headers(&headers))
    .with_user_agent(extract_user_agent(&headers))
    .log();

    Ok(StatusCode::NO_CONTENT)
}
