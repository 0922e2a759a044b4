//! Entity Handlers
//!
//! HTTP handlers for customer and driver CRUD operations. One generic set of
//! handlers serves every [`RestResource`]; the router is mounted once per
//! collection. All endpoints require JWT authentication.

use std::sync::Arc;

use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use validator::Validate;

use crate::application::use_cases::EntityUseCases;
use crate::domain::models::entity::EntityId;
use crate::infrastructure::driving_adapters::api_rest::dto::RestResource;
use crate::infrastructure::driving_adapters::api_rest::extractors::ApiJson;
use crate::infrastructure::driving_adapters::api_rest::middleware::auth::JwtAuth;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for one entity collection
///
/// Mounted under `/customers` and `/drivers`. The use cases are pulled from
/// `AppState` through `FromRef`.
pub fn router<E>() -> Router<AppState>
where
    E: RestResource,
    Arc<EntityUseCases<E>>: FromRef<AppState>,
{
    Router::new()
        .route("/", get(list_entities::<E>).delete(clear_entities::<E>))
        .route(
            "/:id",
            get(get_entity_by_id::<E>)
                .put(create_entity::<E>)
                .patch(partial_update_entity::<E>)
                .delete(delete_entity::<E>),
        )
}

/// GET /{collection} - List every entity, ordered by id
async fn list_entities<E: RestResource>(
    _auth: JwtAuth,
    State(use_cases): State<Arc<EntityUseCases<E>>>,
) -> Result<Json<Vec<E::ResponseDto>>, ApiError> {
    let entities = use_cases.list.execute().await?;

    Ok(Json(entities.into_iter().map(E::ResponseDto::from).collect()))
}

/// DELETE /{collection} - Remove every entity of the collection
///
/// # Responses
///
/// * 204 No Content - Collection cleared (also when already empty)
/// * 401 Unauthorized - Missing or invalid JWT token
async fn clear_entities<E: RestResource>(
    _auth: JwtAuth,
    State(use_cases): State<Arc<EntityUseCases<E>>>,
) -> Result<StatusCode, ApiError> {
    use_cases.clear.execute().await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /{collection}/:id
///
/// # Responses
///
/// * 200 OK - Entity found
/// * 400 Bad Request - `id` is not a non-negative integer
/// * 401 Unauthorized - Missing or invalid JWT token
/// * 404 Not Found - Entity does not exist
async fn get_entity_by_id<E: RestResource>(
    _auth: JwtAuth,
    State(use_cases): State<Arc<EntityUseCases<E>>>,
    Path(id): Path<String>,
) -> Result<Json<E::ResponseDto>, ApiError> {
    let id: EntityId = id.parse()?;

    let entity = use_cases.get_by_id.execute(id).await?;

    Ok(Json(E::ResponseDto::from(entity)))
}

/// PUT /{collection}/:id - Create an entity under a client-chosen id
///
/// # Responses
///
/// * 201 Created - Entity created
/// * 400 Bad Request - Invalid id, malformed body or validation error
/// * 401 Unauthorized - Missing or invalid JWT token
/// * 409 Conflict - The id or the email is already taken
async fn create_entity<E: RestResource>(
    _auth: JwtAuth,
    State(use_cases): State<Arc<EntityUseCases<E>>>,
    Path(id): Path<String>,
    ApiJson(dto): ApiJson<E::CreateDto>,
) -> Result<(StatusCode, Json<E::ResponseDto>), ApiError> {
    let id: EntityId = id.parse()?;
    dto.validate()?;

    let entity = use_cases.create.execute(id, dto.try_into()?).await?;

    Ok((StatusCode::CREATED, Json(E::ResponseDto::from(entity))))
}

/// PATCH /{collection}/:id - Update only the supplied fields
///
/// # Responses
///
/// * 200 OK - Entity updated
/// * 400 Bad Request - Invalid id, malformed body or validation error
/// * 401 Unauthorized - Missing or invalid JWT token
/// * 404 Not Found - Entity does not exist
/// * 409 Conflict - The new email is already taken
async fn partial_update_entity<E: RestResource>(
    _auth: JwtAuth,
    State(use_cases): State<Arc<EntityUseCases<E>>>,
    Path(id): Path<String>,
    ApiJson(dto): ApiJson<E::PatchDto>,
) -> Result<Json<E::ResponseDto>, ApiError> {
    let id: EntityId = id.parse()?;
    dto.validate()?;

    let entity = use_cases.partial_update.execute(id, dto.try_into()?).await?;

    Ok(Json(E::ResponseDto::from(entity)))
}

/// DELETE /{collection}/:id
///
/// # Responses
///
/// * 204 No Content - Entity deleted
/// * 400 Bad Request - `id` is not a non-negative integer
/// * 401 Unauthorized - Missing or invalid JWT token
/// * 404 Not Found - Entity does not exist
async fn delete_entity<E: RestResource>(
    _auth: JwtAuth,
    State(use_cases): State<Arc<EntityUseCases<E>>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id: EntityId = id.parse()?;

    use_cases.delete.execute(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
