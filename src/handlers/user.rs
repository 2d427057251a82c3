use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::entities::user;
use crate::error::{AppError, AppResult};
use crate::validation::{validate_user_input, UserPayload, ValidUser};

fn parse_user_id(raw: &str) -> AppResult<i32> {
    raw.parse::<i32>()
        .map_err(|_| AppError::BadRequest("Invalid user ID format.".to_string()))
}

// Normalization happens here, after validation: name is trimmed, email is
// trimmed and lowercased, age is stored as given.
fn build_record(input: &ValidUser) -> user::ActiveModel {
    user::ActiveModel {
        name: Set(input.name.trim().to_owned()),
        email: Set(input.email.trim().to_lowercase()),
        age: Set(input.age),
        ..Default::default()
    }
}

pub async fn list_users(
    State(db): State<Arc<DatabaseConnection>>,
) -> AppResult<Json<Vec<user::Model>>> {
    let users = user::Entity::find()
        .order_by_asc(user::Column::Id)
        .all(db.as_ref())
        .await?;

    Ok(Json(users))
}

pub async fn get_user(
    State(db): State<Arc<DatabaseConnection>>,
    Path(id): Path<String>,
) -> AppResult<Json<user::Model>> {
    let id = parse_user_id(&id)?;

    let user = user::Entity::find_by_id(id)
        .one(db.as_ref())
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(user))
}

pub async fn create_user(
    State(db): State<Arc<DatabaseConnection>>,
    Json(payload): Json<UserPayload>,
) -> AppResult<(StatusCode, Json<user::Model>)> {
    let input = validate_user_input(&payload)
        .map_err(|message| AppError::BadRequest(message.to_string()))?;

    let user = build_record(&input).insert(db.as_ref()).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn update_user(
    State(db): State<Arc<DatabaseConnection>>,
    Path(id): Path<String>,
    Json(payload): Json<UserPayload>,
) -> AppResult<Json<user::Model>> {
    // Id format is checked before the body, matching the response a client
    // gets for a bad id regardless of body validity.
    let id = parse_user_id(&id)?;
    let input = validate_user_input(&payload)
        .map_err(|message| AppError::BadRequest(message.to_string()))?;

    let mut record = build_record(&input);
    record.id = Set(id);

    let user = record.update(db.as_ref()).await.map_err(|err| match err {
        DbErr::RecordNotUpdated => AppError::NotFound,
        other => AppError::DbError(other),
    })?;

    Ok(Json(user))
}

pub async fn delete_user(
    State(db): State<Arc<DatabaseConnection>>,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    let id = parse_user_id(&id)?;

    let result = user::Entity::delete_by_id(id).exec(db.as_ref()).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    Ok(Json(json!({ "message": "User deleted successfully." })))
}

/// Handler for any request that matches none of the defined routes.
pub async fn handler_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Route not found." })),
    )
}
