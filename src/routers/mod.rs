use axum::{routing::get, Router};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::handlers::user;

pub fn init_router(db: DatabaseConnection) -> Router {
    let db = Arc::new(db);
    Router::new()
        .route("/users", get(user::list_users).post(user::create_user))
        .route(
            "/users/:id",
            get(user::get_user)
                .put(user::update_user)
                .delete(user::delete_user),
        )
        .fallback(user::handler_404)
        .with_state(db)
}
