use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/tasks/add", post(handlers::form_add))
        .route("/tasks/toggle", post(handlers::form_toggle))
        .route("/tasks/delete", post(handlers::form_delete))
        .route("/api/today", get(handlers::get_today))
        .route("/api/overview", get(handlers::get_overview))
        .route("/api/days/:date", get(handlers::get_day))
        .route("/api/days/:date/tasks", post(handlers::add_task))
        .route("/api/days/:date/tasks/:id/toggle", post(handlers::toggle_task))
        .route(
            "/api/days/:date/tasks/:id",
            axum::routing::delete(handlers::delete_task),
        )
        .with_state(state)
}
