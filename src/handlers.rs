use crate::dates::{parse_date_key, today};
use crate::errors::AppError;
use crate::models::{
    ActionResponse, AddTaskForm, AddTaskRequest, DateQuery, DayView, OverviewResponse, Store,
    TaskForm,
};
use crate::overview::build_overview;
use crate::state::AppState;
use crate::storage::persist_store;
use crate::tasks::Outcome;
use crate::ui::render_page;
use crate::view::render;
use axum::{
    extract::{Path, Query, State},
    response::{Html, Redirect},
    Form, Json,
};
use tracing::{debug, info};

pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> Result<Html<String>, AppError> {
    let today = today();
    let date = match query.date.as_deref().map(str::trim) {
        None | Some("") => today.clone(),
        Some(raw) => selected_date(raw)?,
    };
    let store = state.store.lock().await;
    Ok(Html(render_page(&render(&store, &date, &today))))
}

pub async fn get_today(State(state): State<AppState>) -> Json<DayView> {
    let today = today();
    let store = state.store.lock().await;
    Json(render(&store, &today, &today))
}

pub async fn get_day(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<DayView>, AppError> {
    let date = selected_date(&date)?;
    let store = state.store.lock().await;
    Ok(Json(render(&store, &date, &today())))
}

pub async fn get_overview(State(state): State<AppState>) -> Json<OverviewResponse> {
    let store = state.store.lock().await;
    Json(build_overview(&store))
}

pub async fn add_task(
    State(state): State<AppState>,
    Path(date): Path<String>,
    Json(payload): Json<AddTaskRequest>,
) -> Result<Json<ActionResponse>, AppError> {
    let date = selected_date(&date)?;
    let response = apply(&state, "add", &date, |store, today| {
        store.add_task(&date, &payload.text, today)
    })
    .await?;
    Ok(Json(response))
}

pub async fn toggle_task(
    State(state): State<AppState>,
    Path((date, id)): Path<(String, String)>,
) -> Result<Json<ActionResponse>, AppError> {
    let date = selected_date(&date)?;
    let response = apply(&state, "toggle", &date, |store, today| {
        store.toggle_task(&date, &id, today)
    })
    .await?;
    Ok(Json(response))
}

pub async fn delete_task(
    State(state): State<AppState>,
    Path((date, id)): Path<(String, String)>,
) -> Result<Json<ActionResponse>, AppError> {
    let date = selected_date(&date)?;
    let response = apply(&state, "delete", &date, |store, today| {
        store.delete_task(&date, &id, today)
    })
    .await?;
    Ok(Json(response))
}

pub async fn form_add(
    State(state): State<AppState>,
    Form(form): Form<AddTaskForm>,
) -> Result<Redirect, AppError> {
    let date = selected_date(&form.date)?;
    apply(&state, "add", &date, |store, today| {
        store.add_task(&date, &form.text, today)
    })
    .await?;
    Ok(back_to(&date))
}

pub async fn form_toggle(
    State(state): State<AppState>,
    Form(form): Form<TaskForm>,
) -> Result<Redirect, AppError> {
    let date = selected_date(&form.date)?;
    apply(&state, "toggle", &date, |store, today| {
        store.toggle_task(&date, &form.id, today)
    })
    .await?;
    Ok(back_to(&date))
}

pub async fn form_delete(
    State(state): State<AppState>,
    Form(form): Form<TaskForm>,
) -> Result<Redirect, AppError> {
    let date = selected_date(&form.date)?;
    apply(&state, "delete", &date, |store, today| {
        store.delete_task(&date, &form.id, today)
    })
    .await?;
    Ok(back_to(&date))
}

async fn apply<T>(
    state: &AppState,
    action: &str,
    date: &str,
    op: impl FnOnce(&mut Store, &str) -> Outcome<T>,
) -> Result<ActionResponse, AppError> {
    let today = today();
    let mut store = state.store.lock().await;
    let outcome = op(&mut *store, &today);

    match outcome.ignored() {
        None => {
            persist_store(&state.data_path, &store).await?;
            info!(action, date, "task store updated");
        }
        Some(reason) => debug!(action, date, reason = reason.as_str(), "operation ignored"),
    }

    Ok(ActionResponse {
        applied: outcome.is_applied(),
        ignored: outcome.ignored().map(|reason| reason.as_str().to_string()),
        day: render(&store, date, &today),
    })
}

fn selected_date(raw: &str) -> Result<String, AppError> {
    parse_date_key(raw).ok_or_else(|| AppError::invalid_date(raw))
}

fn back_to(date: &str) -> Redirect {
    Redirect::to(&format!("/?date={date}"))
}
