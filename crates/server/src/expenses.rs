//! Expenses API endpoints.

use api_types::expense::{ExpensePayload, ExpenseView};
use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, Uri, header},
};
use engine::{Expense, ExpenseDraft};

use crate::{COLLECTION, ServerError, server::ServerState};

const WELCOME: &str = "Welcome to Expense Tracker API! Server is running successfully 🚀";

fn map_expense(expense: Expense) -> Result<ExpenseView, ServerError> {
    let id = expense
        .id
        .ok_or_else(|| ServerError::Internal("stored expense without id".to_string()))?;
    Ok(ExpenseView {
        id,
        title: expense.title,
        amount: expense.amount,
        category: expense.category,
        date: expense.date,
        note: expense.note,
        created_at: expense.created_at,
    })
}

fn draft(payload: ExpensePayload) -> ExpenseDraft {
    ExpenseDraft {
        id: payload.id,
        title: payload.title,
        amount: payload.amount,
        category: payload.category,
        date: payload.date,
        note: payload.note,
    }
}

pub async fn home() -> &'static str {
    WELCOME
}

pub async fn list(
    uri: Uri,
    State(state): State<ServerState>,
) -> Result<Json<Vec<ExpenseView>>, ServerError> {
    tracing::info!("received GET on {uri}");
    let expenses: Vec<ExpenseView> = state
        .engine
        .list_expenses()
        .await?
        .into_iter()
        .map(map_expense)
        .collect::<Result<_, _>>()?;
    Ok(Json(expenses))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<Json<ExpenseView>, ServerError> {
    tracing::info!("received GET on {COLLECTION}/get/{id}");
    let expense = state.engine.expense(id).await?;
    Ok(Json(map_expense(expense)?))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ExpensePayload>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<ExpenseView>), ServerError> {
    tracing::info!("received POST on {COLLECTION} (add)");
    let saved = state.engine.create_expense(draft(payload)).await?;
    let view = map_expense(saved)?;
    let location = format!("{COLLECTION}/{}", view.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(view),
    ))
}

pub async fn update(
    State(state): State<ServerState>,
    Json(payload): Json<ExpensePayload>,
) -> Result<Json<ExpenseView>, ServerError> {
    apply_update(state, None, payload).await
}

pub async fn update_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<ExpensePayload>,
) -> Result<Json<ExpenseView>, ServerError> {
    apply_update(state, Some(id), payload).await
}

async fn apply_update(
    state: ServerState,
    target: Option<i64>,
    payload: ExpensePayload,
) -> Result<Json<ExpenseView>, ServerError> {
    tracing::info!(
        "received PUT on {COLLECTION} (target_id={:?})",
        target.or(payload.id)
    );
    let updated = state
        .engine
        .update_expense(target, draft(payload))
        .await?;
    Ok(Json(map_expense(updated)?))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ServerError> {
    tracing::info!("received DELETE on {COLLECTION} (id={id})");
    state.engine.delete_expense(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
