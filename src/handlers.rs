use crate::dashboard::{Widget, build_dashboard, friend_series, parse_mounts};
use crate::errors::AppError;
use crate::models::{
    CalendarHeatmap, CumulativeSeries, DashboardQuery, LeaderboardRow, LocationRow, PintRecord,
    RecordCreate,
};
use crate::ordered::OrderedMap;
use crate::state::AppState;
use crate::stats::{leaderboard_rows, location_rows};
use crate::storage::{load_document, load_pints_info, persist_records, section};
use crate::timeline::calendar_heatmap;
use crate::ui::render_index;
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::Html,
};
use serde_json::Value;
use tracing::info;

pub async fn index() -> Html<String> {
    Html(render_index(&Widget::ALL))
}

pub async fn get_location_stats(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let document = load_document(&state.pints_info_path).await?;
    Ok(Json(section(&document, "location_info")))
}

pub async fn get_friends_stats(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let document = load_document(&state.pints_info_path).await?;
    Ok(Json(section(&document, "friends_info")))
}

pub async fn get_date_stats(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let document = load_document(&state.pints_info_path).await?;
    Ok(Json(section(&document, "date_info")))
}

pub async fn get_location_rows(
    State(state): State<AppState>,
) -> Result<Json<Vec<LocationRow>>, AppError> {
    let info = load_pints_info(&state.pints_info_path).await?;
    Ok(Json(location_rows(&info.location_info)))
}

pub async fn get_leaderboard(
    State(state): State<AppState>,
) -> Result<Json<Vec<LeaderboardRow>>, AppError> {
    let info = load_pints_info(&state.pints_info_path).await?;
    Ok(Json(leaderboard_rows(&info.friends_info)))
}

pub async fn get_cumulative(
    State(state): State<AppState>,
) -> Result<Json<Vec<CumulativeSeries>>, AppError> {
    let info = load_pints_info(&state.pints_info_path).await?;
    Ok(Json(friend_series(&info)))
}

pub async fn get_calendar(State(state): State<AppState>) -> Result<Json<CalendarHeatmap>, AppError> {
    let info = load_pints_info(&state.pints_info_path).await?;
    Ok(Json(calendar_heatmap(&info.date_info.time_series_date_info)))
}

pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<OrderedMap<Value>>, AppError> {
    let widgets = parse_mounts(query.mounts.as_deref());
    let info = load_pints_info(&state.pints_info_path).await?;
    Ok(Json(build_dashboard(&info, &widgets)))
}

pub async fn list_records(State(state): State<AppState>) -> Json<Vec<PintRecord>> {
    let store = state.records.lock().await;
    Json(store.records.clone())
}

pub async fn create_record(
    State(state): State<AppState>,
    Json(payload): Json<RecordCreate>,
) -> Result<(StatusCode, Json<PintRecord>), AppError> {
    let mut store = state.records.lock().await;
    let mut updated = store.clone();
    let record = updated.add(payload);
    persist_records(&state.records_path, &updated).await?;
    *store = updated;

    info!(id = record.id, location = %record.location, "recorded pints");
    Ok((StatusCode::CREATED, Json(record)))
}
