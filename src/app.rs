use crate::handlers;
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/stats/location/", get(handlers::get_location_stats))
        .route("/stats/friends/", get(handlers::get_friends_stats))
        .route("/stats/dates/", get(handlers::get_date_stats))
        .route("/api/views/locations", get(handlers::get_location_rows))
        .route("/api/views/leaderboard", get(handlers::get_leaderboard))
        .route("/api/views/cumulative", get(handlers::get_cumulative))
        .route("/api/views/calendar", get(handlers::get_calendar))
        .route("/api/dashboard", get(handlers::get_dashboard))
        .route(
            "/records/",
            get(handlers::list_records).post(handlers::create_record),
        )
        .with_state(state)
}
