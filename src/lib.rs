pub mod app;
pub mod charts;
pub mod coerce;
pub mod config;
pub mod dashboard;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod ordered;
pub mod state;
pub mod stats;
pub mod storage;
pub mod timeline;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use storage::{load_document, load_pints_info, load_records};
