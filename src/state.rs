use crate::config::Config;
use crate::models::RecordStore;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub pints_info_path: PathBuf,
    pub records_path: PathBuf,
    pub records: Arc<Mutex<RecordStore>>,
}

impl AppState {
    pub fn new(config: &Config, records: RecordStore) -> Self {
        Self {
            pints_info_path: config.pints_info_path.clone(),
            records_path: config.records_path.clone(),
            records: Arc::new(Mutex::new(records)),
        }
    }
}
