use crate::errors::AppError;
use crate::models::{PintsInfo, RecordStore};
use serde_json::{Map, Value};
use std::io;
use std::path::Path;
use tokio::fs;
use tracing::{debug, error};

/// Reads the aggregate document as untyped JSON, exactly as written upstream.
pub async fn load_document(path: &Path) -> Result<Value, AppError> {
    let bytes = fs::read(path).await.map_err(|err| {
        error!("failed to read aggregate data {}: {err}", path.display());
        AppError::unavailable("Pint stats are unavailable right now")
    })?;
    serde_json::from_slice(&bytes).map_err(|err| {
        error!("failed to parse aggregate data {}: {err}", path.display());
        AppError::unavailable("Pint stats could not be read")
    })
}

/// Reads the aggregate document. Called on every request; nothing is cached.
pub async fn load_pints_info(path: &Path) -> Result<PintsInfo, AppError> {
    let document = load_document(path).await?;
    let info: PintsInfo = serde_json::from_value(document).map_err(|err| {
        error!("aggregate data {} has an unexpected shape: {err}", path.display());
        AppError::unavailable("Pint stats could not be read")
    })?;
    debug!(
        locations = info.location_info.len(),
        friends = info.friends_info.len(),
        "loaded aggregate data"
    );
    Ok(info)
}

/// `{key: document[key]}` with the section untouched. A missing section is `{}`.
pub fn section(document: &Value, key: &str) -> Value {
    let body = document
        .get(key)
        .cloned()
        .unwrap_or_else(|| Value::Object(Map::new()));
    let mut out = Map::with_capacity(1);
    out.insert(key.to_string(), body);
    Value::Object(out)
}

/// A missing file is an empty store. Anything else unreadable is an error so
/// the next save cannot overwrite existing history.
pub async fn load_records(path: &Path) -> io::Result<RecordStore> {
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(RecordStore::default()),
        Err(err) => {
            error!("failed to read records file {}: {err}", path.display());
            return Err(err);
        }
    };
    serde_json::from_slice(&bytes).map_err(|err| {
        error!("failed to parse records file {}: {err}", path.display());
        io::Error::from(err)
    })
}

pub async fn persist_records(path: &Path, store: &RecordStore) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(store).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}
