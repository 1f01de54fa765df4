use crate::errors::AppError;
use crate::models::Store;
use std::path::Path;
use tokio::fs;
use tracing::error;

/// File name of the single persisted blob.
pub const STORAGE_KEY: &str = "calendar_todo_v1";

pub async fn load_store(path: &Path) -> Store {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(store) => store,
            Err(err) => {
                error!("failed to parse data file {}: {err}", path.display());
                Store::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Store::default(),
        Err(err) => {
            error!("failed to read data file {}: {err}", path.display());
            Store::default()
        }
    }
}

/// Replaces the data file with the full store via a temp file and rename.
pub async fn persist_store(path: &Path, store: &Store) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(store).map_err(AppError::internal)?;
    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, payload).await?;
    fs::rename(&temp_path, path).await?;
    Ok(())
}
