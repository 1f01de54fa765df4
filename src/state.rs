use crate::models::Store;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

/// Owns the in-memory store; handlers hold the lock across mutate, persist and render.
#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub store: Arc<Mutex<Store>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, store: Store) -> Self {
        Self {
            data_path,
            store: Arc::new(Mutex::new(store)),
        }
    }
}
