pub mod app;
pub mod config;
pub mod dates;
pub mod errors;
pub mod handlers;
pub mod lock;
pub mod models;
pub mod overview;
pub mod state;
pub mod storage;
pub mod tasks;
pub mod ui;
pub mod view;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use storage::{load_store, persist_store};
