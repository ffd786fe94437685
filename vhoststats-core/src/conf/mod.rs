mod loader;
pub mod types;

pub use loader::{load_config_layer, resolve_config};
pub use types::*;
