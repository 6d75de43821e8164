//! Project configuration and registry loading

mod loader;

pub use loader::{load_config, load_registry, Project};
