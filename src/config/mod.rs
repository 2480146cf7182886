mod loader;
mod store;
mod types;

pub use loader::ConfigError;
pub use store::ConfigStore;
pub use types::{
    default_phrases, Config, ContactConfig, ServerConfig, SiteConfig, ThemeMode,
    TypewriterConfig,
};
