pub mod cli;
pub mod plugin;

// Re-export for convenience
pub use plugin::{QueryContext, QueryToken, TranslatorPlugin, TRIGGER};
