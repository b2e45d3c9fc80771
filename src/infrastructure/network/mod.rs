pub mod client;
pub mod deepl;
pub mod google;
pub mod http;
pub mod libre;
pub mod mock;

// Re-export for convenience
pub use client::{AggregatorProvider, ENGINE_POOL};
pub use mock::{MockMode, MockProvider};
