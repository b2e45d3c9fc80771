pub mod query;
pub mod settings;
