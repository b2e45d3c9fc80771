pub mod error;
pub mod model;
pub mod parser;
pub mod traits;
