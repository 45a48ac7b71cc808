pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ingredients::{are_equivalent, missing_ingredients, normalize};
