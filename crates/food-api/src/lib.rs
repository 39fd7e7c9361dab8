//! Food Catalog API
//!
//! Models and REST client for the food catalog backend:
//! - models: wire entities (`FoodItem`, `FoodDraft`)
//! - client: generic REST calls plus the `FoodApi` trait
//! - config: API base URL
//! - error: request/status errors

mod client;
mod config;
mod error;
mod models;

pub use client::{FoodApi, RestClient, FOODS_PATH};
pub use config::{ApiConfig, DEFAULT_API_URL};
pub use error::{ApiError, ApiResult};
pub use models::{Entity, FoodDraft, FoodId, FoodItem};
