//! REST Client
//!
//! Thin wrapper over `reqwest` (browser `fetch` on wasm32) exposing the
//! get/post/put/delete contract, plus the food endpoints built on it.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{FoodDraft, FoodId, FoodItem};

/// Collection path for food items
pub const FOODS_PATH: &str = "/foods";

/// Food catalog operations used by the dashboard.
///
/// Futures are not `Send`: in the browser everything runs on one thread.
#[async_trait(?Send)]
pub trait FoodApi {
    /// Fetch the whole collection, in server order
    async fn list_foods(&self) -> ApiResult<Vec<FoodItem>>;

    /// Create a food; the server assigns the id
    async fn create_food(&self, food: &FoodDraft) -> ApiResult<FoodItem>;

    /// Replace the food stored under `id`
    async fn update_food(&self, id: FoodId, food: &FoodDraft) -> ApiResult<FoodItem>;

    async fn delete_food(&self, id: FoodId) -> ApiResult<()>;
}

/// JSON-over-HTTP client rooted at the configured base URL
#[derive(Debug, Clone)]
pub struct RestClient {
    config: ApiConfig,
    http: Client,
}

impl RestClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        log::debug!("[API] GET {}", path);
        let response = self.http.get(self.config.endpoint(path)).send().await?;
        let response = check_status("GET", path, response)?;
        Ok(response.json().await?)
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        log::debug!("[API] POST {}", path);
        let response = self
            .http
            .post(self.config.endpoint(path))
            .json(body)
            .send()
            .await?;
        let response = check_status("POST", path, response)?;
        Ok(response.json().await?)
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        log::debug!("[API] PUT {}", path);
        let response = self
            .http
            .put(self.config.endpoint(path))
            .json(body)
            .send()
            .await?;
        let response = check_status("PUT", path, response)?;
        Ok(response.json().await?)
    }

    /// Response body is ignored; only the status is checked
    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        log::debug!("[API] DELETE {}", path);
        let response = self.http.delete(self.config.endpoint(path)).send().await?;
        check_status("DELETE", path, response)?;
        Ok(())
    }
}

fn check_status(method: &'static str, path: &str, response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            method,
            path: path.to_string(),
            status: status.as_u16(),
        })
    }
}

fn food_path(id: FoodId) -> String {
    format!("{}/{}", FOODS_PATH, id)
}

#[async_trait(?Send)]
impl FoodApi for RestClient {
    async fn list_foods(&self) -> ApiResult<Vec<FoodItem>> {
        self.get(FOODS_PATH).await
    }

    async fn create_food(&self, food: &FoodDraft) -> ApiResult<FoodItem> {
        self.post(FOODS_PATH, food).await
    }

    async fn update_food(&self, id: FoodId, food: &FoodDraft) -> ApiResult<FoodItem> {
        self.put(&food_path(id), food).await
    }

    async fn delete_food(&self, id: FoodId) -> ApiResult<()> {
        self.delete(&food_path(id)).await
    }
}
