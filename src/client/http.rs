//! Plant REST API client
//!
//! HTTP client for the plant-monitoring backend.

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use super::error::{ClientError, ClientResult};
use super::PlantApi;
use crate::api::endpoints::{self, ReadingsEndpoint, ReadingsProbe};
use crate::api::{NewReading, PlantPayload};
use crate::config::ApiConfig;
use crate::model::{Plant, Reading};

/// Header carrying the per-request correlation id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Plant REST API client
pub struct PlantClient {
    client: Client,
    base_url: String,
    probe: ReadingsProbe,
}

impl PlantClient {
    /// Create a new client with the given configuration
    pub fn new(config: &ApiConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(ClientError::Request)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            probe: ReadingsProbe::new(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, endpoints::join(&self.base_url, path))
            .header(REQUEST_ID_HEADER, uuid::Uuid::new_v4().to_string())
    }

    /// Send a request; any non-2xx status is an error
    async fn execute(&self, method: Method, path: &str, builder: RequestBuilder) -> ClientResult<Response> {
        let request = builder.build().map_err(ClientError::Request)?;
        let request_id = request
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        tracing::debug!(request_id = %request_id, method = %method, path = %path, "Sending request");

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| {
                tracing::warn!(request_id = %request_id, path = %path, error = %e, "Request failed");
                ClientError::from_transport(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                request_id = %request_id,
                method = %method,
                path = %path,
                status = status.as_u16(),
                "Backend returned error status"
            );
            return Err(ClientError::Status {
                method: method.to_string(),
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self
            .execute(Method::GET, path, self.request(Method::GET, path))
            .await?;
        decode(path, response).await
    }

    async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> ClientResult<T>
    where
        B: serde::Serialize + Sync,
        T: DeserializeOwned,
    {
        let builder = self.request(method.clone(), path).json(body);
        let response = self.execute(method, path, builder).await?;
        decode(path, response).await
    }
}

async fn decode<T: DeserializeOwned>(path: &str, response: Response) -> ClientResult<T> {
    let text = response.text().await.map_err(ClientError::from_transport)?;
    serde_json::from_str(&text).map_err(|e| ClientError::Decode {
        path: path.to_string(),
        message: e.to_string(),
    })
}

#[async_trait]
impl PlantApi for PlantClient {
    async fn dashboard(&self) -> ClientResult<Vec<Plant>> {
        self.get_json(&endpoints::dashboard()).await
    }

    async fn list_plants(&self) -> ClientResult<Vec<Plant>> {
        self.get_json(&endpoints::plants()).await
    }

    async fn get_plant(&self, id: i64) -> ClientResult<Plant> {
        self.get_json(&endpoints::plant(id)).await
    }

    async fn create_plant(&self, payload: &PlantPayload) -> ClientResult<Plant> {
        self.send_json(Method::POST, &endpoints::plants(), payload).await
    }

    async fn update_plant(&self, id: i64, payload: &PlantPayload) -> ClientResult<Plant> {
        self.send_json(Method::PUT, &endpoints::plant(id), payload).await
    }

    async fn delete_plant(&self, id: i64) -> ClientResult<()> {
        let path = endpoints::plant(id);
        let response = self
            .execute(Method::DELETE, &path, self.request(Method::DELETE, &path))
            .await?;

        // Body may be empty; anything present must still be JSON
        let text = response.text().await.map_err(ClientError::from_transport)?;
        if !text.trim().is_empty() {
            serde_json::from_str::<serde_json::Value>(&text).map_err(|e| ClientError::Decode {
                path: path.clone(),
                message: e.to_string(),
            })?;
        }
        Ok(())
    }

    async fn readings_from(&self, endpoint: ReadingsEndpoint, plant_id: i64) -> ClientResult<Vec<Reading>> {
        self.get_json(&endpoint.path(plant_id)).await
    }

    fn readings_probe(&self) -> &ReadingsProbe {
        &self.probe
    }

    async fn create_reading(&self, reading: &NewReading) -> ClientResult<Reading> {
        self.send_json(Method::POST, &endpoints::readings(), reading).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_normalized() {
        let config = ApiConfig {
            base_url: "http://localhost:8000/".to_string(),
            ..ApiConfig::default()
        };
        let client = PlantClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_requests_carry_request_id() {
        let client = PlantClient::new(&ApiConfig::default()).unwrap();
        let request = client.request(Method::GET, "/plants").build().unwrap();
        assert_eq!(request.url().as_str(), "http://127.0.0.1:8000/plants");
        assert!(request.headers().contains_key(REQUEST_ID_HEADER));
    }
}
