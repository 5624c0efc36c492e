//! RemotePointsGateway - REST implementation of the points capability.
//!
//! Talks to `{base}/ws/point` with a bearer token:
//! - `GET` lists points
//! - `POST` creates one, as JSON or as multipart form data when an image is attached

use async_trait::async_trait;
use petmap_core::auth::SessionCredentials;
use petmap_core::config::{ClientConfig, DEFAULT_REQUEST_TIMEOUT_SECS};
use petmap_core::point::{ImageAttachment, PointFields, PointPayload, PointsGateway, RawPoint};
use petmap_core::{PetMapError, Result};
use reqwest::header::AUTHORIZATION;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder};
use std::time::Duration;

use crate::api_error::{ApiOperation, error_for_status, error_for_transport};

const POINTS_PATH: &str = "/ws/point";

/// Gateway implementation backed by the PetMap HTTP API.
#[derive(Debug, Clone)]
pub struct RemotePointsGateway {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl RemotePointsGateway {
    /// Creates a gateway for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.base_url()).with_timeout(config.request_timeout())
    }

    /// Sets the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Shares an existing HTTP client (connection pool) with this gateway.
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    fn points_url(&self) -> String {
        format!("{}{}", self.base_url, POINTS_PATH)
    }

    fn authorized(
        &self,
        request: RequestBuilder,
        credentials: &SessionCredentials,
    ) -> Result<RequestBuilder> {
        let bearer = credentials
            .bearer()
            .ok_or_else(|| PetMapError::auth("You must be signed in to access points."))?;
        Ok(request.header(AUTHORIZATION, bearer).timeout(self.timeout))
    }
}

/// Encodes a payload without attachment as the JSON body.
fn encode_json(request: RequestBuilder, fields: &PointFields) -> RequestBuilder {
    request.json(fields)
}

/// Encodes a payload with attachment as `multipart/form-data`.
pub fn encode_multipart(fields: &PointFields, image: &ImageAttachment) -> Result<Form> {
    let image_part = Part::bytes(image.bytes.clone())
        .file_name(image.file_name.clone())
        .mime_str(&image.content_type)
        .map_err(|e| {
            PetMapError::validation(format!(
                "Invalid image type '{}': {}",
                image.content_type, e
            ))
        })?;

    Ok(Form::new()
        .text("latitude", fields.latitude.to_string())
        .text("longitude", fields.longitude.to_string())
        .text("descricao", fields.description.clone())
        .text("color", fields.color.clone())
        .part("image", image_part))
}

#[async_trait]
impl PointsGateway for RemotePointsGateway {
    async fn fetch_points(&self, credentials: &SessionCredentials) -> Result<Vec<RawPoint>> {
        let operation = ApiOperation::FetchPoints;
        let url = self.points_url();
        let request = self.authorized(self.client.get(&url), credentials)?;

        tracing::debug!("GET {}", url);
        let response = request
            .send()
            .await
            .map_err(|e| error_for_transport(operation, e))?;

        let status = response.status();
        if !operation.is_success(status) {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("GET {} failed with {}", url, status);
            return Err(error_for_status(operation, status, &body));
        }

        let points: Vec<RawPoint> = response
            .json()
            .await
            .map_err(|e| error_for_transport(operation, e))?;
        for point in &points {
            point.validate()?;
        }

        tracing::debug!("Fetched {} points", points.len());
        Ok(points)
    }

    async fn create_point(
        &self,
        credentials: &SessionCredentials,
        payload: &PointPayload,
    ) -> Result<RawPoint> {
        let operation = ApiOperation::CreatePoint;
        let url = self.points_url();
        let request = self.authorized(self.client.post(&url), credentials)?;

        let request = match payload {
            PointPayload::NoAttachment(fields) => encode_json(request, fields),
            PointPayload::WithAttachment(fields, image) => {
                request.multipart(encode_multipart(fields, image)?)
            }
        };

        tracing::debug!(
            "POST {} (image attached: {})",
            url,
            payload.image().is_some()
        );
        let response = request
            .send()
            .await
            .map_err(|e| error_for_transport(operation, e))?;

        let status = response.status();
        if !operation.is_success(status) {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("POST {} failed with {}", url, status);
            return Err(error_for_status(operation, status, &body));
        }

        let point: RawPoint = response
            .json()
            .await
            .map_err(|e| error_for_transport(operation, e))?;
        point.validate()?;

        tracing::info!("Created point {}", point.id);
        Ok(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_url_joins_without_double_slash() {
        let gateway = RemotePointsGateway::new("http://localhost:8080/");
        assert_eq!(gateway.points_url(), "http://localhost:8080/ws/point");
    }

    #[test]
    fn test_signed_out_request_is_rejected_before_sending() {
        let gateway = RemotePointsGateway::new("http://localhost:8080");
        let err = gateway
            .authorized(gateway.client.get("http://localhost:8080"), &SessionCredentials::anonymous())
            .unwrap_err();
        assert!(err.is_auth());
    }

    #[test]
    fn test_multipart_rejects_bad_mime() {
        let fields = PointFields {
            latitude: 0.0,
            longitude: 0.0,
            description: "Rex".to_string(),
            color: "#000000".to_string(),
        };
        let image = ImageAttachment::new("rex", "not a mime", vec![1]);
        assert!(encode_multipart(&fields, &image).unwrap_err().is_validation());
    }
}
