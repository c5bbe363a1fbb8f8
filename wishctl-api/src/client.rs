//! HTTP client for the wish tracker backend
//!
//! Implements [`RemoteCollection`] over the three REST endpoints. Every
//! non-2xx response is normalized into `WishError::Remote { status,
//! description }` before it reaches the controller; a 2xx body missing the
//! expected fields is a malformed-response error.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;
use wishctl_core::{RemoteCollection, Result, WishError, Wisher};

const LIST_PATH: &str = "api/node/wishes";
const CREATE_PATH: &str = "api/node/wish";
const DELETE_PATH: &str = "api/node/wish/delete";

#[derive(Debug, Deserialize)]
struct ListResponse {
    #[serde(rename = "Items")]
    items: Option<Vec<Wisher>>,
}

#[derive(Debug, Serialize)]
struct CreateRequest<'a> {
    name: &'a str,
    wishes: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct CreateResponse {
    user_id: String,
}

#[derive(Debug, Serialize)]
struct DeleteRequest<'a> {
    user_id: &'a str,
}

/// Error body shape the backend uses for rejections
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Remote wisher collection reached over HTTP
pub struct HttpCollection {
    client: Client,
    base_url: String,
}

impl HttpCollection {
    /// Create a client against the given API base URL
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|err| WishError::transport(err.to_string()))?;
        Ok(Self {
            client,
            base_url: endpoint.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

/// Normalize a non-2xx response into a remote-rejection error, pulling the
/// optional description from the body's `message` field
async fn reject(operation: &str, response: reqwest::Response) -> WishError {
    let status = response.status().as_u16();
    let description = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message);
    debug!("{operation} rejected with status {status}");
    WishError::remote(status, description)
}

fn transport(err: reqwest::Error) -> WishError {
    WishError::transport(err.to_string())
}

#[async_trait]
impl RemoteCollection for HttpCollection {
    async fn list(&self) -> Result<Vec<Wisher>> {
        let response = self
            .client
            .get(self.url(LIST_PATH))
            .send()
            .await
            .map_err(transport)?;

        if !response.status().is_success() {
            return Err(reject("list", response).await);
        }

        let body: ListResponse = response
            .json()
            .await
            .map_err(|err| WishError::malformed("list", err.to_string()))?;
        body.items
            .ok_or_else(|| WishError::malformed("list", "missing Items field"))
    }

    async fn create(&self, name: &str) -> Result<String> {
        let request = CreateRequest {
            name,
            wishes: Vec::new(),
        };

        let response = self
            .client
            .post(self.url(CREATE_PATH))
            .json(&request)
            .send()
            .await
            .map_err(transport)?;

        if !response.status().is_success() {
            return Err(reject("create", response).await);
        }

        let body: CreateResponse = response
            .json()
            .await
            .map_err(|err| WishError::malformed("create", err.to_string()))?;
        Ok(body.user_id)
    }

    async fn delete(&self, user_id: &str) -> Result<()> {
        let request = DeleteRequest { user_id };

        let response = self
            .client
            .delete(self.url(DELETE_PATH))
            .json(&request)
            .send()
            .await
            .map_err(transport)?;

        if !response.status().is_success() {
            return Err(reject("delete", response).await);
        }

        // 2xx body is ignored
        Ok(())
    }
}
