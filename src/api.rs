//! HTTP client for the remote maze service. The service owns generation,
//! solving, and Q-learning training; this side only ships JSON back and
//! forth over the browser fetch API.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::model::{Maze, Position, RlHyperParams};

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server returned status {0}")]
    Status(u16),
    #[error("response body was not text")]
    BadBody,
    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("no window object available")]
    NoWindow,
}

impl From<JsValue> for ApiError {
    fn from(value: JsValue) -> Self {
        ApiError::Network(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

#[derive(Serialize)]
struct CreateRequest {
    rows: u32,
    cols: u32,
}

#[derive(Serialize)]
struct TrainRequest {
    passes: u32,
    rlhp: RlHyperParams,
}

#[derive(Serialize)]
struct SolveRequest {
    startx: u32,
    starty: u32,
    limit: u32,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SolveResponse {
    /// Steps taken; equal to the submitted limit when the budget ran out.
    pub steps: u32,
    #[serde(default)]
    pub path: Vec<Position>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MazeApi {
    base: String,
}

impl Default for MazeApi {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl MazeApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    pub async fn create(&self, rows: u32, cols: u32) -> Result<Maze, ApiError> {
        let body = serde_json::to_string(&CreateRequest { rows, cols })?;
        let text = self.post_json("/create", &body).await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Run `passes` training episodes server-side; the response is the maze
    /// with updated q values.
    pub async fn train(&self, passes: u32, hp: &RlHyperParams) -> Result<Maze, ApiError> {
        let body = serde_json::to_string(&TrainRequest { passes, rlhp: *hp })?;
        let text = self.post_json("/train", &body).await?;
        Ok(serde_json::from_str(&text)?)
    }

    pub async fn solve(
        &self,
        startx: u32,
        starty: u32,
        limit: u32,
    ) -> Result<SolveResponse, ApiError> {
        let body = serde_json::to_string(&SolveRequest {
            startx,
            starty,
            limit,
        })?;
        let text = self.post_json("/solve", &body).await?;
        Ok(serde_json::from_str(&text)?)
    }

    async fn post_json(&self, path: &str, body: &str) -> Result<String, ApiError> {
        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        opts.set_body(&JsValue::from_str(body));

        let url = format!("{}{}", self.base, path);
        let request = Request::new_with_str_and_init(&url, &opts)?;
        request.headers().set("Content-Type", "application/json")?;

        let window = web_sys::window().ok_or(ApiError::NoWindow)?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
        let resp: Response = resp_value.dyn_into().map_err(|_| ApiError::BadBody)?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        let text = JsFuture::from(resp.text()?).await?;
        text.as_string().ok_or(ApiError::BadBody)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_matches_wire_shape() {
        let body = serde_json::to_value(CreateRequest { rows: 10, cols: 12 }).unwrap();
        assert_eq!(body, serde_json::json!({"rows": 10, "cols": 12}));
    }

    #[test]
    fn train_request_bundles_hyperparameters() {
        let body = serde_json::to_value(TrainRequest {
            passes: 2000,
            rlhp: RlHyperParams::default(),
        })
        .unwrap();
        assert_eq!(body["passes"], serde_json::json!(2000));
        assert_eq!(body["rlhp"]["alpha"], serde_json::json!(0.5));
        assert_eq!(body["rlhp"]["hiddenSize"], serde_json::json!(64));
    }

    #[test]
    fn solve_response_tolerates_missing_path() {
        let resp: SolveResponse = serde_json::from_str(r#"{"steps": 1000}"#).unwrap();
        assert_eq!(resp.steps, 1000);
        assert!(resp.path.is_empty());
    }
}
