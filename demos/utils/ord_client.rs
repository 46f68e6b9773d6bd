use bitcoin::OutPoint;
use log::debug;
use ord_runes::{
    EncipherRequest, EncipherResponse, OrdError, OrdOutput, OrdResult, RuneDetail, RuneService,
};
use reqwest::header::ACCEPT;
use reqwest::Response;
use serde::de::DeserializeOwned;

/// HTTP client of an `ord` server exposing the runes encipher endpoint.
pub struct OrdClient {
    client: reqwest::Client,
    base_url: String,
}

impl OrdClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> OrdResult<T> {
        let url = format!("{}{path}", self.base_url);
        debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(service_error)?;

        json(response).await
    }
}

fn service_error(err: reqwest::Error) -> OrdError {
    OrdError::Service(err.to_string())
}

async fn json<T: DeserializeOwned>(response: Response) -> OrdResult<T> {
    if response.status().is_success() {
        response.json().await.map_err(service_error)
    } else {
        Err(OrdError::Service(format!(
            "{}: {}",
            response.status(),
            response.text().await.map_err(service_error)?
        )))
    }
}

#[async_trait::async_trait]
impl RuneService for OrdClient {
    async fn encipher(&self, request: &EncipherRequest) -> OrdResult<EncipherResponse> {
        let url = format!("{}/runes/encipher", self.base_url);
        debug!("POST {url}: {}", request.to_json()?);

        let response = self
            .client
            .post(&url)
            .header(ACCEPT, "application/json")
            .json(request)
            .send()
            .await
            .map_err(service_error)?;

        json(response).await
    }

    async fn rune(&self, name: &str) -> OrdResult<RuneDetail> {
        self.get(&format!("/rune/{name}")).await
    }

    async fn output(&self, outpoint: OutPoint) -> OrdResult<OrdOutput> {
        self.get(&format!("/output/{outpoint}")).await
    }
}
