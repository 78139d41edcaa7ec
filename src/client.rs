//! HTTP client for the classrooms API

use serde_json::Value;

use aule_core::{
    AuleConfig, AuleError, AuleResult, AvailabilityEntry, FreeRoomRecord, Pole, RoomName, View,
    protocol,
};

const POLES_ENDPOINT: &str = "poles_data";

/// HTTP client for the classrooms API
pub struct Client {
    http: reqwest::Client,
    config: AuleConfig,
}

impl Client {
    pub fn new(config: &AuleConfig) -> AuleResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| AuleError::Request(e.to_string()))?;

        Ok(Self {
            http,
            config: config.clone(),
        })
    }

    async fn get_json(&self, endpoint: &str, pole: Option<&str>) -> AuleResult<Value> {
        let url = self.config.endpoint_url(endpoint, pole)?;
        tracing::debug!(%url, "GET");

        let resp = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| AuleError::Request(format!("Failed to reach {url}: {e}")))?;

        if !resp.status().is_success() {
            return Err(AuleError::Request(format!(
                "{url} answered {}",
                resp.status()
            )));
        }

        resp.json()
            .await
            .map_err(|e| AuleError::Request(format!("Invalid JSON from {url}: {e}")))
    }

    /// GET /poles_data
    pub async fn poles(&self) -> AuleResult<Vec<Pole>> {
        let payload = self.get_json(POLES_ENDPOINT, None).await?;
        protocol::decode_poles(&payload)
    }

    /// Every room of `pole`, in the order the API lists them.
    pub async fn roster(&self, view: View, pole: &str) -> AuleResult<Vec<RoomName>> {
        let payload = self.get_json(view.roster_endpoint(), Some(pole)).await?;
        view.decode_roster(&payload)
    }

    pub async fn free_records(&self, view: View, pole: &str) -> AuleResult<Vec<FreeRoomRecord>> {
        let payload = self.get_json(view.free_endpoint(), Some(pole)).await?;
        view.decode_free(&payload)
    }

    /// Fetch roster and free rooms together and resolve them. Nothing is
    /// resolved unless both requests succeed.
    pub async fn availability(&self, view: View, pole: &str) -> AuleResult<Vec<AvailabilityEntry>> {
        let (roster, free) =
            tokio::try_join!(self.roster(view, pole), self.free_records(view, pole))?;

        tracing::debug!(
            %view,
            pole,
            rooms = roster.len(),
            free = free.len(),
            "resolving availability"
        );

        Ok(view.resolver().resolve(&roster, &free))
    }
}
