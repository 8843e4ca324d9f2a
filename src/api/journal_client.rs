use crate::{
    config::Config,
    models::{
        auth::{
            AuthResponse, ForgotPasswordPayload, LoginPayload, MessageResponse, RegisterPayload,
            ResetPasswordPayload,
        },
        message_payloads::{
            close_trade_payload::CloseTradePayload, create_trade_payload::CreateTradePayload,
        },
        trade::{Trade, TradeId},
        trade_stats::TradeStats,
    },
};
use anyhow::{anyhow, Context, Result};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use serde::Deserialize;
use thiserror::Error;

/// Non-success answer from the journal API.
#[derive(Debug, Error)]
#[error("{message} (HTTP {status})")]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        self.status == StatusCode::UNAUTHORIZED || self.status == StatusCode::FORBIDDEN
    }
}

#[derive(Debug, Deserialize)]
struct TradesResponse {
    trades: Vec<Trade>,
}

/// A wrapper over the trading journal HTTP API.
#[derive(Debug, Clone)]
pub struct JournalClient {
    client: Client,
    base_url: Url,
    token: Option<String>,
}

impl JournalClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.http_timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Self::with_client(client, &config.api_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("Invalid journal API URL '{}'", base_url))?;

        if base_url.cannot_be_a_base() {
            return Err(anyhow!("Journal API URL '{}' cannot have paths", base_url));
        }

        Ok(Self {
            client,
            base_url,
            token: None,
        })
    }

    /// Authenticates subsequent requests with a bearer token.
    pub fn with_token(mut self, token: Option<&str>) -> Self {
        self.token = token.map(str::to_string);
        self
    }

    pub async fn get_trades(&self) -> Result<Vec<Trade>> {
        let response: TradesResponse = self
            .send(self.request(Method::GET, &["trades"]), "fetch trades")
            .await?
            .json()
            .await
            .context("Could not parse trades")?;

        Ok(response.trades)
    }

    pub async fn get_stats(&self) -> Result<TradeStats> {
        self.send(self.request(Method::GET, &["trades", "stats"]), "fetch stats")
            .await?
            .json()
            .await
            .context("Could not parse trade stats")
    }

    /// Trades and stats fetched concurrently, failing if either fails.
    pub async fn fetch_dashboard(&self) -> Result<(Vec<Trade>, TradeStats)> {
        tokio::try_join!(self.get_trades(), self.get_stats())
    }

    pub async fn create_trade(&self, trade: &CreateTradePayload) -> Result<()> {
        tracing::info!(
            pair = %trade.pair,
            direction = %trade.trade_type,
            lot_size = trade.lot_size,
            entry_price = trade.entry_price,
            "Saving trade"
        );

        self.send(
            self.request(Method::POST, &["trades"]).json(trade),
            "save trade",
        )
        .await?;

        Ok(())
    }

    pub async fn close_trade(&self, id: &TradeId, exit_price: f64) -> Result<()> {
        tracing::info!(id = %id, exit_price, "Closing trade");

        let payload = CloseTradePayload::new(exit_price);
        self.send(
            self.request(Method::PUT, &["trades", &id.0]).json(&payload),
            "close trade",
        )
        .await?;

        Ok(())
    }

    /// Returns the session token issued for the account.
    pub async fn login(&self, payload: &LoginPayload) -> Result<String> {
        let response: AuthResponse = self
            .send(
                self.request(Method::POST, &["auth", "login"]).json(payload),
                "log in",
            )
            .await?
            .json()
            .await
            .context("Could not parse login response")?;

        Ok(response.token)
    }

    pub async fn register(&self, payload: &RegisterPayload) -> Result<String> {
        let response: AuthResponse = self
            .send(
                self.request(Method::POST, &["auth", "register"]).json(payload),
                "register",
            )
            .await?
            .json()
            .await
            .context("Could not parse register response")?;

        Ok(response.token)
    }

    pub async fn forgot_password(&self, payload: &ForgotPasswordPayload) -> Result<Option<String>> {
        let response: MessageResponse = self
            .send(
                self.request(Method::POST, &["auth", "forgot-password"]).json(payload),
                "send reset code",
            )
            .await?
            .json()
            .await
            .unwrap_or_default();

        Ok(response.msg)
    }

    pub async fn reset_password(&self, payload: &ResetPasswordPayload) -> Result<Option<String>> {
        let response: MessageResponse = self
            .send(
                self.request(Method::POST, &["auth", "reset-password"]).json(payload),
                "reset password",
            )
            .await?
            .json()
            .await
            .unwrap_or_default();

        Ok(response.msg)
    }

    /// Appends `segments` to the base URL. Each segment is percent-encoded,
    /// so an id containing `/` or `?` stays a single path segment.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();

        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }

        url
    }

    fn request(&self, method: Method, segments: &[&str]) -> RequestBuilder {
        let builder = self.client.request(method, self.endpoint(segments));

        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder, action: &str) -> Result<Response> {
        let response = builder
            .send()
            .await
            .with_context(|| format!("Could not send request to {action}"))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body: MessageResponse = response.json().await.unwrap_or_default();
        let message = body
            .msg
            .unwrap_or_else(|| format!("Failed to {action}"));

        tracing::debug!(%status, error = %message, "Journal API returned an error");

        Err(ApiError { status, message }.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_slash_and_attaches_token() {
        let client = JournalClient::with_client(Client::new(), "http://localhost:5000/api/")
            .unwrap()
            .with_token(Some("t0k3n"));

        let request = client.request(Method::GET, &["trades"]).build().unwrap();
        assert_eq!(request.url().as_str(), "http://localhost:5000/api/trades");
        assert_eq!(
            request.headers().get("authorization").unwrap(),
            "Bearer t0k3n"
        );
    }

    #[test]
    fn anonymous_requests_carry_no_auth_header() {
        let client = JournalClient::with_client(Client::new(), "http://localhost:5000/api").unwrap();
        let request = client
            .request(Method::POST, &["auth", "login"])
            .build()
            .unwrap();

        assert!(request.headers().get("authorization").is_none());
    }

    #[test]
    fn trade_id_stays_one_path_segment() {
        let client = JournalClient::with_client(Client::new(), "http://localhost:5000/api").unwrap();
        let id = TradeId("../auth/login?x=1".to_string());
        let request = client
            .request(Method::PUT, &["trades", &id.0])
            .build()
            .unwrap();

        assert_eq!(request.url().path(), "/api/trades/..%2Fauth%2Flogin%3Fx=1");
        assert!(request.url().query().is_none());
    }

    #[test]
    fn rejects_unusable_base_urls() {
        assert!(JournalClient::with_client(Client::new(), "localhost:5000").is_err());
        assert!(JournalClient::with_client(Client::new(), "mailto:desk@example.com").is_err());
    }
}
