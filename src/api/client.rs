//! HTTP client for the ticket backend.
//!
//! One client instance is built per process and shared by the CLI commands
//! and the TUI handlers. Every method is a single non-retried request;
//! failure semantics (contain, don't propagate to rendering) are the
//! caller's responsibility.

use std::time::Duration;

use reqwest::Client;
use serde_json::json;

use crate::config::Config;
use crate::error::{Result, TriageError};
use crate::types::{NewTicket, Stats, Suggestion, Ticket, TicketId};

use super::query::TicketQuery;

/// Client for the ticket backend REST API.
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    /// Create a client from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            base_url: config.backend_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client for an explicit base URL with default timeouts.
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The backend base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// List tickets matching the query. Only set filter fields are sent.
    pub async fn list_tickets(&self, query: &TicketQuery) -> Result<Vec<Ticket>> {
        let response = self
            .client
            .get(self.url("tickets/"))
            .query(&query.params())
            .send()
            .await?;
        let response = Self::expect_success(response).await?;
        Ok(response.json().await?)
    }

    /// Fetch aggregate counters.
    pub async fn stats(&self) -> Result<Stats> {
        let response = self.client.get(self.url("tickets/stats/")).send().await?;
        let response = Self::expect_success(response).await?;
        Ok(response.json().await?)
    }

    /// Ask the classifier for category/priority suggestions for a
    /// description.
    pub async fn classify(&self, description: &str) -> Result<Suggestion> {
        let response = self
            .client
            .post(self.url("tickets/classify/"))
            .json(&json!({ "description": description }))
            .send()
            .await?;
        let response = Self::expect_success(response).await?;
        Ok(response.json().await?)
    }

    /// Create a ticket. Validation runs locally first: an empty title or
    /// description fails without any network call.
    pub async fn create_ticket(&self, new_ticket: &NewTicket) -> Result<Ticket> {
        new_ticket.validate()?;

        let response = self
            .client
            .post(self.url("tickets/"))
            .json(new_ticket)
            .send()
            .await?;
        let response = Self::expect_success(response).await?;
        Ok(response.json().await?)
    }

    /// Transition a ticket to `resolved`. Legality is enforced by the
    /// backend; a rejected transition surfaces as a `Backend` error.
    pub async fn resolve_ticket(&self, id: TicketId) -> Result<()> {
        let response = self
            .client
            .patch(self.url(&format!("tickets/{id}/")))
            .json(&json!({ "status": "resolved" }))
            .send()
            .await?;
        Self::expect_success(response).await?;
        Ok(())
    }

    /// Transition a ticket to `closed`, attaching the audit comment
    /// (which may be empty).
    pub async fn close_ticket(&self, id: TicketId, comment: &str) -> Result<()> {
        let response = self
            .client
            .patch(self.url(&format!("tickets/{id}/")))
            .json(&json!({ "status": "closed", "comment": comment }))
            .send()
            .await?;
        Self::expect_success(response).await?;
        Ok(())
    }

    /// Delete a ticket. Irreversible; callers are responsible for user
    /// confirmation before invoking this.
    pub async fn delete_ticket(&self, id: TicketId) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&format!("tickets/{id}/delete/")))
            .send()
            .await?;
        Self::expect_success(response).await?;
        Ok(())
    }

    async fn expect_success(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response.text().await.unwrap_or_default();
        tracing::debug!(status = status.as_u16(), %message, "backend request rejected");
        Err(TriageError::Backend {
            status: status.as_u16(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, Priority};

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let client = BackendClient::new("http://localhost:8000/api/").unwrap();
        assert_eq!(client.url("tickets/"), "http://localhost:8000/api/tickets/");
        assert_eq!(
            client.url("tickets/42/delete/"),
            "http://localhost:8000/api/tickets/42/delete/"
        );
    }

    #[tokio::test]
    async fn test_create_invalid_ticket_fails_without_network() {
        // Port 9 (discard) is never serving; reaching the network would
        // produce an Http error, not a Validation error.
        let client = BackendClient::new("http://127.0.0.1:9/api").unwrap();
        let invalid = NewTicket {
            title: String::new(),
            description: "something broke".to_string(),
            category: Category::Technical,
            priority: Priority::Medium,
        };

        let err = client.create_ticket(&invalid).await.unwrap_err();
        assert!(matches!(err, TriageError::Validation(_)));
    }
}
