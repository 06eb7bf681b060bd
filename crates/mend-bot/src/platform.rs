//! Async REST client for the chat platform's API.

use std::time::Duration;

use mend_core::{member::MemberId, platform::ChatPlatform};
use serde::Deserialize;
use thiserror::Error;

use crate::commands;

/// Connection settings for the platform REST API.
#[derive(Debug, Clone)]
pub struct PlatformConfig {
  pub base_url:       String,
  /// Application id the command set is registered under.
  pub application_id: u64,
  /// Bot authentication token, read from the environment at startup.
  pub token:          String,
}

#[derive(Debug, Error)]
pub enum PlatformError {
  #[error("http error: {0}")]
  Http(#[from] reqwest::Error),

  #[error("{method} {path} → {status}")]
  Status {
    method: &'static str,
    path:   String,
    status: reqwest::StatusCode,
  },
}

/// Async client for the platform REST API.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct RestPlatform {
  client: reqwest::Client,
  config: PlatformConfig,
}

#[derive(Deserialize)]
struct UserPayload {
  username: String,
}

impl RestPlatform {
  pub fn new(config: PlatformConfig) -> Result<Self, PlatformError> {
    let client = reqwest::Client::builder()
      .timeout(Duration::from_secs(30))
      .build()?;
    Ok(Self { client, config })
  }

  fn url(&self, path: &str) -> String {
    format!("{}{path}", self.config.base_url.trim_end_matches('/'))
  }

  fn auth(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
    req.header(
      reqwest::header::AUTHORIZATION,
      format!("Bot {}", self.config.token),
    )
  }

  /// Bulk-overwrite the registered command set.
  ///
  /// Called once at startup, before any interaction is served.
  pub async fn sync_commands(&self) -> Result<(), PlatformError> {
    let path = format!("/applications/{}/commands", self.config.application_id);
    let resp = self
      .auth(self.client.put(self.url(&path)))
      .json(&commands::command_set())
      .send()
      .await?;

    if !resp.status().is_success() {
      return Err(PlatformError::Status {
        method: "PUT",
        path,
        status: resp.status(),
      });
    }
    Ok(())
  }
}

impl ChatPlatform for RestPlatform {
  type Error = PlatformError;

  /// `GET /users/{id}`
  async fn display_name(&self, member_id: MemberId) -> Result<String, PlatformError> {
    let path = format!("/users/{member_id}");
    let resp = self.auth(self.client.get(self.url(&path))).send().await?;

    if !resp.status().is_success() {
      return Err(PlatformError::Status {
        method: "GET",
        path,
        status: resp.status(),
      });
    }

    let user: UserPayload = resp.json().await?;
    Ok(user.username)
  }
}
