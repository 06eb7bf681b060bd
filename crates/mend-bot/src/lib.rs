//! Interaction endpoint and command dispatch for the mend bot.
//!
//! Exposes an axum [`Router`] that receives command invocations from the chat
//! platform and answers with reply payloads, backed by any [`RecordStore`]
//! and [`ChatPlatform`].

pub mod commands;
pub mod error;
pub mod handlers;
pub mod interaction;
pub mod platform;

pub use error::Error;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Json, Router,
  extract::State,
  http::{HeaderMap, header},
  response::{IntoResponse, Response},
  routing::post,
};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use mend_core::{
  platform::ChatPlatform, policy, store::RecordStore, streak::Clock,
};

use interaction::{Interaction, InteractionResponse};

// ─── Configuration ───────────────────────────────────────────────────────────

fn default_moderator_role() -> String {
  "Moderator".to_string()
}

/// Runtime bot configuration, deserialised from `config.toml`.
///
/// The bot token is deliberately absent: it is the one secret, and it comes
/// from the `MEND_BOT_TOKEN` environment variable instead.
#[derive(Deserialize, Clone)]
pub struct BotConfig {
  pub host:            String,
  pub port:            u16,
  pub store_path:      PathBuf,
  /// Base URL of the platform's REST API.
  pub api_base_url:    String,
  /// Application id the command set is registered under.
  pub application_id:  u64,
  /// Shared secret the platform presents on every interaction delivery.
  pub endpoint_secret: String,
  /// Role name whose holders may run privileged commands.
  #[serde(default = "default_moderator_role")]
  pub moderator_role:  String,
}

// ─── Application state ───────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
///
/// Store and platform handles are opened once at startup and injected here;
/// nothing is reached through ambient globals.
#[derive(Clone)]
pub struct AppState<S, P> {
  pub store:    Arc<S>,
  pub platform: Arc<P>,
  pub clock:    Arc<dyn Clock>,
  pub config:   Arc<BotConfig>,
}

// ─── Router ──────────────────────────────────────────────────────────────────

/// Build an axum [`Router`] for the interactions endpoint.
pub fn router<S, P>(state: AppState<S, P>) -> Router
where
  S: RecordStore + Clone + Send + Sync + 'static,
  P: ChatPlatform + Clone + Send + Sync + 'static,
{
  Router::new()
    .route("/interactions", post(interactions_handler::<S, P>))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

async fn interactions_handler<S, P>(
  State(state): State<AppState<S, P>>,
  headers: HeaderMap,
  Json(interaction): Json<Interaction>,
) -> Response
where
  S: RecordStore + Clone + Send + Sync + 'static,
  P: ChatPlatform + Clone + Send + Sync + 'static,
{
  if let Err(e) = check_secret(&headers, &state.config.endpoint_secret) {
    return e.into_response();
  }

  match dispatch(&state, interaction).await {
    Ok(response) => Json(response).into_response(),
    Err(e) => {
      tracing::error!(error = %e, "interaction failed");
      e.into_response()
    }
  }
}

/// Verify the shared secret the platform presents on each delivery.
fn check_secret(headers: &HeaderMap, expected: &str) -> Result<(), Error> {
  let value = headers
    .get(header::AUTHORIZATION)
    .and_then(|v| v.to_str().ok())
    .ok_or(Error::Unauthorized)?;

  let presented = value.strip_prefix("Bearer ").ok_or(Error::Unauthorized)?;

  if presented != expected {
    return Err(Error::Unauthorized);
  }
  Ok(())
}

// ─── Dispatch ────────────────────────────────────────────────────────────────

/// Decode an interaction and route it to the matching command handler.
///
/// The privileged-command guard runs here, ahead of the handler body: an
/// unauthorized caller gets a generic denial and the handler is never
/// invoked.
pub async fn dispatch<S, P>(
  state: &AppState<S, P>,
  interaction: Interaction,
) -> Result<InteractionResponse, Error>
where
  S: RecordStore + Clone + Send + Sync + 'static,
  P: ChatPlatform + Clone + Send + Sync + 'static,
{
  if interaction.is_ping() {
    return Ok(InteractionResponse::pong());
  }

  let invocation = interaction.into_invocation()?;

  let reply = match invocation.command.as_str() {
    "set" => {
      let date = invocation.option_str("date")?;
      let substance = invocation.option_str("substance")?;
      handlers::set::handler(state, &invocation.caller, date, substance).await?
    }
    "view" => {
      let target = invocation
        .option_member("member")?
        .unwrap_or(invocation.caller.id);
      handlers::view::handler(state, &invocation.caller, target).await?
    }
    "leaderboard" => handlers::leaderboard::handler(state).await?,
    "admin-remove" => {
      if !policy::is_authorized(&invocation.caller, &state.config.moderator_role)
      {
        return Ok(InteractionResponse::message(handlers::denied()));
      }
      let target = invocation.option_member("member")?.ok_or_else(|| {
        Error::BadRequest("admin-remove requires a member".to_string())
      })?;
      handlers::admin_remove::handler(state, target).await?
    }
    other => return Err(Error::UnknownCommand(other.to_string())),
  };

  Ok(InteractionResponse::message(reply))
}

// ─── Integration tests ───────────────────────────────────────────────────────
