//! Wire types for platform interactions.
//!
//! Shapes follow the platform's interaction payloads: a numeric `type`
//! discriminant, command data with named options, and the invoking member
//! carrying role names and a permissions bitfield.

use mend_core::{
  member::{Caller, MemberId},
  reply::{Embed, Reply},
};
use serde::{Deserialize, Serialize};

use crate::Error;

// ─── Inbound ─────────────────────────────────────────────────────────────────

/// Interaction `type` discriminants.
const INTERACTION_PING: u8 = 1;
const INTERACTION_COMMAND: u8 = 2;

/// Bit set in the permissions field for platform administrators.
const ADMINISTRATOR: u64 = 1 << 3;

/// An inbound interaction delivery, before decoding.
#[derive(Debug, Deserialize)]
pub struct Interaction {
  #[serde(rename = "type")]
  pub kind:   u8,
  pub data:   Option<CommandData>,
  pub member: Option<MemberInfo>,
}

#[derive(Debug, Deserialize)]
pub struct CommandData {
  pub name:    String,
  #[serde(default)]
  pub options: Vec<CommandOption>,
}

#[derive(Debug, Deserialize)]
pub struct CommandOption {
  pub name:  String,
  pub value: serde_json::Value,
}

#[derive(Debug, Deserialize)]
pub struct MemberInfo {
  pub user:        UserInfo,
  /// Role names, resolved by the platform before delivery.
  #[serde(default)]
  pub roles:       Vec<String>,
  /// Decimal permissions bitfield.
  #[serde(default)]
  pub permissions: String,
}

#[derive(Debug, Deserialize)]
pub struct UserInfo {
  pub id:       String,
  pub username: String,
}

/// A decoded command invocation: the caller plus named options.
#[derive(Debug)]
pub struct Invocation {
  pub command: String,
  pub caller:  Caller,
  options:     Vec<CommandOption>,
}

impl Interaction {
  pub fn is_ping(&self) -> bool {
    self.kind == INTERACTION_PING
  }

  /// Decode into an [`Invocation`], rejecting payloads without command data
  /// or member identity.
  pub fn into_invocation(self) -> Result<Invocation, Error> {
    if self.kind != INTERACTION_COMMAND {
      return Err(Error::BadRequest(format!(
        "unsupported interaction type {}",
        self.kind
      )));
    }
    let data = self
      .data
      .ok_or_else(|| Error::BadRequest("missing command data".to_string()))?;
    let member = self
      .member
      .ok_or_else(|| Error::BadRequest("missing member".to_string()))?;

    let id: MemberId = member
      .user
      .id
      .parse()
      .map_err(|_| Error::BadRequest(format!("bad member id {:?}", member.user.id)))?;
    let permissions: u64 = member.permissions.parse().unwrap_or(0);

    Ok(Invocation {
      command: data.name,
      caller: Caller {
        id,
        display_name: member.user.username,
        roles: member.roles,
        is_admin: permissions & ADMINISTRATOR != 0,
      },
      options: data.options,
    })
  }
}

impl Invocation {
  /// Required string option.
  pub fn option_str(&self, name: &str) -> Result<&str, Error> {
    self
      .options
      .iter()
      .find(|o| o.name == name)
      .and_then(|o| o.value.as_str())
      .ok_or_else(|| Error::BadRequest(format!("missing option {name:?}")))
  }

  /// Optional member option; the platform sends the id as a decimal string.
  pub fn option_member(&self, name: &str) -> Result<Option<MemberId>, Error> {
    let Some(option) = self.options.iter().find(|o| o.name == name) else {
      return Ok(None);
    };
    option
      .value
      .as_str()
      .and_then(|s| s.parse().ok())
      .map(Some)
      .ok_or_else(|| Error::BadRequest(format!("option {name:?} is not a member id")))
  }
}

// ─── Outbound ────────────────────────────────────────────────────────────────

/// Response `type` discriminants.
const RESPONSE_PONG: u8 = 1;
const RESPONSE_MESSAGE: u8 = 4;

/// Flag bit marking a response visible only to the invoker.
const FLAG_EPHEMERAL: u64 = 1 << 6;

/// The body returned to the platform for an interaction delivery.
#[derive(Debug, Serialize)]
pub struct InteractionResponse {
  #[serde(rename = "type")]
  kind: u8,
  #[serde(skip_serializing_if = "Option::is_none")]
  data: Option<ResponseData>,
}

#[derive(Debug, Serialize)]
struct ResponseData {
  #[serde(skip_serializing_if = "Option::is_none")]
  content: Option<String>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  embeds:  Vec<Embed>,
  #[serde(skip_serializing_if = "flags_unset")]
  flags:   u64,
}

fn flags_unset(flags: &u64) -> bool {
  *flags == 0
}

impl InteractionResponse {
  /// Liveness handshake acknowledgement.
  pub fn pong() -> Self {
    Self {
      kind: RESPONSE_PONG,
      data: None,
    }
  }

  pub fn message(reply: Reply) -> Self {
    Self {
      kind: RESPONSE_MESSAGE,
      data: Some(ResponseData {
        content: reply.content,
        embeds:  reply.embeds,
        flags:   if reply.ephemeral { FLAG_EPHEMERAL } else { 0 },
      }),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn command_interaction(body: serde_json::Value) -> Interaction {
    serde_json::from_value(body).unwrap()
  }

  #[test]
  fn decodes_caller_and_options() {
    let interaction = command_interaction(json!({
      "type": 2,
      "data": {
        "name": "set",
        "options": [
          { "name": "date", "value": "01-01-25" },
          { "name": "substance", "value": "Alcohol" },
        ],
      },
      "member": {
        "user": { "id": "42", "username": "alice" },
        "roles": ["Helper"],
        "permissions": "8",
      },
    }));

    let invocation = interaction.into_invocation().unwrap();
    assert_eq!(invocation.command, "set");
    assert_eq!(invocation.caller.id, MemberId(42));
    assert_eq!(invocation.caller.display_name, "alice");
    assert!(invocation.caller.is_admin);
    assert_eq!(invocation.option_str("date").unwrap(), "01-01-25");
    assert_eq!(invocation.option_str("substance").unwrap(), "Alcohol");
  }

  #[test]
  fn missing_permissions_means_not_admin() {
    let interaction = command_interaction(json!({
      "type": 2,
      "data": { "name": "leaderboard" },
      "member": { "user": { "id": "42", "username": "alice" } },
    }));

    let invocation = interaction.into_invocation().unwrap();
    assert!(!invocation.caller.is_admin);
    assert!(invocation.caller.roles.is_empty());
  }

  #[test]
  fn absent_member_option_is_none() {
    let interaction = command_interaction(json!({
      "type": 2,
      "data": { "name": "view" },
      "member": { "user": { "id": "42", "username": "alice" } },
    }));

    let invocation = interaction.into_invocation().unwrap();
    assert_eq!(invocation.option_member("member").unwrap(), None);
  }

  #[test]
  fn command_without_data_is_rejected() {
    let interaction = command_interaction(json!({
      "type": 2,
      "member": { "user": { "id": "42", "username": "alice" } },
    }));
    assert!(matches!(
      interaction.into_invocation(),
      Err(Error::BadRequest(_))
    ));
  }

  #[test]
  fn ephemeral_reply_sets_the_flag() {
    let response =
      InteractionResponse::message(Reply::text("hidden").ephemeral());
    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value["type"], 4);
    assert_eq!(value["data"]["flags"], 64);
  }

  #[test]
  fn pong_has_no_data() {
    let value = serde_json::to_value(InteractionResponse::pong()).unwrap();
    assert_eq!(value, json!({ "type": 1 }));
  }
}
