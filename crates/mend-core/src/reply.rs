//! Reply payloads handed back to the chat platform for delivery.
//!
//! Rendering is the platform's concern; these types only carry content. The
//! shapes mirror the platform's embed model (title, description, fields,
//! accent color).

use serde::Serialize;

/// Embed accent colors, matching the palette the bot has always used.
pub mod color {
  pub const GREEN: u32 = 0x2ecc71;
  pub const RED: u32 = 0xe74c3c;
  pub const BLUE: u32 = 0x3498db;
  pub const GOLD: u32 = 0xf1c40f;
}

#[derive(Debug, Clone, Serialize)]
pub struct EmbedField {
  pub name:   String,
  pub value:  String,
  pub inline: bool,
}

/// A rich message card.
#[derive(Debug, Clone, Serialize)]
pub struct Embed {
  pub title:       String,
  pub description: String,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub fields:      Vec<EmbedField>,
  pub color:       u32,
}

impl Embed {
  pub fn new(
    title: impl Into<String>,
    description: impl Into<String>,
    color: u32,
  ) -> Self {
    Self {
      title: title.into(),
      description: description.into(),
      fields: Vec::new(),
      color,
    }
  }

  pub fn field(
    mut self,
    name: impl Into<String>,
    value: impl Into<String>,
    inline: bool,
  ) -> Self {
    self.fields.push(EmbedField {
      name: name.into(),
      value: value.into(),
      inline,
    });
    self
  }
}

/// A single command response: a rich embed or plain text, optionally visible
/// only to the invoker.
#[derive(Debug, Clone)]
pub struct Reply {
  pub content:   Option<String>,
  pub embeds:    Vec<Embed>,
  pub ephemeral: bool,
}

impl Reply {
  pub fn embed(embed: Embed) -> Self {
    Self {
      content:   None,
      embeds:    vec![embed],
      ephemeral: false,
    }
  }

  pub fn text(content: impl Into<String>) -> Self {
    Self {
      content:   Some(content.into()),
      embeds:    Vec::new(),
      ephemeral: false,
    }
  }

  /// Mark the reply visible only to the invoking member.
  pub fn ephemeral(mut self) -> Self {
    self.ephemeral = true;
    self
  }
}
