//! Slash-command definitions registered with the platform at startup.

use serde::Serialize;

/// Option `type` discriminants used by the platform.
const OPTION_STRING: u8 = 3;
const OPTION_MEMBER: u8 = 6;

#[derive(Debug, Clone, Serialize)]
pub struct CommandSpec {
  pub name:        &'static str,
  pub description: &'static str,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub options:     Vec<OptionSpec>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OptionSpec {
  #[serde(rename = "type")]
  pub kind:        u8,
  pub name:        &'static str,
  pub description: &'static str,
  pub required:    bool,
}

/// The bot's full command set, in registration order.
pub fn command_set() -> Vec<CommandSpec> {
  vec![
    CommandSpec {
      name:        "set",
      description: "Set your sobriety date and substance.",
      options:     vec![
        OptionSpec {
          kind:        OPTION_STRING,
          name:        "date",
          description: "Start date in MM-DD-YY format.",
          required:    true,
        },
        OptionSpec {
          kind:        OPTION_STRING,
          name:        "substance",
          description: "What you are staying sober from.",
          required:    true,
        },
      ],
    },
    CommandSpec {
      name:        "view",
      description: "View your or another member's sobriety details.",
      options:     vec![OptionSpec {
        kind:        OPTION_MEMBER,
        name:        "member",
        description: "Member to view; defaults to you.",
        required:    false,
      }],
    },
    CommandSpec {
      name:        "leaderboard",
      description: "View the leaderboard of sobriety streaks.",
      options:     vec![],
    },
    CommandSpec {
      name:        "admin-remove",
      description: "Remove a member's sobriety data.",
      options:     vec![OptionSpec {
        kind:        OPTION_MEMBER,
        name:        "member",
        description: "Member whose record to erase.",
        required:    true,
      }],
    },
  ]
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn four_commands_with_stable_names() {
    let names: Vec<_> = command_set().iter().map(|c| c.name).collect();
    assert_eq!(names, vec!["set", "view", "leaderboard", "admin-remove"]);
  }

  #[test]
  fn set_requires_both_options() {
    let set = &command_set()[0];
    assert!(set.options.iter().all(|o| o.required));
  }
}
