//! Command handlers — one module per registered command.
//!
//! Handlers validate input, call the record store and streak calculator, and
//! produce a [`Reply`] payload; transport and rendering stay in the
//! interaction layer.

pub mod admin_remove;
pub mod leaderboard;
pub mod set;
pub mod view;

use mend_core::reply::Reply;

/// Generic denial for privileged commands; reveals nothing about the gate.
pub fn denied() -> Reply {
  Reply::text("🚫 You do not have permission to use this command.").ephemeral()
}
