//! Roster state and text rendering behind the `poketeam` binary.

pub mod render;
pub mod roster;

pub use render::{render_card, render_roster, type_chip, Card};
pub use roster::{Roster, RosterEntry};
