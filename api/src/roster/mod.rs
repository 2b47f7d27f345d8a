//! View-state models for the roster assignment feature: the selection rail's
//! multi-select behavior and the per-team card state the assignment surface
//! renders. Both are pure state machines; the HTTP layer owns persistence.

mod board;
mod selection;

pub use board::{RosterBoard, RosterCounts};
pub use selection::TeamSelection;
