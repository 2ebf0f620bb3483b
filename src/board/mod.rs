//! Board structure: lanes, marks, and derived progress.
//!
//! Lanes (and their locks) are shared across all players; marks belong
//! to individual players. Positional views used by rule checks are
//! derived from the mark logs on demand.

pub mod lane;
pub mod marks;

pub use lane::{Lane, LaneSet, LANE_LENGTH};
pub use marks::{LaneProgress, Mark, MarkLog};
