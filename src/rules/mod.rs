//! Pure rule checks: mark validation and move enumeration.
//!
//! Everything in this module is stateless. The engine in
//! `crate::engine` calls these predicates before mutating anything, and
//! hosts can call them directly to pre-check moves or render hints.

pub mod enumerate;
pub mod validate;

pub use enumerate::{possible_moves, CandidateMove, MoveKind, MoveList};
pub use validate::{is_valid_mark, LOCK_MIN_MARKS};
