//! Refined value object types.
//!
//! Each type here is a [`DeclaredType`](scalarvo_core::DeclaredType) refinement
//! of the base value object: it narrows which scalars are accepted, may
//! normalize their representation, and interns into its own namespace.

pub mod positive_int;
pub mod text;

pub use positive_int::{PositiveInt, positive_int};
pub use text::{NonEmptyText, non_empty_text};
