//! Guidedoc Core
//!
//! This crate provides core types, parser state, and error definitions
//! shared by the guidedoc crates.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`ParseState`] - The line cursor and block-accumulation mode of one conversion pass
//! - [`ParserMode`], [`ListKind`] - State enums
//! - [`Emphasis`] - Inline emphasis flags carried by styled runs
//! - [`GuidedocError`] - Error types

pub mod enums;
pub mod error;
pub mod state;
pub mod types;

pub use enums::{ListKind, ParserMode};
pub use error::{GuidedocError, Result};
pub use state::ParseState;
pub use types::Emphasis;
