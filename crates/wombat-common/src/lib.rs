//! Common building blocks for the Wombat HTML representation.
//!
//! This crate provides the pieces every tree in the workspace is made of:
//! - **Positions** - real source locations or synthetic markers ([`Position`])
//! - **Wrapped leaves** - a value that always travels with its position ([`Wrap`])
//! - **Non-empty lists** - "one or more" content enforced by the type ([`NonEmpty`])
//! - **Warning System** - colored, deduplicated terminal output for dropped input

/// The workspace error type.
pub mod error;
/// "One or more" container used wherever a content model requires a child.
pub mod non_empty;
/// Real and synthetic source positions.
pub mod position;
pub mod warning;
/// A leaf value paired with its position.
pub mod wrap;

pub use error::{Error, Result};
pub use non_empty::NonEmpty;
pub use position::{Location, Position};
pub use wrap::Wrap;
