//! ioclens Core - Foundation crate for the ioclens investigation tool.
//!
//! This crate provides the shared domain model that all other ioclens crates
//! depend on: the fixed set of indicator types, the per-type definition with
//! its nested option-flag tree and lookup URL templates, and the canonical
//! default configuration that schema reconciliation merges against.
//!
//! # Modules
//!
//! - [`types`] - Domain types (`IocType`, `Flag`, `IocDefinition`, `Configuration`)
//! - [`defaults`] - The canonical default configuration
//! - [`flags`] - Path lookup into nested flag trees

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod flags;
pub mod types;

// Re-export commonly used types
pub use flags::flag_value;
pub use types::{Configuration, Flag, IocDefinition, IocType};
