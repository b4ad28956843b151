//! ioclens Intel - Investigation pipeline.
//!
//! Turns one classified indicator plus one configuration snapshot into
//! concrete host actions: what to copy (and how to sanitise it) and which
//! lookup URLs to open. Host side effects go through injected collaborator
//! traits so the pipeline itself stays testable.
//!
//! # Modules
//!
//! - [`host`] - Collaborator traits (`TabOpener`, `Clipboard`, `ContextMenuHost`)
//! - [`template`] - Lookup URL template substitution
//! - [`resolver`] - Pure action resolution (`resolve_actions`)
//! - [`investigator`] - Plan execution against the host collaborators
//! - [`menu`] - Context-menu synchronisation with the active type set
//! - [`message`] - The investigation request message boundary

pub mod error;
pub mod host;
pub mod investigator;
pub mod menu;
pub mod message;
pub mod resolver;
pub mod template;

pub use error::{IntelError, Result};
pub use host::{Clipboard, ContextMenuHost, TabHandle, TabOpener};
pub use investigator::Investigator;
pub use menu::sync_context_menus;
pub use message::{handle_message, EXECUTE_IOC_INTEL};
pub use resolver::{resolve_actions, ActionPlan};
pub use template::resolve_template;
