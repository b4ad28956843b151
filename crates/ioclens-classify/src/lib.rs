//! ioclens Classify - Indicator pattern detection.
//!
//! Pure string classification for the investigation pipeline: deciding
//! whether a user-supplied string is an IP address, a file hash or a URL,
//! plus the URL validity/normalisation rules and the sanitisation
//! (defanging) rules that the action resolver and the schema reconciler
//! share.
//!
//! Nothing in this crate performs I/O.

mod classifier;
mod patterns;
mod sanitize;

pub use classifier::{classify, is_valid_url, normalize, normalize_url, refang, Classifier};
pub use sanitize::{sanitize_ip, sanitize_url};
