//! Indicator classification and URL normalisation.

use crate::patterns::{HASH_PATTERN, IPV4_PATTERN, IPV6_PATTERN, URL_PATTERN};
use ioclens_core::IocType;

/// Strip defanging brackets and surrounding whitespace, preserving case.
///
/// This is the working value used for copying and template substitution:
/// `"192.168.1[.]1"` becomes `"192.168.1.1"` again.
#[must_use]
pub fn refang(input: &str) -> String {
    input.replace(['[', ']'], "").trim().to_string()
}

/// Normalise input for pattern matching: refang, then lowercase.
#[must_use]
pub fn normalize(input: &str) -> String {
    refang(input).to_lowercase()
}

/// Indicator classifier over the fixed pattern table.
///
/// Patterns are tested in fixed precedence order: IPv4, IPv6, hash length,
/// URL. First match wins.
#[derive(Debug, Clone)]
pub struct Classifier {
    treat_empty_as_none: bool,
}

impl Classifier {
    /// Create a classifier that short-circuits empty normalised input to
    /// no match before any pattern is tested.
    #[must_use]
    pub fn new() -> Self {
        Self {
            treat_empty_as_none: true,
        }
    }

    /// Toggle the empty-input short-circuit. With the check off, an empty
    /// normalised string still falls through every pattern and classifies
    /// as no match; the observable difference is only where the decision
    /// is made.
    #[must_use]
    pub fn treat_empty_as_none(mut self, enabled: bool) -> Self {
        self.treat_empty_as_none = enabled;
        self
    }

    /// Classify one user-supplied string.
    #[must_use]
    pub fn classify(&self, input: &str) -> Option<IocType> {
        let normalized = normalize(input);
        if self.treat_empty_as_none && normalized.is_empty() {
            return None;
        }

        if IPV4_PATTERN.is_match(&normalized) || IPV6_PATTERN.is_match(&normalized) {
            return Some(IocType::Ip);
        }
        if HASH_PATTERN.is_match(&normalized) {
            return Some(IocType::Hash);
        }
        if URL_PATTERN.is_match(&normalized) {
            return Some(IocType::Url);
        }
        None
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Classify with the default classifier settings.
#[must_use]
pub fn classify(input: &str) -> Option<IocType> {
    Classifier::new().classify(input)
}

/// True when the normalised input is non-empty and matches the permissive
/// URL pattern. This is the validity rule the schema reconciler applies to
/// every stored URL template.
#[must_use]
pub fn is_valid_url(input: &str) -> bool {
    let normalized = normalize(input);
    !normalized.is_empty() && URL_PATTERN.is_match(&normalized)
}

/// Ensure a string is an absolute HTTP(S) URL by prefixing `https://` when
/// no scheme is present. Idempotent.
#[must_use]
pub fn normalize_url(input: &str) -> String {
    let lower = input.to_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        input.to_string()
    } else {
        format!("https://{input}")
    }
}
