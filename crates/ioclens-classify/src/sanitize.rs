//! Sanitisation (defanging) of indicator values before clipboard copy.
//!
//! A sanitised value pastes into chat or ticketing tools without being
//! auto-linked into a live hyperlink.

/// Replace the last `.` or `:` in an IP address, whichever occurs later,
/// with its bracketed form. IPv6 addresses end up only partially bracketed
/// (last separator only); that matches the copy behavior users expect from
/// the investigation menu rather than a full defanging scheme.
///
/// Values containing neither separator are returned unchanged.
#[must_use]
pub fn sanitize_ip(value: &str) -> String {
    let (index, replacement) = match (value.rfind('.'), value.rfind(':')) {
        (Some(dot), Some(colon)) if dot > colon => (dot, "[.]"),
        (_, Some(colon)) => (colon, "[:]"),
        (Some(dot), None) => (dot, "[.]"),
        (None, None) => return value.to_string(),
    };

    let mut out = String::with_capacity(value.len() + 2);
    out.push_str(&value[..index]);
    out.push_str(replacement);
    out.push_str(&value[index + 1..]);
    out
}

/// Replace every `.` in a URL with `[.]`.
#[must_use]
pub fn sanitize_url(value: &str) -> String {
    value.replace('.', "[.]")
}
