//! Path lookup into nested flag trees.

use crate::types::Flag;

/// Walk `path` through a flag tree and return the value of the final flag.
///
/// At each level the first sibling whose `name` equals the path element is
/// taken, in insertion order; duplicate sibling names are not deduplicated.
/// Returns `None` as soon as any path element has no match, which callers
/// treat as "feature disabled".
#[must_use]
pub fn flag_value(flags: &[Flag], path: &[&str]) -> Option<bool> {
    let (first, rest) = path.split_first()?;
    let flag = flags.iter().find(|f| f.name == *first)?;
    if rest.is_empty() {
        Some(flag.value)
    } else {
        flag_value(&flag.sub_flags, rest)
    }
}
