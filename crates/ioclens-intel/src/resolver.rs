//! Pure action resolution for one indicator against one configuration
//! snapshot.

use crate::template::resolve_template;
use ioclens_classify::{classify, refang, sanitize_ip, sanitize_url};
use ioclens_core::{flag_value, Configuration, IocDefinition, IocType};
use tracing::debug;

/// The resolved actions for one investigation: at most one clipboard write
/// and any number of lookup URLs, in stored template order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionPlan {
    /// The classified type, when classification succeeded on an active
    /// definition
    pub ioc_type: Option<IocType>,
    /// Text to place on the clipboard, already sanitised when configured
    pub copy: Option<String>,
    /// Absolute lookup URLs to open as background tabs
    pub open_urls: Vec<String>,
}

impl ActionPlan {
    /// True when the plan carries no side effect at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.copy.is_none() && self.open_urls.is_empty()
    }
}

/// Resolve the actions for one user-supplied indicator string.
///
/// Unclassifiable input, a missing definition, or an inactive definition
/// all yield an empty plan; the caller reports those as a no-op.
#[must_use]
pub fn resolve_actions(input: &str, config: &Configuration) -> ActionPlan {
    let Some(ioc_type) = classify(input) else {
        debug!("input did not classify as any indicator type");
        return ActionPlan::default();
    };
    let Some(definition) = config.get(ioc_type) else {
        return ActionPlan::default();
    };
    if !definition.active {
        debug!("indicator type {ioc_type} is inactive, skipping");
        return ActionPlan::default();
    }

    let value = refang(input);
    ActionPlan {
        ioc_type: Some(ioc_type),
        copy: copy_text(ioc_type, definition, &value),
        open_urls: definition
            .urls
            .iter()
            .map(|template| resolve_template(template, ioc_type, &value))
            .collect(),
    }
}

/// The copy decision and its sanitisation, driven by the definition's flag
/// tree. Hash indicators have no sanitisation flag and are never sanitised.
fn copy_text(ioc_type: IocType, definition: &IocDefinition, value: &str) -> Option<String> {
    let (copy_path, sanitize_path): (&[&str], Option<&[&str]>) = match ioc_type {
        IocType::Ip => (&["Copy IP"], Some(&["Copy IP", "Sanitise IP"])),
        IocType::Hash => (&["Copy Hash"], None),
        IocType::Url => (&["Copy URL"], Some(&["Copy URL", "Sanitise URL"])),
    };

    if flag_value(&definition.flags, copy_path) != Some(true) {
        return None;
    }

    let sanitize = sanitize_path
        .and_then(|path| flag_value(&definition.flags, path))
        .unwrap_or(false);

    Some(match (ioc_type, sanitize) {
        (IocType::Ip, true) => sanitize_ip(value),
        (IocType::Url, true) => sanitize_url(value),
        _ => value.to_string(),
    })
}
