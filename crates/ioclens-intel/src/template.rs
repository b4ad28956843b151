//! Lookup URL template substitution.

use ioclens_classify::normalize_url;
use ioclens_core::IocType;
use url::Url;

/// Substitute the type-specific placeholders in a lookup template and
/// return an absolute URL.
///
/// `{ip}` and `{hash}` take the raw (unsanitised) value. For URL indicators
/// the value is normalised to an absolute URL first, then `{url}` takes the
/// normalised form, `{encodedUrl}` its percent-encoded form and `{domain}`
/// its host component. The fully substituted string is re-normalised so
/// templates that omit a scheme still yield an absolute URL.
#[must_use]
pub fn resolve_template(template: &str, ioc_type: IocType, value: &str) -> String {
    let substituted = match ioc_type {
        IocType::Ip => template.replace("{ip}", value),
        IocType::Hash => template.replace("{hash}", value),
        IocType::Url => {
            let absolute = normalize_url(value);
            let mut out = template.replace("{url}", &absolute);
            if out.contains("{encodedUrl}") {
                out = out.replace("{encodedUrl}", &urlencoding::encode(&absolute));
            }
            if out.contains("{domain}") {
                let domain = Url::parse(&absolute)
                    .ok()
                    .and_then(|u| u.host_str().map(str::to_owned))
                    .unwrap_or_default();
                out = out.replace("{domain}", &domain);
            }
            out
        }
    };

    normalize_url(&substituted)
}
