//! The investigation request message boundary.
//!
//! Inbound messages cross an untrusted boundary: whatever arrives is
//! resolved to a boolean success indicator and nothing ever panics or
//! propagates an error back across it.

use crate::investigator::Investigator;
use ioclens_store::SettingsStore;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// The only action this handler accepts.
pub const EXECUTE_IOC_INTEL: &str = "executeIOCIntel";

#[derive(Debug, Deserialize)]
struct IntelRequest {
    action: String,
    #[serde(rename = "IOC")]
    ioc: String,
}

/// Handle one inbound investigation request document.
///
/// `{ "action": "executeIOCIntel", "IOC": "<string>" }` runs an
/// investigation and returns its outcome; any other document — wrong
/// action, missing or non-string `IOC`, not an object — is `false`.
pub async fn handle_message<S: SettingsStore + 'static>(
    investigator: &Investigator<S>,
    message: &Value,
) -> bool {
    let request: IntelRequest = match serde_json::from_value(message.clone()) {
        Ok(request) => request,
        Err(e) => {
            debug!("ignoring malformed request message: {e}");
            return false;
        }
    };

    if request.action != EXECUTE_IOC_INTEL {
        debug!("ignoring request with unknown action {:?}", request.action);
        return false;
    }

    investigator.investigate(&request.ioc).await
}
