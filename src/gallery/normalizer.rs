//! Response normalization
//!
//! Maps the raw upstream payload for whichever endpoint was queried into the
//! unified [`Nft`] record. Total over its input: malformed payloads and
//! entries degrade, they never raise.

use serde_json::Value;
use tracing::warn;

use super::types::{EndpointKind, Nft};

/// Extract and map the entry list for `kind` out of `payload`.
///
/// A missing or non-list top-level key is tolerated as an empty result;
/// entry order is preserved as upstream relevance.
pub fn normalize(kind: EndpointKind, payload: &Value) -> Vec<Nft> {
    let key = match kind.payload_key() {
        Some(key) => key,
        None => return Vec::new(),
    };

    let entries = match payload.get(key).and_then(Value::as_array) {
        Some(entries) => entries,
        None => {
            warn!("upstream payload has no `{}` list, treating as empty result", key);
            return Vec::new();
        }
    };

    entries.iter().map(map_entry).collect()
}

/// Map one raw entry. Every field falls back to the empty string, so an
/// entry of unexpected shape still yields a record instead of being dropped.
fn map_entry(entry: &Value) -> Nft {
    let image = entry
        .get("media")
        .and_then(Value::as_array)
        .and_then(|media| media.first())
        .and_then(|first| first.get("gateway"))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let token_id = entry
        .get("id")
        .and_then(|id| id.get("tokenId"))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let contract_address = entry
        .get("contract")
        .and_then(|contract| contract.get("address"))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    Nft {
        image,
        title: text_field(entry, "title"),
        token_id,
        contract_address,
        description: text_field(entry, "description"),
    }
}

fn text_field(entry: &Value, key: &str) -> String {
    entry
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
