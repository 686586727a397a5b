//! Query planning
//!
//! Maps raw search input to exactly one upstream request. No I/O, no errors;
//! insufficient input plans the `None` kind.

use urlencoding::encode;

use super::types::{EndpointKind, RequestDescriptor, SearchInput};

/// Decide which upstream query to issue for `input` and build its URL on top
/// of `base` (the injected, credential-bearing API base).
///
/// Precedence, first match wins:
/// 1. collection mode with no collection address -> nothing to query
/// 2. collection mode -> `getNFTsForCollection`
/// 3. no wallet address -> nothing to query
/// 4. wallet only -> `getNFTs?owner=`
/// 5. wallet + collection -> `getNFTs?owner=&contractAddresses[]=`
///
/// A checked collection switch with only a wallet typed is deliberately a
/// silent no-op; compatibility with the existing search behavior depends on
/// this exact precedence.
pub fn plan_query(base: &str, input: &SearchInput) -> RequestDescriptor {
    let base = base.trim_end_matches('/');

    if input.fetch_for_collection {
        if input.collection_address.is_empty() {
            return RequestDescriptor::none();
        }
        let url = format!(
            "{}/getNFTsForCollection/?contractAddress={}&withMetadata=true",
            base,
            encode(&input.collection_address)
        );
        return RequestDescriptor::new(EndpointKind::CollectionNfts, url);
    }

    if input.wallet_address.is_empty() {
        return RequestDescriptor::none();
    }

    if input.collection_address.is_empty() {
        let url = format!("{}/getNFTs/?owner={}", base, encode(&input.wallet_address));
        RequestDescriptor::new(EndpointKind::WalletOwnedNfts, url)
    } else {
        // The upstream expects the collection filter as a single-element
        // array parameter, sent pre-encoded.
        let url = format!(
            "{}/getNFTs/?owner={}&contractAddresses%5B%5D={}",
            base,
            encode(&input.wallet_address),
            encode(&input.collection_address)
        );
        RequestDescriptor::new(EndpointKind::WalletOwnedInCollection, url)
    }
}
