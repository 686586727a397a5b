//! Gallery data types

use serde::{Deserialize, Serialize};

/// Raw search terms for one gallery submission.
///
/// Empty strings mean "not provided"; `fetch_for_collection` is an explicit
/// mode switch and wins over whichever addresses happen to be filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchInput {
    /// Wallet address to list owned NFTs for
    pub wallet_address: String,
    /// Collection (contract) address
    pub collection_address: String,
    /// Query the collection itself instead of a wallet
    pub fetch_for_collection: bool,
}

/// Which upstream query a submission resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointKind {
    /// All NFTs owned by one wallet
    WalletOwnedNfts,
    /// NFTs owned by one wallet, filtered to one collection
    WalletOwnedInCollection,
    /// All NFTs in one collection, independent of owner
    CollectionNfts,
    /// Input insufficient to form a request; not an error
    None,
}

impl EndpointKind {
    /// Top-level payload key holding the raw entry list for this kind.
    ///
    /// The wallet family and the collection endpoint return structurally
    /// identical entries under different keys, so one mapping function
    /// serves both.
    pub fn payload_key(self) -> Option<&'static str> {
        match self {
            EndpointKind::WalletOwnedNfts | EndpointKind::WalletOwnedInCollection => {
                Some("ownedNfts")
            }
            EndpointKind::CollectionNfts => Some("nfts"),
            EndpointKind::None => None,
        }
    }
}

/// Fully-built upstream request for one submission. Single-use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    pub kind: EndpointKind,
    /// Complete URL, query parameters percent-encoded. Empty for `None`.
    pub url: String,
}

impl RequestDescriptor {
    /// The upstream API is read-only for this service.
    pub const HTTP_METHOD: &'static str = "GET";

    pub fn new(kind: EndpointKind, url: String) -> Self {
        Self { kind, url }
    }

    /// "Nothing to query yet" — a valid, silent outcome.
    pub fn none() -> Self {
        Self {
            kind: EndpointKind::None,
            url: String::new(),
        }
    }

    pub fn is_noop(&self) -> bool {
        self.kind == EndpointKind::None
    }
}

/// Unified NFT record consumed by the view layer.
///
/// Fields degrade to the empty string when the upstream entry lacks them.
/// Records are built once per raw entry and replaced wholesale on the next
/// submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Nft {
    /// First media gateway URL
    pub image: String,
    pub title: String,
    /// Stable identity key within one result set
    #[serde(rename = "tokenId")]
    pub token_id: String,
    #[serde(rename = "contractAddress")]
    pub contract_address: String,
    pub description: String,
}
