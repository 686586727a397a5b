use serde::{Deserialize, Serialize};

use crate::gallery::{Nft, SearchInput};

/// Gallery search parameters. Absent fields mean "not provided".
#[derive(Debug, Deserialize)]
pub struct GalleryQuery {
    /// Wallet address
    #[serde(default)]
    pub wallet: String,

    /// Collection (contract) address
    #[serde(default)]
    pub collection: String,

    /// Collection-only mode switch, independent of which addresses are set
    #[serde(default, rename = "forCollection")]
    pub for_collection: bool,
}

impl From<GalleryQuery> for SearchInput {
    fn from(query: GalleryQuery) -> Self {
        SearchInput {
            wallet_address: query.wallet,
            collection_address: query.collection,
            fetch_for_collection: query.for_collection,
        }
    }
}

/// Gallery search response
#[derive(Debug, Serialize)]
pub struct GalleryResponse {
    pub nfts: Vec<Nft>,
    pub total: usize,
}
