//! tests/gallery_client_tests.rs
//!
//! Tests for `src/gallery/client.rs`:
//! - wallet and collection fetch paths against a mock upstream
//! - no-op input short-circuit
//! - upstream error mapping

use httpmock::{Method, MockServer};
use nft_gallery::core::errors::GalleryError;
use nft_gallery::gallery::{AlchemyGalleryClient, SearchInput};
use serde_json::json;

fn wallet_input(wallet: &str) -> SearchInput {
    SearchInput {
        wallet_address: wallet.to_string(),
        ..Default::default()
    }
}

#[tokio::test(flavor = "current_thread")]
async fn test_fetch_wallet_gallery() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(Method::GET)
            .path("/getNFTs/")
            .query_param("owner", "0xowner");
        then.status(200).json_body(json!({
            "ownedNfts": [
                {
                    "media": [{ "gateway": "https://img/1.png" }],
                    "title": "Token One",
                    "id": { "tokenId": "0x1" },
                    "contract": { "address": "0xc0ffee" },
                    "description": "first"
                },
                {
                    "media": [],
                    "title": "Token Two",
                    "id": { "tokenId": "0x2" },
                    "contract": { "address": "0xc0ffee" },
                    "description": "second"
                }
            ],
            "totalCount": 2
        }));
    });

    let client = AlchemyGalleryClient::with_base_url(server.base_url());
    let nfts = client.fetch_gallery(&wallet_input("0xowner")).await.unwrap();

    mock.assert();
    assert_eq!(nfts.len(), 2);
    assert_eq!(nfts[0].image, "https://img/1.png");
    assert_eq!(nfts[0].token_id, "0x1");
    assert_eq!(nfts[1].image, "");
    assert_eq!(nfts[1].title, "Token Two");
}

#[tokio::test(flavor = "current_thread")]
async fn test_fetch_collection_gallery() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(Method::GET)
            .path("/getNFTsForCollection/")
            .query_param("contractAddress", "0xBC4C")
            .query_param("withMetadata", "true");
        then.status(200).json_body(json!({
            "nfts": [{
                "media": [{ "gateway": "https://img/ape.png" }],
                "title": "Ape",
                "id": { "tokenId": "0x2a" },
                "contract": { "address": "0xBC4C" },
                "description": "ape"
            }]
        }));
    });

    let client = AlchemyGalleryClient::with_base_url(server.base_url());
    let input = SearchInput {
        collection_address: "0xBC4C".to_string(),
        fetch_for_collection: true,
        ..Default::default()
    };
    let nfts = client.fetch_gallery(&input).await.unwrap();

    mock.assert();
    assert_eq!(nfts.len(), 1);
    assert_eq!(nfts[0].contract_address, "0xBC4C");
}

#[tokio::test(flavor = "current_thread")]
async fn test_wallet_filtered_by_collection_sends_array_param() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(Method::GET)
            .path("/getNFTs/")
            .query_param("owner", "0xowner")
            .query_param("contractAddresses[]", "0xBC4C");
        then.status(200).json_body(json!({ "ownedNfts": [] }));
    });

    let client = AlchemyGalleryClient::with_base_url(server.base_url());
    let input = SearchInput {
        wallet_address: "0xowner".to_string(),
        collection_address: "0xBC4C".to_string(),
        fetch_for_collection: false,
    };
    let nfts = client.fetch_gallery(&input).await.unwrap();

    mock.assert();
    assert!(nfts.is_empty());
}

#[tokio::test(flavor = "current_thread")]
async fn test_noop_input_makes_no_request() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(Method::GET);
        then.status(200).json_body(json!({ "ownedNfts": [] }));
    });

    let client = AlchemyGalleryClient::with_base_url(server.base_url());
    // Collection mode with no collection address: silent empty result.
    let input = SearchInput {
        wallet_address: "0xowner".to_string(),
        fetch_for_collection: true,
        ..Default::default()
    };
    let nfts = client.fetch_gallery(&input).await.unwrap();

    assert!(nfts.is_empty());
    mock.assert_hits(0);
}

#[tokio::test(flavor = "current_thread")]
async fn test_upstream_error_status() {
    let server = MockServer::start();

    let _mock = server.mock(|when, then| {
        when.method(Method::GET).path("/getNFTs/");
        then.status(500).body("boom");
    });

    let client = AlchemyGalleryClient::with_base_url(server.base_url());
    let result = client.fetch_gallery(&wallet_input("0xowner")).await;

    match result {
        Err(GalleryError::Upstream(msg)) => assert!(msg.contains("500")),
        other => panic!("expected upstream error, got {:?}", other),
    }
}

#[tokio::test(flavor = "current_thread")]
async fn test_undecodable_body_is_upstream_error() {
    let server = MockServer::start();

    let _mock = server.mock(|when, then| {
        when.method(Method::GET).path("/getNFTs/");
        then.status(200).body("not json");
    });

    let client = AlchemyGalleryClient::with_base_url(server.base_url());
    let result = client.fetch_gallery(&wallet_input("0xowner")).await;
    assert!(matches!(result, Err(GalleryError::Upstream(_))));
}

#[tokio::test(flavor = "current_thread")]
async fn test_missing_payload_key_is_empty_result() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(Method::GET).path("/getNFTs/");
        then.status(200).json_body(json!({ "unexpected": true }));
    });

    let client = AlchemyGalleryClient::with_base_url(server.base_url());
    let nfts = client.fetch_gallery(&wallet_input("0xowner")).await.unwrap();

    mock.assert();
    assert!(nfts.is_empty());
}
