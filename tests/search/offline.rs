use httpmock::Method::POST;
use rdplatform_rs::SearchBuilder;
use serde_json::json;

use crate::common;

#[tokio::test]
async fn search_builder_posts_expected_payload() {
    let server = common::setup_server();

    let expected_payload = json!({
        "View": "Entities",
        "Filter": "RIC eq 'LSEG.L'",
        "Select": "IssuerCommonName,IssueISIN,ExchangeName"
    });

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path(common::SEARCH_PATH)
            .header("accept", "application/json")
            .header("authorization", "Bearer acc-token-1")
            .json_body(expected_payload);
        then.status(200)
            .header("content-type", "application/json")
            .body(
                json!({
                    "Total": 1,
                    "Hits": [{
                        "IssuerCommonName": "London Stock Exchange Group PLC",
                        "IssueISIN": "GB00B0SWJX34",
                        "ExchangeName": "London Stock Exchange"
                    }]
                })
                .to_string(),
            );
    });

    let client = common::test_client(&server);
    let resp = SearchBuilder::new(&client, "acc-token-1")
        .view("Entities")
        .filter("RIC eq 'LSEG.L'")
        .select("IssuerCommonName,IssueISIN,ExchangeName")
        .fetch()
        .await
        .unwrap();

    mock.assert();

    assert_eq!(resp.total, 1);
    assert_eq!(resp.hits.len(), 1);
    assert_eq!(
        resp.hits[0].get("IssuerCommonName").and_then(|v| v.as_str()),
        Some("London Stock Exchange Group PLC")
    );
}

#[tokio::test]
async fn zero_hits_is_a_valid_success() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(POST).path(common::SEARCH_PATH);
        then.status(200)
            .header("content-type", "application/json")
            .body(json!({ "Total": 0, "Hits": [] }).to_string());
    });

    let client = common::test_client(&server);
    let resp = SearchBuilder::new(&client, "acc-token-1")
        .filter("RIC eq 'NOSUCH.RIC'")
        .fetch()
        .await
        .unwrap();

    mock.assert();
    assert_eq!(resp.total, 0);
    assert!(resp.hits.is_empty());
}

#[tokio::test]
async fn raw_payload_overrides_setters() {
    let server = common::setup_server();

    let expected_payload = json!({
        "View": "Quotes",
        "Filter": "TickerSymbol eq 'LSEG'",
        "Select": "DocumentTitle",
        "Top": 3
    });

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path(common::SEARCH_PATH)
            .json_body(expected_payload.clone());
        then.status(200)
            .header("content-type", "application/json")
            .body(json!({ "Total": 0, "Hits": [] }).to_string());
    });

    let client = common::test_client(&server);
    let resp = SearchBuilder::new(&client, "acc-token-1")
        .view("Entities") // ignored once a payload is supplied
        .payload(expected_payload)
        .fetch()
        .await
        .unwrap();

    mock.assert();
    assert_eq!(resp.total, 0);
}
