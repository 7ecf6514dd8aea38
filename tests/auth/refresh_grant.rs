use httpmock::Method::POST;
use rdplatform_rs::AuthBuilder;

use crate::common;

#[tokio::test]
async fn refresh_grant_sends_refresh_token_and_omits_password() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path(common::AUTH_PATH)
            .body_includes("grant_type=refresh_token")
            .body_includes("username=testuser")
            .body_includes("refresh_token=ref-token-1")
            .body_includes("client_id=client-abc");
        then.status(200)
            .header("content-type", "application/json")
            .body(
                serde_json::json!({
                    "access_token": "acc-token-3",
                    "refresh_token": "ref-token-3",
                    "expires_in": "300"
                })
                .to_string(),
            );
    });

    // The password is accepted as a credential but never transmitted in the
    // refresh grant.
    let leaked_password = server.mock(|when, then| {
        when.method(POST)
            .path(common::AUTH_PATH)
            .body_includes("password=");
        then.status(500);
    });

    let client = common::test_client(&server);
    let creds = common::test_credentials();
    let token = AuthBuilder::new(&client, &creds)
        .refresh_token("ref-token-1")
        .fetch()
        .await
        .unwrap();

    mock.assert();
    leaked_password.assert_hits(0);

    // The old pair is replaced wholesale.
    assert_eq!(token.access_token, "acc-token-3");
    assert_eq!(token.refresh_token, "ref-token-3");
    assert_eq!(token.expires_in, 300);
}

#[tokio::test]
async fn refresh_helper_matches_builder() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path(common::AUTH_PATH)
            .body_includes("grant_type=refresh_token")
            .body_includes("refresh_token=old-refresh");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::token_body());
    });

    let client = common::test_client(&server);
    let creds = common::test_credentials();
    let token = rdplatform_rs::refresh(&client, &creds, "old-refresh")
        .await
        .unwrap();

    mock.assert();
    assert_eq!(token.access_token, "acc-token-1");
}
