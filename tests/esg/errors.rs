use httpmock::Method::GET;
use rdplatform_rs::{EsgBuilder, RdpError};

use crate::common;

#[tokio::test]
async fn empty_arguments_fail_before_any_network_call() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET).path(common::ESG_PATH);
        then.status(200).body(common::esg_body());
    });

    let client = common::test_client(&server);

    let err = EsgBuilder::new(&client, "", "LSEG.L").fetch().await.unwrap_err();
    assert!(matches!(err, RdpError::InvalidArgument(_)), "got {err:?}");

    let err = EsgBuilder::new(&client, "acc-token-1", "")
        .fetch()
        .await
        .unwrap_err();
    assert!(matches!(err, RdpError::InvalidArgument(_)), "got {err:?}");

    mock.assert_hits(0);
}

#[tokio::test]
async fn expired_token_yields_request_error_with_status_401() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET).path(common::ESG_PATH);
        then.status(401)
            .header("content-type", "application/json")
            .body(
                serde_json::json!({
                    "error": { "status": 401, "message": "token expired" }
                })
                .to_string(),
            );
    });

    let client = common::test_client(&server);
    let err = EsgBuilder::new(&client, "stale-token", "LSEG.L")
        .fetch()
        .await
        .unwrap_err();

    mock.assert();

    match &err {
        RdpError::Request {
            status,
            reason,
            body,
        } => {
            assert_eq!(*status, 401);
            assert_eq!(reason, "Unauthorized");
            assert!(body.contains("token expired"));
        }
        other => panic!("expected Request error, got {other:?}"),
    }
    assert!(err.is_token_expired());
}
