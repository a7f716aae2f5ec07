//! HTTP adapter tests against a local mock backend.

use mockito::{Matcher, Server};
use tm_core::ports::{SnapshotCatalogPort, SnapshotDownloadPort, SnapshotMetadataPort};
use tm_core::{ApiError, DownloadToken, SnapshotId, SnapshotSourceKind};
use tm_infra::TimeMachineHttpApi;

fn api_for(server: &Server) -> TimeMachineHttpApi {
    TimeMachineHttpApi::new(&format!("{}/api/v1", server.url()), None).unwrap()
}

#[tokio::test]
async fn get_snapshot_parses_descriptor() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/snapshot/5")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "id": 5,
                "timestamp": "2023-04-05T00:00:00Z",
                "prev": {"id": 4, "timestamp": "2023-04-04T00:00:00Z"},
                "next": {"id": 6, "timestamp": "2023-04-06T00:00:00Z"},
                "download_token": "dl-5"
            }"#,
        )
        .create_async()
        .await;

    let descriptor = api_for(&server)
        .get_snapshot(SnapshotId::new(5))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(descriptor.id, SnapshotId::new(5));
    assert_eq!(
        descriptor.neighbor_ids(),
        (Some(SnapshotId::new(4)), Some(SnapshotId::new(6)))
    );
    assert_eq!(descriptor.download_token, DownloadToken::new("dl-5"));
}

#[tokio::test]
async fn known_error_body_maps_to_known_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/v1/snapshot/9")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error":"snapshot_not_found"}"#)
        .create_async()
        .await;

    let result = api_for(&server).get_snapshot(SnapshotId::new(9)).await;

    assert_eq!(result, Err(ApiError::known(404, "snapshot_not_found")));
}

#[tokio::test]
async fn unstructured_error_maps_to_unknown_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/v1/snapshot/9")
        .with_status(500)
        .with_body("internal error")
        .create_async()
        .await;

    let result = api_for(&server).get_snapshot(SnapshotId::new(9)).await;

    match result {
        Err(ApiError::Unknown { status, .. }) => assert_eq!(status, Some(500)),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_backend_maps_to_unknown_error_without_status() {
    // Nothing listens on the discard port.
    let api = TimeMachineHttpApi::new("http://127.0.0.1:9/api/v1/", None).unwrap();

    let result = api.get_snapshot(SnapshotId::new(1)).await;

    match result {
        Err(ApiError::Unknown { status, .. }) => assert_eq!(status, None),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn malformed_success_body_is_unknown_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/v1/snapshot/2")
        .with_status(200)
        .with_body("{not json")
        .create_async()
        .await;

    let result = api_for(&server).get_snapshot(SnapshotId::new(2)).await;

    assert!(matches!(result, Err(ApiError::Unknown { .. })));
}

#[tokio::test]
async fn download_passes_token_and_returns_raw_bytes() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/snapshot/download")
        .match_query(Matcher::UrlEncoded("token".into(), "dl-5".into()))
        .with_status(200)
        .with_header("content-type", "application/octet-stream")
        .with_body([0u8, 1, 2, 3])
        .create_async()
        .await;

    let bytes = api_for(&server)
        .download(&DownloadToken::new("dl-5"))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(&bytes[..], &[0, 1, 2, 3]);
}

#[tokio::test]
async fn list_snapshots_sends_paging_query() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/snapshot")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "2".into()),
            Matcher::UrlEncoded("page_size".into(), "20".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "number_of_snapshots": 21,
                "number_of_pages": 2,
                "snapshots": [
                    {"id": 21, "timestamp": "2023-06-01T00:00:00Z", "source_kind": "Upload", "note": "trip"}
                ]
            }"#,
        )
        .create_async()
        .await;

    let page = api_for(&server).list_snapshots(2, 20).await.unwrap();

    mock.assert_async().await;
    assert_eq!(page.number_of_pages, 2);
    assert_eq!(page.snapshots[0].source_kind, SnapshotSourceKind::Upload);
    assert_eq!(page.snapshots[0].note.as_deref(), Some("trip"));
}
