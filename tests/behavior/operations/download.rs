use crate::*;
use aws_sdk_s3::error::SdkError;
use aws_sdk_s3::operation::get_object::GetObjectError;
use cloudstor::context::Context;
use cloudstor::error::Error;
use cloudstor::storage::Downloader;
use std::error::Error as _;

pub fn tests(client: &TestClient, tests: &mut Vec<Trial>) {
    tests.extend(async_trials!(
        client,
        test_download_round_trip,
        test_download_empty_object,
        test_download_large_object,
        test_download_non_existent_object,
        test_download_cancelled_context
    ));
}

async fn test_download_round_trip(client: TestClient) -> TestResult<()> {
    let path = TEST_FIXTURE.new_file_path();
    let payload = TEST_FIXTURE.new_payload(1..64 * 1024);
    client.stage(&path, &payload).await?;

    let data = client
        .downloader
        .download(&Context::background(), &path)
        .await?;

    assert_eq!(data, payload);
    Ok(())
}

async fn test_download_empty_object(client: TestClient) -> TestResult<()> {
    let path = TEST_FIXTURE.new_file_path();
    client.stage(&path, b"").await?;

    let data = client
        .downloader
        .download(&Context::background(), &path)
        .await?;

    assert!(data.is_empty());
    Ok(())
}

async fn test_download_large_object(client: TestClient) -> TestResult<()> {
    let path = TEST_FIXTURE.new_file_path();
    let payload = vec![0x42; 16 * 1024 * 1024];
    client.stage(&path, &payload).await?;

    let data = client
        .downloader
        .download(&Context::background(), &path)
        .await?;

    assert_eq!(data.len(), payload.len());
    assert_eq!(data, payload);
    Ok(())
}

async fn test_download_non_existent_object(client: TestClient) -> TestResult<()> {
    let path = format!("{}missing.bin", TEST_FIXTURE.new_prefix());

    let err = client
        .downloader
        .download(&Context::background(), &path)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::DownloadObject { .. }), "{err}");
    assert!(err.to_string().contains("failed to download object"));
    let source = err
        .source()
        .and_then(|s| s.downcast_ref::<SdkError<GetObjectError>>())
        .expect("sdk error source");
    assert!(source.as_service_error().is_some_and(|e| e.is_no_such_key()));
    Ok(())
}

async fn test_download_cancelled_context(client: TestClient) -> TestResult<()> {
    let path = TEST_FIXTURE.new_file_path();
    client.stage(&path, b"never read").await?;
    let ctx = Context::background();
    ctx.cancel();

    let err = client.downloader.download(&ctx, &path).await.unwrap_err();

    assert!(matches!(err, Error::Canceled), "{err}");
    Ok(())
}
