use crate::*;
use assert_cmd::prelude::*;
use cloudstor::context::Context;
use cloudstor::storage::Downloader;
use predicates::prelude::*;
use tokio::fs;

pub fn tests(client: &TestClient, tests: &mut Vec<Trial>) {
    tests.extend(async_trials!(
        client,
        e2e_test_put_then_get,
        e2e_test_put_into_prefix_then_ls,
        e2e_test_get_missing_object_fails,
        e2e_test_missing_bucket_env_fails
    ));
}

async fn e2e_test_put_then_get(client: TestClient) -> TestResult<()> {
    let source_path = get_test_data_path("small.txt");
    let remote = TEST_FIXTURE.new_file_path();
    let expected = fs::read(&source_path).await?;

    cloudstor_cmd()
        .arg("put")
        .arg(&source_path)
        .arg(&remote)
        .assert()
        .success()
        .stdout(predicate::str::contains("Uploaded:"));

    let stored = client
        .downloader
        .download(&Context::background(), &remote)
        .await?;
    assert_eq!(stored, expected);

    let local_dir = tempfile::tempdir()?;
    let local = local_dir.path().join("copy.txt");
    cloudstor_cmd()
        .arg("get")
        .arg(&remote)
        .arg(&local)
        .assert()
        .success()
        .stdout(predicate::str::contains("Downloaded:"));

    assert_eq!(fs::read(&local).await?, expected);
    Ok(())
}

async fn e2e_test_put_into_prefix_then_ls(_client: TestClient) -> TestResult<()> {
    let source_path = get_test_data_path("small.txt");
    let prefix = TEST_FIXTURE.new_prefix();
    let expected_key = format!("{prefix}small.txt");
    TEST_FIXTURE.add_path(expected_key.clone());

    cloudstor_cmd()
        .arg("put")
        .arg(&source_path)
        .arg(&prefix)
        .assert()
        .success();

    cloudstor_cmd()
        .arg("ls")
        .arg(&prefix)
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("{expected_key}\n")));
    Ok(())
}

async fn e2e_test_get_missing_object_fails(_client: TestClient) -> TestResult<()> {
    let remote = format!("{}absent.bin", TEST_FIXTURE.new_prefix());
    let local_dir = tempfile::tempdir()?;
    let local = local_dir.path().join("absent.bin");

    cloudstor_cmd()
        .arg("get")
        .arg(&remote)
        .arg(&local)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to download object"));

    assert!(!local.exists());
    Ok(())
}

async fn e2e_test_missing_bucket_env_fails(_client: TestClient) -> TestResult<()> {
    cloudstor_cmd()
        .env_remove("STORAGE_BUCKET")
        .arg("ls")
        .assert()
        .failure()
        .stderr(predicate::str::contains("STORAGE_BUCKET"));
    Ok(())
}
