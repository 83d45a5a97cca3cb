use aws_config::BehaviorVersion;
use aws_credential_types::Credentials;
use aws_sdk_s3::config::Region;
use aws_smithy_runtime::client::http::test_util::{CaptureRequestReceiver, capture_request};
use summon_s3::interfaces::ObjectStore;
use summon_s3::secrets::SecretRef;
use summon_s3::secrets::config::StorageSettings;
use summon_s3::secrets::s3::S3SecretStore;
use summon_s3::utils::log_utils::Logger;

/// Build a store whose HTTP layer records the first request instead of sending it
fn capturing_store(settings: &StorageSettings) -> (S3SecretStore, CaptureRequestReceiver) {
    let (http_client, request) = capture_request(None);

    let builder = aws_sdk_s3::Config::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .credentials_provider(Credentials::new(
            "AKIDTEST",
            "SECRETTEST",
            None,
            None,
            "TestStaticCredentials",
        ))
        .http_client(http_client);

    let store = S3SecretStore::from_conf(settings.apply(builder).build(), Logger::new(0))
        .expect("runtime should start");
    (store, request)
}

fn override_settings() -> StorageSettings {
    StorageSettings::from_lookup(|name| match name {
        "AWS_ENDPOINT_URL" => Some("http://127.0.0.1:9000".to_string()),
        _ => None,
    })
}

#[test]
fn test_endpoint_override_redirects_bucket_probe() {
    let (store, request) = capturing_store(&override_settings());
    let secret = SecretRef::parse("mybucket/a/b/c").expect("reference");

    store.head_bucket(&secret).expect("head bucket");

    let sent = request.expect_request();
    let uri = sent.uri();
    assert!(uri.starts_with("http://127.0.0.1:9000"), "uri: {uri}");
    assert!(uri.contains("mybucket"), "uri: {uri}");
}

#[test]
fn test_endpoint_override_redirects_object_fetch() {
    let (store, request) = capturing_store(&override_settings());
    let secret = SecretRef::parse("mybucket/a/b/c").expect("reference");

    // The capture client answers 200 with an empty body
    let content = store.get_object(&secret).expect("get object");
    assert!(content.is_empty());

    let sent = request.expect_request();
    let uri = sent.uri();
    assert!(uri.starts_with("http://127.0.0.1:9000"), "uri: {uri}");
    assert!(uri.contains("/a/b/c"), "uri: {uri}");
}

#[test]
fn test_default_endpoint_without_override() {
    let (store, request) = capturing_store(&StorageSettings::default());
    let secret = SecretRef::parse("mybucket/key").expect("reference");

    store.head_bucket(&secret).expect("head bucket");

    let sent = request.expect_request();
    let uri = sent.uri();
    assert!(uri.contains("amazonaws.com"), "uri: {uri}");
    assert!(!uri.contains("127.0.0.1"), "uri: {uri}");
}

#[test]
fn test_region_override_applies_to_config() {
    let settings = StorageSettings::from_lookup(|name| match name {
        "AWS_DEFAULT_REGION" => Some("eu-central-1".to_string()),
        _ => None,
    });
    let (store, request) = capturing_store(&settings);
    let secret = SecretRef::parse("mybucket/key").expect("reference");

    store.head_bucket(&secret).expect("head bucket");

    let sent = request.expect_request();
    let uri = sent.uri();
    assert!(uri.contains("eu-central-1"), "uri: {uri}");
}
