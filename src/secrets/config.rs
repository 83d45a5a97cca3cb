use crate::secrets::error::BackendError;
use aws_config::meta::region::RegionProviderChain;
use aws_config::{BehaviorVersion, SdkConfig};
use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_s3::config::Region;

/// Overrides the service endpoint so any S3-compatible provider can be used
pub const ENDPOINT_ENV: &str = "AWS_ENDPOINT_URL";
/// Checked in order before the SDK's own region chain
pub const REGION_ENVS: [&str; 2] = ["AWS_REGION", "AWS_DEFAULT_REGION"];
/// Used when neither the environment nor a profile names a region
pub const FALLBACK_REGION: &str = "us-east-1";

/// Endpoint and region picked up from the environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorageSettings {
    pub endpoint_url: Option<String>,
    pub region: Option<String>,
}

impl StorageSettings {
    /// Resolve settings through `lookup`, treating empty values as unset
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        Self {
            endpoint_url: non_empty(ENDPOINT_ENV),
            region: REGION_ENVS.iter().find_map(|name| non_empty(*name)),
        }
    }

    /// Resolve settings from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Layer the endpoint and region overrides onto an S3 config builder
    pub fn apply(&self, mut builder: aws_sdk_s3::config::Builder) -> aws_sdk_s3::config::Builder {
        if let Some(endpoint) = &self.endpoint_url {
            builder = builder.endpoint_url(endpoint);
        }
        if let Some(region) = &self.region {
            builder = builder.region(Region::new(region.clone()));
        }
        builder
    }

    /// Human-readable endpoint for diagnostics
    pub fn endpoint_description(&self) -> &str {
        self.endpoint_url.as_deref().unwrap_or("default AWS endpoint")
    }
}

/// Load the shared SDK config through the default provider chain.
///
/// Credentials are resolved once here so a broken chain fails before any
/// request is sent.
///
/// # Errors
///
/// Returns an error if no credentials provider is configured or the chain
/// cannot produce credentials.
pub async fn load_sdk_config(settings: &StorageSettings) -> Result<SdkConfig, BackendError> {
    let region = RegionProviderChain::first_try(settings.region.clone().map(Region::new))
        .or_default_provider()
        .or_else(Region::new(FALLBACK_REGION));

    let sdk_config = aws_config::defaults(BehaviorVersion::latest())
        .region(region)
        .load()
        .await;

    let provider = sdk_config
        .credentials_provider()
        .ok_or_else(|| BackendError::new(None, "no credentials provider configured"))?;
    provider
        .provide_credentials()
        .await
        .map_err(|e| BackendError::from_error(&e))?;

    Ok(sdk_config)
}
