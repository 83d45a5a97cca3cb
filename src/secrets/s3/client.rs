use crate::secrets::config::{StorageSettings, load_sdk_config};
use crate::secrets::error::{BackendError, Result, SummonError};
use crate::secrets::s3::models::S3SecretStore;
use crate::utils::log_utils::Logger;
use aws_sdk_s3::Client;

impl S3SecretStore {
    /// Create a client from the default provider chain plus `settings`
    ///
    /// # Errors
    ///
    /// Returns `SummonError::Config` if the runtime cannot be started or no
    /// usable credentials can be resolved.
    pub fn new(settings: &StorageSettings, logger: Logger) -> Result<Self> {
        let runtime = new_runtime()?;

        logger.info(&format!("Endpoint: {}", settings.endpoint_description()));
        if let Some(region) = &settings.region {
            logger.info(&format!("Region: {region}"));
        }

        let sdk_config = runtime
            .block_on(load_sdk_config(settings))
            .map_err(SummonError::Config)?;

        logger.debug(&format!("Resolved region: {:?}", sdk_config.region()));

        let conf = settings
            .apply(aws_sdk_s3::config::Builder::from(&sdk_config))
            .build();

        Ok(Self {
            client: Client::from_conf(conf),
            runtime,
            logger,
        })
    }

    /// Create a client from a fully built S3 config, bypassing the provider chain
    ///
    /// # Errors
    ///
    /// Returns `SummonError::Config` if the runtime cannot be started.
    pub fn from_conf(conf: aws_sdk_s3::Config, logger: Logger) -> Result<Self> {
        Ok(Self {
            client: Client::from_conf(conf),
            runtime: new_runtime()?,
            logger,
        })
    }
}

fn new_runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| {
            SummonError::Config(BackendError::new(
                None,
                format!("Failed to create runtime: {e}"),
            ))
        })
}
