use crate::utils::log_utils::Logger;
use aws_sdk_s3::Client;

/// S3-compatible backend driven synchronously on its own runtime
pub struct S3SecretStore {
    pub(crate) client: Client,
    pub(crate) runtime: tokio::runtime::Runtime,
    pub(crate) logger: Logger,
}
