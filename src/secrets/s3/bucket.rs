use crate::secrets::error::BackendError;
use crate::secrets::s3::models::S3SecretStore;

impl S3SecretStore {
    /// Check that a bucket exists and the credentials can reach it
    pub fn bucket_exists(&self, bucket_name: &str) -> Result<(), BackendError> {
        self.runtime.block_on(async {
            self.logger
                .debug(&format!("HeadBucket request: bucket '{bucket_name}'"));

            self.client
                .head_bucket()
                .bucket(bucket_name)
                .send()
                .await
                .map_err(|e| {
                    let err = BackendError::from_sdk(&e);
                    self.logger.debug(&format!(
                        "HeadBucket error code: {}",
                        err.code.as_deref().unwrap_or("unknown")
                    ));
                    err
                })?;

            self.logger.info(&format!("Bucket '{bucket_name}' is reachable"));
            Ok(())
        })
    }
}
