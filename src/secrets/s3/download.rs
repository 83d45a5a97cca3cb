use crate::secrets::error::{BackendError, ObjectError};
use crate::secrets::s3::models::S3SecretStore;

impl S3SecretStore {
    /// Download an object into memory
    pub fn download_object(&self, bucket_name: &str, object_key: &str) -> Result<Vec<u8>, ObjectError> {
        self.runtime.block_on(async {
            self.logger.debug(&format!(
                "GetObject request details:\nBucket: {bucket_name}\nObject key: {object_key}"
            ));

            let resp = self
                .client
                .get_object()
                .bucket(bucket_name)
                .key(object_key)
                .send()
                .await
                .map_err(|e| {
                    let err = BackendError::from_sdk(&e);
                    self.logger.debug(&format!(
                        "GetObject error code: {}",
                        err.code.as_deref().unwrap_or("unknown")
                    ));
                    ObjectError::Request(err)
                })?;

            self.logger.debug(&format!(
                "GetObject response received\nContent length: {:?}\nE-Tag: {:?}",
                resp.content_length(),
                resp.e_tag()
            ));

            // Collecting consumes the stream, so it is released on both paths
            let bytes = resp
                .body
                .collect()
                .await
                .map_err(|e| ObjectError::Body(BackendError::from_error(&e)))?
                .to_vec();

            self.logger
                .info(&format!("Downloaded {} bytes", bytes.len()));

            Ok(bytes)
        })
    }
}
