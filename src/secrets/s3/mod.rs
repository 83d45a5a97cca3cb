pub mod bucket;
pub mod client;
pub mod download;
pub mod models;

pub use models::S3SecretStore;

use crate::interfaces::ObjectStore;
use crate::secrets::error::{BackendError, ObjectError};
use crate::secrets::reference::SecretRef;

impl ObjectStore for S3SecretStore {
    fn head_bucket(&self, reference: &SecretRef) -> Result<(), BackendError> {
        self.bucket_exists(&reference.bucket)
    }

    fn get_object(&self, reference: &SecretRef) -> Result<Vec<u8>, ObjectError> {
        self.download_object(&reference.bucket, &reference.key)
    }
}
