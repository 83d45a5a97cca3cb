use crate::secrets::error::{BackendError, ObjectError};
use crate::secrets::reference::SecretRef;
use mockall::automock;

/// Interface for the object-storage backend to facilitate testing
#[automock]
pub trait ObjectStore {
    /// Probe that the reference's bucket exists and is reachable
    fn head_bucket(&self, reference: &SecretRef) -> Result<(), BackendError>;

    /// Fetch the referenced object and drain its body into memory
    fn get_object(&self, reference: &SecretRef) -> Result<Vec<u8>, ObjectError>;
}
