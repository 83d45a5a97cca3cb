use crate::interfaces::ObjectStore;
use crate::secrets::error::{ObjectError, Result, SummonError};
use crate::secrets::reference::SecretRef;
use crate::utils::log_utils::Logger;
use std::io::Write;

/// Check the bucket, then fetch and drain the object.
///
/// The bucket probe runs first so a missing or forbidden bucket is reported
/// as such instead of as a generic fetch failure.
///
/// # Errors
///
/// Returns `SummonError::Bucket`, `SummonError::Fetch` or `SummonError::Read`
/// depending on which step failed. Nothing is retried.
pub fn fetch_secret<S>(store: &S, reference: &SecretRef, logger: &Logger) -> Result<Vec<u8>>
where
    S: ObjectStore + ?Sized,
{
    logger.info(&format!("Checking bucket '{}'", reference.bucket));
    store
        .head_bucket(reference)
        .map_err(|source| SummonError::Bucket {
            reference: reference.to_string(),
            source,
        })?;

    logger.info(&format!("Fetching '{}'", reference.key));
    let content = store.get_object(reference).map_err(|e| match e {
        ObjectError::Request(source) => SummonError::Fetch {
            reference: reference.to_string(),
            source,
        },
        ObjectError::Body(source) => SummonError::Read(source),
    })?;

    logger.debug(&format!("Secret is {} bytes", content.len()));
    Ok(content)
}

/// Write the secret verbatim; no newline is appended.
///
/// # Errors
///
/// Returns `SummonError::Output` if the writer fails.
pub fn write_secret<W: Write>(out: &mut W, content: &[u8]) -> Result<()> {
    out.write_all(content)?;
    out.flush()?;
    Ok(())
}
