use crate::secrets::error::{Result, SummonError, USAGE};
use std::fmt;

/// A secret's location, `<bucket>/<key-path>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretRef {
    pub bucket: String,
    pub key: String,
}

impl SecretRef {
    /// Split on the first `/`; the key keeps any further separators.
    ///
    /// Neither half is checked for emptiness, but an argument without any `/`
    /// is rejected rather than fetched with an empty key.
    ///
    /// # Errors
    ///
    /// Returns `SummonError::Usage` if `raw` contains no `/`.
    pub fn parse(raw: &str) -> Result<Self> {
        let (bucket, key) = raw
            .split_once('/')
            .ok_or_else(|| SummonError::Usage(format!("{USAGE} (got '{raw}')")))?;

        Ok(Self {
            bucket: bucket.to_string(),
            key: key.to_string(),
        })
    }
}

impl fmt::Display for SecretRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.bucket, self.key)
    }
}
