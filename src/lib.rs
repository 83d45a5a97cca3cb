pub mod args;
pub mod interfaces;
pub mod secrets;
pub mod utils {
    pub mod log_utils;
}

pub use args::Args;

use crate::secrets::config::StorageSettings;
use crate::secrets::error::Result;
use crate::secrets::s3::S3SecretStore;
use crate::secrets::{SecretRef, fetch_secret, write_secret};
use crate::utils::log_utils::Logger;
use std::io::Write;

/// Fetch the secret named by `args` and write it to `out`
///
/// # Errors
///
/// Returns the first failing step's `SummonError`; nothing is written to
/// `out` unless the whole object was read.
pub fn run_app<W: Write>(args: &Args, out: &mut W) -> Result<()> {
    let logger = Logger::new(args.verbose);
    let reference = SecretRef::parse(&args.reference)?;
    let settings = StorageSettings::from_env();

    let store = S3SecretStore::new(&settings, logger)?;
    let content = fetch_secret(&store, &reference, &logger)?;

    write_secret(out, &content)
}
