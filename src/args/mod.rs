// Public modules
pub mod types;

pub use types::*;

use crate::secrets::error::{SummonError, USAGE};
use clap::Parser;
use clap::error::ErrorKind;
use std::ffi::OsString;

/// Parse command line arguments from the process environment
///
/// # Errors
///
/// Returns `SummonError::Usage` unless exactly one secret reference is given.
pub fn args_checks() -> Result<ParsedArgs, SummonError> {
    parse_from_list(std::env::args_os())
}

/// Parse an explicit argument list (program name first)
///
/// Help and version requests come back as `ParsedArgs::Display` so the caller
/// decides where to print them. Every other clap failure collapses into a
/// single-line usage error.
///
/// # Errors
///
/// Returns `SummonError::Usage` for a missing or extra positional argument
/// or an unknown flag.
pub fn parse_from_list<I, T>(argv: I) -> Result<ParsedArgs, SummonError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Args::try_parse_from(argv) {
        Ok(args) => Ok(ParsedArgs::Fetch(args)),
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                Ok(ParsedArgs::Display(e.render().to_string()))
            }
            kind => Err(SummonError::Usage(match kind.as_str() {
                Some(reason) => format!("{USAGE} ({reason})"),
                None => USAGE.to_string(),
            })),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expect_usage(argv: &[&str]) -> String {
        match parse_from_list(argv) {
            Err(SummonError::Usage(msg)) => msg,
            other => panic!("expected usage error for {argv:?}, got {other:?}"),
        }
    }

    #[test]
    fn single_reference_parses() {
        let parsed = parse_from_list(["summon-s3", "mybucket/a/b/c"]).expect("parse");
        assert_eq!(
            parsed,
            ParsedArgs::Fetch(Args {
                reference: "mybucket/a/b/c".to_string(),
                verbose: 0,
            })
        );
    }

    #[test]
    fn verbose_flag_counts() {
        match parse_from_list(["summon-s3", "-vv", "b/k"]).expect("parse") {
            ParsedArgs::Fetch(args) => assert_eq!(args.verbose, 2),
            other => panic!("expected fetch, got {other:?}"),
        }
    }

    #[test]
    fn zero_arguments_is_usage_error() {
        let msg = expect_usage(&["summon-s3"]);
        assert!(msg.starts_with(USAGE));
        assert!(!msg.contains('\n'));
    }

    #[test]
    fn two_arguments_is_usage_error() {
        let msg = expect_usage(&["summon-s3", "b/k1", "b/k2"]);
        assert!(msg.starts_with(USAGE));
    }

    #[test]
    fn unknown_flag_is_usage_error() {
        expect_usage(&["summon-s3", "--bogus", "b/k"]);
    }

    #[test]
    fn help_and_version_are_displayed() {
        for flag in ["-h", "--help"] {
            match parse_from_list(["summon-s3", flag]).expect("parse") {
                ParsedArgs::Display(text) => assert!(text.contains("BUCKET/KEY-PATH")),
                other => panic!("expected help text, got {other:?}"),
            }
        }

        match parse_from_list(["summon-s3", "-V"]).expect("parse") {
            ParsedArgs::Display(text) => {
                assert!(text.contains(env!("CARGO_PKG_VERSION")));
            }
            other => panic!("expected version text, got {other:?}"),
        }
    }
}
