use clap::Parser;

const ENV_HELP: &str = "\
Environment:
  AWS_ENDPOINT_URL      S3-compatible endpoint (e.g. https://nyc3.digitaloceanspaces.com)
  AWS_REGION            Region, falling back to AWS_DEFAULT_REGION, then us-east-1
  AWS_ACCESS_KEY_ID     Credentials, or any other source the AWS default provider chain supports
  AWS_SECRET_ACCESS_KEY";

/// Fetches a secret from an S3-compatible storage service (e.g., DigitalOcean Spaces).
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(name = "summon-s3", author, version, about, long_about = None, after_help = ENV_HELP)]
pub struct Args {
    /// Secret to fetch, as <bucket>/<key-path>
    #[arg(value_name = "BUCKET/KEY-PATH")]
    pub reference: String,

    /// Print diagnostics to stderr (use -v -v for request details)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// What the command line asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedArgs {
    /// Fetch a secret
    Fetch(Args),
    /// Help or version text to print before exiting successfully
    Display(String),
}
