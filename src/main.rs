use summon_s3::args::{self, ParsedArgs};
use summon_s3::run_app;

fn main() {
    // Parse command-line arguments
    let args = match args::args_checks() {
        Ok(ParsedArgs::Fetch(args)) => args,
        Ok(ParsedArgs::Display(text)) => {
            print!("{text}");
            return;
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    // Run the application logic
    let stdout = std::io::stdout();
    if let Err(e) = run_app(&args, &mut stdout.lock()) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
