#![forbid(unsafe_code)]

use clap::Parser;

fn main() {
    let cli = sift::Cli::parse();
    let json = cli.json;
    if let Err(error) = sift::run(cli) {
        if json {
            eprintln!(
                "{}",
                serde_json::json!({
                    "status": "error",
                    "error": error.to_string(),
                    "exit_code": error.exit_code(),
                })
            );
        } else {
            eprintln!("sift: {error}");
        }
        std::process::exit(error.exit_code());
    }
}
