use std::process::ExitCode;

use brailler::translate;
use clap::Parser;
use log::debug;

#[derive(Debug, Parser)] // requires `derive` feature
#[command(name = "brailler")]
#[command(about = "A command line tool to translate to and from Braille")]
#[command(author, version, long_about = None)] // Read from `Cargo.toml`
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Text to translate to braille, or braille dot patterns (`O` and `.`)
    /// to translate to text. Multiple arguments are joined with a space.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    text: Vec<String>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Cli::parse();

    if args.text.is_empty() {
        println!("Please provide the text to translate as an argument.");
        return ExitCode::SUCCESS;
    }

    let input = args.text.join(" ");
    debug!("Input {:?}", input);
    match translate(&input) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Translation failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
