use clap::Parser;
use labcheck::cli::{execute, init_logging, Cli, EXIT_ERROR};

fn run_cli() -> i32 {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match execute(&cli.command) {
        Ok(outcome) => {
            print!("{}", outcome.output);
            outcome.exit_code
        }
        Err(e) => {
            eprintln!("error: {e}");
            EXIT_ERROR
        }
    }
}

fn main() {
    std::process::exit(run_cli());
}
