use clap::Parser;
use std::process;
use wlk_reader::cli::{self, Args};

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    match cli::run(args) {
        Ok(()) => process::exit(0),
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}
