use std::process;
use xcvr_type::error::is_usage_error;

fn main() {
    if let Err(e) = xcvr_type::cli::run() {
        eprintln!("Error: {}", e);
        if is_usage_error(&e) {
            eprintln!("{}", xcvr_type::cli::usage_text());
            process::exit(2);
        }
        process::exit(1);
    }
}
