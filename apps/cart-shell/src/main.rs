//! # Cart Shell Entry Point
//!
//! Replays a JSON script of cart commands and prints each outcome.
//!
//! ## Usage
//! ```bash
//! # Script from a file
//! cargo run -p cart-shell -- --script demo.json
//!
//! # Script from stdin, with a config file
//! echo '[{"op":"toggle_open"}]' | cargo run -p cart-shell -- --config cart.toml
//!
//! # Limits from the environment
//! STOREFRONT_MAX_ITEM_QUANTITY=10 cargo run -p cart-shell -- -s demo.json
//! ```

use std::process::ExitCode;

use cart_shell::{run, ShellArgs, USAGE};

fn main() -> ExitCode {
    let args = match ShellArgs::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("cart-shell: {}", err);
            return ExitCode::FAILURE;
        }
    };

    if args.help {
        println!("{}", USAGE);
        return ExitCode::SUCCESS;
    }

    match run(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("cart-shell: {}", err);
            ExitCode::FAILURE
        }
    }
}
