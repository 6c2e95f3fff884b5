//! # Cart Shell Library
//!
//! Host for the storefront cart engine: loads configuration, sets up
//! logging, and replays command scripts against a single cart.
//!
//! ## Module Organization
//! ```text
//! cart_shell/
//! ├── lib.rs          ◄─── You are here (arguments, tracing, replay)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── cart.rs     ◄─── Lock-protected cart + engine
//! │   └── config.rs   ◄─── TOML / env configuration
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   └── cart.rs     ◄─── Cart commands and dispatch
//! └── error.rs        ◄─── Shell error type
//! ```
//!
//! ## Output Contract
//! - stdout: one JSON `Outcome` per command, nothing else
//! - stderr: logs
//! - exit 1 only for shell failures (arguments, config, IO, script JSON)

pub mod commands;
pub mod error;
pub mod state;

use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::PathBuf;

use storefront_core::CartEngine;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use commands::{execute, CartCommand};
use error::{ShellError, ShellResult};
use state::{CartState, ShellConfig};

pub const USAGE: &str = "usage: cart-shell [--config <path>] [--script <path>]";

// =============================================================================
// Arguments
// =============================================================================

/// Parsed command-line arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellArgs {
    /// Config file. Falls back to the platform config dir.
    pub config: Option<PathBuf>,

    /// Command script. Read from stdin when absent.
    pub script: Option<PathBuf>,

    /// `--help` was given; print [`USAGE`] and do nothing else.
    pub help: bool,
}

impl ShellArgs {
    /// Parses arguments, excluding the program name.
    pub fn parse<I>(args: I) -> ShellResult<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = ShellArgs::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" | "-c" => parsed.config = Some(Self::value(&arg, args.next())?),
                "--script" | "-s" => parsed.script = Some(Self::value(&arg, args.next())?),
                "--help" | "-h" => {
                    parsed.help = true;
                    return Ok(parsed);
                }
                other => {
                    return Err(ShellError::Usage(format!(
                        "unknown argument '{}'\n{}",
                        other, USAGE
                    )))
                }
            }
        }

        Ok(parsed)
    }

    fn value(flag: &str, value: Option<String>) -> ShellResult<PathBuf> {
        value
            .map(PathBuf::from)
            .ok_or_else(|| ShellError::Usage(format!("{} requires a path\n{}", flag, USAGE)))
    }
}

// =============================================================================
// Replay
// =============================================================================

/// Counts from one script run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub succeeded: usize,
    pub failed: usize,
}

/// Executes every command in `commands`, writing one JSON outcome per line.
pub fn replay<W: Write>(
    state: &CartState,
    commands: Vec<CartCommand>,
    out: &mut W,
) -> ShellResult<ReplaySummary> {
    let mut summary = ReplaySummary::default();

    for command in commands {
        let outcome = execute(state, command);
        if outcome.is_ok() {
            summary.succeeded += 1;
        } else {
            summary.failed += 1;
        }

        serde_json::to_writer(&mut *out, &outcome)?;
        out.write_all(b"\n")?;
    }

    out.flush()?;
    Ok(summary)
}

/// Reads a JSON array of commands.
pub fn read_script<R: Read>(reader: R) -> ShellResult<Vec<CartCommand>> {
    Ok(serde_json::from_reader(reader)?)
}

// =============================================================================
// Entry Point
// =============================================================================

/// Runs the shell: config, logging, then script replay to stdout.
///
/// ## Startup Sequence
/// 1. Load configuration (file, then environment)
/// 2. Initialize tracing with the configured filter
/// 3. Read the command script
/// 4. Replay it against a fresh cart
pub fn run(args: ShellArgs) -> ShellResult<ReplaySummary> {
    let config = ShellConfig::load(args.config)?;
    init_tracing(&config.log_filter);

    info!(
        source = ?config.source,
        max_line_items = ?config.cart.max_line_items,
        max_item_quantity = ?config.cart.max_item_quantity,
        "Configuration loaded"
    );

    let commands = match &args.script {
        Some(path) => {
            info!(?path, "Reading command script");
            read_script(BufReader::new(File::open(path)?))?
        }
        None => {
            info!("Reading command script from stdin");
            read_script(io::stdin().lock())?
        }
    };

    let state = CartState::new(CartEngine::with_limits(config.cart.limits()));
    let stdout = io::stdout();
    let summary = replay(&state, commands, &mut stdout.lock())?;

    if summary.failed > 0 {
        warn!(failed = summary.failed, "Some cart commands were rejected");
    }
    info!(
        succeeded = summary.succeeded,
        failed = summary.failed,
        "Replay complete"
    );

    Ok(summary)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages (takes precedence)
/// - `log_filter` from config / `STOREFRONT_LOG` otherwise
fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // A subscriber may already be installed when embedded; keep that one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::{CartLimits, Outcome};
    use crate::state::CartResponse;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args() {
        let parsed = ShellArgs::parse(args(&["--config", "a.toml", "-s", "run.json"])).unwrap();
        assert_eq!(parsed.config, Some(PathBuf::from("a.toml")));
        assert_eq!(parsed.script, Some(PathBuf::from("run.json")));

        assert_eq!(ShellArgs::parse(args(&[])).unwrap(), ShellArgs::default());
    }

    #[test]
    fn test_parse_help_is_not_an_error() {
        for flag in ["--help", "-h"] {
            let parsed = ShellArgs::parse(args(&["-s", "run.json", flag, "--verbose"])).unwrap();
            assert!(parsed.help);
        }

        assert!(!ShellArgs::parse(args(&["-s", "run.json"])).unwrap().help);
    }

    #[test]
    fn test_parse_args_errors() {
        assert!(matches!(
            ShellArgs::parse(args(&["--script"])),
            Err(ShellError::Usage(_))
        ));
        assert!(matches!(
            ShellArgs::parse(args(&["--verbose"])),
            Err(ShellError::Usage(_))
        ));
    }

    #[test]
    fn test_replay_writes_one_line_per_command() {
        let script = r#"[
            {"op": "add", "product": {"id": "1", "title": "testtitle1", "price": 1990}},
            {"op": "increment", "id": "1"},
            {"op": "decrement", "id": "1"},
            {"op": "decrement", "id": "1"},
            {"op": "remove", "id": "1"}
        ]"#;
        let commands = read_script(script.as_bytes()).unwrap();
        let state = CartState::default();
        let mut out = Vec::new();

        let summary = replay(&state, commands, &mut out).unwrap();
        assert_eq!(
            summary,
            ReplaySummary {
                succeeded: 4,
                failed: 1
            }
        );

        let lines: Vec<Outcome<CartResponse>> = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[1].value().map(|v| v.total_quantity), Some(2));
        assert_eq!(
            lines[3].message(),
            Some("Cannot decrement product quantity below 1")
        );
        assert_eq!(lines[4].value().map(|v| v.item_count), Some(0));
    }

    #[test]
    fn test_replay_with_limits() {
        let script = r#"[
            {"op": "add", "product": {"id": "1", "title": "a", "price": 1, "quantity": 2}},
            {"op": "increment", "id": "1"}
        ]"#;
        let state = CartState::new(CartEngine::with_limits(
            CartLimits::default().with_max_item_quantity(2),
        ));
        let mut out = Vec::new();

        let summary = replay(&state, read_script(script.as_bytes()).unwrap(), &mut out).unwrap();

        assert_eq!(summary.failed, 1);
        assert_eq!(state.with_cart(|c| c.products[0].quantity), 2);
    }

    #[test]
    fn test_malformed_script() {
        assert!(matches!(
            read_script(r#"{"op": "get"}"#.as_bytes()),
            Err(ShellError::Json(_))
        ));
    }
}
