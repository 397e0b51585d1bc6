//! Rein CLI entry point
//!
//! The binary links the suites under `demos/`: `rein demos/arithmetic.rs demos/strings.rs`

#[path = "../demos/arithmetic.rs"]
mod arithmetic;
#[path = "../demos/strings.rs"]
mod strings;

fn main() {
    // Logs go to stderr so stdout carries only the report; env-based filter, defaulting to info
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();

    rein::cli::run();
}
