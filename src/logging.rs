use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Crates whose debug output drowns out the pipeline's own events.
const NOISY_MODULES: &[&str] = &["calamine", "printpdf", "lopdf"];

fn build_filter(verbose: bool) -> EnvFilter {
    // RUST_LOG wins when set
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let mut directives = String::from(if verbose { "debug" } else { "warn" });
    for module in NOISY_MODULES {
        directives.push_str(&format!(",{module}=warn"));
    }
    EnvFilter::new(directives)
}

/// Log to stderr so stdout carries only report output.
pub fn init_logging(verbose: bool) {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose);
    if let Err(e) = tracing_subscriber::registry()
        .with(build_filter(verbose))
        .with(fmt_layer)
        .try_init()
    {
        eprintln!("warning: logging not initialized: {e}");
    }
}
