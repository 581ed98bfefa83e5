use anyhow::Context;
use milsym_sidc::{SidcError, SymbolLookup};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

pub fn init_tracing(log_format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

/// Load both lookup tables; either one missing is an error.
pub fn build_lookup(config: &Config) -> anyhow::Result<SymbolLookup> {
    let lookup = SymbolLookup::open(&config.tables);
    if !lookup.initialized() {
        return Err(SidcError::Uninitialized).with_context(|| {
            format!(
                "Loading {} and {}",
                config.tables.mapping_table.display(),
                config.tables.symbol_dictionary.display()
            )
        });
    }
    tracing::info!(
        "Lookup tables loaded from {}",
        config
            .tables
            .mapping_table
            .parent()
            .map(|dir| dir.display().to_string())
            .unwrap_or_default()
    );
    Ok(lookup)
}
