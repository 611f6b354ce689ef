mod cli;
mod session;

use std::path::Path;

use tabstrip_common::TabStripError;
use tabstrip_config::TabStripConfig;
use tracing_subscriber::EnvFilter;

use session::{Session, SessionOptions};

const DEFAULT_DIRECTIVE: &str = "tabstrip=info";

fn load_config(path: Option<&str>) -> (TabStripConfig, Option<String>) {
    let loaded = match path {
        Some(path) => tabstrip_config::load_config_from(Path::new(path)),
        None => tabstrip_config::load_config(),
    };
    match loaded {
        Ok(config) => (config, None),
        Err(e) => (TabStripConfig::default(), Some(e.to_string())),
    }
}

fn init_logging(directive: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                directive
                    .parse()
                    .unwrap_or_else(|_| DEFAULT_DIRECTIVE.parse().expect("static directive parses")),
            ),
        )
        .init();
}

fn run(args: cli::Args, config: TabStripConfig) -> Result<(), TabStripError> {
    let actions = session::parse_actions(&args.actions)?;

    let mut strip_config = config.strip;
    if let Some(orientation) = args.orientation {
        strip_config.orientation = orientation;
    }
    if let Some(variant) = args.variant {
        strip_config.variant = variant;
    }
    if args.closable {
        strip_config.closable = true;
    }

    let options = SessionOptions {
        titles: args.titles,
        header_extent: args.header_extent,
        visible_extent: args.width,
        value: args.value,
        default_value: args.default_value,
        disabled: args.disabled,
    };

    let mut session = Session::new(strip_config, options);
    tracing::info!(
        strip = %session.strip().id(),
        tabs = session.children().len(),
        steps = actions.len(),
        "session started"
    );

    print_json(&session.initial())?;
    for action in actions {
        print_json(&session.apply(action))?;
    }
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), TabStripError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| TabStripError::Other(format!("failed to serialize snapshot: {e}")))?;
    println!("{json}");
    Ok(())
}

fn main() {
    let args = cli::parse();

    // Config first: its [logging] level feeds the filter below
    let (config, config_error) = load_config(args.config.as_deref());

    let directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.directive());
    init_logging(&directive);

    tracing::info!("tabstrip v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
    }
    if let Some(e) = config_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }

    if let Err(e) = run(args, config) {
        tracing::error!("{e}");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
