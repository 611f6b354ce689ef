use clap::Parser;
use tabstrip_common::{Orientation, Variant};

/// Drive a tab strip headlessly and print what it would draw after each step.
#[derive(Parser, Debug)]
#[command(name = "tabstrip", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Comma-separated tab titles.
    #[arg(long, value_delimiter = ',', default_value = "Overview,Metrics,Logs,Settings,About")]
    pub titles: Vec<String>,

    /// Size of each header along the strip axis, in pixels.
    #[arg(long, default_value_t = 100.0)]
    pub header_extent: f64,

    /// Visible strip extent along its axis, in pixels.
    #[arg(long, default_value_t = 300.0)]
    pub width: f64,

    /// Override the configured orientation.
    #[arg(long)]
    pub orientation: Option<Orientation>,

    /// Override the configured variant.
    #[arg(long)]
    pub variant: Option<Variant>,

    /// Render close icons on every header.
    #[arg(long)]
    pub closable: bool,

    /// Controlled selected index.
    #[arg(long)]
    pub value: Option<usize>,

    /// Initial selected index when uncontrolled.
    #[arg(long)]
    pub default_value: Option<usize>,

    /// Comma-separated indices of disabled tabs.
    #[arg(long, value_delimiter = ',')]
    pub disabled: Vec<usize>,

    /// Steps to run, e.g. "select:2,forward,close:1,value:0,backward,resize:500".
    #[arg(long, default_value = "")]
    pub actions: String,
}

pub fn parse() -> Args {
    Args::parse()
}
