use crate::conf::{ConfigLayer, IdleHosts, SortMetric, load_config_layer, resolve_config};
use crate::error::MonitorError;
use crate::monitor::{InputSource, RunSummary, run};
use clap::Args;
use std::path::PathBuf;
use tracing::info;


#[derive(Args, Debug, Default)]
pub struct MonitorArgs {
    /// Access log to read; standard input when omitted or "-"
    pub input: Option<PathBuf>,

    /// Field holding the virtual host
    #[arg(short = 'v', long, value_name = "INDEX")]
    pub vhost_field: Option<usize>,

    /// Field holding the request time
    #[arg(short = 't', long, value_name = "INDEX")]
    pub time_field: Option<usize>,

    /// Field holding the response size in bytes
    #[arg(short = 's', long, value_name = "INDEX")]
    pub size_field: Option<usize>,

    /// Sliding window length in seconds of log time
    #[arg(short = 'w', long, value_name = "SECONDS")]
    pub window_size: Option<u64>,

    /// Host label width; 0 fits the widest host seen
    #[arg(short = 'l', long, value_name = "CHARS")]
    pub max_host_len: Option<usize>,

    /// Rank hosts by bytes transferred (default)
    #[arg(short = 'B', long, conflicts_with = "requests")]
    pub bytes: bool,

    /// Rank hosts by request count
    #[arg(short = 'R', long)]
    pub requests: bool,

    /// Drop hosts with no traffic left in the window
    #[arg(long)]
    pub hide_idle: bool,

    /// Show rejected-line count and last parse error on the bottom row
    #[arg(long)]
    pub show_errors: bool,

    /// TOML file with defaults for the options above
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write diagnostics as JSON lines to this file (filtered by RUST_LOG)
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

impl MonitorArgs {
    /// Settings given on the command line. Flags that were not passed stay
    /// unset so the config file can supply them.
    pub fn layer(&self) -> ConfigLayer {
        let sort = if self.requests {
            Some(SortMetric::Requests)
        } else if self.bytes {
            Some(SortMetric::Bytes)
        } else {
            None
        };

        ConfigLayer {
            vhost_field: self.vhost_field,
            time_field: self.time_field,
            size_field: self.size_field,
            window_size: self.window_size,
            max_host_len: self.max_host_len,
            sort,
            idle_hosts: self.hide_idle.then_some(IdleHosts::Hide),
            show_errors: self.show_errors.then_some(true),
        }
    }

    pub fn input_source(&self) -> InputSource {
        InputSource::from_arg(self.input.as_deref())
    }
}

pub fn run_monitor(args: &MonitorArgs) -> Result<RunSummary, MonitorError> {
    let file = args.config.as_deref().map(load_config_layer).transpose()?;
    let config = resolve_config(args.layer(), file)?;

    let source = args.input_source();
    if source.is_interactive() {
        return Err(MonitorError::NoInput);
    }

    info!(?config, ?source, "starting monitor");
    run(config, source)
}
