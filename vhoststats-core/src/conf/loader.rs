use crate::conf::types::{ConfigLayer, FieldLayout, MonitorConfig};
use crate::error::ConfigError;
use std::fs;
use std::path::Path;

pub fn load_config_layer(path: &Path) -> Result<ConfigLayer, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Merge the command-line layer over the optional file layer over the defaults,
/// then validate the result.
pub fn resolve_config(
    cli: ConfigLayer,
    file: Option<ConfigLayer>,
) -> Result<MonitorConfig, ConfigError> {
    let file = file.unwrap_or_default();
    let defaults = MonitorConfig::default();

    let fields = FieldLayout {
        vhost: cli
            .vhost_field
            .or(file.vhost_field)
            .unwrap_or(defaults.fields.vhost),
        time: cli
            .time_field
            .or(file.time_field)
            .unwrap_or(defaults.fields.time),
        size: cli
            .size_field
            .or(file.size_field)
            .unwrap_or(defaults.fields.size),
    };

    let cfg = MonitorConfig {
        fields,
        window_seconds: cli
            .window_size
            .or(file.window_size)
            .unwrap_or(defaults.window_seconds),
        max_host_len: cli
            .max_host_len
            .or(file.max_host_len)
            .unwrap_or(defaults.max_host_len),
        sort: cli.sort.or(file.sort).unwrap_or(defaults.sort),
        idle_hosts: cli
            .idle_hosts
            .or(file.idle_hosts)
            .unwrap_or(defaults.idle_hosts),
        show_errors: cli
            .show_errors
            .or(file.show_errors)
            .unwrap_or(defaults.show_errors),
    };

    validate(&cfg)?;
    Ok(cfg)
}

fn validate(cfg: &MonitorConfig) -> Result<(), ConfigError> {
    if cfg.window_seconds == 0 {
        return Err(ConfigError::ZeroWindow);
    }

    let FieldLayout { vhost, time, size } = cfg.fields;
    if time == vhost {
        return Err(ConfigError::DuplicateField {
            name: "time",
            index: time,
        });
    }
    if size == vhost || size == time {
        return Err(ConfigError::DuplicateField {
            name: "size",
            index: size,
        });
    }

    Ok(())
}
