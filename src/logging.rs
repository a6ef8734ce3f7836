use std::fs::{self, File};
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

/// Install the file logger described by `config`.
///
/// Nothing is installed when no log file is configured, since the alternate
/// screen owns the terminal. `RUST_LOG` overrides `logging.level`. Returns
/// whether a subscriber was installed by this call.
pub fn init_tracing(config: &Config) -> bool {
    let Some(path) = config.log_file() else {
        return false;
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(err) = fs::create_dir_all(parent) {
            eprintln!("Warning: failed to create log directory {}: {err}", parent.display());
            return false;
        }
    }

    let Ok(file) = File::create(&path) else {
        eprintln!("Warning: failed to create log file {}", path.display());
        return false;
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .is_ok()
}
