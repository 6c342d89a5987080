// src/logger.rs

use env_logger::{Builder, Env};
use std::io::Write;

const DEFAULT_FILTER: &str = "warn,subform=info";

/// Initialise stderr logging. `RUST_LOG` overrides the default filter.
pub fn init_logger() {
    let env = Env::default().filter_or("RUST_LOG", DEFAULT_FILTER);

    Builder::from_env(env)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .target(env_logger::Target::Stderr)
        .init();
}
