use log::LevelFilter;

/// Initialize the logger; `level` overrides whatever `RUST_LOG` sets.
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}
