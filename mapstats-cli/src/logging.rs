use log::LevelFilter;

/// Verbosity from the number of `-v` flags
pub fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Log to stderr so stdout only ever carries command output.
/// `RUST_LOG` overrides the level chosen on the command line.
pub fn init(verbose: u8) {
    env_logger::builder()
        .filter_level(level_for(verbose))
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .parse_default_env()
        .init();
}
