use tracing::level_filters::LevelFilter;

/// Map the `-v` count to a log level: warnings by default, then info, debug
/// and trace.
pub fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the stderr log subscriber. Later calls are no-ops.
pub fn init_logging(verbose: u8) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level_for_verbosity(verbose))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
