use clap::Parser;
use cucumber_matrix::cli::commands::cmd_merge;
use cucumber_matrix::cli::config::{Cli, build_merge_options, load_config};
use cucumber_matrix::cli::logging::init_logging;
use cucumber_matrix::report::console::format_console_summary;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Resolve settings: CLI > config > defaults
    let config = load_config(cli.config.as_deref());
    let options = build_merge_options(&cli, &config);

    let aggregate = cmd_merge(&options)?;
    print!("{}", format_console_summary(&aggregate));

    if cli.fail_on_failures && aggregate.has_failures() {
        std::process::exit(1);
    }

    Ok(())
}
