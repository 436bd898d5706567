use clap::Parser;
use mdtodo::cli::commands::Cli;
use mdtodo::io::config_io::load_config;
use mdtodo::io::logging::{init_logging, parse_level};
use simplelog::LevelFilter;

fn main() {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        parse_level(config.log.level.as_deref())
    };
    let log_file = cli.log_file.as_deref().or(config.log.file.as_deref());
    init_logging(log_file, level);
    log::info!("opening {}", cli.file.display());

    if let Err(e) = mdtodo::tui::run(&cli.file, &config) {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
