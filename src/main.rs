use clap::Parser;
use solid_by_example::utils::logger;
use solid_by_example::{formatter_for, CatalogReader, CliConfig, SolidError};

fn fail(stage: &str, e: SolidError) -> ! {
    tracing::error!("{} failed: {} (Category: {:?})", stage, e, e.category());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

fn main() {
    let config = match CliConfig::try_parse() {
        Ok(config) => config,
        Err(e) => match CliConfig::usage_exit_code(&e) {
            Some(code) => {
                eprint!("{}", e);
                std::process::exit(code);
            }
            None => e.exit(),
        },
    };

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    let resolved = config
        .resolve()
        .unwrap_or_else(|e| fail("Configuration", e));

    let reader = CatalogReader::new(formatter_for(resolved.format, resolved.pretty));

    match reader.render(&resolved.principles, resolved.order) {
        Ok(output) => println!("{}", output),
        Err(e) => fail("Rendering", e),
    }
}
