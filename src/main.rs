use ipv4_subnet_calc::cli::parse_args;
use ipv4_subnet_calc::config;
use ipv4_subnet_calc::output::{membership_line, network_report};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let log_config = config::env_or(config::ENV_LOG_CONFIG, config::DEFAULT_LOG_CONFIG);
    log4rs::init_file(&log_config, Default::default())
        .map_err(|e| format!("Error initializing log4rs from {log_config}: {e}"))?;
    log::info!("#Start main()");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (network, addresses) = parse_args(&args)?;

    println!("{}", network_report(&network));
    for address in addresses {
        println!("{}", membership_line(&network, address));
    }

    log::info!("#End main()");
    Ok(())
}
