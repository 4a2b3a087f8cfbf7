use anyhow::Context;
use clap::Parser;

use dynqr::cli::Cli;
use dynqr::config::{get_config, init_config, init_config_from};
use dynqr::runtime::modes::{run_cli, run_server};
use dynqr::system::logging::init_logging;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.config.as_deref() {
        Some(path) => {
            if let Err(e) = init_config_from(path) {
                eprintln!("{}", e.format_colored());
                std::process::exit(1);
            }
        }
        None => init_config(),
    }
    let config = get_config();

    if cli.is_server_mode() {
        // guard 必须存活到进程结束，否则缓冲的日志会丢失
        let _guard = init_logging(&config.logging).context("Failed to initialize logging")?;
        return run_server(&config).await;
    }

    let Some(command) = cli.command else {
        return Ok(());
    };

    if let Err(e) = run_cli(command, &config).await {
        eprintln!("{}", e.format_colored());
        std::process::exit(1);
    }

    Ok(())
}
