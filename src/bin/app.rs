use std::io::{self, BufRead};

use anyhow::{Context, Result};
use api::{
    handler::{command::run_command, reservation::show_reservation_list},
    model::command::{BookingCommand, BookingCommandResponse},
};
use registry::AppRegistry;
use shared::config::AppConfig;
use shared::env::{which, Environment};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    init_logger()?;
    bootstrap()
        .inspect_err(|e| {
            tracing::error!(
                error.cause_chain = ?e, error.message = %e, "Unexpected error"
            )
        })
}

fn init_logger() -> Result<()> {
    let log_level = match which() {
        Environment::Development => "debug",
        Environment::Production => "info",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| log_level.into());

    // 標準出力は予約結果の表示に使うのでログは標準エラーへ
    let subscriber = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_target(false);

    tracing_subscriber::registry()
        .with(subscriber)
        .with(env_filter)
        .try_init()?;

    Ok(())
}

fn bootstrap() -> Result<()> {
    let app_config = AppConfig::new()?;
    let registry =
        AppRegistry::from_config(&app_config).context("failed to build the room catalog")?;

    // 1 行につき 1 件の要求 (検索・一覧・予約) を JSON で受け取る
    for (lineno, line) in io::stdin().lock().lines().enumerate() {
        let line = line.context("failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        let command: BookingCommand = match serde_json::from_str(&line) {
            Ok(command) => command,
            Err(e) => {
                tracing::warn!(line = lineno + 1, error = %e, "skipping malformed request");
                continue;
            }
        };
        println!("{}", run_command(&registry, command)?);
    }

    let reservations = show_reservation_list(&registry)?;
    println!("{}", BookingCommandResponse::Reservations(reservations));

    Ok(())
}
