//! Chatprobe CLI entry point.

use clap::Parser;

use chatprobe::cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    let result = match cli.command {
        Commands::Run(args) => {
            chatprobe::cli::commands::run::execute(args, config_path, cli.json).await
        }
        Commands::Validate(args) => {
            chatprobe::cli::commands::validate::execute(&args, config_path, cli.json)
        }
    };

    if let Err(err) = result {
        chatprobe::cli::handle_error(err, cli.json);
    }
}
