// create-fast-vue3 - project scaffolding for fast-vue3
// Main CLI entry point

use clap::Parser;
use std::process;
use create_fast_vue3::cli::Cli;
use create_fast_vue3::utils::error::UserError;
use create_fast_vue3::utils::interrupt::exit_on_interrupt;
use create_fast_vue3::utils::logger::init_cli_logger;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_cli_logger(cli.verbose);
    exit_on_interrupt();

    let result = cli.create.run().await;

    if let Err(err) = result {
        let user_error = UserError::from_scaffold_error(&err);
        user_error.print();
        process::exit(user_error.exit_code);
    }
}
