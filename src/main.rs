mod cli;
mod data;
mod error;
mod fmt;
mod listview;
mod models;
mod settings;
mod stats;
mod tui;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        None => cli::dashboard::run(),
        Some(Commands::Sales { search }) => cli::sales::run(search),
        Some(Commands::Expenses {
            range,
            category,
            search,
            page,
            page_size,
        }) => cli::expenses::run(&range, category, search, page, page_size),
        Some(Commands::Inventory) => cli::inventory::run(),
        Some(Commands::Status) => cli::status::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
