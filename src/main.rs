use clap::Parser;
use dotenvy::dotenv;

use prompt2json::cli::{Args, RootCommand};

fn main() {
    dotenv().ok();

    let args = Args::parse();
    init_logger(args.verbosity);

    if let Err(e) = RootCommand::execute(args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logger(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();
}
