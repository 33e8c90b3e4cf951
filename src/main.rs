use std::process::ExitCode;

mod adapters;
mod catalog;
mod cli;
mod config;

fn main() -> anyhow::Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    cli::run()
}
