mod app;
mod cli;
mod commands;
mod config;
mod controller;
mod deck;
mod render;
mod theme;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    cli::Cli::parse().run()
}
