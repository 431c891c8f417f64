use anyhow::Result;
use colored::Colorize;

use crate::cli::ConfigCommands;
use crate::config::Config;

pub fn run(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            let path = Config::path()?;
            let config = Config::load_or_default();
            println!("{} {}", "Config file:".bold(), path.display());
            println!();
            let yaml = serde_yaml::to_string(&config)?;
            if yaml.trim() == "{}" {
                println!("{}", "(defaults)".dimmed());
                println!("defaults.start_mode: first");
                println!("documents.pages_dir: {}", config.pages_dir().display());
            } else {
                print!("{yaml}");
            }
            Ok(())
        }
        ConfigCommands::Set { key, value } => {
            let mut config = Config::load_or_default();
            config.set(&key, &value)?;
            let path = config.save()?;
            println!("{} {key} = {value}", "Updated".green());
            println!("{}", path.display().to_string().dimmed());
            Ok(())
        }
    }
}
