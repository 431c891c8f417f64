use clap::CommandFactory;
use clap_complete::{generate, shells};

use crate::cli::{Cli, Shell};

pub fn run(shell: Shell) {
    let mut cmd = Cli::command();
    let bin = "encdeck";
    let out = &mut std::io::stdout();
    match shell {
        Shell::Bash => generate(shells::Bash, &mut cmd, bin, out),
        Shell::Zsh => generate(shells::Zsh, &mut cmd, bin, out),
        Shell::Fish => generate(shells::Fish, &mut cmd, bin, out),
        Shell::Powershell => generate(shells::PowerShell, &mut cmd, bin, out),
    }
}
