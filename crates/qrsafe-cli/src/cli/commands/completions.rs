//! `qrsafe completions <shell>` and `qrsafe man`.

use anyhow::{Context, Result};
use clap::Command;
use std::io;

pub fn run_completions(shell: clap_complete::Shell, cmd: &mut Command) {
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, cmd, name, &mut io::stdout());
}

pub fn run_man(cmd: Command) -> Result<()> {
    clap_mangen::Man::new(cmd)
        .render(&mut io::stdout())
        .context("render man page")
}
