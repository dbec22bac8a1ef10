//! Generates the man page and shell completions from the clap definition.

#![allow(dead_code)]

use clap::CommandFactory;
use clap_complete::{Shell, generate_to};

include!("src/cli.rs");

fn main() -> std::io::Result<()> {
    println!("cargo:rerun-if-changed=src/cli.rs");

    let Some(out_dir) = std::env::var_os("OUT_DIR") else {
        return Ok(());
    };
    let out_dir = PathBuf::from(out_dir);

    let mut cmd = Cli::command();

    let mut buffer: Vec<u8> = Vec::new();
    clap_mangen::Man::new(cmd.clone()).render(&mut buffer)?;
    std::fs::write(out_dir.join("truckload.1"), buffer)?;

    for shell in [Shell::Bash, Shell::Zsh, Shell::Fish] {
        generate_to(shell, &mut cmd, "truckload", &out_dir)?;
    }

    Ok(())
}
