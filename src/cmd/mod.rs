use std::path::PathBuf;

use crate::{pkg::server::listen, prelude::Result};
use clap::{Parser, Subcommand};

mod render;

#[derive(Parser)]
#[command(about = "renders form submission results as styled alerts")]
struct Cmd {
    #[command(subcommand)]
    command: Option<SubCommandType>,
}

#[derive(Subcommand)]
enum SubCommandType {
    Listen,
    /// Render one result record read as JSON from a file or stdin
    Render {
        /// Input file, `-` or omitted for stdin
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Print plain text instead of HTML
        #[arg(long)]
        plain: bool,
    },
}

pub async fn run() -> Result<()> {
    let args = Cmd::parse();
    match args.command {
        Some(SubCommandType::Listen) => {
            listen().await?;
        }
        Some(SubCommandType::Render { input, plain }) => {
            let out = render::apply(input.as_deref(), plain).await?;
            print!("{}", out);
        }
        None => {
            tracing::error!("no subcommand passed");
        }
    }
    Ok(())
}
