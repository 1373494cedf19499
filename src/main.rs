use anyhow::Result;

mod cli;
mod document;
mod export;
mod extraction;
mod geom;
mod merge;
mod region;
mod regionfile;
mod render;
mod session;
mod table;

fn main() -> Result<()> {
    cli::run()
}
