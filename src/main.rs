use anyhow::Result;

mod app;
mod logging;

fn main() -> Result<()> {
    let args = flac_gather::cli::parse();
    app::run(args)
}
