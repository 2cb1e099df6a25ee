use anyhow::Result;
use clap::Parser;
use statusprobe::run;
use statusprobe::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let exit_code = run(cli).await?;
    std::process::exit(exit_code);
}
