use clap::Parser;
use gclip_lib::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Err(err) = gclip_lib::bootstrap::tracing::init_tracing_subscriber() {
        eprintln!("Failed to initialize tracing: {err:#}");
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(gclip_lib::commands::run(cli))
}
