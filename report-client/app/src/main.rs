use clap::Parser;
use report_client::app::{self, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    app::init_tracing(config.log_format);

    let ready = app::run(config).await?;
    if !ready {
        std::process::exit(1);
    }
    Ok(())
}
