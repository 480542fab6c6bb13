use report_proxy::app;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    app::run().await?;
    Ok(())
}
