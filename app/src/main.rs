#[tokio::main]
async fn main() -> anyhow::Result<()> {
    lumen_app::run().await
}
