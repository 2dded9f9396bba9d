#[tokio::main]
async fn main() -> anyhow::Result<()> {
    kotoba_server::run().await
}
