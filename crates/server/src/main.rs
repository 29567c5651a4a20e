#[tokio::main]
async fn main() -> anyhow::Result<()> {
    campusbot_server::start().await
}
