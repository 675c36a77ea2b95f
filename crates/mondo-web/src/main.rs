#[tokio::main]
async fn main() -> anyhow::Result<()> {
    mondo_web::start_server().await
}
