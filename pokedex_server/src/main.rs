#[tokio::main]
async fn main() -> std::io::Result<()> {
    pokedex_server::run_with_config().await
}
