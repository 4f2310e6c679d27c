use std::env;

use server::run_server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Environment overrides with sane defaults
    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "8000".to_string())
        .parse()
        .unwrap_or(8000);

    run_server(&host, port).await
}
