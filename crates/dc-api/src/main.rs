#[tokio::main]
async fn main() {
    if let Err(err) = dc_api::run().await {
        eprintln!("dc-api failed: {err}");
        std::process::exit(1);
    }
}
