#[tokio::main]
async fn main() {
    if let Err(e) = medicare_portal::run().await {
        eprintln!("medicare_portal failed: {}", e);
        std::process::exit(1);
    }
}
