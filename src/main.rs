#[tokio::main]
async fn main() {
    if let Err(e) = adamax::run().await {
        eprintln!("{:?}", e);
        std::process::exit(1);
    }
}
