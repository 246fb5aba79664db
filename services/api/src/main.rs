use spiritual_health_api::run;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("spiritual-health-api: {err}");
        std::process::exit(1);
    }
}
