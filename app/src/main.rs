use gridfilter_app::FilterApp;

#[tokio::main]
async fn main() {
    if let Err(e) = FilterApp::run().await {
        eprintln!("\nError: {:#}\n", e);
        std::process::exit(1);
    }
}
