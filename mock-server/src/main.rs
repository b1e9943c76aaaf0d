use env_logger::Env;
use log::info;
use mock_server::MockSoap;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("trace")).init();
    info!("Starting mock SOAP server on 127.0.0.1:8080");

    let listener = TcpListener::bind("127.0.0.1:8080")
        .await
        .expect("Could not bind mock SOAP server");

    MockSoap::newsplatform().serve(listener).await;
}
