//! Binary entry point: initialises logging and runs the JOVIAL LSP server
//! over stdin/stdout. All protocol logic lives in [`jovial_lsp`].

#[tokio::main]
async fn main() {
    env_logger::init();
    jovial_lsp::run_server().await;
}
