fn init_tracing() {
    if let Err(e) = timemachine_lib::bootstrap::tracing::init_tracing_subscriber() {
        eprintln!("Failed to initialize tracing: {}", e);
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let arg = std::env::args().nth(1);
    if let Err(e) = timemachine_lib::run(arg).await {
        tracing::error!("Viewer exited with error: {:#}", e);
        return Err(e);
    }
    Ok(())
}
