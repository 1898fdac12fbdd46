use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = wardbook::run().await {
        eprintln!("wardbook: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
