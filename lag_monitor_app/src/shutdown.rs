use anyhow::Context;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Cancels `cancellation_token` on Ctrl+C or, on Unix, SIGTERM.
pub async fn cancel_on_signal(cancellation_token: CancellationToken) {
    match wait_for_signal().await {
        Ok(signal) => {
            info!("Received {signal}, stopping");
            cancellation_token.cancel();
        }
        Err(e) => error!("Shutdown signals can't be handled: {e:?}"),
    }
}

#[cfg(unix)]
async fn wait_for_signal() -> Result<&'static str, anyhow::Error> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut terminate =
        signal(SignalKind::terminate()).context("While installing SIGTERM handler")?;

    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            result.context("While waiting for Ctrl+C")?;
            Ok("SIGINT")
        }
        _ = terminate.recv() => Ok("SIGTERM"),
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() -> Result<&'static str, anyhow::Error> {
    tokio::signal::ctrl_c()
        .await
        .context("While waiting for Ctrl+C")?;
    Ok("Ctrl+C")
}
