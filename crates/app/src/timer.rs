use std::time::Duration;

/// Suspend the current task for `duration` without blocking the page.
///
/// In the browser this goes through `setTimeout` via the eval bridge;
/// native builds and tests use a tokio timer.
pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    {
        let ms = duration.as_millis();
        let mut eval = dioxus::document::eval(&format!(
            "await new Promise((resolve) => setTimeout(resolve, {ms})); dioxus.send(true);"
        ));
        if let Err(e) = eval.recv::<bool>().await {
            tracing::warn!(error = ?e, "timer bridge failed");
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}
