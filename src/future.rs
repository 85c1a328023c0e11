/// Cross-platform async sleep: gloo timers on web, tokio elsewhere.
pub async fn sleep(duration: std::time::Duration) {
    #[cfg(feature = "web")]
    gloo::timers::future::sleep(duration).await;

    #[cfg(not(feature = "web"))]
    tokio::time::sleep(duration).await;
}
