use notify_rust::Notification;

/// Best-effort desktop notification with the word as title and its numbered
/// definitions as body. Failures are logged and dropped; nothing in the
/// pipeline observes them.
pub fn notify(word: &str, means: &str) {
    let result = Notification::new()
        .summary(word)
        .body(means)
        .icon("accessories-dictionary")
        .show();

    if let Err(e) = result {
        tracing::warn!("failed to show notification for {word:?}: {e}");
    }
}
