use log::info;

/// Outbound user-notification seam. Fire-and-forget; implementations must
/// never feed back into timer state.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);

    /// Completion sound hook. The controller only calls this when the sound
    /// setting is enabled.
    fn chime(&self) {}
}

/// Routes notifications through the `log` facade.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        info!("{message}");
    }

    fn chime(&self) {
        info!("chime");
    }
}

/// Discards everything.
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _message: &str) {}
}
