use marquee_model::Severity;
use std::time::Duration;

/// How long a toast stays up when the caller does not say otherwise.
pub const DEFAULT_NOTIFICATION_DURATION: Duration = Duration::from_millis(3000);

/// Transient toast display.
pub trait Notifier {
    fn notify(&mut self, message: &str, severity: Severity, duration: Duration);

    fn info(&mut self, message: &str) {
        self.notify(message, Severity::Info, DEFAULT_NOTIFICATION_DURATION);
    }

    fn success(&mut self, message: &str) {
        self.notify(message, Severity::Success, DEFAULT_NOTIFICATION_DURATION);
    }
}
