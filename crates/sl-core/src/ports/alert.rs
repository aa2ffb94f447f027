/// Blocking, user-facing notification.
///
/// Only failures the user has to act on go through here; everything else is
/// logged.
pub trait AlertPort: Send + Sync {
    fn alert(&self, message: &str);
}
