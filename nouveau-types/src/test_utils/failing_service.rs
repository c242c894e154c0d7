//! FailingService: succeeds a fixed number of times, then fails.

use crate::error::ServiceError;
use crate::service::TextService;

/// A text service that answers `"ok"` for the first `successes` calls and
/// returns [`ServiceError::Unavailable`] on every call after that.
#[derive(Debug)]
pub struct FailingService {
    successes: usize,
    calls: usize,
}

impl FailingService {
    /// Fail on every call.
    pub fn always() -> Self {
        Self::after(0)
    }

    /// Succeed `successes` times, then fail.
    pub fn after(successes: usize) -> Self {
        Self { successes, calls: 0 }
    }

    /// Number of calls received, failed ones included.
    pub fn call_count(&self) -> usize {
        self.calls
    }
}

impl TextService for FailingService {
    fn generate(&mut self, _prompt: &str, _max_new_tokens: u32) -> Result<String, ServiceError> {
        self.calls += 1;
        if self.calls > self.successes {
            return Err(ServiceError::Unavailable("backend offline".into()));
        }
        Ok("ok".into())
    }
}
