use thiserror::Error;

pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("A request is already in progress.")]
pub struct OperationBusy;

/// Lifecycle of one collaborator request owned by a panel.
///
/// `Pending` is the only loading state, so a settled operation can never report itself as
/// loading. Starting a new request discards the previous result or error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation<T> {
    Idle,
    Pending,
    Succeeded(T),
    Failed(String),
}

impl<T> Default for Operation<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> Operation<T> {
    pub fn state_name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Pending => "pending",
            Self::Succeeded(_) => "succeeded",
            Self::Failed(_) => "failed",
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn result(&self) -> Option<&T> {
        match self {
            Self::Succeeded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(reason) => Some(reason.as_str()),
            _ => None,
        }
    }

    /// Move to `Pending`. Rejected while a request is already outstanding.
    pub fn begin(&mut self) -> Result<(), OperationBusy> {
        if self.is_loading() {
            return Err(OperationBusy);
        }
        *self = Self::Pending;
        Ok(())
    }

    pub fn succeed(&mut self, value: T) {
        *self = Self::Succeeded(value);
    }

    pub fn fail(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        if reason.trim().is_empty() {
            *self = Self::Failed(UNKNOWN_ERROR_MESSAGE.to_string());
        } else {
            *self = Self::Failed(reason);
        }
    }

    /// Apply a collaborator outcome. Always leaves the operation settled.
    pub fn settle(&mut self, outcome: anyhow::Result<T>) {
        match outcome {
            Ok(value) => self.succeed(value),
            Err(err) => self.fail(failure_message(&err)),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}

/// Human-readable text for a collaborator failure.
pub fn failure_message(err: &anyhow::Error) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        UNKNOWN_ERROR_MESSAGE.to_string()
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;

    use super::*;

    #[test]
    fn begin_clears_previous_outcome() {
        let mut op: Operation<String> = Operation::Succeeded("old".to_string());
        assert_eq!(op.begin(), Ok(()));
        assert!(op.is_loading());
        assert_eq!(op.result(), None);
        assert_eq!(op.error(), None);

        let mut failed: Operation<String> = Operation::Failed("boom".to_string());
        assert_eq!(failed.begin(), Ok(()));
        assert_eq!(failed, Operation::Pending);
    }

    #[test]
    fn begin_while_pending_is_rejected() {
        let mut op: Operation<u8> = Operation::default();
        op.begin().unwrap_or_default();
        assert_eq!(op.begin(), Err(OperationBusy));
        assert!(op.is_loading());
    }

    #[test]
    fn settle_success_stores_result_and_stops_loading() {
        let mut op: Operation<Vec<String>> = Operation::Idle;
        let _ = op.begin();
        op.settle(Ok(vec!["img1".to_string(), "img2".to_string()]));
        assert!(!op.is_loading());
        assert_eq!(op.result().map(Vec::len), Some(2));
        assert_eq!(op.error(), None);
    }

    #[test]
    fn settle_failure_uses_error_text() {
        let mut op: Operation<String> = Operation::Idle;
        let _ = op.begin();
        op.settle(Err(anyhow!("network down")));
        assert_eq!(op.error(), Some("network down"));
        assert_eq!(op.result(), None);
        assert!(!op.is_loading());
        assert_eq!(op.state_name(), "failed");
    }

    #[test]
    fn blank_failure_falls_back_to_generic_message() {
        let mut op: Operation<String> = Operation::Idle;
        op.settle(Err(anyhow!("   ")));
        assert_eq!(op.error(), Some(UNKNOWN_ERROR_MESSAGE));

        op.fail("");
        assert_eq!(op.error(), Some(UNKNOWN_ERROR_MESSAGE));
    }

    #[test]
    fn reset_returns_to_idle() {
        let mut op: Operation<String> = Operation::Failed("x".to_string());
        op.reset();
        assert_eq!(op.state_name(), "idle");
    }
}
