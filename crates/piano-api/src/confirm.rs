//! Confirmation before destructive operations.

use std::future::Future;

use crate::error::ApiError;

/// Asks the user a yes/no question without blocking the runtime.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> impl Future<Output = bool> + Send;
}

/// Answers yes to everything (`--yes`).
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

impl Confirm for AlwaysConfirm {
    async fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Declined,
}

/// Run `delete` only if `confirm` answers yes to `prompt`.
///
/// # Errors
///
/// Propagates the error from `delete`.
pub async fn confirm_delete<C, F, Fut>(
    confirm: &C,
    prompt: &str,
    delete: F,
) -> Result<DeleteOutcome, ApiError>
where
    C: Confirm + ?Sized,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<(), ApiError>>,
{
    if !confirm.confirm(prompt).await {
        tracing::debug!(prompt, "delete declined");
        return Ok(DeleteOutcome::Declined);
    }
    delete().await?;
    Ok(DeleteOutcome::Deleted)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};

    use super::*;

    struct Answer(bool);

    impl Confirm for Answer {
        async fn confirm(&self, _prompt: &str) -> bool {
            self.0
        }
    }

    #[tokio::test]
    async fn declined_delete_never_runs() {
        let ran = AtomicBool::new(false);
        let outcome = confirm_delete(&Answer(false), "Delete?", || async {
            ran.store(true, Ordering::SeqCst);
            Ok(())
        })
        .await
        .unwrap();
        assert_eq!(outcome, DeleteOutcome::Declined);
        assert!(!ran.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn confirmed_delete_runs() {
        let outcome = confirm_delete(&AlwaysConfirm, "Delete?", || async { Ok(()) })
            .await
            .unwrap();
        assert_eq!(outcome, DeleteOutcome::Deleted);
    }

    #[tokio::test]
    async fn delete_error_propagates() {
        let err = confirm_delete(&AlwaysConfirm, "Delete?", || async {
            Err(ApiError::Api {
                status: 500,
                message: "boom".into(),
            })
        })
        .await
        .unwrap_err();
        assert!(matches!(err, ApiError::Api { status: 500, .. }));
    }
}
