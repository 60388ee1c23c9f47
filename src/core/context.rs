//! # Request Context
//!
//! 저장소 작업마다 첫 번째 인자로 전달되는 취소 가능한 실행 컨텍스트입니다.
//! 호출자는 `CancellationToken`으로 작업을 취소하거나 제한 시간(deadline)을 걸 수 있으며,
//! 작업은 멈춰 있지 않고 즉시 `Cancelled` / `DeadlineExceeded` 에러로 중단됩니다.
//!
//! ```rust,ignore
//! let ctx = RequestContext::with_timeout(Duration::from_secs(10));
//! let user = store.get_user_by_id(&ctx, "507f1f77bcf86cd799439011").await?;
//! ```

use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use crate::core::errors::{AppError, AppResult};

#[derive(Debug, Clone)]
pub struct RequestContext {
    cancel: CancellationToken,
    deadline: Option<Instant>,
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestContext {
    /// 제한 시간이 없는 컨텍스트
    pub fn new() -> Self {
        Self {
            cancel: CancellationToken::new(),
            deadline: None,
        }
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            cancel: CancellationToken::new(),
            deadline: Some(Instant::now() + timeout),
        }
    }

    /// 부모가 취소되면 함께 취소되는 하위 컨텍스트를 만듭니다.
    ///
    /// 하위 컨텍스트의 deadline은 부모보다 늦을 수 없습니다.
    pub fn child(&self, timeout: Option<Duration>) -> Self {
        let own = timeout.map(|t| Instant::now() + t);
        let deadline = match (self.deadline, own) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };

        Self {
            cancel: self.cancel.child_token(),
            deadline,
        }
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// 주어진 작업을 취소 신호 및 deadline과 경쟁시킵니다.
    ///
    /// 이미 취소된 컨텍스트라면 작업을 시작하지 않습니다.
    pub async fn run<T, F>(&self, operation: &str, fut: F) -> AppResult<T>
    where
        F: Future<Output = AppResult<T>>,
    {
        if self.cancel.is_cancelled() {
            return Err(AppError::Cancelled(operation.to_string()));
        }

        match self.deadline {
            Some(deadline) => {
                tokio::select! {
                    _ = self.cancel.cancelled() => Err(AppError::Cancelled(operation.to_string())),
                    _ = tokio::time::sleep_until(deadline) => {
                        log::warn!("{} exceeded its deadline", operation);
                        Err(AppError::DeadlineExceeded(operation.to_string()))
                    }
                    res = fut => res,
                }
            }
            None => {
                tokio::select! {
                    _ = self.cancel.cancelled() => Err(AppError::Cancelled(operation.to_string())),
                    res = fut => res,
                }
            }
        }
    }
}
