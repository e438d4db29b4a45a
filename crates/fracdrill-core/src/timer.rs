//! Delayed auto-advance for the benchmark quiz.
//!
//! After an answer the quiz waits a fixed interval so the feedback can be
//! read. The wait is an explicit deadline that the event loop races against
//! user input; restarting or advancing by hand cancels it.

use std::time::Duration;

use tokio::time::Instant;

/// Default pause between answering and the next question.
pub const DEFAULT_ADVANCE_DELAY: Duration = Duration::from_millis(1500);

/// A single cancellable advance deadline.
#[derive(Debug, Clone)]
pub struct AdvanceTimer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl AdvanceTimer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Arm the timer `delay` from now, replacing any pending deadline.
    pub fn schedule(&mut self) -> Instant {
        let deadline = Instant::now() + self.delay;
        self.deadline = Some(deadline);
        deadline
    }

    /// Disarm the timer. Returns whether a deadline was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}

impl Default for AdvanceTimer {
    fn default() -> Self {
        Self::new(DEFAULT_ADVANCE_DELAY)
    }
}

/// Resolve at `deadline`, or never when there is none.
///
/// Takes the deadline by value so the caller can race it in `select!`
/// without holding a borrow of the timer.
pub async fn wait_for(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending::<()>().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn fires_after_delay() {
        let mut timer = AdvanceTimer::new(Duration::from_millis(1500));
        let start = Instant::now();
        timer.schedule();

        wait_for(timer.deadline()).await;

        assert!(start.elapsed() >= Duration::from_millis(1500));
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_timer_never_fires() {
        let mut timer = AdvanceTimer::default();
        timer.schedule();
        assert!(timer.cancel());
        assert!(!timer.is_pending());

        let fired = tokio::time::timeout(Duration::from_secs(10), wait_for(timer.deadline()))
            .await
            .is_ok();
        assert!(!fired);
    }

    #[tokio::test(start_paused = true)]
    async fn rescheduling_moves_the_deadline() {
        let mut timer = AdvanceTimer::new(Duration::from_millis(100));
        let first = timer.schedule();
        tokio::time::advance(Duration::from_millis(50)).await;
        let second = timer.schedule();
        assert!(second > first);
        assert_eq!(timer.deadline(), Some(second));
    }

    #[test]
    fn cancel_without_deadline_reports_nothing_pending() {
        let mut timer = AdvanceTimer::default();
        assert!(!timer.cancel());
        assert_eq!(timer.delay(), DEFAULT_ADVANCE_DELAY);
    }
}
