//! Per-frame scheduling seam
//!
//! The host UI loop owns the display-refresh callback primitive. The player
//! asks the scheduler to begin delivering frame ticks when a session is
//! created, and cancels the returned task deterministically when the session
//! is torn down. The tick source never outlives the handle it polls.

/// Host-provided frame scheduling
pub trait FrameScheduler {
    /// Begin delivering frame ticks
    ///
    /// While the returned task is live, the host invokes
    /// [`Player::tick`](crate::Player::tick) once per display refresh.
    /// Cancelling the task stops delivery.
    fn begin(&mut self) -> Box<dyn FrameTask>;
}

/// Cancellable handle for a repeating frame task
pub trait FrameTask {
    /// Stop the host from delivering further ticks for this task
    ///
    /// Must be idempotent.
    fn cancel(&mut self);

    /// Whether the task has been cancelled
    fn is_cancelled(&self) -> bool;
}
