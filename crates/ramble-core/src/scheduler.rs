//! Timer scheduling for the simulated recording flow.
//!
//! The recording card never sleeps. It asks a [`Scheduler`] to deliver a
//! [`TimerToken`] after a delay and reacts when the host hands the token back.
//! [`TimerQueue`] keeps its own clock that only moves on [`TimerQueue::advance`]:
//! tests step it by hand, the desktop app steps it by wall-clock time from
//! its event loop. Timers are handled one deadline at a time, so a timer
//! scheduled while another is handled starts from that timer's deadline.

use std::time::Duration;

/// Which card timer fired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardTimer {
    /// Simulated capture finished
    RecordingElapsed,
    /// Simulated transcription finished
    TranscriptionElapsed,
    /// Flip animation reached the point where the face swaps
    FlipMidpoint,
    /// Flip animation ended
    FlipComplete,
    /// Copy confirmation has been shown long enough
    CopyNoticeElapsed,
}

/// A timer event tagged with the card session that scheduled it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken {
    pub timer: CardTimer,
    pub generation: u64,
}

/// Handle used to cancel a scheduled timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(pub u64);

/// Something that can deliver a token after a delay
pub trait Scheduler {
    /// Deliver `token` back to the card once `delay` has passed
    fn after(&mut self, delay: Duration, token: TimerToken) -> TimerHandle;

    /// Drop a pending timer. Unknown or already-fired handles are ignored.
    fn cancel(&mut self, handle: TimerHandle);
}

#[derive(Debug, Clone)]
struct Pending {
    handle: TimerHandle,
    due: Duration,
    token: TimerToken,
}

/// Pending timers against a clock that moves only when advanced
#[derive(Debug, Clone, Default)]
pub struct TimerQueue {
    now: Duration,
    next_handle: u64,
    pending: Vec<Pending>,
}

impl TimerQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of timers waiting to fire
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Move the clock forward by `by`, handing each timer that comes due to
    /// `on_due` in deadline order (ties keep scheduling order).
    ///
    /// The clock stands at a timer's deadline while it is handled, so a
    /// timer scheduled from `on_due` counts from that deadline and fires in
    /// the same call if it falls inside the window.
    pub fn advance(&mut self, by: Duration, mut on_due: impl FnMut(TimerToken, &mut Self)) {
        let target = self.now + by;
        while let Some(token) = self.pop_due(target) {
            on_due(token, self);
        }
        self.now = target;
    }

    /// Remove the earliest timer due at or before `until` and move the clock
    /// to its deadline.
    fn pop_due(&mut self, until: Duration) -> Option<TimerToken> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, pending)| pending.due <= until)
            .min_by_key(|(_, pending)| (pending.due, pending.handle))
            .map(|(index, _)| index)?;
        let pending = self.pending.remove(index);
        self.now = self.now.max(pending.due);
        Some(pending.token)
    }
}

impl Scheduler for TimerQueue {
    fn after(&mut self, delay: Duration, token: TimerToken) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.pending.push(Pending {
            handle,
            due: self.now + delay,
            token,
        });
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.pending.retain(|pending| pending.handle != handle);
    }
}
