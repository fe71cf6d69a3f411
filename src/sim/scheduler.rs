//! Cooperative periodic task scheduler
//!
//! Stands in for three independent interval timers. The host feeds elapsed
//! wall time through `advance`; the scheduler returns the firings that fell
//! due, in time order. Disarmed tasks never fire.

use crate::consts::*;

/// The three session timers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TaskKind {
    /// Advance drops, resolve catches, emit a frame
    Physics,
    /// Create one drop
    Spawn,
    /// Decrement the session clock
    Countdown,
}

/// A fixed-period task that can be armed and disarmed
#[derive(Debug, Clone)]
pub struct PeriodicTask {
    period_ms: u32,
    /// Time since the last firing (always < period)
    elapsed_ms: u32,
    armed: bool,
}

impl PeriodicTask {
    pub fn new(period_ms: u32) -> Self {
        Self {
            period_ms: period_ms.max(1),
            elapsed_ms: 0,
            armed: false,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Start firing one full period from now
    pub fn arm(&mut self) {
        self.armed = true;
        self.elapsed_ms = 0;
    }

    /// Stop firing. Safe to call on a task that was never armed.
    pub fn disarm(&mut self) {
        self.armed = false;
        self.elapsed_ms = 0;
    }

    /// Advance by `dt_ms` and return the offsets (from the start of the
    /// window) at which the task fired
    pub fn advance(&mut self, dt_ms: u32) -> Vec<u32> {
        if !self.armed {
            return Vec::new();
        }
        let mut offsets = Vec::new();
        let mut next = self.period_ms - self.elapsed_ms;
        while next <= dt_ms {
            offsets.push(next);
            next += self.period_ms;
        }
        self.elapsed_ms = ((self.elapsed_ms as u64 + dt_ms as u64) % self.period_ms as u64) as u32;
        offsets
    }
}

/// Physics, spawn and (optionally) countdown timers for one session
#[derive(Debug, Clone)]
pub struct Scheduler {
    physics: PeriodicTask,
    spawn: PeriodicTask,
    /// Absent in untimed sessions
    countdown: Option<PeriodicTask>,
}

impl Scheduler {
    pub fn new(timed: bool) -> Self {
        Self {
            physics: PeriodicTask::new(PHYSICS_TICK_MS),
            spawn: PeriodicTask::new(SPAWN_TICK_MS),
            countdown: timed.then(|| PeriodicTask::new(COUNTDOWN_TICK_MS)),
        }
    }

    /// Whether any task is armed
    pub fn is_armed(&self) -> bool {
        self.physics.is_armed()
            || self.spawn.is_armed()
            || self.countdown.as_ref().is_some_and(|t| t.is_armed())
    }

    /// Arm every task with a fresh period
    pub fn arm_all(&mut self) {
        self.physics.arm();
        self.spawn.arm();
        if let Some(countdown) = &mut self.countdown {
            countdown.arm();
        }
    }

    /// Disarm every task (idempotent)
    pub fn disarm_all(&mut self) {
        self.physics.disarm();
        self.spawn.disarm();
        if let Some(countdown) = &mut self.countdown {
            countdown.disarm();
        }
    }

    /// Advance wall time and return due firings in time order.
    /// Simultaneous firings run physics, then spawn, then countdown.
    pub fn advance(&mut self, dt_ms: u32) -> Vec<TaskKind> {
        let dt_ms = dt_ms.min(MAX_FRAME_MS);

        let mut due: Vec<(u32, TaskKind)> = Vec::new();
        due.extend(self.physics.advance(dt_ms).into_iter().map(|t| (t, TaskKind::Physics)));
        due.extend(self.spawn.advance(dt_ms).into_iter().map(|t| (t, TaskKind::Spawn)));
        if let Some(countdown) = &mut self.countdown {
            due.extend(countdown.advance(dt_ms).into_iter().map(|t| (t, TaskKind::Countdown)));
        }

        due.sort();
        due.into_iter().map(|(_, kind)| kind).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_disarmed_never_fires() {
        let mut sched = Scheduler::new(true);
        assert!(!sched.is_armed());
        assert!(sched.advance(MAX_FRAME_MS).is_empty());
        sched.disarm_all();
        sched.disarm_all();
        assert!(sched.advance(MAX_FRAME_MS).is_empty());
    }

    #[test]
    fn test_physics_fires_every_30ms() {
        let mut task = PeriodicTask::new(30);
        task.arm();
        assert!(task.advance(29).is_empty());
        assert_eq!(task.advance(1), vec![1]);
        assert_eq!(task.advance(60), vec![30, 60]);
        assert_eq!(task.advance(10), Vec::<u32>::new());
    }

    #[test]
    fn test_ordering_on_ties() {
        let mut sched = Scheduler::new(true);
        sched.arm_all();
        let mut fired = Vec::new();
        for _ in 0..4 {
            fired.extend(sched.advance(250));
        }
        // 1000 / 30 = 33 physics ticks, then the 1 s tasks at t=1000
        assert_eq!(fired.len(), 33 + 2);
        assert_eq!(fired[fired.len() - 2], TaskKind::Spawn);
        assert_eq!(fired[fired.len() - 1], TaskKind::Countdown);
    }

    #[test]
    fn test_untimed_has_no_countdown() {
        let mut sched = Scheduler::new(false);
        sched.arm_all();
        let mut fired = Vec::new();
        for _ in 0..8 {
            fired.extend(sched.advance(250));
        }
        assert!(!fired.contains(&TaskKind::Countdown));
        assert_eq!(fired.iter().filter(|k| **k == TaskKind::Spawn).count(), 2);
    }

    #[test]
    fn test_rearm_restarts_period() {
        let mut sched = Scheduler::new(true);
        sched.arm_all();
        sched.advance(900);
        sched.disarm_all();
        sched.arm_all();
        // A fresh period, so nothing at the old 1000 ms mark
        let fired = sched.advance(200);
        assert!(!fired.contains(&TaskKind::Spawn));
    }

    #[test]
    fn test_frame_delta_is_capped() {
        let mut sched = Scheduler::new(true);
        sched.arm_all();
        let fired = sched.advance(10_000);
        assert_eq!(fired.len(), (MAX_FRAME_MS / PHYSICS_TICK_MS) as usize);
    }

    proptest! {
        #[test]
        fn prop_firing_count_matches_elapsed(
            frames in prop::collection::vec(0u32..=250, 0..100)
        ) {
            let mut task = PeriodicTask::new(30);
            task.arm();
            let total: u32 = frames.iter().sum();
            let fired: usize = frames.iter().map(|dt| task.advance(*dt).len()).sum();
            prop_assert_eq!(fired as u32, total / 30);
        }
    }
}
