//! Frame pacer - fixed frame budget by active waiting.
//!
//! Each call to [`FramePacer::finish_frame`] closes the current frame: it reads
//! the clock and the cycle counter, busy-polls the clock until the frame budget
//! is used up, and rebases the frame start on the final timestamp. Frames that
//! already overran the budget are not waited on and nothing is ever skipped.
//!
//! The pacer never sleeps or yields; the whole frame stays on one thread.

use std::time::Instant;

/// Time and cycle source for the pacer.
pub trait Clock {
    /// Monotonic time in milliseconds.
    fn now_ms(&mut self) -> f64;
    /// Free-running cycle counter.
    fn cycles(&mut self) -> u64;
}

/// Monotonic clock plus the CPU time-stamp counter where available.
#[derive(Debug, Clone)]
pub struct SystemClock {
    epoch: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&mut self) -> f64 {
        self.epoch.elapsed().as_secs_f64() * 1000.0
    }

    #[cfg(target_arch = "x86_64")]
    fn cycles(&mut self) -> u64 {
        // SAFETY: RDTSC is available on every x86_64 CPU and has no side effects.
        unsafe { std::arch::x86_64::_rdtsc() }
    }

    #[cfg(not(target_arch = "x86_64"))]
    fn cycles(&mut self) -> u64 {
        self.epoch.elapsed().as_nanos() as u64
    }
}

/// Timing of one finished frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameStats {
    /// Wall time since the previous frame closed, including the wait.
    pub delta_ms: f64,
    /// Cycles spent on simulate + render (sampled before the wait).
    pub delta_cycles: u64,
    /// Whole seconds since start.
    pub elapsed_secs: u32,
    /// Clock polls made while waiting out the budget.
    pub wait_spins: u64,
}

impl FrameStats {
    pub fn fps(&self) -> f64 {
        if self.delta_ms > 0.0 {
            1000.0 / self.delta_ms
        } else {
            0.0
        }
    }

    /// Cycles per frame in millions.
    pub fn mega_cycles(&self) -> u64 {
        self.delta_cycles / 1_000_000
    }
}

#[derive(Debug)]
pub struct FramePacer<C: Clock = SystemClock> {
    clock: C,
    target_ms: f64,
    frame_start_ms: f64,
    last_cycles: u64,
    second_mark_ms: f64,
    elapsed_secs: u32,
}

impl<C: Clock> FramePacer<C> {
    pub fn new(mut clock: C, target_ms: f64) -> Self {
        let now = clock.now_ms();
        let cycles = clock.cycles();
        Self {
            clock,
            target_ms,
            frame_start_ms: now,
            last_cycles: cycles,
            second_mark_ms: now,
            elapsed_secs: 0,
        }
    }

    pub fn with_fps(clock: C, fps: u32) -> Self {
        Self::new(clock, 1000.0 / fps.max(1) as f64)
    }

    pub fn target_ms(&self) -> f64 {
        self.target_ms
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    /// Close the current frame: measure, pad to the budget, rebase.
    pub fn finish_frame(&mut self) -> FrameStats {
        let end_ms = self.clock.now_ms();
        let cycles = self.clock.cycles();
        let delta_cycles = cycles.wrapping_sub(self.last_cycles);
        self.last_cycles = cycles;

        if end_ms - self.second_mark_ms > 1000.0 {
            self.elapsed_secs += 1;
            self.second_mark_ms = end_ms;
        }

        let mut now = end_ms;
        let mut spins = 0u64;
        while now - self.frame_start_ms < self.target_ms {
            std::hint::spin_loop();
            now = self.clock.now_ms();
            spins += 1;
        }

        let delta_ms = now - self.frame_start_ms;
        self.frame_start_ms = now;

        FrameStats {
            delta_ms,
            delta_cycles,
            elapsed_secs: self.elapsed_secs,
            wait_spins: spins,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Advances by a fixed step on every read.
    struct StepClock {
        t: f64,
        step: f64,
        cycles: u64,
    }

    impl Clock for StepClock {
        fn now_ms(&mut self) -> f64 {
            let t = self.t;
            self.t += self.step;
            t
        }

        fn cycles(&mut self) -> u64 {
            self.cycles += 1000;
            self.cycles
        }
    }

    #[test]
    fn short_frame_is_padded_to_budget() {
        let clock = StepClock {
            t: 0.0,
            step: 1.0,
            cycles: 0,
        };
        let mut pacer = FramePacer::new(clock, 16.5);
        let stats = pacer.finish_frame();
        assert!(stats.delta_ms >= 16.5);
        assert_eq!(stats.delta_ms, 17.0);
        assert!(stats.wait_spins > 0);
        assert_eq!(stats.delta_cycles, 1000);
    }

    #[test]
    fn long_frame_is_not_waited_on() {
        let clock = StepClock {
            t: 0.0,
            step: 40.0,
            cycles: 0,
        };
        let mut pacer = FramePacer::new(clock, 16.5);
        let stats = pacer.finish_frame();
        assert_eq!(stats.wait_spins, 0);
        assert_eq!(stats.delta_ms, 40.0);
    }

    #[test]
    fn seconds_count_once_per_crossing() {
        // 400 ms frames: the mark is passed on every third frame only if it
        // is rebased each time.
        let clock = StepClock {
            t: 0.0,
            step: 400.0,
            cycles: 0,
        };
        let mut pacer = FramePacer::new(clock, 16.5);

        let secs: Vec<u32> = (0..9).map(|_| pacer.finish_frame().elapsed_secs).collect();
        assert_eq!(secs, vec![0, 0, 1, 1, 1, 2, 2, 2, 3]);
        assert_eq!(pacer.elapsed_secs(), 3);
    }

    #[test]
    fn exactly_one_second_does_not_count() {
        let clock = StepClock {
            t: 0.0,
            step: 500.0,
            cycles: 0,
        };
        let mut pacer = FramePacer::new(clock, 16.5);

        assert_eq!(pacer.finish_frame().elapsed_secs, 0);
        assert_eq!(pacer.finish_frame().elapsed_secs, 0);
        assert_eq!(pacer.finish_frame().elapsed_secs, 1);
        assert_eq!(pacer.finish_frame().elapsed_secs, 1);
    }

    #[test]
    fn fps_of_empty_frame_is_zero() {
        assert_eq!(FrameStats::default().fps(), 0.0);
    }
}
