//! Timing and stepping system.

use std;
use std::time::{Duration, Instant};

pub struct TimeSystem {
    max_fps: u32,
    timestep: Duration,
    launch_timepoint: Instant,
    last_frame_timepoint: Instant,
}

impl TimeSystem {
    pub fn new(max_fps: u32) -> Self {
        let now = Instant::now();
        TimeSystem {
            max_fps,
            timestep: Duration::new(0, 0),
            launch_timepoint: now,
            last_frame_timepoint: now,
        }
    }

    /// Starts a new frame. Blocks until the frame budget of `max_fps` is used up
    /// if a maximum has been set.
    pub fn advance(&mut self) {
        // Cooperatively gives up a timeslice to the OS scheduler while waiting.
        if self.max_fps > 0 {
            let td = Duration::from_millis(u64::from(1000 / self.max_fps));
            while self.last_frame_timepoint.elapsed() <= td {
                if (self.last_frame_timepoint.elapsed() + Duration::from_millis(2)) < td {
                    std::thread::sleep(Duration::from_millis(1));
                } else {
                    std::thread::yield_now();
                }
            }
        }

        let now = Instant::now();
        self.timestep = now - self.last_frame_timepoint;
        self.last_frame_timepoint = now;
    }

    /// Gets current fps.
    #[inline]
    pub fn fps(&self) -> u32 {
        let nanos = self.timestep.as_nanos();
        if nanos == 0 {
            0
        } else {
            (1_000_000_000 / nanos) as u32
        }
    }

    /// Gets the duration duraing last frame.
    #[inline]
    pub fn frame_duration(&self) -> Duration {
        self.timestep
    }

    /// Gets the duration of last frame in seconds.
    #[inline]
    pub fn delta(&self) -> f32 {
        duration_to_secs(self.timestep)
    }

    /// Gets the seconds since the application started, taken at the beginning
    /// of current frame.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        duration_to_secs(self.last_frame_timepoint - self.launch_timepoint)
    }
}

#[inline]
fn duration_to_secs(duration: Duration) -> f32 {
    duration.as_secs() as f32 + duration.subsec_nanos() as f32 * 1e-9
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_fps_throttles_frames() {
        let mut time = TimeSystem::new(100);
        time.advance();
        time.advance();
        assert!(time.frame_duration() > Duration::from_millis(10));
        assert!(time.fps() <= 100);
    }

    #[test]
    fn elapsed_is_monotonic() {
        let mut time = TimeSystem::new(0);
        time.advance();
        let a = time.elapsed();
        std::thread::sleep(Duration::from_millis(2));
        time.advance();
        assert!(time.elapsed() > a);
        assert!(time.delta() > 0.0);
    }
}
