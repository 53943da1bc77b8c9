//! # Color-Flash Feedback
//!
//! A one-shot tint animation used to point at a field with bad input. The
//! tint runs from the start color to black over [`FLASH_DURATION`] and stays
//! attached once finished. The GUI samples [`Flash::tint_at`] from its frame
//! timer; nothing here blocks or sleeps.

use std::time::{Duration, Instant};

use crate::stylesheet::Rgb;

/// Length of one flash
pub const FLASH_DURATION: Duration = Duration::from_millis(1500);

/// A running or finished color flash
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flash {
    from: Rgb,
    to: Rgb,
    started: Instant,
    duration: Duration,
}

impl Flash {
    /// Start a flash from `color` to black at `now`
    pub fn start(color: Rgb, now: Instant) -> Self {
        Flash {
            from: color,
            to: Rgb::BLACK,
            started: now,
            duration: FLASH_DURATION,
        }
    }

    /// Tint at `now`. Before the start this is the start color, after the end it stays black.
    pub fn tint_at(&self, now: Instant) -> Rgb {
        let elapsed = now.saturating_duration_since(self.started);
        let progress = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.from.lerp(self.to, progress)
    }

    /// Whether the animation has reached its end color
    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flash_runs_red_to_black() {
        let t0 = Instant::now();
        let flash = Flash::start(Rgb::RED, t0);

        assert_eq!(flash.tint_at(t0), Rgb::RED);
        let mid = flash.tint_at(t0 + Duration::from_millis(750));
        assert!((mid.r - 0.5).abs() < 1e-3);
        assert_eq!(flash.tint_at(t0 + FLASH_DURATION), Rgb::BLACK);
    }

    #[test]
    fn test_flash_runs_once_and_stays_black() {
        let t0 = Instant::now();
        let flash = Flash::start(Rgb::RED, t0);

        assert!(!flash.is_finished(t0 + Duration::from_millis(1499)));
        assert!(flash.is_finished(t0 + FLASH_DURATION));
        assert_eq!(flash.tint_at(t0 + Duration::from_secs(60)), Rgb::BLACK);
    }

    #[test]
    fn test_custom_start_color() {
        let t0 = Instant::now();
        let green = Rgb::new(0.0, 1.0, 0.0);
        assert_eq!(Flash::start(green, t0).tint_at(t0), green);
    }
}
