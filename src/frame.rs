use std::time::Instant;

/// Two-state frame loop: running until either the window manager asks to
/// close or Escape is seen during input processing. Closing is terminal.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Closing,
}

impl LoopState {
    pub fn advance(self, close_requested: bool, escape_pressed: bool) -> LoopState {
        match self {
            LoopState::Running if close_requested || escape_pressed => LoopState::Closing,
            state => state,
        }
    }

    pub fn is_closing(self) -> bool {
        self == LoopState::Closing
    }
}

/// Monotonic clock fixed at startup plus per-frame statistics.
pub struct FrameState {
    start: Instant,
    last_frame_end: Instant,
    pub deltatime: f64,
    pub fps: f32,
}

impl FrameState {
    pub fn update_statistics(&mut self) {
        self.deltatime = self.last_frame_end.elapsed().as_secs_f64();
        self.fps = (1.0 / self.deltatime) as f32;

        self.last_frame_end = Instant::now();
    }

    pub fn elapsed_seconds(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }
}

impl Default for FrameState {
    fn default() -> Self {
        let now = Instant::now();

        FrameState {
            start: now,
            last_frame_end: now,
            deltatime: 0.0,
            fps: 0.0,
        }
    }
}

/// Oscillating green channel pushed into the color uniform each frame.
pub fn green_level(seconds: f32) -> f32 {
    seconds.sin() / 2.0 + 0.5
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn green_level_starts_at_midpoint() {
        assert_relative_eq!(green_level(0.0), 0.5);
    }

    #[test]
    fn green_level_stays_within_unit_interval() {
        for _ in 0..10_000 {
            let seconds = (fastrand::f32() - 0.5) * 2_000.0;
            let green = green_level(seconds);

            assert!((0.0..=1.0).contains(&green), "green({}) = {}", seconds, green);
        }
    }

    #[test]
    fn green_level_rises_to_the_first_peak() {
        let steps = 100;
        let mut previous = green_level(0.0);

        for step in 1..=steps {
            let seconds = FRAC_PI_2 * step as f32 / steps as f32;
            let green = green_level(seconds);

            assert!(green >= previous);
            previous = green;
        }

        assert_relative_eq!(previous, 1.0);
    }

    #[test]
    fn escape_closes_within_one_tick() {
        assert_eq!(
            LoopState::Running.advance(false, true),
            LoopState::Closing
        );
    }

    #[test]
    fn close_request_closes_within_one_tick() {
        assert_eq!(
            LoopState::Running.advance(true, false),
            LoopState::Closing
        );
    }

    #[test]
    fn running_continues_without_close_inputs() {
        assert_eq!(
            LoopState::Running.advance(false, false),
            LoopState::Running
        );
    }

    #[test]
    fn closing_is_terminal() {
        assert_eq!(
            LoopState::Closing.advance(false, false),
            LoopState::Closing
        );
    }

    #[test]
    fn prearmed_close_runs_zero_iterations() {
        let mut state = LoopState::Closing;
        let mut frames_rendered = 0;

        while !state.is_closing() {
            frames_rendered += 1;
            state = state.advance(false, false);
        }

        assert_eq!(frames_rendered, 0);
    }
}
