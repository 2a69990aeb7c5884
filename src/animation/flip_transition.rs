// src/animation/flip_transition.rs
//
// The Flip Transition Animator
//
// Every frame it checks whether the displayed minute or timezone changed.
// On a change it freezes the old grid, builds the new one and restarts the
// cycle clock. A cycle is a left-to-right cascade: each column of the old
// glyph falls, then each column of the new glyph rises, then everything holds.

use log::debug;

use crate::config::AnimationConfig;
use crate::effects::{map_visual, SharedParams};
use crate::models::{CellState, CellStates, TimeGrid, GRID_COLS, GRID_ROWS};
use crate::services::{ClockError, TimeParts, TimeSource};
use crate::utilities::easing::ease_out_quad;

/// Extra back-dating applied on the first evaluation so it lands past the cycle end.
pub const BOOTSTRAP_EPSILON: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionTiming {
    pub fall_duration: f32,
    pub rise_duration: f32,
    pub fall_stagger: f32,
    pub rise_stagger: f32,
}

impl Default for TransitionTiming {
    fn default() -> Self {
        Self {
            fall_duration: 0.5,
            rise_duration: 0.5,
            fall_stagger: 0.05,
            rise_stagger: 0.05,
        }
    }
}

impl From<&AnimationConfig> for TransitionTiming {
    fn from(config: &AnimationConfig) -> Self {
        Self {
            fall_duration: config.fall_duration,
            rise_duration: config.rise_duration,
            fall_stagger: config.fall_stagger,
            rise_stagger: config.rise_stagger,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    Fall,
    Rise,
    Hold,
}

impl TransitionTiming {
    pub fn fall_total(&self) -> f32 {
        (GRID_COLS - 1) as f32 * self.fall_stagger + self.fall_duration
    }

    pub fn rise_total(&self) -> f32 {
        (GRID_COLS - 1) as f32 * self.rise_stagger + self.rise_duration
    }

    pub fn total(&self) -> f32 {
        self.fall_total() + self.rise_total()
    }

    pub fn phase_at(&self, local_t: f32) -> TransitionPhase {
        if local_t < self.fall_total() {
            TransitionPhase::Fall
        } else if local_t < self.total() {
            TransitionPhase::Rise
        } else {
            TransitionPhase::Hold
        }
    }

    /// Progress of an active cube in column `col` at cycle time `local_t`.
    pub fn cell_progress(&self, phase: TransitionPhase, col: usize, local_t: f32) -> f32 {
        let progress = match phase {
            TransitionPhase::Hold => 1.0,
            TransitionPhase::Fall => {
                let start = col as f32 * self.fall_stagger;
                if local_t < start {
                    1.0
                } else if local_t >= start + self.fall_duration {
                    0.0
                } else {
                    ease_out_quad(1.0 - (local_t - start) / self.fall_duration)
                }
            }
            TransitionPhase::Rise => {
                let start = self.fall_total() + col as f32 * self.rise_stagger;
                if local_t < start {
                    0.0
                } else if local_t >= start + self.rise_duration {
                    1.0
                } else {
                    ease_out_quad((local_t - start) / self.rise_duration)
                }
            }
        };
        progress.clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone)]
pub struct PhaseState {
    pub last_minute: Option<u32>,
    pub last_timezone: Option<String>,
    pub cycle_start: f32,
    pub current: TimeGrid,
    pub previous: TimeGrid,
}

impl Default for PhaseState {
    fn default() -> Self {
        Self {
            last_minute: None,
            last_timezone: None,
            cycle_start: 0.0,
            current: TimeGrid::blank(),
            previous: TimeGrid::blank(),
        }
    }
}

pub struct FlipAnimator<S: TimeSource> {
    source: S,
    params: SharedParams,
    timing: TransitionTiming,
    state: PhaseState,
}

impl<S: TimeSource> FlipAnimator<S> {
    pub fn new(source: S, params: SharedParams, timing: TransitionTiming) -> Self {
        Self {
            source,
            params,
            timing,
            state: PhaseState::default(),
        }
    }

    /// Advances to `time` (seconds since start) and writes every cube's state into `cells`.
    /// On error the state and `cells` are left as they were.
    pub fn update(
        &mut self,
        time: f32,
        timezone: &str,
        cells: &mut CellStates,
    ) -> Result<TransitionPhase, ClockError> {
        let parts = self.source.time_parts(timezone)?;
        self.check_trigger(time, timezone, parts)?;

        let local_t = self.local_time(time);
        let phase = self.timing.phase_at(local_t);
        let grid = match phase {
            TransitionPhase::Fall => &self.state.previous,
            TransitionPhase::Rise | TransitionPhase::Hold => &self.state.current,
        };

        let params = self.params.borrow();
        for row in 0..GRID_ROWS {
            for col in 0..GRID_COLS {
                let state = if grid.is_on(row, col) {
                    let progress = self.timing.cell_progress(phase, col, local_t);
                    CellState::active(progress, map_visual(progress, &params))
                } else {
                    CellState::resting()
                };
                cells.set(row, col, state);
            }
        }

        Ok(phase)
    }

    /// Returns true when a new cycle was started.
    fn check_trigger(
        &mut self,
        time: f32,
        timezone: &str,
        parts: TimeParts,
    ) -> Result<bool, ClockError> {
        let timezone_changed = self.state.last_timezone.as_deref() != Some(timezone);
        let minute_changed = self.state.last_minute != Some(parts.minute);
        if !timezone_changed && !minute_changed {
            return Ok(false);
        }

        let next = TimeGrid::for_time(parts.hour, parts.minute)?;
        let is_first = self.state.last_minute.is_none();

        if !is_first {
            self.state.previous = self.state.current.clone();
        }
        self.state.current = next;
        self.state.last_minute = Some(parts.minute);
        self.state.last_timezone = Some(timezone.to_string());
        self.state.cycle_start = if is_first {
            time - self.timing.total() - BOOTSTRAP_EPSILON
        } else {
            time
        };

        debug!(
            "Transition to {:02}:{:02} ({}) at t={:.3}{}",
            parts.hour,
            parts.minute,
            timezone,
            time,
            if is_first { ", bootstrap" } else { "" }
        );
        Ok(true)
    }

    pub fn local_time(&self, now: f32) -> f32 {
        now - self.state.cycle_start
    }

    pub fn current_grid(&self) -> &TimeGrid {
        &self.state.current
    }

    pub fn previous_grid(&self) -> &TimeGrid {
        &self.state.previous
    }

    pub fn phase_state(&self) -> &PhaseState {
        &self.state
    }

    pub fn timing(&self) -> &TransitionTiming {
        &self.timing
    }

    pub fn params(&self) -> &SharedParams {
        &self.params
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}
