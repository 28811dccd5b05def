//! Frame governor for the board window
//!
//! egui is an immediate-mode GUI: every frame redraws everything.  The board
//! only changes in response to a click or a key, so there is no reason to
//! repaint continuously.
//!
//! `RepaintController` sits between the app and egui's repaint scheduler.
//! Input frames are painted by egui anyway. When the session changes while
//! handling that input, the frame just drawn is stale, so one follow-up
//! repaint is scheduled no sooner than the frame interval. Otherwise egui
//! sleeps until the next input event.

use std::time::Duration;

/// Frame rate used when none is configured.
const DEFAULT_FPS: u32 = 15;

/// Controls when the egui context should request repaints.
///
/// Call [`RepaintController::begin_frame`] at the top of `update()` and
/// [`RepaintController::end_frame`] at the bottom.
pub struct RepaintController {
    needs_repaint: bool,
    /// Minimum spacing between scheduled repaints.
    interval: Duration,
    frame: u64,
}

impl Default for RepaintController {
    fn default() -> Self {
        Self::with_fps(DEFAULT_FPS)
    }
}

impl RepaintController {
    /// Create a controller that schedules repaints no faster than `fps`.
    pub fn with_fps(fps: u32) -> Self {
        Self {
            needs_repaint: false,
            interval: frame_interval(fps),
            frame: 0,
        }
    }

    /// Request a single repaint on the next opportunity.
    pub fn mark_needs_repaint(&mut self) {
        self.needs_repaint = true;
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Call at the **start** of `update()`.
    pub fn begin_frame(&mut self) {
        self.needs_repaint = false;
    }

    /// Call at the **end** of `update()`.
    ///
    /// If anything marked the controller dirty during this frame, one repaint
    /// is scheduled after the frame interval.
    pub fn end_frame(&mut self, ctx: &egui::Context) {
        self.frame += 1;
        if self.needs_repaint {
            tracing::trace!(frame = self.frame, "repaint scheduled");
            ctx.request_repaint_after(self.interval);
        }
    }
}

fn frame_interval(fps: u32) -> Duration {
    Duration::from_secs(1) / fps.max(1)
}
