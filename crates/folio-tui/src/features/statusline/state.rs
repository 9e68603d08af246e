//! Status line state types.

/// Immutable snapshot read by the renderer each frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StatusLine {
    pub fps: f32,
    pub frame_ms: u16,
    pub frames: u64,
}

/// Smoothed frame-rate tracking.
#[derive(Debug)]
pub struct StatusLineAccumulator {
    fps_ema: f32,
    last_frame_ms: u16,
    frames: u64,
}

impl Default for StatusLineAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusLineAccumulator {
    pub fn new() -> Self {
        Self {
            fps_ema: 60.0,
            last_frame_ms: 0,
            frames: 0,
        }
    }

    /// Records a rendered frame that took `frame_ms` since the previous one.
    pub fn on_frame(&mut self, frame_ms: u16) {
        let fps = if frame_ms > 0 {
            1000.0 / f32::from(frame_ms)
        } else {
            self.fps_ema
        };
        self.fps_ema += 0.1 * (fps - self.fps_ema);
        self.last_frame_ms = frame_ms;
        self.frames += 1;
    }

    pub fn snapshot(&self) -> StatusLine {
        StatusLine {
            fps: (self.fps_ema * 10.0).round() / 10.0,
            frame_ms: self.last_frame_ms,
            frames: self.frames,
        }
    }
}
