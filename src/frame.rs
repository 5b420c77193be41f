use std::time::Instant;

use crate::traits::FrameSource;

/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    /// Seconds since the first frame
    pub time: f32,
    /// Seconds since the previous frame
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, time: f32, delta: f32) -> Self {
        Self { number, time, delta }
    }
}

/// Infinite iterator that yields wall-clock frame information
/// Use this in a loop: `for frame in frames { ... }`
pub struct FrameIterator {
    frame_number: u64,
    start_time: Instant,
    last_frame_time: Instant,
    last_delta: f32,
}

impl FrameIterator {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            frame_number: 0,
            start_time: now,
            last_frame_time: now,
            last_delta: 0.0,
        }
    }
}

impl Default for FrameIterator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FrameIterator {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame_time).as_secs_f32();
        let time = now.duration_since(self.start_time).as_secs_f32();

        let info = FrameInfo::new(self.frame_number, time, delta);

        self.frame_number += 1;
        self.last_frame_time = now;
        self.last_delta = delta;

        Some(info)
    }
}

impl FrameSource for FrameIterator {
    fn delta_time(&self) -> f32 {
        self.last_delta
    }

    fn frame_count(&self) -> u64 {
        self.frame_number
    }
}

/// Synthetic frames at a fixed rate, for headless runs and tests
#[derive(Debug, Clone)]
pub struct FixedFrames {
    frame_number: u64,
    interval: f32,
    remaining: Option<u64>,
}

impl FixedFrames {
    /// Unbounded frames at `hz`
    pub fn new(hz: f32) -> Self {
        Self {
            frame_number: 0,
            interval: 1.0 / hz,
            remaining: None,
        }
    }

    /// Stop after `count` frames
    pub fn take_frames(mut self, count: u64) -> Self {
        self.remaining = Some(count);
        self
    }
}

impl Iterator for FixedFrames {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        if let Some(remaining) = self.remaining.as_mut() {
            if *remaining == 0 {
                return None;
            }
            *remaining -= 1;
        }

        let number = self.frame_number;
        let delta = if number == 0 { 0.0 } else { self.interval };
        self.frame_number += 1;
        Some(FrameInfo::new(number, number as f32 * self.interval, delta))
    }
}

impl FrameSource for FixedFrames {
    fn delta_time(&self) -> f32 {
        self.interval
    }

    fn frame_count(&self) -> u64 {
        self.frame_number
    }
}
