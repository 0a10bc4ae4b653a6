//! Tick-driven sprite-sheet animation.
//!
//! An `Animation` walks a horizontal strip of equally sized frames. It only
//! tracks which frame is active; drawing stays with whoever reads
//! [`Animation::current_frame_rect`].

use bevy::prelude::*;
use thiserror::Error;

use crate::common::assets::SpriteSheet;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnimationError {
    #[error("animation: source image is missing")]
    MissingSource,
    #[error("animation: invalid parameter: {field} must be positive, got {value}")]
    InvalidParameter { field: &'static str, value: u32 },
    #[error("animation: name cannot be empty")]
    EmptyName,
}

/// Layout of one clip on a sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipLayout {
    pub frame_size: UVec2,
    /// Top-left corner of the first frame.
    pub origin: UVec2,
    pub frame_count: u32,
    /// Ticks each frame stays on screen.
    pub ticks_per_frame: u32,
    pub looping: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    layout: ClipLayout,
    sheet_size: UVec2,
    current_frame: u32,
    frame_timer: u32,
    finished: bool,
}

impl Animation {
    pub fn new(sheet: Option<&SpriteSheet>, layout: ClipLayout) -> Result<Self, AnimationError> {
        let sheet = sheet.ok_or(AnimationError::MissingSource)?;
        for (field, value) in [
            ("frame_width", layout.frame_size.x),
            ("frame_height", layout.frame_size.y),
            ("frame_count", layout.frame_count),
            ("ticks_per_frame", layout.ticks_per_frame),
        ] {
            if value == 0 {
                return Err(AnimationError::InvalidParameter { field, value });
            }
        }

        Ok(Self {
            layout,
            sheet_size: sheet.size,
            current_frame: 0,
            frame_timer: 0,
            finished: false,
        })
    }

    /// Progress one tick.
    ///
    /// Returns true on the tick a cycle completes. A one-shot clip keeps
    /// returning true on every call after it finished, and its frame stays
    /// pinned on the last one.
    pub fn advance(&mut self) -> bool {
        if !self.layout.looping && self.finished {
            return true;
        }

        self.frame_timer += 1;
        if self.frame_timer < self.layout.ticks_per_frame {
            return false;
        }
        self.frame_timer = 0;

        if self.current_frame + 1 < self.layout.frame_count {
            self.current_frame += 1;
            return false;
        }

        if self.layout.looping {
            self.current_frame = 0;
        } else {
            self.finished = true;
        }
        true
    }

    pub fn reset(&mut self) {
        self.current_frame = 0;
        self.frame_timer = 0;
        self.finished = false;
    }

    /// Source rectangle of the active frame, or `None` if it does not fit on
    /// the sheet. The latter is a layout mistake; callers skip drawing.
    pub fn current_frame_rect(&self) -> Option<Rect> {
        let ClipLayout { frame_size, origin, .. } = self.layout;
        let bounds = self
            .current_frame
            .checked_mul(frame_size.x)
            .and_then(|dx| origin.x.checked_add(dx))
            .and_then(|x| {
                let max_x = x.checked_add(frame_size.x)?;
                let max_y = origin.y.checked_add(frame_size.y)?;
                Some((UVec2::new(x, origin.y), UVec2::new(max_x, max_y)))
            });
        let Some((min, max)) = bounds else {
            warn_once!(
                "frame {} at {origin} overflows pixel coordinates",
                self.current_frame
            );
            return None;
        };
        if max.x > self.sheet_size.x || max.y > self.sheet_size.y {
            warn_once!(
                "frame {min}..{max} is outside the {} sheet",
                self.sheet_size
            );
            return None;
        }
        Some(Rect::new(min.x as f32, min.y as f32, max.x as f32, max.y as f32))
    }

    pub fn current_frame(&self) -> u32 {
        self.current_frame
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn layout(&self) -> &ClipLayout {
        &self.layout
    }

    /// Ticks a one-shot clip needs to finish from frame 0.
    pub fn duration_ticks(&self) -> u32 {
        self.layout.frame_count.saturating_mul(self.layout.ticks_per_frame)
    }

    #[cfg(test)]
    pub(crate) fn frame_timer(&self) -> u32 {
        self.frame_timer
    }
}
