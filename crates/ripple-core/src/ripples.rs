//! Fixed-capacity, insertion-ordered ripple sources.
//!
//! The store keeps at most [`MAX_RIPPLES`] entries, oldest first. Inserting into
//! a full store evicts exactly the oldest entry. The evaluator never sees the
//! store itself, only a [`RippleSnapshot`]: a fixed-width array where unused
//! slots are flattened to zero-strength placeholders.

use crate::constants::{MAX_RIPPLES, RIPPLE_INITIAL_STRENGTH};
use glam::Vec2;
use smallvec::SmallVec;

/// One user-triggered disturbance. Immutable once created.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleSource {
    pub position: Vec2,
    pub start_time: f32,
    pub strength: f32,
}

impl RippleSource {
    pub fn new(position: Vec2, start_time: f32) -> Self {
        Self {
            position,
            start_time,
            strength: RIPPLE_INITIAL_STRENGTH,
        }
    }
}

/// A snapshot slot before it is flattened for the shader.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum RippleSlot {
    Active(RippleSource),
    #[default]
    Empty,
}

impl RippleSlot {
    /// `vec4(x, y, start_time, strength)`; empty slots become all zeros.
    #[inline]
    pub fn packed(&self) -> [f32; 4] {
        match self {
            RippleSlot::Active(r) => [r.position.x, r.position.y, r.start_time, r.strength],
            RippleSlot::Empty => [0.0; 4],
        }
    }

    #[inline]
    pub fn source(&self) -> Option<&RippleSource> {
        match self {
            RippleSlot::Active(r) => Some(r),
            RippleSlot::Empty => None,
        }
    }
}

/// Frame-stable, fixed-width view of the store in the evaluator's layout.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct RippleSnapshot {
    pub slots: [[f32; 4]; MAX_RIPPLES],
}

impl RippleSnapshot {
    pub fn from_slots(slots: &[RippleSlot; MAX_RIPPLES]) -> Self {
        let mut packed = [[0.0; 4]; MAX_RIPPLES];
        for (dst, slot) in packed.iter_mut().zip(slots.iter()) {
            *dst = slot.packed();
        }
        Self { slots: packed }
    }

    #[inline]
    pub fn position(&self, i: usize) -> Vec2 {
        Vec2::new(self.slots[i][0], self.slots[i][1])
    }

    #[inline]
    pub fn start_time(&self, i: usize) -> f32 {
        self.slots[i][2]
    }

    #[inline]
    pub fn strength(&self, i: usize) -> f32 {
        self.slots[i][3]
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|s| s[3] > 0.0).count()
    }
}

#[derive(Clone, Debug, Default)]
pub struct RippleStore {
    entries: SmallVec<[RippleSource; MAX_RIPPLES]>,
}

impl RippleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a ripple started at `start_time`, evicting the oldest when full.
    ///
    /// Non-finite positions are dropped so they can never reach the shader.
    pub fn insert(&mut self, position: Vec2, start_time: f32) {
        if !position.is_finite() || !start_time.is_finite() {
            log::debug!(
                "[ripples] dropping non-finite ripple at ({}, {}) t={}",
                position.x,
                position.y,
                start_time
            );
            return;
        }
        if self.entries.len() == MAX_RIPPLES {
            self.entries.remove(0);
        }
        self.entries.push(RippleSource::new(position, start_time));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub const fn capacity(&self) -> usize {
        MAX_RIPPLES
    }

    /// Entries oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &RippleSource> {
        self.entries.iter()
    }

    pub fn oldest(&self) -> Option<&RippleSource> {
        self.entries.first()
    }

    pub fn newest(&self) -> Option<&RippleSource> {
        self.entries.last()
    }

    /// Active entries first (oldest first), then empty slots.
    pub fn slots(&self) -> [RippleSlot; MAX_RIPPLES] {
        let mut slots = [RippleSlot::Empty; MAX_RIPPLES];
        for (slot, ripple) in slots.iter_mut().zip(self.entries.iter()) {
            *slot = RippleSlot::Active(*ripple);
        }
        slots
    }

    pub fn snapshot(&self) -> RippleSnapshot {
        RippleSnapshot::from_slots(&self.slots())
    }
}
