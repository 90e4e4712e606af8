//! Pointer dragging
//!
//! Pressing on a particle picks it up: it follows the pointer and skips
//! force/integration. Releasing throws it with the pointer's displacement over
//! the last frame. The windowing layer only translates its input events into
//! a [`PointerInput`].

use super::states::{NVec2, System};

/// One frame of pointer state in world coordinates
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerInput {
    pub position: Option<NVec2>, // None while the cursor is outside the window
    pub pressed: bool, // button went down this frame
    pub released: bool, // button went up this frame
}

/// Start dragging the first particle (index order) under `pointer`
pub fn begin_drag(sys: &mut System, pointer: NVec2) -> Option<usize> {
    if sys.dragged.is_some() {
        return sys.dragged;
    }
    sys.dragged = sys.particles.iter().position(|p| p.contains(pointer));
    sys.dragged
}

/// Release the dragged particle with a finite-difference throw velocity
/// Returns the index that was released
pub fn end_drag(sys: &mut System, pointer: NVec2, dt: f64) -> Option<usize> {
    let i = sys.dragged.take()?;
    if let Some(p) = sys.particles.get_mut(i) {
        p.v = throw_velocity(p.x, pointer, dt);
    }
    Some(i)
}

/// Pin the dragged particle to the pointer
pub fn follow_pointer(sys: &mut System, pointer: NVec2) {
    if let Some(p) = sys.dragged.and_then(|i| sys.particles.get_mut(i)) {
        p.x = pointer;
    }
}

/// Velocity of something that moved `from` -> `to` in `dt`
/// A non-positive `dt` gives zero velocity
pub fn throw_velocity(from: NVec2, to: NVec2, dt: f64) -> NVec2 {
    if dt > 0.0 {
        (to - from) / dt
    } else {
        NVec2::zeros()
    }
}

/// Apply one frame of pointer input: press, then release, then follow
pub fn apply_pointer(sys: &mut System, input: PointerInput, dt: f64) {
    let Some(pointer) = input.position else {
        return;
    };

    if input.pressed {
        begin_drag(sys, pointer);
    }
    if input.released {
        end_drag(sys, pointer, dt);
    }
    follow_pointer(sys, pointer);
}
