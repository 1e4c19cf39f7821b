//! Per-frame input for the inventory
//!
//! The windowing layer reports raw events; [`PointerTracker`] folds one
//! frame's worth of them into a [`FrameInput`] with button edges, which is
//! what the inventory consumes. This keeps the inventory free of any
//! backend's event types.

use crate::geometry::Point;

/// Raw input events the inventory cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Primary button went down
    PointerDown(i32, i32),
    /// Primary button went up
    PointerUp(i32, i32),
    PointerMove(i32, i32),
    /// The open/close inventory key
    ToggleInventory,
    /// The dismiss key (closes a pending choice)
    Dismiss,
}

/// Pointer state for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerInput {
    pub position: Point,
    /// The button went down during this frame
    pub pressed: bool,
    /// The button is down at the end of this frame
    pub held: bool,
    /// The button went up during this frame
    pub released: bool,
}

impl PointerInput {
    /// Pointer resting at `position` with the button up
    pub fn idle(position: Point) -> Self {
        PointerInput {
            position,
            ..Default::default()
        }
    }

    pub fn press(position: Point) -> Self {
        PointerInput {
            position,
            pressed: true,
            held: true,
            released: false,
        }
    }

    pub fn hold(position: Point) -> Self {
        PointerInput {
            position,
            pressed: false,
            held: true,
            released: false,
        }
    }

    pub fn release(position: Point) -> Self {
        PointerInput {
            position,
            pressed: false,
            held: false,
            released: true,
        }
    }
}

/// Everything the inventory reads in one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub pointer: PointerInput,
    pub toggle_inventory: bool,
    pub dismiss: bool,
}

/// Folds raw events into per-frame input
///
/// Keeps the pointer position and button state between frames so a frame
/// without events still reports where the pointer is and whether the button
/// is held.
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    position: Point,
    held: bool,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Consumes one frame's events
    pub fn frame(&mut self, events: impl IntoIterator<Item = InputEvent>) -> FrameInput {
        let mut frame = FrameInput::default();

        for event in events {
            match event {
                InputEvent::PointerDown(x, y) => {
                    self.position = Point::new(x, y);
                    self.held = true;
                    frame.pointer.pressed = true;
                }
                InputEvent::PointerUp(x, y) => {
                    self.position = Point::new(x, y);
                    if self.held {
                        frame.pointer.released = true;
                    }
                    self.held = false;
                }
                InputEvent::PointerMove(x, y) => {
                    self.position = Point::new(x, y);
                }
                InputEvent::ToggleInventory => {
                    frame.toggle_inventory = !frame.toggle_inventory;
                }
                InputEvent::Dismiss => {
                    frame.dismiss = true;
                }
            }
        }

        frame.pointer.position = self.position;
        frame.pointer.held = self.held;
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_then_hold_then_release() {
        let mut tracker = PointerTracker::new();

        let frame = tracker.frame([InputEvent::PointerDown(10, 20)]);
        assert_eq!(frame.pointer, PointerInput::press(Point::new(10, 20)));

        let frame = tracker.frame([InputEvent::PointerMove(15, 25)]);
        assert_eq!(frame.pointer, PointerInput::hold(Point::new(15, 25)));

        let frame = tracker.frame([InputEvent::PointerUp(16, 26)]);
        assert_eq!(frame.pointer, PointerInput::release(Point::new(16, 26)));

        let frame = tracker.frame([]);
        assert_eq!(frame.pointer, PointerInput::idle(Point::new(16, 26)));
    }

    #[test]
    fn test_click_within_one_frame() {
        let mut tracker = PointerTracker::new();
        let frame = tracker.frame([InputEvent::PointerDown(1, 1), InputEvent::PointerUp(1, 1)]);

        assert!(frame.pointer.pressed);
        assert!(frame.pointer.released);
        assert!(!frame.pointer.held);
    }

    #[test]
    fn test_stray_release_is_ignored() {
        let mut tracker = PointerTracker::new();
        let frame = tracker.frame([InputEvent::PointerUp(3, 3)]);
        assert!(!frame.pointer.released);
    }

    #[test]
    fn test_double_toggle_cancels_out() {
        let mut tracker = PointerTracker::new();

        let frame = tracker.frame([InputEvent::ToggleInventory]);
        assert!(frame.toggle_inventory);

        let frame = tracker.frame([InputEvent::ToggleInventory, InputEvent::ToggleInventory]);
        assert!(!frame.toggle_inventory);

        let frame = tracker.frame([InputEvent::Dismiss]);
        assert!(frame.dismiss);
    }
}
