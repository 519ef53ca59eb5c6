//! Swipe gestures.
//!
//! A swipe is a press followed by a release. Its dominant axis and sign pick
//! the direction; it only counts if the travel along that axis is strictly
//! greater than a minimum distance. Horizontal wins only when `|dx| > |dy|`,
//! so a perfect diagonal resolves vertically.
//!
//! In a terminal, swipes are mouse drags. Rows are taller than columns are
//! wide, so [`SwipeTracker::for_terminal`] scales vertical travel by
//! [`TERMINAL_ROW_ASPECT`] to measure both axes in column-widths.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::types::{
    Direction, GameAction, SWIPE_MIN_DISTANCE, TERMINAL_ROW_ASPECT, TERMINAL_SWIPE_MIN_CELLS,
};

/// Classify a displacement (`dx` right-positive, `dy` down-positive).
///
/// Returns `None` for sub-threshold gestures.
pub fn classify_swipe(dx: f32, dy: f32, min_distance: f32) -> Option<Direction> {
    if dx.abs() > dy.abs() {
        if dx.abs() <= min_distance {
            return None;
        }
        Some(if dx > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        })
    } else {
        if dy.abs() <= min_distance {
            return None;
        }
        Some(if dy > 0.0 {
            Direction::Down
        } else {
            Direction::Up
        })
    }
}

/// Tracks one gesture from press to release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeTracker {
    start: Option<(f32, f32)>,
    min_distance: f32,
    y_scale: f32,
}

impl SwipeTracker {
    /// Tracker for touch-style coordinates (same unit on both axes).
    pub fn new(min_distance: f32) -> Self {
        Self {
            start: None,
            min_distance,
            y_scale: 1.0,
        }
    }

    /// Tracker for terminal cell coordinates.
    pub fn for_terminal(min_cells: f32) -> Self {
        Self {
            start: None,
            min_distance: min_cells,
            y_scale: TERMINAL_ROW_ASPECT,
        }
    }

    pub fn min_distance(&self) -> f32 {
        self.min_distance
    }

    pub fn in_progress(&self) -> bool {
        self.start.is_some()
    }

    pub fn begin(&mut self, x: f32, y: f32) {
        self.start = Some((x, y));
    }

    /// Finish the gesture. Without a matching `begin`, nothing happens.
    pub fn end(&mut self, x: f32, y: f32) -> Option<Direction> {
        let (sx, sy) = self.start.take()?;
        classify_swipe(x - sx, (y - sy) * self.y_scale, self.min_distance)
    }

    pub fn cancel(&mut self) {
        self.start = None;
    }

    /// Feed a terminal mouse event. Left-button press starts a gesture,
    /// left-button release completes it.
    pub fn handle_mouse_event(&mut self, event: MouseEvent) -> Option<GameAction> {
        let x = event.column as f32;
        let y = event.row as f32;
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.begin(x, y);
                None
            }
            MouseEventKind::Up(MouseButton::Left) => self.end(x, y).map(GameAction::Move),
            _ => None,
        }
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(SWIPE_MIN_DISTANCE)
    }
}

/// Default tracker for the terminal front-end.
pub fn terminal_swipe_tracker() -> SwipeTracker {
    SwipeTracker::for_terminal(TERMINAL_SWIPE_MIN_CELLS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn dominant_axis_and_sign_pick_direction() {
        assert_eq!(classify_swipe(80.0, 10.0, 50.0), Some(Direction::Right));
        assert_eq!(classify_swipe(-80.0, 10.0, 50.0), Some(Direction::Left));
        assert_eq!(classify_swipe(5.0, 60.0, 50.0), Some(Direction::Down));
        assert_eq!(classify_swipe(5.0, -60.0, 50.0), Some(Direction::Up));
    }

    #[test]
    fn threshold_is_strict() {
        assert_eq!(classify_swipe(50.0, 0.0, 50.0), None);
        assert_eq!(classify_swipe(0.0, -50.0, 50.0), None);
        assert_eq!(classify_swipe(50.5, 0.0, 50.0), Some(Direction::Right));
    }

    #[test]
    fn diagonal_tie_resolves_vertically() {
        assert_eq!(classify_swipe(70.0, 70.0, 50.0), Some(Direction::Down));
        assert_eq!(classify_swipe(-70.0, -70.0, 50.0), Some(Direction::Up));
    }

    #[test]
    fn short_dominant_axis_is_ignored_even_if_total_is_long() {
        // Total travel > 50 but neither axis exceeds it.
        assert_eq!(classify_swipe(45.0, 40.0, 50.0), None);
    }

    #[test]
    fn end_without_begin_is_ignored() {
        let mut t = SwipeTracker::default();
        assert_eq!(t.end(100.0, 0.0), None);
        t.begin(0.0, 0.0);
        assert!(t.in_progress());
        assert_eq!(t.end(100.0, 0.0), Some(Direction::Right));
        assert!(!t.in_progress());
    }

    #[test]
    fn terminal_drag_scales_rows() {
        let mut t = terminal_swipe_tracker();
        assert_eq!(
            t.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 10, 10)),
            None
        );
        // 3 rows up == 6 column-widths, beats the 4-cell threshold.
        assert_eq!(
            t.handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), 11, 7)),
            Some(GameAction::Move(Direction::Up))
        );

        t.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 10, 10));
        // 3 columns right is below threshold.
        assert_eq!(
            t.handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), 13, 10)),
            None
        );
    }

    #[test]
    fn other_buttons_do_not_start_gestures() {
        let mut t = terminal_swipe_tracker();
        t.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Right), 0, 0));
        assert!(!t.in_progress());
        assert_eq!(
            t.handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), 40, 0)),
            None
        );
    }
}
