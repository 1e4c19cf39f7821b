//! Screen placement of the inventory window and its slots
//!
//! The window is centered on the screen and slots fill it row by row, left to
//! right, so slot `i` sits at row `i / columns`, column `i % columns`.

use crate::config::InventoryConfig;
use crate::geometry::{Point, Rect};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridLayout {
    window: Rect,
    columns: u32,
    rows: u32,
    slot_width: u32,
    slot_height: u32,
}

impl GridLayout {
    pub fn new(config: &InventoryConfig) -> Self {
        let config = config.clone().sanitized();

        let width = config.horizontal_slots.saturating_mul(config.slot_width);
        let height = config.vertical_slots.saturating_mul(config.slot_height);
        let x = centered(config.screen_width, width);
        let y = centered(config.screen_height, height);

        GridLayout {
            window: Rect::new(x, y, width, height),
            columns: config.horizontal_slots,
            rows: config.vertical_slots,
            slot_width: config.slot_width,
            slot_height: config.slot_height,
        }
    }

    /// The whole inventory window; releasing a drag outside it drops the item
    pub fn window(&self) -> Rect {
        self.window
    }

    pub fn capacity(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Rect of the slot at `index`
    pub fn slot_rect(&self, index: usize) -> Rect {
        let column = (index % self.columns as usize) as i32;
        let row = (index / self.columns as usize) as i32;

        Rect::new(
            self.window.x.saturating_add(column.saturating_mul(self.slot_width as i32)),
            self.window.y.saturating_add(row.saturating_mul(self.slot_height as i32)),
            self.slot_width,
            self.slot_height,
        )
    }

    /// Index of the slot under `point`, if any
    pub fn index_at(&self, point: Point) -> Option<usize> {
        if !self.window.contains_point(point) {
            return None;
        }

        let column = point.x.abs_diff(self.window.x) as usize / self.slot_width as usize;
        let row = point.y.abs_diff(self.window.y) as usize / self.slot_height as usize;
        Some(row * self.columns as usize + column)
    }
}

/// Offset that centers `size` pixels within `screen` pixels
fn centered(screen: u32, size: u32) -> i32 {
    let offset = (i64::from(screen) - i64::from(size)) / 2;
    i32::try_from(offset).unwrap_or(if offset < 0 { i32::MIN } else { i32::MAX })
}
