use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// One sample of a series: a position on the shared index domain and its value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub x_index: usize,
    pub value: f64,
}

impl Entry {
    #[must_use]
    pub fn new(x_index: usize, value: f64) -> Self {
        Self { x_index, value }
    }
}

/// Entry selected for crosshair emphasis in one draw pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Highlight {
    pub data_set_index: usize,
    pub x_index: usize,
}

impl Highlight {
    #[must_use]
    pub fn new(data_set_index: usize, x_index: usize) -> Self {
        Self {
            data_set_index,
            x_index,
        }
    }
}
