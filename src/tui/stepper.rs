use crate::config::ServingBounds;

/// Serving counter behind the `+`/`-` keys, clamped to the configured range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServingStepper {
    current: u32,
    bounds: ServingBounds,
}

impl ServingStepper {
    pub fn new(start: u32, bounds: ServingBounds) -> Self {
        Self {
            current: bounds.clamp(start),
            bounds,
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn increment(&mut self) {
        self.current = self.bounds.clamp(self.current.saturating_add(1));
    }

    pub fn decrement(&mut self) {
        self.current = self.bounds.clamp(self.current.saturating_sub(1));
    }
}
