use crate::error::{AppError, Result};

/// Slide position for the welcome screen carousels. Timing is left to the caller.
#[derive(Debug, Clone)]
pub struct Carousel<T> {
    items: Vec<T>,
    current: usize,
}

impl<T> Carousel<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items, current: 0 }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> Option<&T> {
        self.items.get(self.current)
    }

    /// Moves to the next slide, wrapping back to the first.
    pub fn advance(&mut self) -> usize {
        if !self.items.is_empty() {
            self.current = (self.current + 1) % self.items.len();
        }
        self.current
    }

    pub fn go_to(&mut self, index: usize) -> Result<()> {
        if index >= self.items.len() {
            return Err(AppError::validation(format!(
                "slide {index} out of range (0..{})",
                self.items.len()
            )));
        }
        self.current = index;
        Ok(())
    }
}
