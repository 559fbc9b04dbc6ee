/// Length of an identifier when none is given.
pub const DEFAULT_LENGTH: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdConfig {
    pub length: usize,
}

impl IdConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            length: DEFAULT_LENGTH,
        }
    }

    #[must_use]
    pub const fn length(mut self, len: usize) -> Self {
        self.length = len;
        self
    }
}

impl Default for IdConfig {
    fn default() -> Self {
        Self::new()
    }
}
