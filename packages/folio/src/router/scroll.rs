/// The "scrolled" styling of the nav bar, derived from the page's scroll offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollStyle {
    threshold: f64,
    scrolled: bool,
}

impl ScrollStyle {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            scrolled: false,
        }
    }

    /// Recompute the flag for `offset`.
    ///
    /// Returns the new value only when it differs from the previous one, so callers can skip
    /// redundant writes.
    pub fn update(&mut self, offset: f64) -> Option<bool> {
        let scrolled = offset > self.threshold;
        if scrolled == self.scrolled {
            return None;
        }
        self.scrolled = scrolled;
        Some(scrolled)
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }
}

impl Default for ScrollStyle {
    fn default() -> Self {
        Self::new(50.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_strict() {
        let mut style = ScrollStyle::default();
        assert_eq!(style.update(50.0), None);
        assert!(!style.is_scrolled());

        assert_eq!(style.update(51.0), Some(true));
        assert!(style.is_scrolled());
    }

    #[test]
    fn only_changes_are_reported() {
        let mut style = ScrollStyle::new(10.0);
        assert_eq!(style.update(100.0), Some(true));
        assert_eq!(style.update(200.0), None);
        assert_eq!(style.update(0.0), Some(false));
        assert_eq!(style.update(5.0), None);
    }
}
