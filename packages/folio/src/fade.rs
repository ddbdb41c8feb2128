/// The class that plays the fade-in transition.
pub const FADE_CLASS: &str = "fade-in-up";

/// One-shot reveal state for an element that fades in the first time it scrolls into view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FadeIn {
    shown: bool,
}

impl FadeIn {
    /// Record a visibility observation. Returns `true` only for the observation that reveals the
    /// element; leaving the viewport never hides it again.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if !intersecting || self.shown {
            return false;
        }
        self.shown = true;
        true
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    pub fn class(&self) -> &'static str {
        match self.shown {
            true => FADE_CLASS,
            false => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_once() {
        let mut fade = FadeIn::default();
        assert!(!fade.observe(false));
        assert_eq!(fade.class(), "");

        assert!(fade.observe(true));
        assert_eq!(fade.class(), FADE_CLASS);

        assert!(!fade.observe(false));
        assert!(!fade.observe(true));
        assert!(fade.is_shown());
    }
}
