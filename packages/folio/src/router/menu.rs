/// The overlay nav menu shown on narrow screens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MobileMenu {
    Open,
    #[default]
    Closed,
}

impl MobileMenu {
    pub fn is_open(self) -> bool {
        self == MobileMenu::Open
    }

    pub fn toggle(&mut self) {
        *self = match self {
            MobileMenu::Open => MobileMenu::Closed,
            MobileMenu::Closed => MobileMenu::Open,
        };
    }

    pub fn close(&mut self) {
        *self = MobileMenu::Closed;
    }
}
