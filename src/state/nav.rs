//! Mobile navigation menu state.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavEvent {
    Toggle,
    Close,
    /// A link inside the menu was followed.
    LinkFollowed,
    /// Escape pressed anywhere on the page.
    Escape,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavMenu {
    pub open: bool,
}

impl NavMenu {
    /// Apply `event`; returns `true` when the open state changed.
    pub fn apply(&mut self, event: NavEvent) -> bool {
        let next = match event {
            NavEvent::Toggle => !self.open,
            NavEvent::Close | NavEvent::LinkFollowed | NavEvent::Escape => false,
        };
        let changed = next != self.open;
        self.open = next;
        changed
    }
}
