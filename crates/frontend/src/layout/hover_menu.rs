//! Hover-dropdown state machine.
//!
//! Opening is immediate on pointer enter; closing waits for a grace period so
//! the pointer can travel from the trigger to the dropdown body without the
//! menu collapsing underneath it. The transitions are plain data so they can
//! be tested without a browser; the component layer arms the actual timer and
//! feeds the elapsed event back in.

use crate::layout::tabs::SectionId;

/// Grace period between pointer leave and the dropdown closing.
pub const DROPDOWN_CLOSE_DELAY_MS: i32 = 150;

/// Handed out when a close timer is armed. A token from a previous arm no
/// longer matches once the pointer re-enters, so a stale timer firing is a
/// no-op rather than a race.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloseToken(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoverState {
    #[default]
    Closed,
    Open,
    /// Pointer has left; a close timer is armed.
    ClosingPending,
}

/// State of the (single) navigation dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoverMenu {
    state: HoverState,
    section: Option<SectionId>,
    epoch: u64,
}

impl HoverMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> HoverState {
        self.state
    }

    /// The section whose dropdown is currently showing. A menu in
    /// `ClosingPending` still shows until the timer fires.
    pub fn open_section(&self) -> Option<SectionId> {
        match self.state {
            HoverState::Closed => None,
            HoverState::Open | HoverState::ClosingPending => self.section,
        }
    }

    /// Pointer entered a trigger or the dropdown body. Opens immediately and
    /// invalidates any armed close timer.
    pub fn pointer_enter(&mut self, section: SectionId) {
        self.epoch += 1;
        self.state = HoverState::Open;
        self.section = Some(section);
    }

    /// Pointer left the trigger and the dropdown body. Returns the token to
    /// arm the close timer with, or `None` when nothing is open.
    pub fn pointer_leave(&mut self) -> Option<CloseToken> {
        match self.state {
            HoverState::Closed => None,
            HoverState::Open | HoverState::ClosingPending => {
                self.epoch += 1;
                self.state = HoverState::ClosingPending;
                Some(CloseToken(self.epoch))
            }
        }
    }

    /// The close timer fired. Closes only when the token is still current.
    pub fn close_elapsed(&mut self, token: CloseToken) -> bool {
        if self.state == HoverState::ClosingPending && token == CloseToken(self.epoch) {
            self.state = HoverState::Closed;
            self.section = None;
            true
        } else {
            false
        }
    }

    /// Force-close, used on every navigation action.
    pub fn reset(&mut self) {
        self.epoch += 1;
        self.state = HoverState::Closed;
        self.section = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_opens_immediately() {
        let mut menu = HoverMenu::new();
        menu.pointer_enter(SectionId::Operations);
        assert_eq!(menu.state(), HoverState::Open);
        assert_eq!(menu.open_section(), Some(SectionId::Operations));
    }

    #[test]
    fn leave_then_elapsed_closes() {
        let mut menu = HoverMenu::new();
        menu.pointer_enter(SectionId::Operations);
        let token = menu.pointer_leave().expect("leave after open arms a close");
        assert_eq!(menu.state(), HoverState::ClosingPending);
        // Still showing while the timer runs.
        assert_eq!(menu.open_section(), Some(SectionId::Operations));
        assert!(menu.close_elapsed(token));
        assert_eq!(menu.state(), HoverState::Closed);
        assert_eq!(menu.open_section(), None);
    }

    #[test]
    fn reenter_before_close_keeps_menu_open() {
        let mut menu = HoverMenu::new();
        menu.pointer_enter(SectionId::Operations);
        let token = menu.pointer_leave().expect("armed");
        // Pointer comes back before the delay elapses.
        menu.pointer_enter(SectionId::Operations);
        assert_eq!(menu.state(), HoverState::Open);
        // The stale timer fires later; it must not close the menu.
        assert!(!menu.close_elapsed(token));
        assert_eq!(menu.state(), HoverState::Open);
        assert_eq!(menu.open_section(), Some(SectionId::Operations));
    }

    #[test]
    fn switching_sections_invalidates_pending_close() {
        let mut menu = HoverMenu::new();
        menu.pointer_enter(SectionId::Operations);
        let token = menu.pointer_leave().expect("armed");
        menu.pointer_enter(SectionId::Intelligence);
        assert!(!menu.close_elapsed(token));
        assert_eq!(menu.open_section(), Some(SectionId::Intelligence));
    }

    #[test]
    fn repeated_leave_keeps_only_last_token_valid() {
        let mut menu = HoverMenu::new();
        menu.pointer_enter(SectionId::Services);
        let first = menu.pointer_leave().expect("armed");
        let second = menu.pointer_leave().expect("re-armed");
        assert!(!menu.close_elapsed(first));
        assert_eq!(menu.state(), HoverState::ClosingPending);
        assert!(menu.close_elapsed(second));
        assert_eq!(menu.state(), HoverState::Closed);
    }

    #[test]
    fn leave_when_closed_arms_nothing() {
        let mut menu = HoverMenu::new();
        assert_eq!(menu.pointer_leave(), None);
    }

    #[test]
    fn reset_closes_and_invalidates() {
        let mut menu = HoverMenu::new();
        menu.pointer_enter(SectionId::Operations);
        let token = menu.pointer_leave().expect("armed");
        menu.reset();
        assert_eq!(menu.state(), HoverState::Closed);
        assert!(!menu.close_elapsed(token));
    }
}
