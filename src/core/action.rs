//! # Actions
//!
//! Everything the user can ask the navigator to do becomes an `Action`.
//! User presses Enter on a link? That's `Action::FollowLink`.
//!
//! `update()` runs the action against the navigator and the host, turns
//! recoverable failures into a notice on the host, and tells the caller
//! what to do next.
//!
//! ```text
//! Navigator + Host + Action  →  update()  →  Effect
//! ```
//!
//! Nothing here aborts: a missing section or a lost window is a message,
//! no link or an empty history is silence.

use log::{debug, warn};

use crate::core::host::HostWindowAdapter;
use crate::core::navigator::{BackOutcome, FollowOutcome, Navigator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    FollowLink,
    GoBack,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The view changed; redraw.
    Moved,
    Quit,
}

pub fn update<H>(navigator: &mut Navigator, host: &mut H, action: Action) -> Effect
where
    H: HostWindowAdapter + ?Sized,
{
    debug!("update: {action:?}");
    match action {
        Action::FollowLink => match navigator.follow_link(host) {
            Ok(FollowOutcome::NoLink) => Effect::None,
            Ok(FollowOutcome::Followed(_)) => Effect::Moved,
            Err(e) => {
                warn!("Follow link failed: {e}");
                host.notify(&e.to_string());
                Effect::Moved
            }
        },
        Action::GoBack => match navigator.go_back(host) {
            Ok(BackOutcome::HistoryEmpty) => Effect::None,
            Ok(BackOutcome::Restored(_)) => Effect::Moved,
            Err(e) => {
                warn!("Go back failed: {e}");
                host.notify(&e.to_string());
                Effect::Moved
            }
        },
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::navigator::NavigatorOptions;
    use crate::test_support::{FakeHost, HostCall};

    #[test]
    fn test_no_link_is_silent() {
        let mut host = FakeHost::new("/notes/a.md", "no links here");
        let mut nav = Navigator::new(NavigatorOptions::default());

        assert_eq!(update(&mut nav, &mut host, Action::FollowLink), Effect::None);
        assert!(host.calls.is_empty());
    }

    #[test]
    fn test_empty_history_is_silent() {
        let mut host = FakeHost::new("/notes/a.md", "");
        let mut nav = Navigator::new(NavigatorOptions::default());

        assert_eq!(update(&mut nav, &mut host, Action::GoBack), Effect::None);
        assert!(host.calls.is_empty());
    }

    #[test]
    fn test_missing_section_becomes_notice() {
        let mut host = FakeHost::new("/notes/a.md", "^GHOST^");
        host.search_fails = true;
        let mut nav = Navigator::new(NavigatorOptions::default());

        update(&mut nav, &mut host, Action::FollowLink);

        assert_eq!(
            host.calls.last(),
            Some(&HostCall::Notify("section not found: GHOST".into()))
        );
    }

    #[test]
    fn test_missing_window_becomes_notice() {
        let mut host = FakeHost::new("/notes/a.md", "^@b.md^");
        let mut nav = Navigator::new(NavigatorOptions::default());
        update(&mut nav, &mut host, Action::FollowLink);
        host.close_window_for("/notes/a.md");

        assert_eq!(update(&mut nav, &mut host, Action::GoBack), Effect::Moved);
        assert_eq!(
            host.calls.last(),
            Some(&HostCall::Notify("no window for /notes/a.md".into()))
        );
    }

    #[test]
    fn test_follow_then_back_moves() {
        let mut host = FakeHost::new("/notes/a.md", "^@b.md^");
        let mut nav = Navigator::new(NavigatorOptions::default());

        assert_eq!(update(&mut nav, &mut host, Action::FollowLink), Effect::Moved);
        assert_eq!(update(&mut nav, &mut host, Action::GoBack), Effect::Moved);
    }

    #[test]
    fn test_quit() {
        let mut host = FakeHost::new("/notes/a.md", "");
        let mut nav = Navigator::new(NavigatorOptions::default());
        assert_eq!(update(&mut nav, &mut host, Action::Quit), Effect::Quit);
    }
}
