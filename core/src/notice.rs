//! Self-clearing status messages.
//!
//! A message is shown together with a fresh `Ticket`. The host starts a
//! timer for that ticket and reports it back on expiry; the message is
//! cleared only if it still carries the same ticket, so a late timer never
//! wipes a newer message.

use std::time::Duration;

/// How long list-view notices stay visible.
pub const NOTICE_WINDOW: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// Monotonic ticket source, one per view.
#[derive(Debug, Default)]
pub struct Tickets {
    next: u64,
}

impl Tickets {
    pub fn issue(&mut self) -> Ticket {
        self.next += 1;
        Ticket(self.next)
    }
}

#[derive(Debug, Default)]
pub struct TransientMessage {
    current: Option<(Ticket, String)>,
}

impl TransientMessage {
    pub fn show(&mut self, ticket: Ticket, text: impl Into<String>) {
        self.current = Some((ticket, text.into()));
    }

    pub fn text(&self) -> Option<&str> {
        self.current.as_ref().map(|(_, text)| text.as_str())
    }

    /// Clears the message if `ticket` is the one it was shown with.
    pub fn expire(&mut self, ticket: Ticket) -> bool {
        match &self.current {
            Some((current, _)) if *current == ticket => {
                self.current = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expire_clears_matching_ticket() {
        let mut tickets = Tickets::default();
        let mut msg = TransientMessage::default();
        let t = tickets.issue();
        msg.show(t, "done");
        assert_eq!(msg.text(), Some("done"));
        assert!(msg.expire(t));
        assert_eq!(msg.text(), None);
    }

    #[test]
    fn stale_ticket_keeps_newer_message() {
        let mut tickets = Tickets::default();
        let mut msg = TransientMessage::default();
        let old = tickets.issue();
        msg.show(old, "first");
        let new = tickets.issue();
        msg.show(new, "second");

        assert!(!msg.expire(old));
        assert_eq!(msg.text(), Some("second"));
        assert!(msg.expire(new));
    }

    #[test]
    fn tickets_are_unique() {
        let mut tickets = Tickets::default();
        assert_ne!(tickets.issue(), tickets.issue());
    }
}
