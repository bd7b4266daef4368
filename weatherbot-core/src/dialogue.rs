//! Disambiguation dialogue state, keyed per conversation.
//!
//! A conversation is either idle or awaiting a selection from the last
//! presented candidate list; absence of an entry in the store IS the idle
//! state. The host transport delivers a conversation's messages in order,
//! so the lock only guards insertion/removal across conversations.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::model::LocationCandidate;

/// Identifier of one conversation (chat) on the host transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConversationId(pub i64);

/// How one inbound reply relates to the pending candidate list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// A valid 1-based pick, converted to a 0-based index.
    Choice(usize),
    /// An integer outside `1..=len`.
    OutOfRange,
    /// Not an integer at all.
    NotANumber,
}

/// Parse a reply as a 1-based selection into a list of `len` candidates.
pub fn parse_selection(text: &str, len: usize) -> Selection {
    let Ok(n) = text.trim().parse::<i64>() else {
        return Selection::NotANumber;
    };

    match usize::try_from(n) {
        Ok(n) if (1..=len).contains(&n) => Selection::Choice(n - 1),
        _ => Selection::OutOfRange,
    }
}

/// Pending candidate lists, at most one per conversation.
///
/// Stored lists are never empty: only the handler's `Ambiguous` path calls
/// `begin`, and that outcome always carries at least one candidate.
#[derive(Debug, Default)]
pub struct DialogueStore {
    pending: RwLock<HashMap<ConversationId, Vec<LocationCandidate>>>,
}

impl DialogueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter `AwaitingSelection` for this conversation, replacing any
    /// previously stored list (supersession).
    pub fn begin(&self, conversation: ConversationId, candidates: Vec<LocationCandidate>) {
        debug_assert!(!candidates.is_empty());
        self.pending.write().unwrap().insert(conversation, candidates);
    }

    /// The pending list, if this conversation is awaiting a selection.
    pub fn pending(&self, conversation: ConversationId) -> Option<Vec<LocationCandidate>> {
        self.pending.read().unwrap().get(&conversation).cloned()
    }

    /// Back to idle, discarding any pending list.
    pub fn clear(&self, conversation: ConversationId) {
        self.pending.write().unwrap().remove(&conversation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fakes::candidate;

    #[test]
    fn selection_accepted_iff_within_bounds() {
        assert_eq!(parse_selection("1", 3), Selection::Choice(0));
        assert_eq!(parse_selection("3", 3), Selection::Choice(2));
        assert_eq!(parse_selection(" 2 ", 3), Selection::Choice(1));

        assert_eq!(parse_selection("0", 3), Selection::OutOfRange);
        assert_eq!(parse_selection("4", 3), Selection::OutOfRange);
        assert_eq!(parse_selection("-1", 3), Selection::OutOfRange);
        assert_eq!(parse_selection("99", 3), Selection::OutOfRange);
    }

    #[test]
    fn non_integers_are_not_a_number() {
        assert_eq!(parse_selection("banana", 3), Selection::NotANumber);
        assert_eq!(parse_selection("", 3), Selection::NotANumber);
        assert_eq!(parse_selection("1.5", 3), Selection::NotANumber);
        assert_eq!(parse_selection("two", 3), Selection::NotANumber);
    }

    #[test]
    fn begin_replaces_a_pending_list() {
        let store = DialogueStore::new();
        let conversation = ConversationId(7);

        store.begin(conversation, vec![candidate("Old", 1.0, 2.0, "US")]);
        store.begin(conversation, vec![candidate("New", 3.0, 4.0, "CA")]);

        let pending = store.pending(conversation).expect("list must be pending");
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].name, "New");
    }

    #[test]
    fn clear_returns_to_idle() {
        let store = DialogueStore::new();
        let conversation = ConversationId(7);

        store.begin(conversation, vec![candidate("Springfield", 1.0, 2.0, "US")]);
        assert!(store.pending(conversation).is_some());

        store.clear(conversation);
        assert!(store.pending(conversation).is_none());

        // Clearing an idle conversation is a no-op.
        store.clear(conversation);
        assert!(store.pending(conversation).is_none());
    }

    #[test]
    fn conversations_are_independent() {
        let store = DialogueStore::new();

        store.begin(ConversationId(1), vec![candidate("A", 0.0, 0.0, "US")]);
        store.begin(ConversationId(2), vec![candidate("B", 0.0, 0.0, "CA")]);

        store.clear(ConversationId(1));

        assert!(store.pending(ConversationId(1)).is_none());
        assert_eq!(store.pending(ConversationId(2)).expect("still pending")[0].name, "B");
    }
}
