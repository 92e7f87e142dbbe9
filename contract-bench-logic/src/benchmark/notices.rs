use crate::types::benchmarks::BenchmarkKey;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::{
    collections::VecDeque,
    sync::atomic::{AtomicU64, Ordering},
};

/// Notices kept before the oldest ones are dropped.
pub const MAX_NOTICES: usize = 100;

/// User-visible report of a failed benchmark run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub id: u64,
    pub contract_id: String,
    pub key: BenchmarkKey,
    pub message: String,
    pub raised_at: DateTime<Utc>,
}

/// Notices stay listed until dismissed, or until `limit` newer ones push
/// them out.
#[derive(Debug)]
pub struct NoticeBoard {
    next_id: AtomicU64,
    limit: usize,
    notices: parking_lot::RwLock<VecDeque<Notice>>,
}

impl Default for NoticeBoard {
    fn default() -> Self {
        Self::with_limit(MAX_NOTICES)
    }
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            next_id: AtomicU64::new(0),
            limit: limit.max(1),
            notices: Default::default(),
        }
    }

    pub fn raise(
        &self,
        contract_id: impl Into<String>,
        key: BenchmarkKey,
        message: impl Into<String>,
    ) -> Notice {
        let notice = Notice {
            id: self.next_id.fetch_add(1, Ordering::Relaxed) + 1,
            contract_id: contract_id.into(),
            key,
            message: message.into(),
            raised_at: Utc::now(),
        };
        let mut notices = self.notices.write();
        while notices.len() >= self.limit {
            notices.pop_front();
        }
        notices.push_back(notice.clone());
        notice
    }

    /// Oldest first.
    pub fn list(&self) -> Vec<Notice> {
        self.notices.read().iter().cloned().collect()
    }

    pub fn dismiss(&self, id: u64) -> bool {
        let mut notices = self.notices.write();
        let before = notices.len();
        notices.retain(|notice| notice.id != id);
        notices.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::contracts::Variant;
    use pretty_assertions::assert_eq;

    #[test]
    fn raised_notices_are_listed_until_dismissed() {
        let board = NoticeBoard::new();
        let first = board.raise("1", BenchmarkKey::new(Variant::Solidity, "swap"), "timed out");
        let second = board.raise("4", BenchmarkKey::new(Variant::Ink, "stake"), "reverted");
        assert_ne!(first.id, second.id);

        let messages: Vec<_> = board.list().into_iter().map(|n| n.message).collect();
        assert_eq!(messages, vec!["timed out", "reverted"]);

        assert!(board.dismiss(first.id));
        assert!(!board.dismiss(first.id));
        assert_eq!(board.list(), vec![second]);
    }

    #[test]
    fn oldest_notices_are_dropped_past_the_limit() {
        let board = NoticeBoard::with_limit(2);
        let key = BenchmarkKey::new(Variant::Ink, "swap");
        let first = board.raise("1", key.clone(), "first");
        board.raise("1", key.clone(), "second");
        board.raise("1", key, "third");

        let messages: Vec<_> = board.list().into_iter().map(|n| n.message).collect();
        assert_eq!(messages, vec!["second", "third"]);
        assert!(!board.dismiss(first.id));
    }
}
