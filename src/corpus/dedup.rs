/*! Bulletin deduplication

The archive sometimes holds several documents for the same broadcast.
[DedupIndex] remembers which bulletins were already provided during a run.
!*/
use std::collections::HashSet;

use crate::filtering::FilterMut;

use super::DateHourKey;

#[derive(Debug, Default)]
pub struct DedupIndex {
    seen: HashSet<DateHourKey>,
}

impl DedupIndex {
    /// Claim `key`. Returns `false` if it was already claimed.
    pub fn claim(&mut self, key: DateHourKey) -> bool {
        self.seen.insert(key)
    }

    pub fn contains(&self, key: &DateHourKey) -> bool {
        self.seen.contains(key)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

impl FilterMut<&DateHourKey> for DedupIndex {
    /// `true` the first time a key is seen.
    fn detect_mut(&mut self, key: &DateHourKey) -> bool {
        if self.contains(key) {
            return false;
        }
        self.claim(key.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::BulletinDate;

    fn key(date: &str, hour: &str) -> DateHourKey {
        DateHourKey::new(BulletinDate::from_filename(date).unwrap(), hour)
    }

    #[test]
    fn first_wins() {
        let mut index = DedupIndex::default();
        assert!(index.detect_mut(&key("150321", "0800")));
        assert!(!index.detect_mut(&key("150321", "0800")));
        assert!(index.detect_mut(&key("150321", "2100")));
        assert!(index.detect_mut(&key("160321", "0800")));
        assert_eq!(index.len(), 3);
    }
}
