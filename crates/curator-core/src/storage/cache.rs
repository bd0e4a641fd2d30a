use crate::identity::AccountId;
use std::collections::BTreeMap;

/// One serialized JSON document per account, overwritten on every write.
///
/// Not an audit log: only the latest call survives. Entries are never
/// evicted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LastCallCache {
    slots: BTreeMap<AccountId, String>,
}

impl LastCallCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_slots(slots: BTreeMap<AccountId, String>) -> Self {
        Self { slots }
    }

    pub(crate) fn slots(&self) -> &BTreeMap<AccountId, String> {
        &self.slots
    }

    pub fn put(&mut self, account: AccountId, document: String) {
        self.slots.insert(account, document);
    }

    pub fn get(&self, account: &AccountId) -> Option<&str> {
        self.slots.get(account).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
