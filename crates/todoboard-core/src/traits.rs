use crate::TodoResult;

/// Durable string key/value medium (browser-style local storage).
///
/// Every call is synchronous. Implementations may refuse writes when the
/// medium is full or disabled; callers treat such failures as lost
/// persistence, never as fatal.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore {
    /// Read the value stored under `key`, `None` when absent.
    fn get(&self, key: &str) -> TodoResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> TodoResult<()>;

    /// Remove `key`. Removing an absent key succeeds.
    fn remove(&mut self, key: &str) -> TodoResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> TodoResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> TodoResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> TodoResult<()> {
        (**self).remove(key)
    }
}
