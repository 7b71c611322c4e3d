//! Per-user mutation serialization
//!
//! Every game operation is a read-modify-write of one user's record, and
//! the store has no compare-and-swap. Holding this lock across the whole
//! operation turns concurrent same-user requests into a sequence instead
//! of a lost update. Different users never contend.

use starstation_core::UserId;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// Lock table keyed by user
#[derive(Debug, Default)]
pub struct UserLocks {
    inner: Mutex<HashMap<u64, Arc<Mutex<()>>>>,
}

impl UserLocks {
    /// Create an empty lock table
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the lock for a user, creating it on first use
    ///
    /// Locks are never reclaimed; the table grows by one small entry per
    /// user ever seen, which is bounded by the user table itself.
    pub fn for_user(&self, user_id: UserId) -> Arc<Mutex<()>> {
        let mut table = lock_unpoisoned(&self.inner);
        table
            .entry(user_id.raw())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}

/// Lock a mutex, continuing through poisoning
///
/// The guarded data is either an index of other locks or a unit, so a
/// panicking holder cannot leave it inconsistent.
pub fn lock_unpoisoned<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_user_gets_same_lock() {
        let locks = UserLocks::new();
        let a = locks.for_user(UserId::new(1));
        let b = locks.for_user(UserId::new(1));
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_different_users_do_not_share() {
        let locks = UserLocks::new();
        let a = locks.for_user(UserId::new(1));
        let b = locks.for_user(UserId::new(2));
        assert!(!Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_serializes_across_threads() {
        let locks = Arc::new(UserLocks::new());
        let counter = Arc::new(Mutex::new(0u32));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let locks = locks.clone();
                let counter = counter.clone();
                std::thread::spawn(move || {
                    let user_lock = locks.for_user(UserId::new(1));
                    let _guard = lock_unpoisoned(&user_lock);
                    let mut count = lock_unpoisoned(&counter);
                    *count += 1;
                })
            })
            .collect();

        for handle in handles {
            let _ = handle.join();
        }
        assert_eq!(*lock_unpoisoned(&counter), 8);
    }
}
