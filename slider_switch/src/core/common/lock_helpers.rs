// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Locks `mutex`, recovering the guard if a previous holder panicked. Only use this for
/// plain data where every write leaves the value in a valid state.
pub fn lock_or_recover<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_lock_or_recover_after_poison() {
        let shared = Arc::new(Mutex::new(1));
        let shared_clone = shared.clone();
        let _ = std::thread::spawn(move || {
            let _guard = shared_clone.lock().unwrap();
            panic!("poison the lock");
        })
        .join();
        assert!(shared.is_poisoned());
        assert_eq2!(*lock_or_recover(&shared), 1);
    }
}
