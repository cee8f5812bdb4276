//! Lock acquisition helpers with consistent poison handling
//!
//! A panic while holding a lock poisons it for every later caller. These
//! helpers convert that condition into a module-level error through a
//! caller-supplied constructor, so lock acquisition composes with `?`
//! instead of unwrapping.

use std::sync::{Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Acquire a mutex, mapping poisoning to an application error.
///
/// # Arguments
/// * `mutex` - The mutex to lock
/// * `error_constructor` - Function to create the appropriate error type
pub fn lock_mutex<'a, T, E>(
    mutex: &'a Mutex<T>,
    error_constructor: impl FnOnce(String) -> E,
) -> Result<MutexGuard<'a, T>, E> {
    mutex.lock().map_err(|poison_err| {
        error_constructor(format!(
            "Internal synchronisation error (mutex poisoned): {:?}",
            poison_err
        ))
    })
}

/// Acquire an RwLock for reading, mapping poisoning to an application error.
pub fn read_lock<'a, T, E>(
    lock: &'a RwLock<T>,
    error_constructor: impl FnOnce(String) -> E,
) -> Result<RwLockReadGuard<'a, T>, E> {
    lock.read().map_err(|poison_err| {
        error_constructor(format!(
            "Internal synchronisation error (RwLock read poisoned): {:?}",
            poison_err
        ))
    })
}

/// Acquire an RwLock for writing, mapping poisoning to an application error.
pub fn write_lock<'a, T, E>(
    lock: &'a RwLock<T>,
    error_constructor: impl FnOnce(String) -> E,
) -> Result<RwLockWriteGuard<'a, T>, E> {
    lock.write().map_err(|poison_err| {
        error_constructor(format!(
            "Internal synchronisation error (RwLock write poisoned): {:?}",
            poison_err
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[derive(Debug, PartialEq)]
    struct TestError {
        message: String,
    }

    #[test]
    fn test_lock_mutex_success() {
        let mutex = Mutex::new(42);
        let guard = lock_mutex(&mutex, |msg| TestError { message: msg });

        assert!(guard.is_ok());
        assert_eq!(*guard.unwrap(), 42);
    }

    #[test]
    fn test_lock_mutex_poisoned() {
        let mutex = Arc::new(Mutex::new(42));
        let mutex_clone = Arc::clone(&mutex);

        // Poison the mutex by panicking while holding the lock
        let _ = thread::spawn(move || {
            let _guard = mutex_clone.lock().unwrap();
            panic!("Intentional panic to poison mutex");
        })
        .join();

        let result = lock_mutex(&mutex, |msg| TestError { message: msg });

        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.message.contains("mutex poisoned"));
    }

    #[test]
    fn test_read_lock_success() {
        let lock = RwLock::new("shared");

        let guard = read_lock(&lock, |msg| TestError { message: msg });

        assert!(guard.is_ok());
        assert_eq!(*guard.unwrap(), "shared");
    }

    #[test]
    fn test_write_lock_success() {
        let lock = RwLock::new(1);

        let guard = write_lock(&lock, |msg| TestError { message: msg });

        assert!(guard.is_ok());
        *guard.unwrap() = 2;
        assert_eq!(*lock.read().unwrap(), 2);
    }
}
