//! Environment mutation helpers for configuration tests.
//!
//! `std::env::set_var` is process-global, so every test that touches
//! `CODEDROP_*` variables takes [`env_lock`] first and restores state through
//! [`EnvGuard`].

use std::sync::{Mutex, MutexGuard, OnceLock};

/// Process-wide mutex serializing environment mutation.
pub fn env_lock() -> &'static Mutex<()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

/// Acquire [`env_lock`], recovering from a poisoned lock left by a failed test.
pub fn lock_env() -> MutexGuard<'static, ()> {
    env_lock()
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[allow(unused_unsafe)]
fn write_var(key: &str, value: Option<&str>) {
    // SAFETY: callers hold `env_lock` while mutating.
    unsafe {
        match value {
            Some(value) => std::env::set_var(key, value),
            None => std::env::remove_var(key),
        }
    }
}

/// Overrides one environment variable and puts the old value back on drop.
#[derive(Debug)]
pub struct EnvGuard {
    key: String,
    previous: Option<String>,
}

impl EnvGuard {
    fn apply(key: &str, value: Option<&str>) -> Self {
        let previous = std::env::var(key).ok();
        write_var(key, value);
        Self {
            key: key.to_owned(),
            previous,
        }
    }

    /// Set `key=value` for the lifetime of the guard.
    pub fn set(key: &str, value: &str) -> Self {
        Self::apply(key, Some(value))
    }

    /// Unset `key` for the lifetime of the guard.
    pub fn remove(key: &str) -> Self {
        Self::apply(key, None)
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        write_var(&self.key, self.previous.as_deref());
    }
}

#[cfg(test)]
mod tests {
    use super::{lock_env, EnvGuard};

    #[test]
    fn nested_guards_unwind_in_order() {
        let _lock = lock_env();
        let key = "CODEDROP_TEST_ENV_GUARD_NESTED";
        let _outer = EnvGuard::set(key, "outer");
        {
            let _inner = EnvGuard::set(key, "inner");
            assert_eq!(std::env::var(key).as_deref(), Ok("inner"));
        }
        assert_eq!(std::env::var(key).as_deref(), Ok("outer"));
    }

    #[test]
    fn removal_guard_leaves_unset_variable_unset() {
        let _lock = lock_env();
        let key = "CODEDROP_TEST_ENV_GUARD_REMOVED";
        drop(EnvGuard::remove(key));
        assert!(std::env::var(key).is_err());
    }
}
