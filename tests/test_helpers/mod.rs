//! Environment guards for tests that read configuration from the process
//! environment.

use std::env;
use std::ffi::OsString;
use std::sync::{Mutex, MutexGuard, OnceLock};

static ENV_MUTEX: OnceLock<Mutex<()>> = OnceLock::new();

/// Service settings read from the environment, cleared before each test.
pub const SERVICE_ENV_VARS: [&str; 4] = ["DATABASE_URL", "HOST", "PORT", "DATABASE_POOL_SIZE"];

/// Guard that applies scoped environment variable updates and restores the
/// previous values on drop.
pub struct EnvVarGuard {
    previous: Vec<(OsString, Option<OsString>)>,
    _lock: MutexGuard<'static, ()>,
}

impl EnvVarGuard {
    /// Clears every service variable, then applies `changes`.
    pub fn service_env(changes: &[(&str, &str)]) -> Self {
        let cleared = SERVICE_ENV_VARS.iter().map(|key| (*key, None));
        let updates = changes.iter().map(|(key, value)| (*key, Some(*value)));
        Self::set_many(cleared.chain(updates))
    }

    /// Sets (`Some`) or removes (`None`) each variable for the guard lifetime.
    pub fn set_many<'a>(changes: impl IntoIterator<Item = (&'a str, Option<&'a str>)>) -> Self {
        let lock = env_lock();
        let mut previous = Vec::new();

        for (key, value) in changes {
            previous.push((OsString::from(key), env::var_os(key)));
            unsafe {
                // SAFETY: the global mutex serializes environment mutations in tests.
                match value {
                    Some(new_value) => env::set_var(key, new_value),
                    None => env::remove_var(key),
                }
            }
        }

        Self {
            previous,
            _lock: lock,
        }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        // Restore in reverse so repeated keys end at their original value.
        for (key, value) in self.previous.drain(..).rev() {
            unsafe {
                // SAFETY: the global mutex serializes environment mutations in tests.
                match value {
                    Some(previous) => env::set_var(&key, &previous),
                    None => env::remove_var(&key),
                }
            }
        }
    }
}

fn env_lock() -> MutexGuard<'static, ()> {
    ENV_MUTEX
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}
