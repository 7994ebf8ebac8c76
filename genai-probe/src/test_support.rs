use std::sync::{Mutex, MutexGuard, PoisonError};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Restores the saved variables on drop, so a panicking closure leaves no residue.
struct EnvRestore {
    backup: Vec<(String, Option<String>)>,
    _guard: MutexGuard<'static, ()>,
}

impl Drop for EnvRestore {
    fn drop(&mut self) {
        for (key, value) in self.backup.drain(..) {
            match value {
                Some(value) => std::env::set_var(&key, value),
                None => std::env::remove_var(&key),
            }
        }
    }
}

pub fn with_env(vars: &[(&str, Option<&str>)], f: impl FnOnce()) {
    let guard = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    let _restore = EnvRestore {
        backup: vars
            .iter()
            .map(|(key, _)| ((*key).to_string(), std::env::var(key).ok()))
            .collect(),
        _guard: guard,
    };
    for (key, value) in vars {
        match value {
            Some(value) => std::env::set_var(key, value),
            None => std::env::remove_var(key),
        }
    }
    f();
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "GENAI_PROBE_TEST_SUPPORT_RESTORE";

    #[test]
    fn env_is_restored_after_panic() {
        let result = std::panic::catch_unwind(|| {
            with_env(&[(KEY, Some("leaked"))], || panic!("boom"));
        });
        assert!(result.is_err());

        with_env(&[], || assert!(std::env::var(KEY).is_err()));
    }
}
