use std::collections::HashMap;
use std::env;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

pub static ENV_MUTEX: Mutex<()> = Mutex::new(());

pub fn lock_env() -> MutexGuard<'static, ()> {
    ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner())
}

/// Holds the env lock and restores every touched variable, and the working
/// directory, on drop.
#[must_use]
pub struct TestProcess {
    _lock: MutexGuard<'static, ()>,
    original_vars: HashMap<OsString, Option<OsString>>,
    original_dir: Option<PathBuf>,
}

impl TestProcess {
    pub fn new() -> Self {
        Self {
            _lock: lock_env(),
            original_vars: HashMap::new(),
            original_dir: None,
        }
    }

    pub fn set_current_dir(&mut self, dir: &Path) {
        if self.original_dir.is_none() {
            self.original_dir = Some(env::current_dir().expect("current dir"));
        }
        env::set_current_dir(dir).expect("set current dir");
    }

    pub fn set_var(&mut self, key: impl Into<OsString>, value: impl AsRef<OsStr>) {
        let key = key.into();
        self.remember_var(&key);
        unsafe {
            env::set_var(&key, value);
        }
    }

    fn remember_var(&mut self, key: &OsStr) {
        if self.original_vars.contains_key(key) {
            return;
        }
        self.original_vars
            .insert(key.to_os_string(), env::var_os(key));
    }
}

impl Drop for TestProcess {
    fn drop(&mut self) {
        if let Some(dir) = self.original_dir.take() {
            let _ = env::set_current_dir(dir);
        }
        for (key, previous) in self.original_vars.drain() {
            match previous {
                Some(value) => unsafe { env::set_var(&key, value) },
                None => unsafe { env::remove_var(&key) },
            }
        }
    }
}
