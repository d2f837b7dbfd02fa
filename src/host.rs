//! Capabilities the plugin borrows from its host.
//!
//! The counter never talks to the host directly. It is handed a
//! [`ConfigSource`] and a [`VarStore`], so the same code runs against the
//! Extism runtime inside a wasm module and against in-memory doubles in tests.

use crate::error::Result;

/// Read-only configuration supplied by the host.
pub trait ConfigSource {
    fn get(&self, key: &str) -> Result<Option<String>>;
}

/// Named byte variables that outlive a single invocation.
///
/// The host owns the persistence scope. Nothing here is atomic: a get
/// followed by a set is a plain read-modify-write.
pub trait VarStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;
    fn set(&mut self, key: &str, value: Vec<u8>) -> Result<()>;
}

impl<T: ConfigSource + ?Sized> ConfigSource for &T {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }
}

impl<T: VarStore + ?Sized> VarStore for &mut T {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: Vec<u8>) -> Result<()> {
        (**self).set(key, value)
    }
}

#[cfg(target_arch = "wasm32")]
pub use self::extism::{HostConfig, HostVars};

#[cfg(target_arch = "wasm32")]
mod extism {
    use super::{ConfigSource, VarStore};
    use crate::error::{Error, Result};

    /// Configuration passed to the plugin manifest by the host.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct HostConfig;

    impl ConfigSource for HostConfig {
        fn get(&self, key: &str) -> Result<Option<String>> {
            extism_pdk::config::get(key).map_err(|e| Error::Config {
                key: key.to_string(),
                message: e.to_string(),
            })
        }
    }

    /// Plugin variables kept by the host between calls.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct HostVars;

    impl VarStore for HostVars {
        fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
            extism_pdk::var::get::<Vec<u8>>(key).map_err(|e| Error::Store {
                key: key.to_string(),
                message: e.to_string(),
            })
        }

        fn set(&mut self, key: &str, value: Vec<u8>) -> Result<()> {
            extism_pdk::var::set(key, value).map_err(|e| Error::Store {
                key: key.to_string(),
                message: e.to_string(),
            })
        }
    }
}
