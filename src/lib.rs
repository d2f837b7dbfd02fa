//! A WebAssembly plugin that counts vowels.
//!
//! Each call reads its input as text, counts the characters found in the
//! active vowel alphabet, adds them to a running total kept in host
//! variables, and answers with a JSON report:
//!
//! ```text
//! {"Count":2,"Total":9,"Vowels":"aeiouAEIOU"}
//! ```
//!
//! The alphabet comes from the host config key `vowels`, falling back to
//! [`DEFAULT_VOWELS`]. The total lives under the variable `total`.
//!
//! Everything except the `count_vowels` export is host independent and can
//! be driven with [`MemoryConfig`] and [`MemoryVars`].
//!
//! Diagnostics are emitted as `tracing` events; no subscriber is installed
//! here, so an embedder that wants them must set one up.

pub mod counter;
pub mod error;
pub mod host;
pub mod memory;
pub mod report;
pub mod total;
pub mod vowels;

pub use counter::{count_vowels, CountVowels};
pub use error::{Error, Result};
pub use host::{ConfigSource, VarStore};
pub use memory::{MemoryConfig, MemoryVars};
pub use report::Report;
pub use total::{get_total, store_total, TOTAL_KEY};
pub use vowels::{get_vowels, DEFAULT_VOWELS, VOWELS_KEY};

/// A unit of work invoked by the host with raw input bytes.
pub trait Runnable {
    fn run(&mut self, input: Vec<u8>) -> Result<Vec<u8>>;
}

#[cfg(target_arch = "wasm32")]
mod export {
    use extism_pdk::{plugin_fn, FnResult};

    use crate::host::{HostConfig, HostVars};
    use crate::{CountVowels, Runnable};

    #[plugin_fn]
    pub fn count_vowels(input: Vec<u8>) -> FnResult<Vec<u8>> {
        let mut runnable = CountVowels::new(HostConfig, HostVars);
        let output = runnable.run(input)?;
        extism_pdk::debug!("count_vowels wrote {} bytes", output.len());
        Ok(output)
    }
}
