//! The running total kept in host variables.

use tracing::{trace, warn};

use crate::error::Result;
use crate::host::VarStore;

/// Variable key of the cumulative count.
pub const TOTAL_KEY: &str = "total";

/// Reads the stored total.
///
/// Never fails: an unset variable, a failed read and a value narrower than
/// 4 bytes all read as 0. Wider values are truncated to their first 4 bytes.
pub fn get_total(store: &impl VarStore) -> u32 {
    let bytes = match store.get(TOTAL_KEY) {
        Ok(Some(bytes)) => bytes,
        Ok(None) => {
            trace!("no stored total");
            return 0;
        }
        Err(e) => {
            warn!(error = %e, "reading total failed, starting from 0");
            return 0;
        }
    };
    let Some(raw) = bytes.first_chunk::<4>() else {
        warn!(len = bytes.len(), "stored total is too short, starting from 0");
        return 0;
    };
    let total = u32::from_le_bytes(*raw);
    trace!(total, "loaded total");
    total
}

/// Overwrites the stored total.
pub fn store_total(store: &mut impl VarStore, total: u32) -> Result<()> {
    trace!(total, "storing total");
    store.set(TOTAL_KEY, total.to_le_bytes().to_vec())
}
