//! Display reference numbers for transactions
//!
//! A transaction number is the current time in epoch milliseconds followed
//! by a four-digit random suffix, e.g. `17297152000004821`. It is shown to
//! end users and is not a security token.
//!
//! The timestamp-plus-suffix format alone can collide when two transactions
//! land in the same millisecond, so the generator remembers every number it
//! has issued (plus any reserved by seed data) and draws again on a clash.
//! Numbers are therefore unique within one process; nothing survives a
//! restart.

use chrono::Utc;
use dashmap::DashSet;
use rand::Rng;

/// Exclusive upper bound of the random suffix
const SUFFIX_RANGE: u32 = 10_000;

/// Issues process-unique transaction numbers
#[derive(Debug, Default)]
pub struct TransactionNumbers {
    /// Every number handed out or reserved so far
    issued: DashSet<String>,
}

impl TransactionNumbers {
    /// Create a generator with no issued numbers
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark an externally assigned number as taken
    ///
    /// # Returns
    ///
    /// `true` if the number was not yet taken
    pub fn reserve(&self, number: &str) -> bool {
        self.issued.insert(number.to_string())
    }

    /// Issue a new number
    ///
    /// Redraws the suffix (and re-reads the clock) until the candidate has
    /// not been issued before.
    pub fn next(&self) -> String {
        let mut rng = rand::thread_rng();
        loop {
            let candidate = format!(
                "{}{:04}",
                Utc::now().timestamp_millis(),
                rng.gen_range(0..SUFFIX_RANGE)
            );
            if self.issued.insert(candidate.clone()) {
                return candidate;
            }
        }
    }

    /// Number of issued or reserved numbers
    pub fn issued_count(&self) -> usize {
        self.issued.len()
    }
}
