//! Snowflake ID Generator
//!
//! Every space, event, review and holiday row gets its ID from here before it
//! is persisted. IDs are time-ordered and unique per machine:
//!
//! ```text
//! 63        22          12           0
//! +----------+-----------+-----------+
//! | ms since |  machine  |  sequence |
//! |  epoch   |  10 bits  |  12 bits  |
//! +----------+-----------+-----------+
//! ```

use std::time::{SystemTime, UNIX_EPOCH};

use parking_lot::Mutex;

/// 2024-01-01T00:00:00Z in milliseconds
pub const EPOCH: u64 = 1_704_067_200_000;

/// Largest machine ID that fits the machine bits.
pub const MAX_MACHINE_ID: u16 = (1 << MACHINE_BITS) - 1;

const MACHINE_BITS: u64 = 10;
const SEQUENCE_BITS: u64 = 12;
const MAX_SEQUENCE: u64 = (1 << SEQUENCE_BITS) - 1;

/// Source of numeric identifiers for new rows.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> i64;
}

struct State {
    last_timestamp: u64,
    sequence: u64,
}

/// Snowflake ID generator
pub struct SnowflakeGenerator {
    machine_id: u64,
    state: Mutex<State>,
}

impl SnowflakeGenerator {
    /// Create a new snowflake generator. `machine_id` is masked to 10 bits.
    pub fn new(machine_id: u16) -> Self {
        Self {
            machine_id: u64::from(machine_id & MAX_MACHINE_ID),
            state: Mutex::new(State {
                last_timestamp: 0,
                sequence: 0,
            }),
        }
    }

    /// Generate a new snowflake ID
    pub fn generate(&self) -> i64 {
        let mut state = self.state.lock();
        let mut timestamp = current_timestamp().max(state.last_timestamp);

        if timestamp == state.last_timestamp {
            state.sequence = (state.sequence + 1) & MAX_SEQUENCE;
            if state.sequence == 0 {
                // sequence exhausted for this millisecond
                while timestamp <= state.last_timestamp {
                    std::hint::spin_loop();
                    timestamp = current_timestamp();
                }
            }
        } else {
            state.sequence = 0;
        }
        state.last_timestamp = timestamp;

        let id = ((timestamp - EPOCH) << (MACHINE_BITS + SEQUENCE_BITS))
            | (self.machine_id << SEQUENCE_BITS)
            | state.sequence;

        id as i64
    }
}

impl IdGenerator for SnowflakeGenerator {
    fn next_id(&self) -> i64 {
        self.generate()
    }
}

/// Get current timestamp in milliseconds
fn current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(EPOCH)
        .max(EPOCH)
}
