//! The operator command line of the rollup bridge.

mod args;
pub use args::{Cli, Command, DatabaseArgs, L1Args, RecordSequenceArgs, VerifyCalldataArgs};

mod commands;
pub use commands::{record_sequence, verify_calldata};
