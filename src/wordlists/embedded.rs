//! Embedded word bank
//!
//! Word bank compiled into the binary at build time.

// Include generated word bank from build script
include!(concat!(env!("OUT_DIR"), "/words.rs"));
