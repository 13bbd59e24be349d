//! Data collection from `/proc` pseudo-files and external utilities.
//!
//! Each collector performs one blocking read per invocation and hands back
//! plain numbers; nothing here is cached or shared.

pub mod disks;
pub mod memory;
pub mod processes;
