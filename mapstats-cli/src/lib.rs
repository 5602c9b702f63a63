// All classification logic is in mapstats-core
// This CLI acts as a thin wrapper around the core library

// CLI-specific modules
pub mod commands;
pub mod logging;

// Re-export core types for convenience
pub use mapstats_core::*;
