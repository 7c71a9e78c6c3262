//! Command module - Strategy pattern for CLI commands.
//!
//! Each command is a separate module implementing the `CommandExecutor` trait.
//! Image decoding/encoding lives in [`image_io`]; the library only ever sees
//! raw RGBA buffers.

mod analyze;
mod capacity;
mod embed;
mod extract;
mod image_io;

pub use analyze::AnalyzeCommand;
pub use capacity::CapacityCommand;
pub use embed::EmbedCommand;
pub use extract::ExtractCommand;

use anyhow::Result;

/// Trait for command execution - Strategy pattern.
///
/// Each command struct holds its parsed arguments and implements
/// this trait to define its execution logic.
pub trait CommandExecutor {
    /// Executes the command with its parsed arguments.
    fn execute(&self) -> Result<()>;
}
