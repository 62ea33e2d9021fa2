//! Serialize-and-print passthrough for debugging.
//!
//! [`Dump`] pretty-prints any [`Serialize`] value to standard output as JSON
//! and hands the value back unchanged, so it can be dropped into the middle
//! of an expression chain:
//!
//! ```
//! use serde_dump::Dump;
//!
//! # fn main() -> Result<(), serde_dump::DumpError> {
//! let total: i32 = vec![1, 2, 3].dump_labeled("input")?.iter().sum();
//! # Ok(())
//! # }
//! ```

use serde::Serialize;
use std::io::{self, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DumpError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Pretty-print a value to standard output and pass it through.
pub trait Dump: Serialize + Sized {
    /// Print the value as indented JSON, followed by a newline.
    fn dump(self) -> Result<Self, DumpError> {
        self.dump_labeled("")
    }

    /// Print `label: ` on its own line before the value. An empty label
    /// prints no label line, same as [`Dump::dump`].
    fn dump_labeled(self, label: &str) -> Result<Self, DumpError> {
        let mut out = io::stdout().lock();
        dump_to(self, label, &mut out)
    }
}

impl<T: Serialize> Dump for T {}

/// Write the dump of `value` to an arbitrary writer instead of stdout.
///
/// The value is serialized in full before anything is written, so a value
/// the serializer cannot represent (a non-string map key, a `Serialize` impl
/// that reports an error) leaves `writer` untouched and returns
/// [`DumpError::Json`]. An impl that recurses through a cycle without
/// guarding its own depth is outside this contract.
pub fn dump_to<T, W>(value: T, label: &str, writer: &mut W) -> Result<T, DumpError>
where
    T: Serialize,
    W: Write,
{
    let pretty = serde_json::to_string_pretty(&value)?;

    if !label.is_empty() {
        writeln!(writer, "{label}: ")?;
    }
    writeln!(writer, "{pretty}")?;

    Ok(value)
}
