//! Printers with their own line policy layered on [`crate::Printer`].
//!
//! Each variant dereferences to the printer it wraps, so gutters and flags
//! stay reachable, while its own `println` replaces the base one.

mod comment;
mod numbered;
mod raw;
mod status_bar;

pub use comment::CommentPrinter;
pub use numbered::NumberedPrinter;
pub use raw::RawPrinter;
pub use status_bar::StatusBarPrinter;
