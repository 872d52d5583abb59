//! Console Module
//!
//! The interactive six-option menu that drives the record store.
//!
//! ## Submodules
//! - **`menu`**: Menu text, fixed user-facing messages, and selection parsing.
//! - **`session`**: The loop itself. Generic over async input/output so it runs on
//!   stdin/stdout in the binary and on in-memory buffers in tests.

pub mod menu;
pub mod session;
