//! # Rolodex Architecture
//!
//! Rolodex is a **UI-agnostic contact-directory library** with a small REPL
//! binary on top. The library never touches stdout or stderr; the binary is
//! the only place that reads lines and prints results.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Shell loop (main.rs, args.rs)                              │
//! │  - Reads one line per command, prints the returned result   │
//! │  - The ONLY place that knows about stdin/stdout/colors      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session facade (session.rs) + dispatch (dispatch.rs)       │
//! │  - Resolves a raw line to a command keyword and args        │
//! │  - Translates every domain failure to its fixed message     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command layer (commands/*.rs)                              │
//! │  - One module per command, pure logic over the directory    │
//! │  - Returns `CmdResult`, raises only `DirectoryError`        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model + directory (model.rs, directory.rs)                 │
//! │  - Validated value types: `Name`, `Phone`, `Birthday`       │
//! │  - `Record` mutations validate before they touch anything   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key invariant
//!
//! Every `Phone` inside every `Record` is exactly ten ASCII digits at all
//! times: construction is the only way in, and every mutation validates
//! before it mutates, so a failed command changes nothing.
//!
//! ## Testing Strategy
//!
//! Command modules carry their own unit tests against an in-memory
//! [`directory::Directory`]; [`session::Session`] tests cover dispatch and
//! the failure-to-message table; `tests/repl_integration.rs` drives the
//! binary over piped stdin.
//!
//! ## Module Overview
//!
//! - [`session`]: The facade—one directory plus `execute(line)`
//! - [`dispatch`]: Keyword table and line parsing
//! - [`commands`]: One module per command
//! - [`directory`]: The name-keyed record collection
//! - [`model`]: `Name`, `Phone`, `Birthday`, `Record`
//! - [`config`]: Shell presentation settings (prompt, color)
//! - [`error`]: `DirectoryError` and the user-facing message table

pub mod commands;
pub mod config;
pub mod directory;
pub mod dispatch;
pub mod error;
pub mod model;
pub mod session;
