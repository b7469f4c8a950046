//! Common test infrastructure
//!
//! Tests should only import from this module, not from internal submodules.
//!
//! # Example
//!
//! ```no_run
//! mod common;
//! use common::{new_session, ScriptedPrompter, TEST_USER};
//!
//! #[test]
//! fn test_create() {
//!     let mut session = new_session();
//!     let mut prompter = ScriptedPrompter::new(&["hello", "user"]);
//!     // ...
//! }
//! ```

#![allow(dead_code, unused_imports)]

mod constants;
mod fixtures;

pub use constants::*;
pub use fixtures::{new_session, run, run_with_default, ScriptedPrompter};
