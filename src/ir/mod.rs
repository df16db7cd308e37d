//! # Intermediate Representation (IR)
//!
//! This module provides the IR layer for PPD documents. The IR is a
//! "bytecode" representation that sits between the section emitters and
//! the document text.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌──────────┐
//! │ Capability  │ ──► │  Emitters   │ ──► │     IR      │ ──► │ Codegen  │
//! │   source    │     │  (ppd::*)   │     │  (Vec<Op>)  │     │ (bytes)  │
//! └─────────────┘     └─────────────┘     └─────────────┘     └──────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use genppd::ir::{Choice, Op, Program, Value};
//!
//! let mut program = Program::new();
//! program.push(Op::OpenUi { keyword: "Duplex".into(), label: "2-Sided Printing".into() });
//! program.push(Op::default("Duplex", "None"));
//! program.push(Op::Choice(Choice::new(
//!     "Duplex",
//!     "None",
//!     "Off",
//!     Value::Quoted("<</Duplex false>>setpagedevice".into()),
//! )));
//! program.push(Op::CloseUi("Duplex".into()));
//!
//! let text = program.to_text();
//! assert!(text.starts_with("*OpenUI *Duplex/2-Sided Printing: PickOne\n"));
//! ```

mod codegen;
mod ops;

// Re-export the ops types (codegen adds methods to Program via impl)
pub use ops::*;
