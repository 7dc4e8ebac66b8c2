//! # till-cli
//!
//! Interactive terminal front end for till-rs: the menu loop, stdin
//! prompts, tabular rendering, the append-only order-log file, and
//! configuration. All cart/checkout/ledger semantics live in `till-core`;
//! this crate only feeds it input and formats its output.

pub mod input;
pub mod logfile;
pub mod menu;
pub mod render;
pub mod state;
