//! # basics
//! A tour of the everyday building blocks: an enum, a plain record,
//! a type with a method, a handful of integer expressions and two lines
//! of console output.
//!
//! The whole program lives in [`program::run`], which writes into any
//! [`std::io::Write`]. The `basics` binary calls it on stdout.
//!
//! ```
//! let mut out = Vec::new();
//! let result = basics::program::run(&mut out).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "The number is: 10\nInside myClass\n");
//! assert_eq!(result.derived.bitwise, 10);
//! ```
pub mod program;
pub mod types;
pub mod values;
