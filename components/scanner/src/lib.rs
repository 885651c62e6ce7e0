//! Fixed-width string scanning.
//!
//! This crate provides the cursor used by the date/time parser to pull
//! integers, literal strings and named values out of user input.
//!
//! # Example
//!
//! ```
//! use scanner::Scanner;
//!
//! let mut scanner = Scanner::new("08/May");
//! assert_eq!(scanner.scan_int(2).unwrap(), 8);
//! scanner.skip_string("/").unwrap();
//! assert_eq!(scanner.scan_array(&["Apr", "May", "Jun"]).unwrap(), 1);
//! assert!(scanner.is_at_end());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod scanner;

pub use error::{ScanError, ScanResult};
pub use scanner::Scanner;
