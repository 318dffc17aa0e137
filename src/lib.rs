//! cold - count the sub-zero readings in a list of daily temperatures
//!
//! The input is a count N followed by N whitespace-separated integers. The
//! answer is how many of those integers are strictly below zero.
//!
//! ```
//! use cold::{Scanner, count_from};
//!
//! let mut scan = Scanner::new("4\n1 -2 3 -4\n".as_bytes());
//! let tally = count_from(&mut scan).unwrap();
//! assert_eq!(tally.negatives, 2);
//! ```

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod counter;
pub mod error;
pub mod output;
pub mod scanner;

pub use counter::{NegativeCount, ReadingList, Tally, count_from, count_negatives, is_cold};
pub use error::InputError;
pub use scanner::Scanner;
