//! Command-line front end for hydrosa_core
//!
//! Reads a JSON request on stdin and writes the JSON result on stdout:
//! - `sobol` - first-order and total-order Sobol indices
//! - `pack` / `unpack` - Fortran-style masked packing
//!
//! Logs go to stderr so stdout stays machine-readable.

pub mod cli;
pub mod logging;
pub mod request;

pub use cli::{Cli, Command, run};
pub use logging::init_logging;
pub use request::{PackRequest, SobolRequest, UnpackRequest};
