/// Macros
#[macro_use]
pub mod macros;

/// Command-line options
pub mod cli;

/// Subprocess utilities
pub mod cmd;

/// Configuration parser
pub mod config;

/// Configuration keys and environment variable names
pub mod constants;

/// Colored output
pub mod display;

/// Archive download and unpack
pub mod download;

/// Error types
pub mod errors;

/// Installed-package listing
pub mod info;

/// Configure, build and modulefile steps
pub mod install;

/// Model objects
pub mod model;

/// Modulefile text generation, prerequisite module testing
pub mod modules;

/// Name and path resolution
pub mod names;
