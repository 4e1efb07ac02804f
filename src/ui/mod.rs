//! User interface module - terminal output for the command line.

pub mod formatter;

pub use formatter::{
    display_error, display_success, display_workflow_result, format_error,
    format_workflow_result,
};
