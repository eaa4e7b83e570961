//! User-facing console output module.

pub mod console;

pub use console::{
    print_banner, print_config_summary, print_error, print_heading, print_info, print_warning,
};
