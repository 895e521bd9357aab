//! Console output and progress reporting.

mod console;
mod progress;

pub use console::{print_banner, print_error, print_info, print_run_summary, print_warning};
pub use progress::create_item_bar;
