mod formatter;

pub use formatter::{format_criteria_list, format_report, render_json, should_use_colors};
