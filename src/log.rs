//! Terminal logging with colored module prefixes
//!
//! ```ignore
//! log!("build"; "wrote {} pages", count);
//! log!("warn"; "tag {:?} does not follow conventions", tag);
//! ```

use colored::{ColoredString, Colorize};
use std::io::{Write, stderr, stdout};

/// Log a message with a colored module prefix.
///
/// Messages from the `warn` and `error` modules go to stderr.
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::log::log($module, &format!($($arg)*))
    }};
}

/// Writes one prefixed line.
pub fn log(module: &str, message: &str) {
    let module_lower = module.to_ascii_lowercase();
    let prefix = colorize_prefix(module, &module_lower);

    if matches!(module_lower.as_str(), "warn" | "error") {
        let mut err = stderr().lock();
        writeln!(err, "{prefix} {message}").ok();
    } else {
        let mut out = stdout().lock();
        writeln!(out, "{prefix} {message}").ok();
        out.flush().ok();
    }
}

fn colorize_prefix(module: &str, module_lower: &str) -> ColoredString {
    let prefix = format!("[{module}]");
    match module_lower {
        "build" => prefix.bright_green().bold(),
        "open" => prefix.bright_blue().bold(),
        "warn" => prefix.bright_yellow().bold(),
        "error" => prefix.bright_red().bold(),
        _ => prefix.bold(),
    }
}
