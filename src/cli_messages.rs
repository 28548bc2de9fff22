//! Tagged console messages for command-line output outside the TUI,
//! like headless validation failures.

const TAG_INFO: &str = "\x1b[1;33m[INFO]\x1b[0m";
const TAG_ERROR: &str = "\x1b[1;31m[ERROR]\x1b[0m";

pub fn print_info(title: &str, details: &str) {
    if details.is_empty() {
        println!("{} {}", TAG_INFO, title);
    } else {
        println!("{} {}\t {}", TAG_INFO, title, details);
    }
}

pub fn print_error(title: &str, details: Option<&str>) {
    println!("{} {}", TAG_ERROR, title);
    if let Some(details) = details {
        println!("{} Details: {}", TAG_ERROR, details);
    }
}

#[macro_export]
macro_rules! print_cmd_info {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_info($title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_error {
    ($title:expr) => {
        $crate::cli_messages::print_error($title, None)
    };
    ($title:expr, $details:expr) => {
        $crate::cli_messages::print_error($title, Some($details))
    };
}
