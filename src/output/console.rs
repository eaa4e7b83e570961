//! Console output utilities.

use console::style;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print a section heading.
pub fn print_heading(message: &str) {
    println!();
    println!("{}", style(message).magenta().bold());
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════════════════════╗
║     Twitch Downloader                                 ║
║     Download Twitch videos with ease                  ║
╚═══════════════════════════════════════════════════════╝
"#;
    println!("{}", style(banner).magenta());
}

/// Print configuration summary.
pub fn print_config_summary(channels: &[String], collection_ids: &[String], output_dir: &str) {
    println!();
    println!("{}", style("Configuration:").bold());
    if !channels.is_empty() {
        println!("  Channels:    {}", channels.join(", "));
    }
    if !collection_ids.is_empty() {
        println!("  Collections: {}", collection_ids.join(", "));
    }
    println!("  Directory:   {}", output_dir);
    println!();
}
