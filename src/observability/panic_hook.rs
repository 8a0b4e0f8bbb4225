//! Crash report printed when the binary panics.
//!
//! The calculators are total over validated input, so a panic is always a
//! bug. The report names the command that was running and where it failed
//! so it can be attached to an issue as-is.

use std::panic::PanicHookInfo;
use std::sync::OnceLock;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const RULE: &str = "--------------------------------------------------------------------------------";

static CURRENT_COMMAND: OnceLock<String> = OnceLock::new();

/// Record the subcommand being run, for the crash report.
pub fn set_command(command: impl Into<String>) {
    let _ = CURRENT_COMMAND.set(command.into());
}

/// Install the crash report hook. Call once, early in `main`.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!();
        eprintln!("{}", crash_report(info));
    }));
}

fn crash_report(info: &PanicHookInfo<'_>) -> String {
    let location = info
        .location()
        .map(|location| format!("{}:{}:{}", location.file(), location.line(), location.column()))
        .unwrap_or_else(|| "unknown".to_string());

    let mut lines = vec![
        RULE.to_string(),
        "nac-tco crash report".to_string(),
        RULE.to_string(),
        format!("Version:  {VERSION}"),
        format!("Platform: {}", std::env::consts::OS),
        format!("Time:     {}", chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")),
        format!(
            "Command:  {}",
            CURRENT_COMMAND.get().map_or("(not set)", String::as_str)
        ),
        format!("Panic:    {}", panic_message(info)),
        format!("Location: {location}"),
        RULE.to_string(),
    ];

    if std::env::var("RUST_BACKTRACE").is_ok() {
        lines.push(std::backtrace::Backtrace::capture().to_string());
    } else {
        lines.push("Run with RUST_BACKTRACE=1 for a stack trace".to_string());
    }
    lines.join("\n")
}

fn panic_message(info: &PanicHookInfo<'_>) -> String {
    if let Some(s) = info.payload().downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}
