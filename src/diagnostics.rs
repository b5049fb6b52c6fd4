//! Tagged log lines for the bootstrapper.
//! Lines look like `[scope] details` on both the browser console and stderr.

fn format_line(scope: &str, details: &str) -> String {
    if details.trim().is_empty() {
        format!("[{scope}]")
    } else {
        format!("[{scope}] {details}")
    }
}

#[inline]
pub fn log_event(scope: &str, details: &str) {
    let line = format_line(scope, details);
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&line.into());
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("{line}");
}

#[inline]
pub fn log_failure(scope: &str, details: &str) {
    let line = format_line(scope, details);
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&line.into());
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("{line}");
}

#[cfg(test)]
mod tests {
    use super::format_line;

    #[test]
    fn scope_only_when_details_blank() {
        assert_eq!(format_line("player", "  "), "[player]");
        assert_eq!(format_line("player", "ready"), "[player] ready");
    }
}
