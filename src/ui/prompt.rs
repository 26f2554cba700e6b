use super::messages::warning;
use std::io::{self, BufRead, Write};

/// Ask a yes/no confirmation on stdin. Anything but `y`/`yes` is a refusal,
/// including a closed stdin.
pub fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    match io::stdin().lock().read_line(&mut s) {
        Ok(n) if n > 0 => matches!(s.trim().to_lowercase().as_str(), "y" | "yes"),
        _ => false,
    }
}

/// Skip the prompt when `force` is set.
pub fn confirmed(force: bool, prompt: &str) -> bool {
    force || ask_confirmation(prompt)
}
