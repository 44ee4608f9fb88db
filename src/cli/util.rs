use anyhow::Result;
use std::io::{self, IsTerminal, Read, Write};

pub(crate) fn stdin_is_terminal() -> bool {
    io::stdin().is_terminal()
}

pub(crate) fn read_piped_stdin() -> Result<Option<String>> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }

    let mut buffer = String::new();
    stdin.lock().read_to_string(&mut buffer)?;

    if buffer.trim().is_empty() {
        Ok(None)
    } else {
        Ok(Some(buffer))
    }
}

/// Asks until a non-empty answer is given.
pub(crate) fn prompt_required(prompt: &str) -> Result<String> {
    loop {
        print!("{prompt}: ");
        io::stdout().flush()?;

        let mut input = String::new();
        let read = io::stdin().read_line(&mut input)?;
        if read == 0 {
            // EOF: hand back the empty answer and let validation report it.
            return Ok(String::new());
        }

        let trimmed = input.trim();
        if trimmed.is_empty() {
            println!("❌ This field is required.");
            continue;
        }
        return Ok(trimmed.to_string());
    }
}

pub(crate) fn prompt_timeout(default: u64) -> Result<u64> {
    loop {
        print!("⏱️  Enter timeout in seconds (default: {default}): ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let timeout_str = input.trim();

        if timeout_str.is_empty() {
            return Ok(default);
        }

        match timeout_str.parse::<u64>() {
            Ok(timeout) if timeout > 0 => return Ok(timeout),
            Ok(_) => println!("❌ Timeout must be a positive number."),
            Err(_) => println!("❌ Please enter a valid number."),
        }
    }
}

pub(crate) fn prompt_string_with_default(prompt: &str, default: &str) -> Result<String> {
    print!("{prompt} (default: {default}): ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let trimmed = input.trim();

    if trimmed.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(trimmed.to_string())
    }
}

pub(crate) fn mask_api_key(key: &str) -> String {
    if key.is_empty() {
        return "(not set)".to_string();
    }

    let shown = (key.chars().count() / 2).min(8);
    let visible: String = key.chars().take(shown).collect();
    format!("{visible}***")
}

#[cfg(test)]
mod tests {
    use super::mask_api_key;

    #[test]
    fn mask_api_key_hides_tail() {
        assert_eq!(mask_api_key(""), "(not set)");
        assert_eq!(mask_api_key("AIzaSyExampleKey123"), "AIzaSyEx***");
        assert_eq!(mask_api_key("short"), "sh***");
        assert_eq!(mask_api_key("12345678"), "1234***");
        assert_eq!(mask_api_key("k"), "***");
    }
}
