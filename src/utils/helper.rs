/// Truncate a string to a maximum number of characters
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Format an account identifier for display (truncated)
pub fn format_account(account: &str) -> String {
    let chars: Vec<char> = account.chars().collect();
    if chars.len() <= 12 {
        return account.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}

/// Escape text for use in HTML content and quoted attributes
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_strings() {
        assert_eq!(truncate_string("Ether", 10), "Ether");
        assert_eq!(truncate_string("Wrapped Ether Token", 10), "Wrapped...");
    }

    #[test]
    fn account_is_shortened() {
        assert_eq!(
            format_account("0x52908400098527886E0F7030069857D2E4169EE7"),
            "0x5290...9EE7"
        );
        assert_eq!(format_account("0xABC"), "0xABC");
    }

    #[test]
    fn html_special_characters_are_escaped() {
        assert_eq!(
            escape_html(r#"<img src="x" onerror='y'>&"#),
            "&lt;img src=&quot;x&quot; onerror=&#39;y&#39;&gt;&amp;"
        );
    }
}
