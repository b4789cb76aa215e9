use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate to a display width, appending an ellipsis when content is
/// cut. Width-aware so CJK and emoji cells do not overflow.
pub fn truncate_text_unicode(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    const ELLIPSIS: &str = "...";
    let ellipsis_width = ELLIPSIS.width();

    if max_width <= ellipsis_width {
        return ELLIPSIS[..max_width].to_string();
    }

    let target_width = max_width - ellipsis_width;
    let mut result = String::new();
    let mut current_width = 0;

    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if current_width + ch_width > target_width {
            break;
        }
        result.push(ch);
        current_width += ch_width;
    }

    result.push_str(ELLIPSIS);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate_text_unicode("Hello", 10), "Hello");
        assert_eq!(truncate_text_unicode("", 5), "");
    }

    #[test]
    fn test_truncate_long_text() {
        assert_eq!(truncate_text_unicode("Hello World!", 8), "Hello...");
    }

    #[test]
    fn test_truncate_wide_characters() {
        // Each CJK char is two columns wide.
        assert_eq!(truncate_text_unicode("日本語テキスト", 7), "日本...");
    }

    #[test]
    fn test_truncate_tiny_width() {
        assert_eq!(truncate_text_unicode("anything long here", 2), "..");
    }
}
