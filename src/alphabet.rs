// Characters with a look-alike in other scripts that renders identically
// once the browser shows the decoded IDN.
pub const ALPHABET: [char; 13] = [
    'a', 'p', 'l', 'e', 'c', 'x', 's', 'y', 'j', 'i', 'h', 'o', '-',
];

pub fn is_exploitable(ch: char) -> bool {
    ALPHABET.contains(&ch)
}

/// True when every character of `label` can be spoofed. An empty label is vulnerable.
pub fn is_vulnerable(label: &str) -> bool {
    label.chars().all(is_exploitable)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vulnerable_labels() {
        assert!(is_vulnerable("apple"));
        assert!(is_vulnerable("apple-pay"));
        assert!(is_vulnerable("yahoo"));
        assert!(is_vulnerable(""));
    }

    #[test]
    fn test_safe_labels() {
        assert!(!is_vulnerable("google"));
        assert!(!is_vulnerable("Apple"));
        assert!(!is_vulnerable("apple1"));
        assert!(!is_vulnerable("appl\u{0435}"));
        assert!(!is_vulnerable("apple.pay"));
    }

    #[test]
    fn test_alphabet_membership() {
        assert_eq!(ALPHABET.len(), 13);
        assert!(ALPHABET.iter().all(|&ch| is_exploitable(ch)));
        assert!(!is_exploitable('g'));
        assert!(!is_exploitable('_'));
    }

    #[test]
    fn test_repeated_calls_agree() {
        for label in ["apple", "google", "", "x-o"] {
            assert_eq!(is_vulnerable(label), is_vulnerable(label));
        }
    }
}
