#[cfg(test)]
mod tests {
    use crate::tools::validate::*;

    #[test]
    fn accepts_http_and_https() {
        assert!(is_valid_url("https://example.com/page"));
        assert!(is_valid_url("http://example.com"));
        assert!(is_valid_url("https://sub.example.co.uk/a?b=c#d"));
    }

    #[test]
    fn rejects_other_schemes() {
        assert!(!is_valid_url("ftp://example.com"));
        assert!(!is_valid_url("example.com"));
        assert!(!is_valid_url("//example.com"));
        assert!(!is_valid_url("HTTPS://example.com"));
    }

    #[test]
    fn rejects_bad_first_host_character() {
        assert!(!is_valid_url("https://.example.com"));
        assert!(!is_valid_url("https://?q=1"));
        assert!(!is_valid_url("https://#frag"));
        assert!(!is_valid_url("https://$money"));
    }

    #[test]
    fn requires_two_characters_after_scheme() {
        assert!(!is_valid_url("https://"));
        assert!(!is_valid_url("https://a"));
        assert!(is_valid_url("https://ab"));
    }

    #[test]
    fn rejects_whitespace_anywhere() {
        assert!(!is_valid_url("https://a b"));
        assert!(!is_valid_url("https://example.com/some page"));
        assert!(!is_valid_url(" https://example.com"));
        assert!(!is_valid_url("https://example.com "));
        assert!(!is_valid_url("https://example.com\n"));
    }

    #[test]
    fn empty_input_is_its_own_state() {
        assert_eq!(input_status(""), InputStatus::Empty);
        assert_eq!(validation_error(""), None);
        assert!(!input_status("").can_submit());
    }

    #[test]
    fn invalid_input_reports_error_text() {
        assert_eq!(input_status("ftp://example.com"), InputStatus::Invalid);
        assert_eq!(validation_error("ftp://example.com"), Some("Invalid URL format"));
        assert!(!input_status("ftp://example.com").can_submit());
    }

    #[test]
    fn valid_input_clears_error() {
        assert_eq!(input_status("https://example.com"), InputStatus::Valid);
        assert_eq!(validation_error("https://example.com"), None);
        assert!(input_status("https://example.com").can_submit());
    }
}
