/// Shallow UI-level email gate: exactly one `@`, a non-empty local
/// part, a domain with at least one dot and non-empty text around the
/// last one, and no whitespace anywhere. Deliberately not an RFC 5322
/// parser; the waitlist table is the real arbiter.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_plain_address() {
        assert!(is_valid_email("user@example.com"));
    }

    #[test]
    fn accepts_subdomains_and_plus_tags() {
        assert!(is_valid_email("user+tag@mail.example.co.uk"));
    }

    #[test]
    fn rejects_missing_at() {
        assert!(!is_valid_email("abc"));
    }

    #[test]
    fn rejects_dotless_domain() {
        assert!(!is_valid_email("a@b"));
    }

    #[test]
    fn rejects_embedded_whitespace() {
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@b.c "));
    }

    #[test]
    fn rejects_degenerate_shapes() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("user@example."));
        assert!(!is_valid_email("user@.com"));
    }
}
