use rand::Rng;

/// Prefix used when the name has no usable characters at all.
const FALLBACK_PREFIX: &str = "KLOS";

const PREFIX_LEN: usize = 4;
const SUFFIX_LEN: usize = 4;
const SUFFIX_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Produces a shareable `PREFIX-RANDOM` referral code. The prefix is
/// the first four ASCII alphanumerics of the name, uppercased; a name
/// without any usable character falls back to `KLOS`. The suffix is
/// four random base-36 characters. Codes are not unique by
/// construction — the unique constraint on the waitlist table is.
pub fn generate_referral_code(name: &str) -> String {
    let prefix: String = name
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .take(PREFIX_LEN)
        .map(|c| c.to_ascii_uppercase())
        .collect();
    let prefix = if prefix.is_empty() {
        FALLBACK_PREFIX.to_string()
    } else {
        prefix
    };

    let mut rng = rand::thread_rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| SUFFIX_ALPHABET[rng.gen_range(0..SUFFIX_ALPHABET.len())] as char)
        .collect();

    format!("{prefix}-{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_well_formed(code: &str) {
        let (prefix, suffix) = code.split_once('-').expect("missing separator");
        assert!(
            (1..=PREFIX_LEN).contains(&prefix.len()),
            "bad prefix in {code}"
        );
        assert_eq!(suffix.len(), SUFFIX_LEN, "bad suffix in {code}");
        let base36 = |c: char| c.is_ascii_uppercase() || c.is_ascii_digit();
        assert!(prefix.chars().all(base36), "bad prefix chars in {code}");
        assert!(suffix.chars().all(base36), "bad suffix chars in {code}");
    }

    #[test]
    fn uppercases_and_truncates_the_name() {
        assert!(generate_referral_code("amina").starts_with("AMIN-"));
    }

    #[test]
    fn short_names_keep_their_length() {
        assert!(generate_referral_code("bo").starts_with("BO-"));
    }

    #[test]
    fn skips_non_alphanumerics() {
        assert!(generate_referral_code("a. b-c!d e").starts_with("ABCD-"));
        assert!(generate_referral_code("José Ángel").starts_with("JOSN-"));
    }

    #[test]
    fn falls_back_for_unusable_names() {
        assert!(generate_referral_code("").starts_with("KLOS-"));
        assert!(generate_referral_code("!!! ***").starts_with("KLOS-"));
    }

    #[test]
    fn codes_are_well_formed() {
        for name in ["amina", "bo", "", "José Ángel", "1234567", "O'Neill"] {
            assert_well_formed(&generate_referral_code(name));
        }
    }

    #[test]
    fn suffixes_vary_between_calls() {
        // 36^4 possible suffixes; a collision here is overwhelmingly unlikely
        assert_ne!(generate_referral_code("amina"), generate_referral_code("amina"));
    }
}
