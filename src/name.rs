/// Top-level domain appended to every registered name.
pub const TLD: &str = ".abs";

/// Minimum name length accepted by the validator contract.
pub const MIN_NAME_LENGTH: usize = 3;

/// Maximum name length accepted by the validator contract.
pub const MAX_NAME_LENGTH: usize = 63;

/// The EVM zero address, returned by the resolver for unset addresses.
pub const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

/// Normalize a user-supplied name: lowercase and strip a trailing `.abs`.
///
/// Length and character validation stay with the validator contract, which
/// is the source of truth for the supported scripts.
pub fn normalize(name: &str) -> String {
    let lowered = name.to_lowercase();
    match lowered.strip_suffix(TLD) {
        Some(stripped) => stripped.to_string(),
        None => lowered,
    }
}

/// Full display form of a normalized name ("vitalik" -> "vitalik.abs").
pub fn display_name(normalized: &str) -> String {
    format!("{normalized}{TLD}")
}

/// Character count of a normalized name. Counted in scalar values, not
/// bytes, since the validator accepts non-ASCII scripts.
pub fn name_length(normalized: &str) -> usize {
    normalized.chars().count()
}

/// Whether a string looks like an EVM address (0x + 40 hex chars).
pub fn is_address(value: &str) -> bool {
    value.len() == 42
        && value.starts_with("0x")
        && value[2..].chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_tld_and_lowercases() {
        assert_eq!(normalize("Vitalik.abs"), "vitalik");
        assert_eq!(normalize("VITALIK"), "vitalik");
        assert_eq!(normalize("vitalik"), "vitalik");
        assert_eq!(normalize("name.ABS"), "name");
    }

    #[test]
    fn normalize_only_strips_trailing_tld() {
        assert_eq!(normalize("abs.abs"), "abs");
        assert_eq!(normalize("absolut"), "absolut");
    }

    #[test]
    fn display_name_appends_tld() {
        assert_eq!(display_name("vitalik"), "vitalik.abs");
    }

    #[test]
    fn name_length_counts_chars_not_bytes() {
        assert_eq!(name_length("abc"), 3);
        assert_eq!(name_length("日本語"), 3);
    }

    #[test]
    fn address_detection() {
        assert!(is_address("0x8c23D075eC4329ee5C9105D7BbAd413591251f0d"));
        assert!(is_address(ZERO_ADDRESS));
        assert!(!is_address("vitalik.abs"));
        assert!(!is_address("0x1234"));
        assert!(!is_address("0xZZ23D075eC4329ee5C9105D7BbAd413591251f0d"));
    }
}
