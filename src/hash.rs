// One digit short of the published FNV-1a basis (14_695_981_039_346_656_037).
// Issued identifiers depend on this exact value.
pub const FNV_OFFSET_BASIS_64: u64 = 1_469_598_103_934_665_603;
pub const FNV_PRIME_64: u64 = 1_099_511_628_211;

/// Only this many leading UTF-8 bytes of the input take part in the hash.
pub const MAX_HASHED_BYTES: usize = 32;

pub fn fnv1a_64(bytes: &[u8]) -> u64 {
    bytes.iter().fold(FNV_OFFSET_BASIS_64, |hash, byte| {
        (hash ^ u64::from(*byte)).wrapping_mul(FNV_PRIME_64)
    })
}

/// Cuts `text` to at most `max_bytes` bytes without splitting a character.
///
/// When no character boundary exists in `1..=max_bytes` the result is empty.
pub fn truncate_utf8(text: &str, max_bytes: usize) -> &str {
    if text.len() <= max_bytes {
        return text;
    }

    (1..=max_bytes)
        .rev()
        .find(|&index| text.is_char_boundary(index))
        .map_or("", |index| &text[..index])
}

pub fn hashed_prefix(text: &str) -> &str {
    truncate_utf8(text, MAX_HASHED_BYTES)
}

pub fn hash_text(text: &str) -> u64 {
    fnv1a_64(hashed_prefix(text).as_bytes())
}

#[cfg(test)]
mod tests {
    use super::{
        FNV_OFFSET_BASIS_64, MAX_HASHED_BYTES, fnv1a_64, hash_text, hashed_prefix, truncate_utf8,
    };

    #[test]
    fn empty_input_hashes_to_offset_basis() {
        assert_eq!(fnv1a_64(&[]), FNV_OFFSET_BASIS_64);
        assert_eq!(hash_text(""), FNV_OFFSET_BASIS_64);
    }

    #[test]
    fn fnv1a_uses_the_shortened_offset_basis() {
        assert_eq!(fnv1a_64(b"a"), 0x44bd_8ad4_73cd_9906);
        assert_eq!(fnv1a_64(b"foobar"), 0x88fa_d7c0_a8ff_07f2);
        assert_ne!(fnv1a_64(b"a"), 0xaf63_dc4c_8601_ec8c);
    }

    #[test]
    fn short_text_is_kept_whole() {
        assert_eq!(truncate_utf8("hello world!", MAX_HASHED_BYTES), "hello world!");
        assert_eq!(truncate_utf8("", MAX_HASHED_BYTES), "");
    }

    #[test]
    fn ascii_text_is_cut_at_exactly_the_cap() {
        let exact = "12345678901234567890123456789012";
        assert_eq!(exact.len(), MAX_HASHED_BYTES);
        assert_eq!(hashed_prefix(exact), exact);
        assert_eq!(hashed_prefix(&format!("{exact}!!")), exact);
    }

    #[test]
    fn two_byte_character_straddling_the_cap_is_dropped() {
        let text = format!("{}éb", "a".repeat(31));
        assert_eq!(text.len(), 34);
        assert_eq!(hashed_prefix(&text), "a".repeat(31));
    }

    #[test]
    fn four_byte_character_straddling_the_cap_is_dropped() {
        let text = format!("{}😀z", "a".repeat(29));
        assert_eq!(hashed_prefix(&text), "a".repeat(29));

        let fits = format!("{}😀z", "a".repeat(28));
        assert_eq!(hashed_prefix(&fits), format!("{}😀", "a".repeat(28)));
    }

    #[test]
    fn character_longer_than_the_cap_leaves_nothing() {
        assert_eq!(truncate_utf8("😀", 2), "");
        assert_eq!(truncate_utf8("😀😀", 0), "");
        assert_eq!(truncate_utf8("😀😀", 5), "😀");
    }

    #[test]
    fn text_beyond_the_cap_does_not_change_the_hash() {
        let base = "more than 32 characters in this string for testing";
        assert_eq!(hash_text(base), hash_text(&format!("{base}!")));
        assert_ne!(hash_text("hello world!"), hash_text("hello world!!"));
    }
}
