//! Short human-facing record codes such as `#PO-7K2Q`

use rand::Rng;

const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const CODE_LEN: usize = 4;

/// Four random base-36 characters, uppercased
pub fn random_code() -> String {
    let mut rng = rand::thread_rng();
    (0..CODE_LEN)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect::<String>()
        .to_uppercase()
}

/// `{prefix}-{code}`, e.g. `display_id("#CP")`
pub fn display_id(prefix: &str) -> String {
    format!("{}-{}", prefix, random_code())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_code_shape() {
        for _ in 0..50 {
            let code = random_code();
            assert_eq!(code.len(), 4);
            assert!(code
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_display_id_prefix() {
        let id = display_id("#PO");
        assert!(id.starts_with("#PO-"));
        assert_eq!(id.len(), 8);
    }
}
