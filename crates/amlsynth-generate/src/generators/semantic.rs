use fake::Fake;
use fake::faker::company::en::CompanyName;
use fake::faker::internet::en::{DomainSuffix, SafeEmail};
use fake::faker::job::en::Title;
use fake::faker::lorem::en::Word;
use rand::RngCore;

/// Lowercase email with everything but `[a-z0-9@.]` stripped.
pub fn email(rng: &mut dyn RngCore) -> String {
    let raw: String = SafeEmail().fake_with_rng(rng);
    sanitize_email(&raw)
}

pub fn sanitize_email(raw: &str) -> String {
    raw.chars()
        .filter(|ch| ch.is_ascii_alphanumeric() || *ch == '@' || *ch == '.')
        .map(|ch| ch.to_ascii_lowercase())
        .collect()
}

pub fn url(rng: &mut dyn RngCore) -> String {
    let host: String = Word().fake_with_rng(rng);
    let suffix: String = DomainSuffix().fake_with_rng(rng);
    format!("https://www.{}.{suffix}", sanitize_email(&host))
}

pub fn company_name(rng: &mut dyn RngCore) -> String {
    CompanyName().fake_with_rng(rng)
}

pub fn job_title(rng: &mut dyn RngCore) -> String {
    Title().fake_with_rng(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn email_is_sanitized() {
        assert_eq!(sanitize_email("O'Hara_Jo+x@Example.COM"), "oharajox@example.com");
        let mut rng = ChaCha8Rng::seed_from_u64(12);
        for _ in 0..20 {
            let value = email(&mut rng);
            assert!(value.contains('@'));
            assert!(value.chars().all(|ch| ch.is_ascii_lowercase()
                || ch.is_ascii_digit()
                || ch == '@'
                || ch == '.'));
        }
    }

    #[test]
    fn url_is_https() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        assert!(url(&mut rng).starts_with("https://www."));
    }
}
