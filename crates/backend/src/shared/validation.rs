/// Email shape check: `local@domain.tld`.
///
/// Exactly one `@`, no whitespace, a non-empty local part and a domain
/// with at least one dot that has characters on both sides.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return false,
    };

    if local.is_empty() || domain.is_empty() {
        return false;
    }

    let last = domain.len() - 1;
    domain
        .char_indices()
        .any(|(i, ch)| ch == '.' && i > 0 && i < last)
}
