use std::panic;

const REDACTED: &str = "[REDACTED]";

const SENSITIVE_MARKERS: [&str; 7] = [
    "password", "passcode", "bearer", "secret", "token", "otp", "code",
];

/// Replaces any whitespace-separated chunk that looks like a credential.
pub fn redact_text(input: &str) -> String {
    input
        .split_whitespace()
        .map(redact_chunk)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Keeps the first character of the local part and the full domain.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let first: String = local.chars().take(1).collect();
            format!("{first}***@{domain}")
        }
        _ => REDACTED.to_owned(),
    }
}

pub fn sanitize_error_code(code: &str) -> String {
    let valid = code.starts_with("AUTH_")
        && code.len() <= 64
        && code
            .chars()
            .all(|ch| ch.is_ascii_uppercase() || ch.is_ascii_digit() || ch == '_' || ch == '-');

    if valid {
        code.to_owned()
    } else {
        "AUTH_TRANSIENT".to_owned()
    }
}

pub fn install_panic_redaction_hook() {
    panic::set_hook(Box::new(|panic_info| {
        let payload = panic_info
            .payload()
            .downcast_ref::<&str>()
            .map(ToString::to_string)
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "panic payload omitted".to_owned());

        let scrubbed = redact_text(&payload);

        if let Some(location) = panic_info.location() {
            eprintln!(
                "prepdesk panic: {} at {}:{}:{}",
                scrubbed,
                location.file(),
                location.line(),
                location.column()
            );
        } else {
            eprintln!("prepdesk panic: {}", scrubbed);
        }
    }));
}

fn redact_chunk(chunk: &str) -> String {
    let lowered = chunk.to_ascii_lowercase();
    if SENSITIVE_MARKERS
        .iter()
        .any(|marker| lowered.contains(marker))
        || looks_like_secret_value(chunk)
    {
        REDACTED.to_owned()
    } else {
        chunk.to_owned()
    }
}

fn looks_like_secret_value(value: &str) -> bool {
    let cleaned = value.trim_matches(|ch: char| !ch.is_ascii_alphanumeric());

    let has_mixed = cleaned.chars().any(|ch| ch.is_ascii_alphabetic())
        && cleaned.chars().any(|ch| ch.is_ascii_digit());

    cleaned.len() >= 6 && (cleaned.chars().all(|ch| ch.is_ascii_digit()) || has_mixed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redact_text_scrubs_sensitive_fragments() {
        let input = "invalid password=hunter22x otp 482913 for user";
        let output = redact_text(input);

        assert!(!output.contains("hunter22x"));
        assert!(!output.contains("482913"));
        assert!(output.contains("[REDACTED]"));
        assert!(output.contains("for user"));
    }

    #[test]
    fn redact_text_keeps_plain_backend_messages() {
        assert_eq!(
            redact_text("Email already registered"),
            "Email already registered"
        );
    }

    #[test]
    fn mask_email_hides_local_part() {
        assert_eq!(mask_email("alice@example.com"), "a***@example.com");
        assert_eq!(mask_email("not-an-email"), "[REDACTED]");
        assert_eq!(mask_email("@example.com"), "[REDACTED]");
    }

    #[test]
    fn sanitize_error_code_rejects_untrusted_text() {
        assert_eq!(sanitize_error_code("AUTH_REJECTED"), "AUTH_REJECTED");
        assert_eq!(
            sanitize_error_code("AUTH_BACKEND: password=123456"),
            "AUTH_TRANSIENT"
        );
    }
}
