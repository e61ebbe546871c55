/// Utilitários para manipulação segura de strings UTF-8

/// Trunca uma string de forma segura, sem cortar no meio de um caractere UTF-8
///
/// Usado para logar prefixos de tokens e authorization codes sem vazar o
/// valor completo nos logs.
///
/// # Exemplo
/// ```
/// use hubspot_integration_middleware::utils::string_utils::truncate_safe;
///
/// assert_eq!(truncate_safe("authorization-code", 4), "auth");
/// ```
pub fn truncate_safe(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }

    // Retroceder até um limite de caractere válido
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }

    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_safe_ascii() {
        let text = "Hello, World!";
        assert_eq!(truncate_safe(text, 5), "Hello");
        assert_eq!(truncate_safe(text, 100), text);
    }

    #[test]
    fn test_truncate_safe_utf8() {
        let text = "Olá, mundo!";
        // "Olá" = 4 bytes (O=1, l=1, á=2)
        assert_eq!(truncate_safe(text, 3), "Ol");
        assert_eq!(truncate_safe(text, 4), "Olá");
    }

    #[test]
    fn test_truncate_safe_never_splits_multibyte() {
        let text = "token🌍suffix";
        let result = truncate_safe(text, 7);
        assert!(result.is_char_boundary(result.len()));
        assert!(!result.contains('🌍'));
    }
}
