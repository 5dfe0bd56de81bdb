use std::fmt::Debug;
use std::fmt::Formatter;

/// Opaque bearer credential issued by the login endpoint.
/// Debug output never shows the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    pub fn as_str(&self) -> &str {
        &self.0
    }
    /// Leading slice of the token, for display.
    pub fn preview(&self, n: usize) -> &str {
        self.0
            .char_indices()
            .nth(n)
            .map(|(i, _)| &self.0[..i])
            .unwrap_or(&self.0)
    }
}

impl From<String> for Token {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("Token(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn debug_hides_secret() {
        let token = Token::from("eyJhbGciOi.secret".to_string());
        assert_eq!(format!("{:?}", token), "Token(***)");
    }
    #[test]
    fn preview_truncates() {
        let token = Token::from("abcdefgh".to_string());
        assert_eq!(token.preview(3), "abc");
        assert_eq!(token.preview(50), "abcdefgh");
    }
}
