use thiserror::Error;

/// One lexical token of a record.
///
/// Numerals keep their exact decimal text so that 64-bit values survive
/// without a float round-trip. Structural delimiters are surfaced as plain
/// tokens; the scanner itself never tracks nesting.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Str(String),
    Number(String),
    Bool(bool),
    Null,
    Delim(char),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    #[error("unexpected character {0:?} at byte {1}")]
    UnexpectedChar(char, usize),

    #[error("unterminated string literal starting at byte {0}")]
    UnterminatedString(usize),

    #[error("invalid escape sequence at byte {0}")]
    InvalidEscape(usize),
}

/// Lazy token scanner over one record's raw text.
///
/// Yields a finite, non-restartable sequence of tokens. Whitespace, commas
/// and colons are skipped silently. The first lexical error ends the
/// sequence; the scanner never resumes after it.
pub struct TokenScanner<'a> {
    input: &'a str,
    pos: usize,
    failed: bool,
}

impl<'a> TokenScanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            failed: false,
        }
    }

    fn skip_filler(&mut self) {
        let bytes = self.input.as_bytes();
        while let Some(&b) = bytes.get(self.pos) {
            match b {
                b' ' | b'\t' | b'\n' | b'\r' | b',' | b':' => self.pos += 1,
                _ => break,
            }
        }
    }

    fn scan_token(&mut self) -> Result<Token, ScanError> {
        let c = self.input[self.pos..]
            .chars()
            .next()
            .unwrap_or_default();
        match c {
            '{' | '}' | '[' | ']' => {
                self.pos += 1;
                Ok(Token::Delim(c))
            }
            '"' => self.scan_string(),
            '-' | '0'..='9' => Ok(self.scan_number()),
            't' => self.scan_literal("true", Token::Bool(true)),
            'f' => self.scan_literal("false", Token::Bool(false)),
            'n' => self.scan_literal("null", Token::Null),
            _ => Err(ScanError::UnexpectedChar(c, self.pos)),
        }
    }

    fn scan_literal(&mut self, word: &str, token: Token) -> Result<Token, ScanError> {
        if self.input[self.pos..].starts_with(word) {
            self.pos += word.len();
            Ok(token)
        } else {
            let c = self.input[self.pos..].chars().next().unwrap_or_default();
            Err(ScanError::UnexpectedChar(c, self.pos))
        }
    }

    fn scan_number(&mut self) -> Token {
        let start = self.pos;
        let bytes = self.input.as_bytes();
        while let Some(&b) = bytes.get(self.pos) {
            match b {
                b'0'..=b'9' | b'-' | b'+' | b'.' | b'e' | b'E' => self.pos += 1,
                _ => break,
            }
        }
        Token::Number(self.input[start..self.pos].to_string())
    }

    fn scan_string(&mut self) -> Result<Token, ScanError> {
        let start = self.pos;
        self.pos += 1; // opening quote
        let mut value = String::new();
        loop {
            let c = match self.input[self.pos..].chars().next() {
                Some(c) => c,
                None => return Err(ScanError::UnterminatedString(start)),
            };
            match c {
                '"' => {
                    self.pos += 1;
                    return Ok(Token::Str(value));
                }
                '\\' => {
                    self.pos += 1;
                    self.scan_escape(&mut value)?;
                }
                _ => {
                    value.push(c);
                    self.pos += c.len_utf8();
                }
            }
        }
    }

    fn scan_escape(&mut self, out: &mut String) -> Result<(), ScanError> {
        let c = match self.input[self.pos..].chars().next() {
            Some(c) => c,
            None => return Err(ScanError::UnterminatedString(self.pos)),
        };
        self.pos += c.len_utf8();
        let decoded = match c {
            '"' => '"',
            '\\' => '\\',
            '/' => '/',
            'b' => '\u{0008}',
            'f' => '\u{000C}',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'u' => self.scan_unicode_escape()?,
            _ => return Err(ScanError::InvalidEscape(self.pos)),
        };
        out.push(decoded);
        Ok(())
    }

    fn scan_unicode_escape(&mut self) -> Result<char, ScanError> {
        let hi = self.scan_hex4()?;
        if !(0xD800..0xE000).contains(&hi) {
            return char::from_u32(hi).ok_or(ScanError::InvalidEscape(self.pos));
        }
        // High surrogate must be followed by an escaped low surrogate.
        if hi >= 0xDC00 || !self.input[self.pos..].starts_with("\\u") {
            return Err(ScanError::InvalidEscape(self.pos));
        }
        self.pos += 2;
        let lo = self.scan_hex4()?;
        if !(0xDC00..0xE000).contains(&lo) {
            return Err(ScanError::InvalidEscape(self.pos));
        }
        let code = 0x10000 + ((hi - 0xD800) << 10) + (lo - 0xDC00);
        char::from_u32(code).ok_or(ScanError::InvalidEscape(self.pos))
    }

    fn scan_hex4(&mut self) -> Result<u32, ScanError> {
        let hex = self
            .input
            .get(self.pos..self.pos + 4)
            .ok_or(ScanError::InvalidEscape(self.pos))?;
        let value =
            u32::from_str_radix(hex, 16).map_err(|_| ScanError::InvalidEscape(self.pos))?;
        self.pos += 4;
        Ok(value)
    }
}

impl<'a> Iterator for TokenScanner<'a> {
    type Item = Result<Token, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        self.skip_filler();
        if self.pos >= self.input.len() {
            return None;
        }
        let result = self.scan_token();
        if result.is_err() {
            self.failed = true;
        }
        Some(result)
    }
}
