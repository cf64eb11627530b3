/// Field separators the sheet can read and write.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Delimiter {
    #[default]
    Semicolon,
    Comma,
    Tab,
}

impl Delimiter {
    /// Candidates in detection order. Earlier entries win ties.
    pub fn all() -> &'static [Self] {
        &[Self::Semicolon, Self::Comma, Self::Tab]
    }

    pub fn as_char(self) -> char {
        match self {
            Self::Semicolon => ';',
            Self::Comma => ',',
            Self::Tab => '\t',
        }
    }

    pub fn as_byte(self) -> u8 {
        self.as_char() as u8
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Semicolon => "semicolon",
            Self::Comma => "comma",
            Self::Tab => "tab",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "semicolon" => Some(Self::Semicolon),
            "comma" => Some(Self::Comma),
            "tab" => Some(Self::Tab),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Semicolon => "Semicolon (;)",
            Self::Comma => "Comma (,)",
            Self::Tab => "Tab",
        }
    }
}

/// Picks the candidate that splits the first line into the most fields.
pub fn detect_delimiter(content: &str) -> Delimiter {
    let first_line = content.split('\n').next().unwrap_or_default();

    let mut best = Delimiter::default();
    let mut max_fields = 0;
    for candidate in Delimiter::all().iter().copied() {
        let fields = first_line.split(candidate.as_char()).count();
        if fields > max_fields {
            max_fields = fields;
            best = candidate;
        }
    }
    best
}
