use crate::highlight::Highlight;
use crossterm::style::Color;

/// Foreground colours for each highlight class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Theme name (e.g., "ansi")
    pub name: String,

    pub syntax_comment: Color,
    pub syntax_keyword: Color,
    pub syntax_type: Color,
    pub syntax_string: Color,
    pub syntax_number: Color,
    pub search_match_fg: Color,
}

impl Theme {
    /// The classic 8-colour palette
    pub fn ansi() -> Self {
        Self {
            name: "ansi".to_string(),
            syntax_comment: Color::DarkCyan,
            syntax_keyword: Color::DarkYellow,
            syntax_type: Color::DarkGreen,
            syntax_string: Color::DarkMagenta,
            syntax_number: Color::DarkRed,
            search_match_fg: Color::DarkBlue,
        }
    }

    /// Colour for a tag; `Normal` is the terminal's default foreground
    pub fn color(&self, hl: Highlight) -> Color {
        match hl {
            Highlight::Normal => Color::Reset,
            Highlight::Comment | Highlight::MultiLineComment => self.syntax_comment,
            Highlight::Keyword => self.syntax_keyword,
            Highlight::Type => self.syntax_type,
            Highlight::String => self.syntax_string,
            Highlight::Number => self.syntax_number,
            Highlight::Match => self.search_match_fg,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::ansi()
    }
}
