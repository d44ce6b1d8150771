//! Built-in language definitions and filename matching.

use std::path::Path;

/// An immutable language definition.
#[derive(Debug, PartialEq, Eq)]
pub struct Language {
    /// Short tag shown in the status bar (e.g. "c")
    pub name: &'static str,
    /// Patterns starting with `.` match the file extension, anything else is a
    /// substring of the file name
    pub filematch: &'static [&'static str],
    /// Keywords in match priority order; a trailing `|` marks a type keyword
    pub keywords: &'static [&'static str],
    pub singleline_comment: Option<&'static str>,
    pub multiline_comment: Option<(&'static str, &'static str)>,
    pub highlight_numbers: bool,
    pub highlight_strings: bool,
}

impl Language {
    /// Does this definition claim `filename`?
    pub fn matches(&self, filename: &str) -> bool {
        let ext = extension_of(filename);
        self.filematch.iter().any(|pattern| {
            if pattern.starts_with('.') {
                ext == Some(*pattern)
            } else {
                filename.contains(pattern)
            }
        })
    }
}

/// The extension including its leading dot, taken from the last `.` of the file name.
fn extension_of(filename: &str) -> Option<&str> {
    let name = Path::new(filename)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(filename);
    name.rfind('.').map(|idx| &name[idx..])
}

pub static LANGUAGES: [Language; 4] = [
    Language {
        name: "c",
        filematch: &[".c", ".h", ".cpp"],
        keywords: &[
            "switch", "if", "while", "for", "break", "continue", "return", "else", "struct",
            "union", "typedef", "static", "enum", "class", "case", "int", "long|", "double|",
            "float|", "char|", "unsigned|", "signed|", "void|",
        ],
        singleline_comment: Some("//"),
        multiline_comment: Some(("/*", "*/")),
        highlight_numbers: true,
        highlight_strings: true,
    },
    Language {
        name: "rust",
        filematch: &[".rs"],
        keywords: &[
            "fn", "let", "mut", "if", "else", "match", "while", "loop", "for", "in", "return",
            "break", "continue", "struct", "enum", "impl", "trait", "pub", "use", "mod", "const",
            "static", "where", "as", "ref", "move", "unsafe", "self", "Self", "crate", "super",
            "true", "false", "u8|", "u16|", "u32|", "u64|", "usize|", "i8|", "i16|", "i32|",
            "i64|", "isize|", "f32|", "f64|", "bool|", "char|", "str|", "String|", "Vec|",
            "Option|", "Result|",
        ],
        singleline_comment: Some("//"),
        multiline_comment: Some(("/*", "*/")),
        highlight_numbers: true,
        highlight_strings: true,
    },
    Language {
        name: "python",
        filematch: &[".py"],
        keywords: &[
            "def", "class", "if", "elif", "else", "for", "while", "return", "import", "from",
            "as", "with", "try", "except", "finally", "raise", "pass", "break", "continue",
            "lambda", "yield", "in", "is", "not", "and", "or", "None|", "True|", "False|",
            "self|",
        ],
        singleline_comment: Some("#"),
        multiline_comment: None,
        highlight_numbers: true,
        highlight_strings: true,
    },
    Language {
        name: "make",
        filematch: &["Makefile"],
        keywords: &["ifeq", "ifneq", "ifdef", "ifndef", "else", "endif", "include", "define", "endef"],
        singleline_comment: Some("#"),
        multiline_comment: None,
        highlight_numbers: false,
        highlight_strings: true,
    },
];

/// First language in table order that claims `filename`.
pub fn select_language(filename: &str) -> Option<&'static Language> {
    LANGUAGES.iter().find(|lang| lang.matches(filename))
}
