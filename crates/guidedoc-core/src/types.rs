//! Core types for guidedoc

/// Emphasis flags of one styled run.
///
/// A run with no flags set is plain text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Emphasis {
    /// Bold (`**text**`)
    pub bold: bool,
    /// Italic (`*text*`)
    pub italic: bool,
    /// Inline code (`` `text` ``)
    pub code: bool,
}

impl Emphasis {
    /// No emphasis.
    pub const PLAIN: Emphasis = Emphasis {
        bold: false,
        italic: false,
        code: false,
    };

    /// Bold only.
    pub const BOLD: Emphasis = Emphasis {
        bold: true,
        italic: false,
        code: false,
    };

    /// Italic only.
    pub const ITALIC: Emphasis = Emphasis {
        bold: false,
        italic: true,
        code: false,
    };

    /// Inline code only.
    pub const CODE: Emphasis = Emphasis {
        bold: false,
        italic: false,
        code: true,
    };

    /// Check if no emphasis flag is set.
    pub fn is_plain(&self) -> bool {
        !(self.bold || self.italic || self.code)
    }
}

impl std::fmt::Display for Emphasis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_plain() {
            return write!(f, "plain");
        }
        let flags = [(self.bold, "bold"), (self.italic, "italic"), (self.code, "code")];
        let names: Vec<&str> = flags
            .iter()
            .filter(|(set, _)| *set)
            .map(|(_, name)| *name)
            .collect();
        write!(f, "{}", names.join("+"))
    }
}
