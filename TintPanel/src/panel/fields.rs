//! Editable text fields of the panel

/// One of the panel's text inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Red,
    Green,
    Blue,
    /// `RRGGBB`, shown without the `#`
    Hex,
}

impl Field {
    /// Maximum number of characters the field accepts
    #[must_use]
    pub const fn max_len(self) -> usize {
        match self {
            Field::Hex => 6,
            Field::Red | Field::Green | Field::Blue => 3,
        }
    }

    /// Clean raw input for this field.
    ///
    /// Line breaks never survive (ENTER is the confirm key), the hex field
    /// drops `#`, and the result is cut to [`Field::max_len`] characters.
    #[must_use]
    pub fn sanitize(self, raw: &str) -> String {
        raw.chars()
            .filter(|&c| c != '\r' && c != '\n')
            .filter(|&c| self != Field::Hex || c != '#')
            .take(self.max_len())
            .collect()
    }
}
