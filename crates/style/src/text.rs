#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum TextDecoration {
    #[default]
    None,
    Underline,
}

impl TextDecoration {
    pub fn from_underline(underline: bool) -> Self {
        if underline {
            TextDecoration::Underline
        } else {
            TextDecoration::None
        }
    }

    pub fn is_underline(&self) -> bool {
        matches!(self, TextDecoration::Underline)
    }
}
