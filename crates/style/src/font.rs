#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum FontWeight {
    Thin,
    Light,
    #[default]
    Regular,
    Medium,
    Bold,
    Black,
    Numeric(u16),
}

impl FontWeight {
    /// Returns the numeric weight value (100-900 scale).
    ///
    /// Standard CSS font-weight values:
    /// - Thin: 100
    /// - Light: 300
    /// - Regular: 400
    /// - Medium: 500
    /// - Bold: 700
    /// - Black: 900
    pub fn numeric_value(&self) -> u16 {
        match self {
            FontWeight::Thin => 100,
            FontWeight::Light => 300,
            FontWeight::Regular => 400,
            FontWeight::Medium => 500,
            FontWeight::Bold => 700,
            FontWeight::Black => 900,
            FontWeight::Numeric(n) => *n,
        }
    }

    /// Maps an OS/2 `usWeightClass` onto the named weights where one matches exactly.
    pub fn from_numeric(value: u16) -> Self {
        match value {
            100 => FontWeight::Thin,
            300 => FontWeight::Light,
            400 => FontWeight::Regular,
            500 => FontWeight::Medium,
            700 => FontWeight::Bold,
            900 => FontWeight::Black,
            n => FontWeight::Numeric(n),
        }
    }

    /// The weight a run gets from its bold flag.
    pub fn from_bold(bold: bool) -> Self {
        if bold { FontWeight::Bold } else { FontWeight::Regular }
    }

    /// Semibold (600) and heavier count as bold.
    pub fn is_bold(&self) -> bool {
        self.numeric_value() >= 600
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
    Oblique,
}

impl FontStyle {
    pub fn from_italic(italic: bool) -> Self {
        if italic { FontStyle::Italic } else { FontStyle::Normal }
    }

    /// Oblique faces are slanted too, so they count as italic.
    pub fn is_italic(&self) -> bool {
        !matches!(self, FontStyle::Normal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_from_bold_flag() {
        assert_eq!(FontWeight::from_bold(true), FontWeight::Bold);
        assert_eq!(FontWeight::from_bold(false), FontWeight::Regular);
    }

    #[test]
    fn test_weight_from_numeric() {
        assert_eq!(FontWeight::from_numeric(700), FontWeight::Bold);
        assert_eq!(FontWeight::from_numeric(650), FontWeight::Numeric(650));
        assert!(FontWeight::Numeric(600).is_bold());
        assert!(!FontWeight::Medium.is_bold());
    }

    #[test]
    fn test_style_from_italic_flag() {
        assert_eq!(FontStyle::from_italic(true), FontStyle::Italic);
        assert!(FontStyle::Oblique.is_italic());
        assert!(!FontStyle::from_italic(false).is_italic());
    }
}
