//! About-section text toggle.

use crate::config::AboutTexts;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AboutVersion {
    Regular,
    Technical,
}

impl AboutVersion {
    /// Maps the state of the "technical" checkbox.
    pub fn from_checked(checked: bool) -> Self {
        if checked {
            Self::Technical
        } else {
            Self::Regular
        }
    }

    pub fn text(self, texts: &AboutTexts) -> &str {
        match self {
            Self::Regular => &texts.regular,
            Self::Technical => &texts.technical,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AboutVersion;
    use crate::config::AboutTexts;

    #[test]
    fn checkbox_selects_technical_text() {
        let texts = AboutTexts::default();
        assert!(AboutVersion::from_checked(true)
            .text(&texts)
            .contains("Proxmox"));
        assert!(AboutVersion::from_checked(false)
            .text(&texts)
            .starts_with("Deliver fast"));
    }
}
