use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PortraitSize {
    ExtraSmall,
    Small,
    #[default]
    MediumSmall,
    Medium,
    Large,
    ExtraLarge,
}

impl PortraitSize {
    /// Edge length in pixels.
    pub fn pixels(&self) -> u32 {
        match self {
            PortraitSize::ExtraSmall => 24,
            PortraitSize::Small => 32,
            PortraitSize::MediumSmall => 40,
            PortraitSize::Medium => 56,
            PortraitSize::Large => 104,
            PortraitSize::ExtraLarge => 128,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PortraitSize::ExtraSmall => "extra-small",
            PortraitSize::Small => "small",
            PortraitSize::MediumSmall => "medium-small",
            PortraitSize::Medium => "medium",
            PortraitSize::Large => "large",
            PortraitSize::ExtraLarge => "extra-large",
        }
    }

    pub fn all() -> &'static [PortraitSize] {
        &[
            PortraitSize::ExtraSmall,
            PortraitSize::Small,
            PortraitSize::MediumSmall,
            PortraitSize::Medium,
            PortraitSize::Large,
            PortraitSize::ExtraLarge,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortraitShape {
    #[default]
    Square,
    Circle,
    Leaf,
}

impl PortraitShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            PortraitShape::Square => "square",
            PortraitShape::Circle => "circle",
            PortraitShape::Leaf => "leaf",
        }
    }
}

/// Initials shown in the portrait: at most three, upper case.
pub fn normalize_initials(initials: &str) -> String {
    initials
        .chars()
        .filter(|c| !c.is_whitespace())
        .take(3)
        .flat_map(char::to_uppercase)
        .collect()
}

/// Gravatar image URL for an e-mail address (SHA-256 of the trimmed, lower-cased address).
pub fn gravatar_url(email: &str, size: PortraitSize) -> String {
    let digest = Sha256::digest(email.trim().to_lowercase().as_bytes());
    let hash: String = digest.iter().map(|b| format!("{:02x}", b)).collect();
    format!(
        "https://www.gravatar.com/avatar/{}?s={}&d=blank",
        hash,
        size.pixels()
    )
}
