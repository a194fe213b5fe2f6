//! Style tokens consulted by the creature builders
//!
//! A [`StyleTokens`] bundle is constructed once per generation run and read
//! only. Builders consult it for segment budgets and curvature bias; the
//! palette rides along for downstream tooling that colors the output.

/// Detail level for generation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DetailLevel {
    /// Minimal detail, coarse silhouettes
    Low,
    /// Balanced detail
    #[default]
    Medium,
    /// Rich detail
    High,
}

impl DetailLevel {
    /// Segment-count multiplier for this detail level
    pub fn segment_multiplier(&self) -> f32 {
        match self {
            DetailLevel::Low => 0.6,
            DetailLevel::Medium => 1.0,
            DetailLevel::High => 1.5,
        }
    }

    /// Scale a base segment count by this detail level, keeping at least
    /// 3 so rings stay triangulatable.
    pub fn segments(&self, base: u32) -> u32 {
        ((base as f32 * self.segment_multiplier()).round() as u32).max(3)
    }

    /// Parse a detail level name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(DetailLevel::Low),
            "medium" | "med" => Some(DetailLevel::Medium),
            "high" => Some(DetailLevel::High),
            _ => None,
        }
    }
}

/// A named RGB color (0.0 to 1.0 per channel)
pub type Color = [f32; 3];

/// Color palette a generation run tags its output with
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    /// Dominant body color
    pub primary: Color,
    /// Secondary body color
    pub secondary: Color,
    /// Highlight color for glowing parts (photophores, esca, plumes)
    pub accent: Color,
}

impl Default for Palette {
    fn default() -> Self {
        // Deep-ocean defaults: blue-grey body, pale belly, bioluminescent cyan.
        Self {
            primary: [0.18, 0.28, 0.42],
            secondary: [0.65, 0.70, 0.75],
            accent: [0.30, 0.95, 0.90],
        }
    }
}

/// Read-only parameter bundle the creature builders consult
#[derive(Clone, Copy, Debug)]
pub struct StyleTokens {
    /// Tessellation budget for body surfaces
    pub detail: DetailLevel,
    /// Multiplier on wave amplitudes and curl strengths (1.0 = neutral)
    pub curvature_bias: f32,
    /// Output color palette
    pub palette: Palette,
}

impl Default for StyleTokens {
    fn default() -> Self {
        Self::with_detail(DetailLevel::Medium)
    }
}

impl StyleTokens {
    /// Tokens with neutral bias at the given detail level
    pub fn with_detail(detail: DetailLevel) -> Self {
        Self {
            detail,
            curvature_bias: 1.0,
            palette: Palette::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_scaling() {
        assert_eq!(DetailLevel::Medium.segments(12), 12);
        assert_eq!(DetailLevel::Low.segments(12), 7);
        assert_eq!(DetailLevel::High.segments(12), 18);
        // Floor keeps rings valid.
        assert_eq!(DetailLevel::Low.segments(4), 3);
    }

    #[test]
    fn test_detail_from_str() {
        assert_eq!(DetailLevel::from_str("LOW"), Some(DetailLevel::Low));
        assert_eq!(DetailLevel::from_str("med"), Some(DetailLevel::Medium));
        assert_eq!(DetailLevel::from_str("ultra"), None);
    }
}
