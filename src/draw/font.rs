//! Font descriptor for stroke label rendering.

/// Font configuration for the stroke ordinal labels.
///
/// Describes which font to use, including family name, weight, and style.
/// The descriptor is resolved to a Pango font description at render time so
/// any installed system font can be referenced by name.
#[derive(Debug, Clone)]
pub struct FontDescriptor {
    /// Font family name (e.g., "Sans", "Arial", "Monospace")
    pub family: String,

    /// Font weight (e.g., "normal", "bold", "light" or numeric 100-900)
    pub weight: String,

    /// Font style (e.g., "normal", "italic", "oblique")
    pub style: String,
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self {
            family: "Sans".to_string(),
            weight: "normal".to_string(),
            style: "normal".to_string(),
        }
    }
}

impl FontDescriptor {
    /// Creates a new font descriptor with the specified parameters.
    pub fn new(family: String, weight: String, style: String) -> Self {
        Self {
            family,
            weight,
            style,
        }
    }

    /// Converts this font descriptor to a Pango font description string.
    ///
    /// Format: "Family Style Weight Size", omitting "normal" parts.
    /// Example: "Sans 20" or "Monospace Italic Bold 14".
    pub fn to_pango_string(&self, size: f64) -> String {
        let mut parts = vec![self.family.clone()];

        if self.style.to_lowercase() != "normal" {
            parts.push(capitalize_first(&self.style));
        }

        if self.weight.to_lowercase() != "normal" {
            parts.push(capitalize_first(&self.weight));
        }

        parts.push(format!("{}", size.round() as i32));

        parts.join(" ")
    }
}

/// Capitalizes the first letter of a string.
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pango_string_omits_normal_parts() {
        let font = FontDescriptor::default();
        assert_eq!(font.to_pango_string(20.0), "Sans 20");
    }

    #[test]
    fn pango_string_includes_style_and_weight() {
        let font = FontDescriptor::new(
            "Monospace".to_string(),
            "bold".to_string(),
            "italic".to_string(),
        );
        assert_eq!(font.to_pango_string(14.4), "Monospace Italic Bold 14");
    }
}
