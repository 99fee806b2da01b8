//! Status palette: the ordered color and label tables.
//!
//! The palette is supplied once per chart session and is immutable
//! afterwards. Definition order is a hard contract: the first entry is the
//! default status for unrecorded positions, and the order is the cycle order
//! for click interactions.

/// Outline and fill colors for one status.
///
/// Colors are CSS-style strings as supplied by the caller; `"none"` for the
/// fill leaves the tooth unfilled. Values are not validated here - renderers
/// fall back when a color fails to parse.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StatusStyle {
    /// Outline color of the tooth.
    pub stroke: String,
    /// Fill color of the tooth.
    pub fill: String,
}

impl StatusStyle {
    pub fn new(stroke: impl Into<String>, fill: impl Into<String>) -> Self {
        Self {
            stroke: stroke.into(),
            fill: fill.into(),
        }
    }

    /// A stroke-only style with no fill.
    pub fn outline(stroke: impl Into<String>) -> Self {
        Self::new(stroke, "none")
    }

    /// Whether the fill is the `"none"` sentinel.
    pub fn is_unfilled(&self) -> bool {
        self.fill.eq_ignore_ascii_case("none")
    }
}

/// One palette entry: a status with its style and display label.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PaletteEntry<T> {
    pub status: T,
    pub style: StatusStyle,
    pub label: String,
}

/// Ordered mapping from status to style and label.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct StatusPalette<T> {
    entries: Vec<PaletteEntry<T>>,
}

impl<T: Clone + Eq> StatusPalette<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a status, or update its style and label in place if it is
    /// already present (keeping its original position in the order).
    pub fn add_status(&mut self, status: T, style: StatusStyle, label: impl Into<String>) {
        let label = label.into();
        match self.entries.iter_mut().find(|entry| entry.status == status) {
            Some(entry) => {
                entry.style = style;
                entry.label = label;
            }
            None => self.entries.push(PaletteEntry {
                status,
                style,
                label,
            }),
        }
    }

    /// Builder form of [`add_status`](Self::add_status).
    pub fn with_status(mut self, status: T, style: StatusStyle, label: impl Into<String>) -> Self {
        self.add_status(status, style, label);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// The default status: the first entry in definition order.
    pub fn default_status(&self) -> Option<&T> {
        self.entries.first().map(|entry| &entry.status)
    }

    /// Statuses in definition order; this is the cycle order.
    pub fn status_order(&self) -> Vec<T> {
        self.entries.iter().map(|entry| entry.status.clone()).collect()
    }

    /// All entries in definition order.
    pub fn entries(&self) -> &[PaletteEntry<T>] {
        &self.entries
    }

    pub fn contains(&self, status: &T) -> bool {
        self.entries.iter().any(|entry| entry.status == *status)
    }

    /// Style for a status, `None` when the status is not in the palette.
    pub fn style(&self, status: &T) -> Option<&StatusStyle> {
        self.entries
            .iter()
            .find(|entry| entry.status == *status)
            .map(|entry| &entry.style)
    }

    /// Display label for a status, `None` when the status is not in the
    /// palette.
    pub fn label(&self, status: &T) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.status == *status)
            .map(|entry| entry.label.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> StatusPalette<&'static str> {
        StatusPalette::new()
            .with_status("healthy", StatusStyle::outline("#4CAF50"), "Healthy")
            .with_status("decayed", StatusStyle::outline("#B71C1C"), "Decayed")
    }

    #[test]
    fn first_entry_is_default() {
        assert_eq!(palette().default_status(), Some(&"healthy"));
        assert!(StatusPalette::<&str>::new().default_status().is_none());
    }

    #[test]
    fn order_is_definition_order() {
        assert_eq!(palette().status_order(), vec!["healthy", "decayed"]);
    }

    #[test]
    fn missing_status_lookups_are_none() {
        let palette = palette();
        assert!(palette.style(&"unknown").is_none());
        assert!(palette.label(&"unknown").is_none());
        assert!(!palette.contains(&"unknown"));
    }

    #[test]
    fn re_adding_keeps_position() {
        let mut palette = palette();
        palette.add_status("healthy", StatusStyle::outline("#000"), "Sound");
        assert_eq!(palette.default_status(), Some(&"healthy"));
        assert_eq!(palette.label(&"healthy"), Some("Sound"));
        assert_eq!(palette.len(), 2);
    }
}
