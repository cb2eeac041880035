use crate::colour::Colour;
use derive_more::From;
use std::collections::BTreeMap;

/// A single option value in a [Style]
#[derive(Clone, PartialEq, Debug, From)]
pub enum StyleValue {
    Number(f32),
    Text(String),
    Colour(Colour),
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        StyleValue::Number(value as f32)
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Text(value.to_string())
    }
}

/// A mapping of named drawing options (`font-size`, `color`, `font-family`, ...)
/// to values. Layout code never looks inside a style; it is handed through
/// untouched from the boxes that own it to the [Renderer](crate::Renderer),
/// which decides which options it understands.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Style {
    options: BTreeMap<String, StyleValue>,
}

impl Style {
    pub fn new() -> Style {
        Style::default()
    }

    /// Builder-style variant of [Style::set]
    pub fn with<K: Into<String>, V: Into<StyleValue>>(mut self, key: K, value: V) -> Style {
        self.set(key, value);
        self
    }

    /// Set an option, replacing any previous value for the same key
    pub fn set<K: Into<String>, V: Into<StyleValue>>(&mut self, key: K, value: V) {
        self.options.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.options.get(key)
    }

    /// Look up a numeric option
    pub fn number(&self, key: &str) -> Option<f32> {
        match self.options.get(key)? {
            StyleValue::Number(n) => Some(*n),
            StyleValue::Text(s) => s.parse().ok(),
            StyleValue::Colour(_) => None,
        }
    }

    /// Look up a colour option, accepting either a [Colour] or a hex string
    pub fn colour(&self, key: &str) -> Option<Colour> {
        match self.options.get(key)? {
            StyleValue::Colour(c) => Some(*c),
            StyleValue::Text(s) => Colour::from_hex(s),
            StyleValue::Number(_) => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.options.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<StyleValue>> FromIterator<(K, V)> for Style {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut style = Style::new();
        for (k, v) in iter {
            style.set(k, v);
        }
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colours;

    #[test]
    fn typed_lookups() {
        let style = Style::new()
            .with("font-size", 14.0)
            .with("color", "#0000ff")
            .with("fill", colours::RED)
            .with("font-family", "Courier");

        assert_eq!(style.number("font-size"), Some(14.0));
        assert_eq!(style.colour("color"), Some(colours::BLUE));
        assert_eq!(style.colour("fill"), Some(colours::RED));
        assert_eq!(style.number("font-family"), None);
        assert_eq!(style.number("missing"), None);
    }

    #[test]
    fn later_values_replace_earlier_ones() {
        let style: Style = [("font-size", 10.0), ("font-size", 12.0)].into_iter().collect();
        assert_eq!(style.number("font-size"), Some(12.0));
        assert_eq!(style.iter().count(), 1);
    }
}
