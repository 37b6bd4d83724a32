//! Section content documents and fallback lookup.

use serde_json::Value;

/// Read-only display data for one section, as fetched from its content file.
///
/// Any JSON document is accepted. Lookups on a non-object document see no keys,
/// so every field falls back.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentModel {
    doc: Value,
}

impl ContentModel {
    /// Wrap a parsed document.
    pub fn new(doc: Value) -> Self {
        Self { doc }
    }

    /// Parse a document from raw bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes).map(Self::new)
    }

    /// The underlying document.
    pub fn as_value(&self) -> &Value {
        &self.doc
    }

    /// Look up a key. Returns `None` for absent keys or non-object documents.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.doc.as_object().and_then(|map| map.get(key))
    }

    /// Display text for `key`, or `fallback` when the value is absent or falsy.
    ///
    /// Empty strings, zero, `false` and `null` all count as absent here.
    pub fn text_or(&self, key: &str, fallback: &str) -> String {
        self.text(key).unwrap_or_else(|| fallback.to_string())
    }

    /// Display text for `key` when it is present and truthy.
    pub fn text(&self, key: &str) -> Option<String> {
        self.get(key).filter(|v| is_truthy(v)).map(display_text)
    }

    /// Display text for any present, non-null value. Renders nothing otherwise.
    pub fn raw(&self, key: &str) -> String {
        match self.get(key) {
            None | Some(Value::Null) => String::new(),
            Some(v) => display_text(v),
        }
    }

    /// Items of a list-valued field. Anything that is not an array yields no items.
    pub fn list(&self, key: &str) -> Vec<ContentModel> {
        match self.get(key) {
            Some(Value::Array(items)) => items.iter().cloned().map(ContentModel::new).collect(),
            _ => Vec::new(),
        }
    }

    /// Display text of every item in a list-valued field.
    pub fn strings(&self, key: &str) -> Vec<String> {
        match self.get(key) {
            Some(Value::Array(items)) => items.iter().map(display_text).collect(),
            _ => Vec::new(),
        }
    }
}

impl From<Value> for ContentModel {
    fn from(doc: Value) -> Self {
        Self::new(doc)
    }
}

/// Load state of a section's content.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ContentState {
    /// Nothing fetched yet, or the fetch failed. Every field renders its fallback.
    #[default]
    Empty,

    /// Replaced wholesale by a fetched document.
    Loaded(ContentModel),
}

impl ContentState {
    /// Whether a document has been loaded.
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    /// The model to render from. An empty state behaves like `{}`.
    pub fn model(&self) -> &ContentModel {
        static EMPTY: ContentModel = ContentModel { doc: Value::Null };
        match self {
            Self::Empty => &EMPTY,
            Self::Loaded(model) => model,
        }
    }
}

/// Whether a value takes precedence over a fallback.
///
/// `null`, `false`, numeric zero and the empty string are falsy. Everything
/// else is truthy, including empty arrays and objects.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Text a value interpolates to inside markup.
pub fn display_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => {
            if n.is_f64() {
                let f = n.as_f64().unwrap_or_default();
                if f.fract() == 0.0 && f.abs() < 1e21 {
                    // Shortest round-trip digits, zero-padded, no exponent.
                    return if f == 0.0 { "0".to_string() } else { format!("{}", f) };
                }
            }
            n.to_string()
        }
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(display_text).collect(),
        Value::Object(_) => "[object Object]".to_string(),
    }
}
