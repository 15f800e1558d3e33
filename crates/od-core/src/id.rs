use lasso::{Spur, ThreadedRodeo};
use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;

/// Global string interner for element ids: fast comparisons, low memory.
static INTERNER: LazyLock<ThreadedRodeo> = LazyLock::new(ThreadedRodeo::default);

/// Prefix for generated node ids.
pub const NODE_ID_PREFIX: &str = "node";
/// Prefix for generated edge ids.
pub const EDGE_ID_PREFIX: &str = "edge";

/// A lightweight, interned identifier shared by nodes and edges.
/// Internally a `Spur` index: 4 bytes, Copy, Eq, Hash in O(1).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(Spur);

impl ElementId {
    /// Intern a string as an ElementId, or return the existing id if already interned.
    pub fn intern(s: &str) -> Self {
        ElementId(INTERNER.get_or_intern(s))
    }

    /// Resolve back to a string slice.
    pub fn as_str(&self) -> &str {
        INTERNER.resolve(&self.0)
    }

    /// Generate a fresh id: `{prefix}-{millis}-{salt}` with the salt drawn
    /// from [0, 1000). Two calls within the same millisecond can collide;
    /// `GraphStore` retries until the id is unused in the document.
    pub fn generate(prefix: &str) -> Self {
        let salt: u16 = rand::thread_rng().gen_range(0..1000);
        Self::intern(&format!("{prefix}-{}-{salt}", now_millis()))
    }
}

/// Milliseconds since the Unix epoch.
fn now_millis() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

impl fmt::Debug for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for ElementId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ElementId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(ElementId::intern(&s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_roundtrip() {
        let a = ElementId::intern("node-material");
        let b = ElementId::intern("node-material");
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "node-material");
    }

    #[test]
    fn generated_id_format() {
        let id = ElementId::generate(NODE_ID_PREFIX);
        let parts: Vec<&str> = id.as_str().split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "node");
        assert!(parts[1].parse::<u64>().is_ok());
        let salt: u16 = parts[2].parse().expect("numeric salt");
        assert!(salt < 1000);
    }

    #[test]
    fn serde_as_plain_string() {
        let id = ElementId::intern("edge-1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"edge-1\"");
        let back: ElementId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
