//! Persisted layout preference and the session store it lives in.

mod store;

pub use store::{FileStore, MemoryStore, SessionStore};

use serde::Serialize;
use serde_json::Value;

use crate::sizes::SplitSizes;

/// What survives a reload within one session: the remembered pane sizes
/// and whether the instructions pane was collapsed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PersistedLayout {
    pub sizes: SplitSizes,
    pub collapsed: bool,
}

#[derive(Serialize)]
struct Wire {
    sizes: [f64; 2],
    collapsed: bool,
}

impl PersistedLayout {
    pub fn new(sizes: SplitSizes, collapsed: bool) -> Self {
        Self { sizes, collapsed }
    }

    /// Defaults for a session with nothing stored.
    pub fn fallback(defaults: SplitSizes) -> Self {
        Self {
            sizes: defaults,
            collapsed: false,
        }
    }

    /// Decode a stored blob. Never fails: anything malformed yields
    /// [`PersistedLayout::fallback`] as a whole. `sizes` must be a
    /// two-element array of finite numbers with a positive sum; `collapsed`
    /// counts only when it is literally `true`.
    pub fn decode(raw: &str, defaults: SplitSizes) -> Self {
        let Ok(value) = serde_json::from_str::<Value>(raw) else {
            return Self::fallback(defaults);
        };
        let Some(sizes) = value
            .get("sizes")
            .and_then(Value::as_array)
            .and_then(|pair| match pair.as_slice() {
                [left, right] => SplitSizes::try_normalize(left.as_f64()?, right.as_f64()?),
                _ => None,
            })
        else {
            return Self::fallback(defaults);
        };
        let collapsed = matches!(value.get("collapsed"), Some(Value::Bool(true)));

        Self { sizes, collapsed }
    }

    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&Wire {
            sizes: self.sizes.as_array(),
            collapsed: self.collapsed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(raw: &str) -> PersistedLayout {
        PersistedLayout::decode(raw, SplitSizes::DEFAULT)
    }

    #[test]
    fn encodes_sizes_as_array() {
        let layout = PersistedLayout::new(SplitSizes::normalize(30.0, 70.0), true);
        assert_eq!(
            layout.encode().unwrap(),
            r#"{"sizes":[30.0,70.0],"collapsed":true}"#
        );
    }

    #[test]
    fn decodes_what_it_encodes() {
        let layout = PersistedLayout::new(SplitSizes::normalize(40.0, 60.0), false);
        assert_eq!(decode(&layout.encode().unwrap()), layout);
    }

    #[test]
    fn rescales_out_of_range_sizes() {
        let layout = decode(r#"{"sizes":[200,300],"collapsed":false}"#);
        assert!((layout.sizes.left() - 40.0).abs() < 1e-9);
    }

    #[test]
    fn malformed_payloads_yield_defaults() {
        let payloads = [
            "",
            "not json",
            "null",
            "[]",
            "{}",
            r#"{"sizes":"25,75"}"#,
            r#"{"sizes":{"left":25,"right":75}}"#,
            r#"{"sizes":[25]}"#,
            r#"{"sizes":[25,75,0]}"#,
            r#"{"sizes":["25","75"]}"#,
            r#"{"sizes":[null,75]}"#,
            r#"{"sizes":[0,0]}"#,
            r#"{"sizes":[-50,-50]}"#,
            r#"{"sizes":[1e400,1]}"#,
        ];
        for raw in payloads {
            let layout = decode(raw);
            assert_eq!(layout.sizes, SplitSizes::DEFAULT, "payload {raw:?}");
            assert!(!layout.collapsed, "payload {raw:?}");
        }
    }

    #[test]
    fn collapsed_must_be_literal_true() {
        for raw in [
            r#"{"sizes":[25,75],"collapsed":"true"}"#,
            r#"{"sizes":[25,75],"collapsed":1}"#,
            r#"{"sizes":[25,75],"collapsed":null}"#,
            r#"{"sizes":[25,75],"collapsed":false}"#,
            r#"{"sizes":[25,75]}"#,
        ] {
            let layout = decode(raw);
            assert!(!layout.collapsed, "payload {raw:?}");
            assert_eq!(layout.sizes, SplitSizes::DEFAULT);
        }
        assert!(decode(r#"{"sizes":[25,75],"collapsed":true}"#).collapsed);
    }

    #[test]
    fn bad_sizes_discard_collapsed_flag() {
        for raw in [
            r#"{"sizes":[0,0],"collapsed":true}"#,
            r#"{"sizes":[25],"collapsed":true}"#,
            r#"{"collapsed":true}"#,
        ] {
            assert_eq!(
                decode(raw),
                PersistedLayout::fallback(SplitSizes::DEFAULT),
                "payload {raw:?}"
            );
        }
    }
}
