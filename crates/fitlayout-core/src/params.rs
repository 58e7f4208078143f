//! Service invocation parameter maps
//!
//! Parameters travel as a JSON object from string keys to scalar or
//! nested values. Default maps are constructed fresh on every call so
//! no state can leak between invocations; callers merge their own
//! overrides on top.

use serde_json::{json, Map, Value};

/// A service parameter map.
pub type ParamMap = Map<String, Value>;

/// Merge caller overrides onto a defaults map.
///
/// Returns a fresh map; on key collision the override wins.
pub fn merge_params(defaults: ParamMap, overrides: ParamMap) -> ParamMap {
    let mut merged = defaults;
    for (key, value) in overrides {
        merged.insert(key, value);
    }
    merged
}

/// Defaults for a page-rendering invocation.
pub fn render_defaults(url: &str, width: u32, height: u32) -> ParamMap {
    let mut params = ParamMap::new();
    params.insert("url".to_string(), json!(url));
    params.insert("width".to_string(), json!(width));
    params.insert("height".to_string(), json!(height));
    params
}

/// Defaults for a page-segmentation invocation.
pub fn segmentation_defaults(preserve_aux_areas: bool) -> ParamMap {
    let mut params = ParamMap::new();
    params.insert("preserveAuxAreas".to_string(), json!(preserve_aux_areas));
    params
}
