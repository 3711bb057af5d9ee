//! Built-in module components: the statically declared manifest.

#[cfg(test)]
#[path = "components_test.rs"]
mod components_test;

use std::sync::Arc;

use serde_json::Value;

use crate::module::ModuleRecord;
use crate::registry::Renderable;

/// All components available out of the box, in registration order.
#[must_use]
pub fn builtin_manifest() -> Vec<Arc<dyn Renderable>> {
    vec![Arc::new(ImageModule), Arc::new(TextModule)]
}

/// An image placed on the canvas; `src` and `alt` come from the prop data.
pub struct ImageModule;

impl Renderable for ImageModule {
    fn component_name(&self) -> &'static str {
        "ImageModule"
    }

    fn render(&self, record: &ModuleRecord) -> String {
        let props = record.props.component_props();
        let src = props.get("src").and_then(Value::as_str).unwrap_or("");
        let alt = props.get("alt").and_then(Value::as_str).unwrap_or("");
        format!(
            r#"<img src="{src}" alt="{alt}" width="{}" height="{}">"#,
            record.props.width, record.props.height
        )
    }
}

/// A block of editable text; content comes from the `data` prop.
pub struct TextModule;

impl Renderable for TextModule {
    fn component_name(&self) -> &'static str {
        "TextModule"
    }

    fn render(&self, record: &ModuleRecord) -> String {
        let props = record.props.component_props();
        let text = props.get("data").and_then(Value::as_str).unwrap_or("");
        format!(r#"<div class="text-module">{text}</div>"#)
    }
}
