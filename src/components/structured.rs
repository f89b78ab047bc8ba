//! JSON-LD structured data embedding

use maud::{Markup, PreEscaped, html};
use serde_json::{Value, json};

/// Schema.org `Person` node.
pub fn person(name: &str) -> Value {
    json!({ "@type": "Person", "name": name })
}

/// Embeds a schema.org document as a `ld+json` script
///
/// Top level `null` fields are dropped. `</` sequences are escaped so string
/// values cannot close the script element early.
pub fn json_ld(data: &Value) -> Markup {
    let mut data = data.clone();
    if let Value::Object(fields) = &mut data {
        fields.retain(|_, value| !value.is_null());
    }

    let body = data.to_string().replace("</", "<\\/");
    html! {
        script type="application/ld+json" { (PreEscaped(body)) }
    }
}
