//! Thin wrappers around browser APIs reached through `document::eval`.
//!
//! Each listener returns the live `Eval`; callers loop on `recv()` to get
//! one message per browser event.

use dioxus::document::{self, Eval};
use shared_types::RevealConfig;

/// Encode a Rust string as a JavaScript string literal.
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

/// Smoothly scroll the element with `id` to the top of the viewport, if
/// such an element exists.
pub fn scroll_into_view(id: &str) {
    document::eval(&format!(
        r#"
        (function() {{
            var target = document.getElementById({id});
            if (target) {{
                target.scrollIntoView({{ behavior: 'smooth', block: 'start' }});
            }}
        }})();
        "#,
        id = js_string(id),
    ));
}

/// Report the window scroll offset and every section's top edge on each
/// scroll. Messages deserialize into `nav::ScrollSnapshot`.
pub fn watch_scroll() -> Eval {
    document::eval(
        r#"
        window.addEventListener('scroll', function() {
            var sections = Array.prototype.map.call(
                document.querySelectorAll('section'),
                function(section) {
                    return { id: section.getAttribute('id'), top: section.offsetTop };
                }
            );
            dioxus.send({ scroll_y: window.scrollY, sections: sections });
        }, { passive: true });
        await new Promise(function() {});
        "#,
    )
}

/// Send the `key` of every keydown on the document.
pub fn watch_keydown() -> Eval {
    document::eval(
        r#"
        document.addEventListener('keydown', function(e) {
            dioxus.send(e.key);
        });
        await new Promise(function() {});
        "#,
    )
}

/// Observe elements matching `selector` and send each one's id the first
/// time it enters the viewport.
pub fn observe_reveal(selector: &str, config: &RevealConfig) -> Eval {
    document::eval(&format!(
        r#"
        var observer = new IntersectionObserver(function(entries) {{
            entries.forEach(function(entry) {{
                if (entry.isIntersecting) {{
                    dioxus.send(entry.target.id);
                    observer.unobserve(entry.target);
                }}
            }});
        }}, {{ threshold: {threshold}, rootMargin: {margin} }});
        document.querySelectorAll({selector}).forEach(function(el) {{
            observer.observe(el);
        }});
        await new Promise(function() {{}});
        "#,
        threshold = config.threshold,
        margin = js_string(&config.root_margin),
        selector = js_string(selector),
    ))
}

/// Write `text` to the system clipboard. Resolves to whether it succeeded.
pub async fn write_clipboard(text: &str) -> bool {
    let mut eval = document::eval(&format!(
        r#"
        try {{
            await navigator.clipboard.writeText({text});
            dioxus.send(true);
        }} catch (e) {{
            dioxus.send(false);
        }}
        "#,
        text = js_string(text),
    ));
    match eval.recv::<bool>().await {
        Ok(copied) => copied,
        Err(e) => {
            tracing::warn!(error = ?e, "clipboard bridge failed");
            false
        }
    }
}
