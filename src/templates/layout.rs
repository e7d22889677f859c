//! Page layout shared by every HTML page

use crate::config::SiteConfig;
use crate::helpers::html_escape;
use crate::preferences::PreferenceStore;

const KATEX_CSS: &str = "https://cdn.jsdelivr.net/npm/katex@0.16.9/dist/katex.min.css";
const KATEX_JS: &str = "https://cdn.jsdelivr.net/npm/katex@0.16.9/dist/katex.min.js";

/// Renders `math-inline` / `math-display` spans with KaTeX
const MATH_SCRIPT: &str = r#"<script>
document.addEventListener('DOMContentLoaded', function() {
    document.querySelectorAll('.math').forEach(function(el) {
        katex.render(el.textContent, el, {
            displayMode: el.classList.contains('math-display'),
            throwOnError: false
        });
    });
});
</script>"#;

/// Flips the `dark` class and persists the choice through the theme endpoint
const THEME_TOGGLE_SCRIPT: &str = r#"<script>
document.getElementById('theme-toggle').addEventListener('click', function() {
    var darkMode = document.documentElement.classList.toggle('dark');
    fetch('/api/theme', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify({ darkMode: darkMode })
    });
});
</script>"#;

const STYLE: &str = r#"<style>
:root { color-scheme: light; --bg: #fff; --fg: #222; --muted: #666; }
html.dark { color-scheme: dark; --bg: #16181d; --fg: #e4e4e4; --muted: #999; }
body { background: var(--bg); color: var(--fg); max-width: 46rem; margin: 0 auto; padding: 1rem; font-family: system-ui, sans-serif; }
header { display: flex; justify-content: space-between; align-items: center; }
time { color: var(--muted); }
</style>"#;

/// Data the server resolves for the layout before rendering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutData {
    /// Preference read from the theme cookie
    pub dark_mode: bool,
}

/// Layout load hook: seed the preference store from server data
///
/// This only flows cookie → store; the cookie is never written here.
pub fn load(store: &PreferenceStore, data: &LayoutData) {
    store.set(data.dark_mode);
}

/// Wrap a page body in the site layout
pub fn render(config: &SiteConfig, store: &PreferenceStore, title: &str, body: &str) -> String {
    let html_class = if store.get() { r#" class="dark""# } else { "" };

    let page_title = if title.is_empty() || title == config.title {
        html_escape(&config.title)
    } else {
        format!("{} | {}", html_escape(title), html_escape(&config.title))
    };

    let mut head = String::new();
    head.push_str(r#"<meta charset="utf-8">"#);
    head.push_str(r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#);
    head.push_str(&format!("<title>{}</title>", page_title));
    if !config.description.is_empty() {
        head.push_str(&format!(
            r#"<meta name="description" content="{}">"#,
            html_escape(&config.description)
        ));
    }
    if !config.author.is_empty() {
        head.push_str(&format!(
            r#"<meta name="author" content="{}">"#,
            html_escape(&config.author)
        ));
    }
    head.push_str(STYLE);

    let mut scripts = String::from(THEME_TOGGLE_SCRIPT);
    if config.markdown.math {
        head.push_str(&format!(r#"<link rel="stylesheet" href="{}">"#, KATEX_CSS));
        scripts.push_str(&format!(r#"<script defer src="{}"></script>"#, KATEX_JS));
        scripts.push_str(MATH_SCRIPT);
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}"{html_class}>
<head>{head}</head>
<body>
<header><a href="/">{site}</a><button id="theme-toggle" type="button" aria-label="Toggle dark mode">{icon}</button></header>
<main>
{body}
</main>
{scripts}
</body>
</html>
"#,
        lang = html_escape(&config.language),
        html_class = html_class,
        head = head,
        site = html_escape(&config.title),
        icon = if store.get() { "\u{263E}" } else { "\u{2600}" },
        body = body,
        scripts = scripts,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_seeds_store() {
        let store = PreferenceStore::default();
        load(&store, &LayoutData { dark_mode: true });
        assert!(store.get());
        load(&store, &LayoutData { dark_mode: false });
        assert!(!store.get());
    }

    #[test]
    fn test_render_applies_dark_class() {
        let config = SiteConfig::default();
        let store = PreferenceStore::new(true);
        let html = render(&config, &store, "Post", "<p>x</p>");
        assert!(html.contains(r#"<html lang="en" class="dark">"#));
        assert!(html.contains("<title>Post | Blog</title>"));
        assert!(html.contains("<p>x</p>"));
    }

    #[test]
    fn test_render_light_has_no_class() {
        let config = SiteConfig::default();
        let html = render(&config, &PreferenceStore::default(), "", "");
        assert!(html.contains(r#"<html lang="en">"#));
        assert!(html.contains("<title>Blog</title>"));
    }

    #[test]
    fn test_katex_only_with_math() {
        let mut config = SiteConfig::default();
        let store = PreferenceStore::default();
        assert!(render(&config, &store, "", "").contains("katex"));

        config.markdown.math = false;
        assert!(!render(&config, &store, "", "").contains("katex"));
    }
}
