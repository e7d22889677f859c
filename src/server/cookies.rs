//! Cookie helpers for the preference endpoints

use axum_extra::extract::cookie::{Cookie, CookieJar};
use indexmap::IndexMap;
use serde_json::Value;

/// Flat JSON object whose entries all become cookies
pub type CookieBag = IndexMap<String, Value>;

/// String form a JSON value is stored under
///
/// Strings are stored verbatim; every other value is stored as its JSON
/// text (`true`, `1.5`, `null`, `[1,2]`).
pub fn coerce_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Build a cookie scoped to `path`
///
/// The jar percent-encodes names and values when it emits `Set-Cookie`.
pub fn scoped_cookie(
    name: impl Into<String>,
    value: impl Into<String>,
    path: &str,
) -> Cookie<'static> {
    let name: String = name.into();
    let value: String = value.into();
    Cookie::build((name, value)).path(path.to_string()).build()
}

/// Add one cookie per bag entry, in bag order
pub fn add_bag(mut jar: CookieJar, bag: CookieBag, path: &str) -> CookieJar {
    for (name, value) in bag {
        let value = coerce_value(&value);
        tracing::debug!("Setting cookie {}={}", name, value);
        jar = jar.add(scoped_cookie(name, value, path));
    }
    jar
}

/// Read a boolean flag cookie; anything but `true` reads as false
pub fn read_flag(jar: &CookieJar, name: &str) -> bool {
    jar.get(name)
        .map(|cookie| cookie.value().trim() == "true")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coerce_value() {
        assert_eq!(coerce_value(&json!("plain")), "plain");
        assert_eq!(coerce_value(&json!(true)), "true");
        assert_eq!(coerce_value(&json!(42)), "42");
        assert_eq!(coerce_value(&json!(null)), "null");
        assert_eq!(coerce_value(&json!([1, 2])), "[1,2]");
    }

    #[test]
    fn test_scoped_cookie() {
        let cookie = scoped_cookie("darkMode", "true", "/");
        assert_eq!(cookie.name(), "darkMode");
        assert_eq!(cookie.value(), "true");
        assert_eq!(cookie.path(), Some("/"));
    }

    #[test]
    fn test_add_bag() {
        let bag: CookieBag = serde_json::from_value(json!({ "a": "1", "b": false })).unwrap();
        let jar = add_bag(CookieJar::new(), bag, "/");

        let a = jar.get("a").unwrap();
        assert_eq!(a.value(), "1");
        assert_eq!(a.path(), Some("/"));
        assert_eq!(jar.get("b").unwrap().value(), "false");
    }

    #[test]
    fn test_read_flag() {
        let jar = CookieJar::new();
        assert!(!read_flag(&jar, "darkMode"));

        let jar = jar.add(scoped_cookie("darkMode", "true", "/"));
        assert!(read_flag(&jar, "darkMode"));

        let jar = jar.add(scoped_cookie("darkMode", "yes", "/"));
        assert!(!read_flag(&jar, "darkMode"));
    }
}
