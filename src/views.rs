use std::path::{Path, PathBuf};
use axum::response::Html;
use crate::errors::{AppError, AppResult};

/// HTML templates read from disk on every render.
#[derive(Clone)]
pub struct Templates {
    dir: PathBuf,
}

impl Templates {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self { dir: dir.as_ref().to_path_buf() }
    }

    /// Fills `{{name}}` placeholders from `vars` in a single pass. Values are inserted as given,
    /// so anything user-supplied must go through [`escape`] first. Unknown placeholders are kept.
    pub fn render(&self, name: &str, vars: &[(&str, &str)]) -> AppResult<Html<String>> {
        let path = self.dir.join(name);
        let template = std::fs::read_to_string(&path).map_err(|e| {
            tracing::error!("Failed to read template {}: {}", path.display(), e);
            AppError::File(e)
        })?;
        Ok(Html(fill(&template, vars)))
    }
}

fn fill(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };
        let key = after[..end].trim();
        match vars.iter().find(|(name, _)| *name == key) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    out
}

pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_known_placeholders_once() {
        let html = fill("<p>{{ name }} / {{other}} / {{name}}</p>", &[("name", "{{other}}")]);
        assert_eq!(html, "<p>{{other}} / {{other}} / {{other}}</p>");
    }

    #[test]
    fn unterminated_placeholder_is_left_alone() {
        assert_eq!(fill("a {{b", &[("b", "x")]), "a {{b");
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(escape(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }
}
