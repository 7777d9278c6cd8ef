use crate::pieces::GlyphStyle;
use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct Config {
    pub log_filter: String,
    pub glyphs: GlyphStyle,
    /// Serialized game to resume instead of the standard setup.
    pub start_json: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            log_filter: lookup("CHESS_LOG").unwrap_or_else(|| "info".to_string()),
            glyphs: match lookup("CHESS_GLYPHS").as_deref() {
                Some("ascii") | Some("ASCII") => GlyphStyle::Ascii,
                _ => GlyphStyle::Unicode,
            },
            start_json: lookup("CHESS_START")
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let c = Config::from_lookup(|_| None);
        assert_eq!(c.log_filter, "info");
        assert_eq!(c.glyphs, GlyphStyle::Unicode);
        assert_eq!(c.start_json, None);
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("CHESS_LOG", "chessgame=debug"),
            ("CHESS_GLYPHS", "ascii"),
            ("CHESS_START", "saved.json"),
        ]
        .into_iter()
        .collect();
        let c = Config::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(c.log_filter, "chessgame=debug");
        assert_eq!(c.glyphs, GlyphStyle::Ascii);
        assert_eq!(c.start_json, Some(PathBuf::from("saved.json")));
    }
}
