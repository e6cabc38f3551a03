use serde::Deserialize;

/// Key bindings configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct KeyBindingsConfig {
    // Global keys
    key_quit: Option<char>,

    // Navigation keys
    key_down: Option<char>,
    key_up: Option<char>,

    // History actions
    key_compare: Option<char>,
    key_dismiss_alert: Option<char>,
}

impl KeyBindingsConfig {
    pub fn quit(&self) -> char {
        self.key_quit.unwrap_or('q')
    }

    pub fn down(&self) -> char {
        self.key_down.unwrap_or('j')
    }

    pub fn up(&self) -> char {
        self.key_up.unwrap_or('k')
    }

    pub fn compare(&self) -> char {
        self.key_compare.unwrap_or('c')
    }

    pub fn dismiss_alert(&self) -> char {
        self.key_dismiss_alert.unwrap_or('x')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let keys = KeyBindingsConfig::default();
        assert_eq!(keys.quit(), 'q');
        assert_eq!(keys.down(), 'j');
        assert_eq!(keys.up(), 'k');
        assert_eq!(keys.compare(), 'c');
        assert_eq!(keys.dismiss_alert(), 'x');
    }

    #[test]
    fn test_overridden_binding() {
        let keys: KeyBindingsConfig =
            toml::from_str("key_compare = \"d\"").expect("bindings should parse");
        assert_eq!(keys.compare(), 'd');
        // Untouched bindings keep their defaults
        assert_eq!(keys.quit(), 'q');
    }
}
