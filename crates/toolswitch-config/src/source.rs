//! Configuration sources read at query time.

/// Provides named string values to the tool filter.
///
/// Implementations are consulted on every query and must not cache.
pub trait ConfigSource {
    /// Returns the current value for `key`, or `None` if unset.
    fn get(&self, key: &str) -> Option<String>;
}

/// Reads from the process environment.
///
/// Values that are not valid unicode are treated as unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl ConfigSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl<F> ConfigSource for F
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, key: &str) -> Option<String> {
        self(key)
    }
}

/// Checks `primary` first, then `fallback`.
#[derive(Debug, Clone, Default)]
pub struct Layered<P, F> {
    primary: P,
    fallback: F,
}

impl<P, F> Layered<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P: ConfigSource, F: ConfigSource> ConfigSource for Layered<P, F> {
    fn get(&self, key: &str) -> Option<String> {
        self.primary.get(key).or_else(|| self.fallback.get(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_source() {
        let source = |key: &str| (key == "DISABLED_TOOLS").then(|| "RunCheckovScan".to_string());
        assert_eq!(source.get("DISABLED_TOOLS"), Some("RunCheckovScan".into()));
        assert_eq!(source.get("OTHER"), None);
    }

    #[test]
    fn test_layered_prefers_primary() {
        let primary = |key: &str| (key == "A").then(|| "primary".to_string());
        let fallback = |_: &str| Some("fallback".to_string());
        let layered = Layered::new(primary, fallback);
        assert_eq!(layered.get("A"), Some("primary".into()));
        assert_eq!(layered.get("B"), Some("fallback".into()));
    }

    #[test]
    fn test_layered_both_unset() {
        let layered = Layered::new(|_: &str| None::<String>, |_: &str| None::<String>);
        assert_eq!(layered.get("DISABLED_TOOLS"), None);
    }
}
