use std::sync::Arc;

use dashmap::DashMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
#[error("An error occurred while trying to create regex: {0}")]
pub struct InvalidRegexError(#[from] regex::Error);

/// Compiled regexes keyed by their source pattern. Shared between threads;
/// the first caller for a pattern compiles it, everyone after gets the `Arc`.
pub struct RegexCache {
    cache: DashMap<String, Arc<regex::Regex>>
}

impl RegexCache {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: DashMap::with_capacity(capacity),
        }
    }

    pub fn get_regex(&self, pattern: &str) -> Result<Arc<regex::Regex>, InvalidRegexError> {
        if let Some(regex) = self.cache.get(pattern) {
            Ok(regex.value().clone())
        } else {
            let entry = self.cache.entry(pattern.to_string()).or_try_insert_with(|| {
                regex::Regex::new(pattern).map(Arc::new)
            })?;
            Ok(entry.value().clone())
        }
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::RegexCache;

    #[test]
    fn returns_same_instance_for_same_pattern() {
        let cache = RegexCache::with_capacity(4);
        let first = cache.get_regex(r"\d{3}").unwrap();
        let second = cache.get_regex(r"\d{3}").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn invalid_pattern_is_not_cached() {
        let cache = RegexCache::with_capacity(4);
        assert!(cache.get_regex("[12").is_err());
        assert_eq!(cache.len(), 0);
    }
}
