use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use crate::Value;

/// Predicate stored under a name. Called with the value being checked and the
/// `options` of the referencing [`RegisteredRule`](crate::RegisteredRule).
pub type RuleFn = Arc<dyn Fn(&Value, &Value) -> bool + Send + Sync>;

/// Maps rule names to predicates consulted by `registered` rule nodes.
///
/// Entries are never removed. Registering a name again replaces the earlier
/// predicate for every later evaluation.
#[derive(Clone, Default)]
pub struct Registry {
    rules: HashMap<String, RuleFn>,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `predicate` under `name`, replacing any previous entry.
    pub fn register<F>(&mut self, name: impl Into<String>, predicate: F)
    where
        F: Fn(&Value, &Value) -> bool + Send + Sync + 'static,
    {
        let name = name.into();
        if self.rules.contains_key(&name) {
            tracing::warn!(rule = %name, "overwriting registered validation rule");
        }
        self.rules.insert(name, Arc::new(predicate));
    }

    /// Builder form of [`register`](Self::register).
    #[must_use]
    pub fn with<F>(mut self, name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&Value, &Value) -> bool + Send + Sync + 'static,
    {
        self.register(name, predicate);
        self
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RuleFn> {
        self.rules.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("names", &self.names())
            .finish()
    }
}

static GLOBAL: LazyLock<RwLock<Arc<Registry>>> =
    LazyLock::new(|| RwLock::new(Arc::new(Registry::new())));

// Writers replace entries whole under the write lock, so a poisoned lock still
// guards a consistent map.

/// Snapshot of the process-wide registry. The lock is released on return, so
/// predicates evaluated against the snapshot may register rules or validate
/// recursively.
pub(crate) fn global() -> Arc<Registry> {
    let registry = GLOBAL.read().unwrap_or_else(PoisonError::into_inner);
    Arc::clone(&*registry)
}

pub(crate) fn register_global<F>(name: String, predicate: F)
where
    F: Fn(&Value, &Value) -> bool + Send + Sync + 'static,
{
    let mut registry = GLOBAL.write().unwrap_or_else(PoisonError::into_inner);
    Arc::make_mut(&mut *registry).register(name, predicate);
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::Mutex;

    use tracing_subscriber::fmt::MakeWriter;

    use super::*;

    fn even(v: &Value, _: &Value) -> bool {
        v.as_f64().is_some_and(|n| n % 2.0 == 0.0)
    }

    #[test]
    fn register_and_get() {
        let mut reg = Registry::new();
        reg.register("even-number", even);
        let rule = reg.get("even-number").unwrap();
        assert!(rule(&Value::Int(8), &Value::Null));
        assert!(!rule(&Value::Int(7), &Value::Null));
    }

    #[test]
    fn reregistering_replaces_entry() {
        let reg = Registry::new()
            .with("check", |_, _| false)
            .with("check", |_, _| true);
        assert_eq!(reg.len(), 1);
        assert!(reg.get("check").unwrap()(&Value::Null, &Value::Null));
    }

    #[test]
    fn reregistering_warns_once() {
        #[derive(Clone, Default)]
        struct Captured(Arc<Mutex<Vec<u8>>>);

        impl io::Write for Captured {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        impl<'a> MakeWriter<'a> for Captured {
            type Writer = Captured;

            fn make_writer(&'a self) -> Self::Writer {
                self.clone()
            }
        }

        let logs = Captured::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_ansi(false)
            .finish();

        let reg = tracing::subscriber::with_default(subscriber, || {
            Registry::new()
                .with("check", even)
                .with("other", even)
                .with("check", even)
        });

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert_eq!(
            output.matches("overwriting registered validation rule").count(),
            1,
            "{output}"
        );
        assert!(output.contains("WARN"), "{output}");
        assert!(output.contains("rule=check"), "{output}");
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn options_reach_the_predicate() {
        let reg = Registry::new().with("multiple-of", |v, opts| {
            match (v.as_f64(), opts.as_f64()) {
                (Some(n), Some(m)) => n % m == 0.0,
                _ => false,
            }
        });
        let rule = reg.get("multiple-of").unwrap();
        assert!(rule(&Value::Int(9), &Value::Int(3)));
        assert!(!rule(&Value::Int(9), &Value::Int(4)));
    }

    #[test]
    fn get_missing_returns_none() {
        let reg = Registry::new();
        assert!(reg.get("nonexistent").is_none());
        assert!(!reg.contains("nonexistent"));
    }

    #[test]
    fn names_are_sorted() {
        let reg = Registry::new()
            .with("zip", even)
            .with("email", even)
            .with("phone", even);
        assert_eq!(reg.names(), vec!["email", "phone", "zip"]);
    }

    #[test]
    fn empty_registry() {
        let reg = Registry::new();
        assert!(reg.is_empty());
        assert_eq!(reg.len(), 0);
        assert_eq!(format!("{reg:?}"), "Registry { names: [] }");
    }
}
