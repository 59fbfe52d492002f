//! Scoped ambient configuration
//!
//! An [`Environment`] is an immutable chain of scopes passed down the render
//! call. Each scope may override any number of [`EnvironmentKey`]s; a lookup
//! walks from the innermost scope outward and falls back to the key's default.
//!
//! ```rust
//! use floatfield_core::environment::{Environment, EnvironmentKey};
//!
//! struct Dense;
//! impl EnvironmentKey for Dense {
//!     type Value = bool;
//!     fn default_value() -> bool { false }
//! }
//!
//! let root = Environment::new();
//! let inner = root.with::<Dense>(true);
//!
//! assert!(!root.get::<Dense>());
//! assert!(inner.get::<Dense>());
//! assert!(!inner.with::<Dense>(false).get::<Dense>());
//! ```

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;

/// A typed ambient value with a default
pub trait EnvironmentKey: 'static {
    /// The value stored under this key
    type Value: Clone + Send + Sync + 'static;

    /// Value used when no enclosing scope overrides the key
    fn default_value() -> Self::Value;
}

struct Scope {
    values: FxHashMap<TypeId, Arc<dyn Any + Send + Sync>>,
    parent: Option<Arc<Scope>>,
}

/// Chain of ambient-value scopes, innermost first
#[derive(Clone, Default)]
pub struct Environment {
    scope: Option<Arc<Scope>>,
}

impl Environment {
    /// The empty root environment (every key at its default)
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `K`, falling back to its default
    pub fn get<K: EnvironmentKey>(&self) -> K::Value {
        self.lookup::<K>().unwrap_or_else(K::default_value)
    }

    /// Resolve `K` only if some enclosing scope overrides it
    pub fn lookup<K: EnvironmentKey>(&self) -> Option<K::Value> {
        let key = TypeId::of::<K>();
        let mut scope = self.scope.as_deref();
        while let Some(current) = scope {
            if let Some(value) = current.values.get(&key) {
                return value.downcast_ref::<K::Value>().cloned();
            }
            scope = current.parent.as_deref();
        }
        None
    }

    /// Whether any enclosing scope overrides `K`
    pub fn is_set<K: EnvironmentKey>(&self) -> bool {
        self.lookup::<K>().is_some()
    }

    /// A child environment that overrides `K` for everything rendered inside it
    pub fn with<K: EnvironmentKey>(&self, value: K::Value) -> Environment {
        let mut values: FxHashMap<TypeId, Arc<dyn Any + Send + Sync>> = FxHashMap::default();
        values.insert(TypeId::of::<K>(), Arc::new(value));
        Environment {
            scope: Some(Arc::new(Scope {
                values,
                parent: self.scope.clone(),
            })),
        }
    }

    /// Number of scopes between here and the root
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut scope = self.scope.as_deref();
        while let Some(current) = scope {
            depth += 1;
            scope = current.parent.as_deref();
        }
        depth
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("depth", &self.depth())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Accent;
    impl EnvironmentKey for Accent {
        type Value = &'static str;
        fn default_value() -> Self::Value {
            "cyan"
        }
    }

    struct ShowClear;
    impl EnvironmentKey for ShowClear {
        type Value = bool;
        fn default_value() -> Self::Value {
            true
        }
    }

    #[test]
    fn test_defaults_without_override() {
        let env = Environment::new();
        assert_eq!(env.get::<Accent>(), "cyan");
        assert!(env.get::<ShowClear>());
        assert!(!env.is_set::<Accent>());
        assert_eq!(env.depth(), 0);
    }

    #[test]
    fn test_nearest_override_wins() {
        let outer = Environment::new().with::<Accent>("red");
        let inner = outer.with::<Accent>("green");

        assert_eq!(outer.get::<Accent>(), "red");
        assert_eq!(inner.get::<Accent>(), "green");
        assert_eq!(inner.depth(), 2);
    }

    #[test]
    fn test_unrelated_keys_inherit_through_scopes() {
        let env = Environment::new()
            .with::<ShowClear>(false)
            .with::<Accent>("red");

        assert!(!env.get::<ShowClear>());
        assert_eq!(env.get::<Accent>(), "red");
    }

    #[test]
    fn test_sibling_scopes_do_not_leak() {
        let parent = Environment::new();
        let left = parent.with::<ShowClear>(false);
        let right = parent.with::<Accent>("blue");

        assert!(!left.get::<ShowClear>());
        assert!(right.get::<ShowClear>());
        assert_eq!(left.get::<Accent>(), "cyan");
    }
}
