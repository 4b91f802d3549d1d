//! Ambient theme scopes as an explicit tree of positions.
//!
//! A [`Scope`] is a position in a component tree. Positions created with
//! [`Scope::provide`] bind a fresh [`ThemeStore`]; positions created with
//! [`Scope::child`] bind nothing and only pass the enclosing binding through.
//! [`Scope::read`] resolves the nearest enclosing binding, so an inner `provide`
//! shadows every outer one for its subtree.

use std::iter;
use std::rc::Rc;

use tracing::trace;

use crate::errors::ScopeError;
use crate::store::{Subscription, ThemeStore};
use crate::theme::Theme;

struct Node {
    parent: Option<Rc<Node>>,
    binding: Option<ThemeStore>,
    depth: usize,
}

#[derive(Clone)]
pub struct Scope {
    node: Rc<Node>,
}

impl Scope {
    /// The top of a tree. Nothing is bound here.
    pub fn root() -> Self {
        Self {
            node: Rc::new(Node {
                parent: None,
                binding: None,
                depth: 0,
            }),
        }
    }

    fn descend(&self, binding: Option<ThemeStore>) -> Self {
        Self {
            node: Rc::new(Node {
                parent: Some(self.node.clone()),
                binding,
                depth: self.node.depth + 1,
            }),
        }
    }

    /// Creates a nested position holding its own theme, initialised to `initial`.
    ///
    /// ```
    /// use themescope::scope::Scope;
    /// use themescope::theme::Theme;
    ///
    /// let scope = Scope::root().provide(Theme::Light);
    /// let view = scope.child().child().read().unwrap();
    /// assert_eq!(view.value, Theme::Light);
    /// view.mutate.mutate();
    /// assert_eq!(scope.read().unwrap().value, Theme::Dark);
    /// ```
    pub fn provide(&self, initial: Theme) -> Self {
        let scope = self.descend(Some(ThemeStore::new(initial)));
        trace!(depth = scope.node.depth, %initial, "theme scope created");
        scope
    }

    /// Creates a nested position that binds nothing.
    pub fn child(&self) -> Self {
        self.descend(None)
    }

    /// Number of ancestors between this position and the root.
    pub fn depth(&self) -> usize {
        self.node.depth
    }

    /// Whether this position itself binds a theme.
    pub fn is_provider(&self) -> bool {
        self.node.binding.is_some()
    }

    /// The store of the nearest enclosing binding, if any.
    pub fn store(&self) -> Option<ThemeStore> {
        iter::successors(Some(&*self.node), |node| node.parent.as_deref())
            .find_map(|node| node.binding.clone())
    }

    /// Resolves the nearest enclosing binding and returns its current value.
    pub fn read(&self) -> Result<ThemeView, ScopeError> {
        let store = self.store().ok_or(ScopeError::NoEnclosingScope)?;
        let view = ThemeView::from_store(store);
        trace!(depth = self.node.depth, value = %view.value, "theme scope read");
        Ok(view)
    }

    /// Whether both handles are the same tree position.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.node, &other.node)
    }

    /// Subscribes `listener` to the nearest enclosing binding.
    pub fn subscribe(
        &self,
        listener: impl Fn(Theme) + 'static,
    ) -> Result<Subscription, ScopeError> {
        let store = self.store().ok_or(ScopeError::NoEnclosingScope)?;
        Ok(store.subscribe(listener))
    }
}

impl PartialEq for Scope {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl std::fmt::Debug for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scope")
            .field("depth", &self.node.depth)
            .field("provider", &self.is_provider())
            .finish()
    }
}

/// What a reader gets from a scope: the value at read time and the bound mutator.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeView {
    pub value: Theme,
    pub mutate: Mutator,
}

impl ThemeView {
    fn from_store(store: ThemeStore) -> Self {
        Self {
            value: store.get(),
            mutate: Mutator { store },
        }
    }
}

/// The single entry point for changing a scope's theme.
#[derive(Debug, Clone, PartialEq)]
pub struct Mutator {
    store: ThemeStore,
}

impl Mutator {
    /// Toggles the bound theme once and returns the new value.
    pub fn mutate(&self) -> Theme {
        self.store.toggle()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::style::toggle_label;

    #[test]
    fn test_read_outside_scope_fails_fast() {
        let root = Scope::root();
        assert_eq!(root.read().unwrap_err(), ScopeError::NoEnclosingScope);
        assert_eq!(
            root.child().child().read().unwrap_err(),
            ScopeError::NoEnclosingScope
        );
        assert!(root.subscribe(|_| {}).is_err());
    }

    #[test]
    fn test_scope_equality_is_identity() {
        let root = Scope::root();
        let scope = root.provide(Theme::Light);
        assert_eq!(scope, scope.clone());
        assert_ne!(scope, root.provide(Theme::Light));
        assert_ne!(root.child(), root.child());
    }

    #[test]
    fn test_toggle_scenario() {
        let leaf = Scope::root().provide(Theme::initialize()).child();

        let view = leaf.read().unwrap();
        assert_eq!(view.value, Theme::Light);
        assert_eq!(toggle_label(view.value), "Toggle to Dark Mode");

        view.mutate.mutate();
        let view = leaf.read().unwrap();
        assert_eq!(view.value, Theme::Dark);
        assert_eq!(toggle_label(view.value), "Toggle to Light Mode");

        view.mutate.mutate();
        assert_eq!(leaf.read().unwrap().value, Theme::Light);
    }

    #[test]
    fn test_read_is_current_not_a_snapshot() {
        let scope = Scope::root().provide(Theme::Light);
        let stale = scope.read().unwrap();
        stale.mutate.mutate();
        assert_eq!(stale.value, Theme::Light);
        assert_eq!(scope.read().unwrap().value, Theme::Dark);
    }

    #[test]
    fn test_propagation_is_depth_independent() {
        let provider = Scope::root().provide(Theme::Light);
        let shallow = provider.child();
        let deep = (0..32).fold(provider.child(), |scope, _| scope.child());
        assert_eq!(deep.depth(), shallow.depth() + 32);

        for _ in 0..3 {
            assert_eq!(shallow.read().unwrap().value, deep.read().unwrap().value);
            deep.read().unwrap().mutate.mutate();
        }
        assert_eq!(shallow.read().unwrap().value, Theme::Dark);
    }

    #[test]
    fn test_inner_scope_shadows_outer() {
        let outer = Scope::root().provide(Theme::Light);
        let inner = outer.child().provide(Theme::Dark);
        let inner_reader = inner.child().child();
        let outer_reader = outer.child();

        assert_eq!(inner_reader.read().unwrap().value, Theme::Dark);
        assert_eq!(outer_reader.read().unwrap().value, Theme::Light);

        outer_reader.read().unwrap().mutate.mutate();
        assert_eq!(outer_reader.read().unwrap().value, Theme::Dark);
        assert_eq!(inner_reader.read().unwrap().value, Theme::Dark);

        inner_reader.read().unwrap().mutate.mutate();
        assert_eq!(inner_reader.read().unwrap().value, Theme::Light);
        assert_eq!(outer_reader.read().unwrap().value, Theme::Dark);
    }

    #[test]
    fn test_shadowing_with_equal_initial_values() {
        let outer = Scope::root().provide(Theme::Light);
        let inner = outer.provide(Theme::Light);

        let outer_store = outer.store().unwrap();
        let inner_store = inner.child().store().unwrap();
        assert!(!outer_store.ptr_eq(&inner_store));
    }

    #[test]
    fn test_sibling_scopes_are_independent() {
        let root = Scope::root();
        let left = root.provide(Theme::Light);
        let right = root.provide(Theme::Light);

        left.child().read().unwrap().mutate.mutate();
        assert_eq!(left.read().unwrap().value, Theme::Dark);
        assert_eq!(right.read().unwrap().value, Theme::Light);
    }

    #[test]
    fn test_subscribed_readers_reevaluate_on_mutate() {
        let scope = Scope::root().provide(Theme::Light);
        let reader = scope.child().child();
        let labels = std::rc::Rc::new(RefCell::new(Vec::new()));

        let sink = labels.clone();
        let evaluator = reader.clone();
        let subscription = reader
            .subscribe(move |_| {
                let view = evaluator.read().unwrap();
                sink.borrow_mut().push(toggle_label(view.value));
            })
            .unwrap();

        reader.read().unwrap().mutate.mutate();
        assert_eq!(*labels.borrow(), vec!["Toggle to Light Mode"]);

        drop(subscription);
        reader.read().unwrap().mutate.mutate();
        assert_eq!(labels.borrow().len(), 1);
    }

    #[test]
    fn test_provider_flags() {
        let root = Scope::root();
        assert!(!root.is_provider());
        assert!(root.provide(Theme::Dark).is_provider());
        assert!(!root.provide(Theme::Dark).child().is_provider());
    }
}
