//! Property system for Horizon Grid.
//!
//! This module provides reactive properties with change detection, plus
//! [`ControlledState`], which models a value that is either owned by the
//! component itself or controlled by the caller.
//!
//! # Property Types
//!
//! - **Property<T>**: A value with change detection
//! - **ControlledState<T>**: Internal or caller-owned state
//!
//! # Example
//!
//! ```
//! use horizon_grid_core::{Property, Signal};
//!
//! struct Counter {
//!     value: Property<i32>,
//!     value_changed: Signal<i32>,
//! }
//!
//! impl Counter {
//!     fn set_value(&self, new_value: i32) {
//!         if self.value.set(new_value) {
//!             self.value_changed.emit(new_value);
//!         }
//!     }
//! }
//!
//! let counter = Counter { value: Property::new(0), value_changed: Signal::new() };
//! counter.set_value(3);
//! assert_eq!(counter.value.get(), 3);
//! ```

use std::fmt;

use parking_lot::RwLock;

use crate::logging::targets;

/// A value behind a lock that reports whether writes change it.
///
/// Components keep their mutable state in properties so that transition
/// methods can take `&self`, and use the return value of [`set`](Self::set)
/// to decide whether to emit a change signal.
pub struct Property<T> {
    value: RwLock<T>,
}

impl<T: Clone> Property<T> {
    /// Wrap `value`.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// A clone of the value. Use [`with`](Self::with) to avoid the clone.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Read the value in place.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.value.read())
    }

    /// Overwrite the value without comparing.
    pub fn set_silent(&self, value: T) {
        *self.value.write() = value;
    }
}

impl<T: Clone + PartialEq> Property<T> {
    /// Store `value`. Returns `true` if it differs from the previous value.
    pub fn set(&self, value: T) -> bool {
        let mut guard = self.value.write();
        if *guard == value {
            return false;
        }
        *guard = value;
        true
    }
}

impl<T: Clone> Clone for Property<T> {
    fn clone(&self) -> Self {
        Self::new(self.get())
    }
}

impl<T: Clone + Default> Default for Property<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.with(|value| f.debug_tuple("Property").field(value).finish())
    }
}

// ============================================================================
// Controlled state
// ============================================================================

/// Who owns the authoritative value of a piece of component state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StateOwner {
    /// The component keeps and updates the value itself.
    #[default]
    Internal,
    /// The caller owns the value. The component only reports requested
    /// changes and waits for the caller to push the new value back.
    External,
}

/// A value that is either owned by a component or controlled by its caller.
///
/// User interactions go through [`request`](Self::request): internal state is
/// updated in place, external state is left untouched. In both cases the
/// return value tells the component whether to notify listeners about the
/// requested value. Callers push authoritative values with
/// [`sync`](Self::sync).
///
/// # Example
///
/// ```
/// use horizon_grid_core::ControlledState;
///
/// let internal = ControlledState::internal(0usize);
/// assert!(internal.request(2));
/// assert_eq!(internal.get(), 2);
///
/// let external = ControlledState::external(0usize);
/// assert!(external.request(2));
/// assert_eq!(external.get(), 0);
/// external.sync(2);
/// assert_eq!(external.get(), 2);
/// ```
pub struct ControlledState<T> {
    value: Property<T>,
    owner: StateOwner,
}

impl<T: Clone + PartialEq> ControlledState<T> {
    /// State owned by the component.
    pub fn internal(value: T) -> Self {
        Self {
            value: Property::new(value),
            owner: StateOwner::Internal,
        }
    }

    /// State owned by the caller.
    pub fn external(value: T) -> Self {
        Self {
            value: Property::new(value),
            owner: StateOwner::External,
        }
    }

    /// Internal when `controlled` is `None`, external otherwise.
    pub fn from_option(controlled: Option<T>, fallback: T) -> Self {
        match controlled {
            Some(value) => Self::external(value),
            None => Self::internal(fallback),
        }
    }

    /// Returns who owns this state.
    pub fn owner(&self) -> StateOwner {
        self.owner
    }

    /// Returns `true` if the caller owns this state.
    pub fn is_controlled(&self) -> bool {
        self.owner == StateOwner::External
    }

    /// The current value.
    pub fn get(&self) -> T {
        self.value.get()
    }

    /// Access the current value without cloning.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        self.value.with(f)
    }

    /// Request a new value on behalf of a user interaction.
    ///
    /// Returns `true` when `value` differs from the current value, meaning the
    /// request should be reported. Only internal state is updated.
    pub fn request(&self, value: T) -> bool {
        if self.value.with(|current| *current == value) {
            return false;
        }
        match self.owner {
            StateOwner::Internal => {
                self.value.set_silent(value);
            }
            StateOwner::External => {
                tracing::trace!(target: targets::PROPERTY, "controlled state change requested");
            }
        }
        true
    }

    /// Replace the value unconditionally, returning `true` if it changed.
    ///
    /// This is how the caller pushes a controlled value back, and how the
    /// component resets its own internal state.
    pub fn sync(&self, value: T) -> bool {
        self.value.set(value)
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for ControlledState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControlledState")
            .field("value", &self.value.get())
            .field("owner", &self.owner)
            .finish()
    }
}

static_assertions::assert_impl_all!(Property<String>: Send, Sync);
static_assertions::assert_impl_all!(ControlledState<Vec<String>>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_reports_change() {
        let page = Property::new(1usize);
        assert!(!page.set(1));
        assert!(page.set(4));
        assert_eq!(page.get(), 4);
    }

    #[test]
    fn test_internal_state_updates_on_request() {
        let state = ControlledState::internal(1);
        assert!(!state.is_controlled());
        assert!(!state.request(1));
        assert!(state.request(5));
        assert_eq!(state.get(), 5);
    }

    #[test]
    fn test_external_state_waits_for_sync() {
        let state = ControlledState::external(1);
        assert!(state.is_controlled());
        assert!(state.request(5));
        assert_eq!(state.get(), 1);

        assert!(state.sync(5));
        assert!(!state.sync(5));
        assert_eq!(state.with(|page| *page), 5);
    }

    #[test]
    fn test_from_option() {
        assert_eq!(
            ControlledState::from_option(Some(3), 0).owner(),
            StateOwner::External
        );
        let internal = ControlledState::from_option(None, 9);
        assert_eq!(internal.owner(), StateOwner::Internal);
        assert_eq!(internal.get(), 9);
    }
}
