//! Observers of a component-owned focus target.
//!
//! The component keeps the only handle to its element. External parties
//! register a [`ForwardedRef`] and are told whenever the handle is
//! established (`Some`) or cleared (`None`).

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// One external observer of a focus target.
pub enum ForwardedRef<T> {
    /// Stores the current target in a shared slot.
    Capture(Rc<RefCell<Option<T>>>),
    /// Receives every change of the target.
    Callback(Rc<dyn Fn(Option<T>)>),
}

impl<T> ForwardedRef<T> {
    /// New capture ref with an empty slot.
    pub fn capture() -> Self {
        Self::Capture(Rc::new(RefCell::new(None)))
    }

    /// Callback ref invoking `f` on every change.
    pub fn callback(f: impl Fn(Option<T>) + 'static) -> Self {
        Self::Callback(Rc::new(f))
    }

    fn assign(&self, value: Option<T>) {
        match self {
            Self::Capture(slot) => *slot.borrow_mut() = value,
            Self::Callback(f) => f(value),
        }
    }
}

impl<T: Clone> ForwardedRef<T> {
    /// Current value held by a capture ref. Callback refs hold nothing.
    pub fn current(&self) -> Option<T> {
        match self {
            Self::Capture(slot) => slot.borrow().clone(),
            Self::Callback(_) => None,
        }
    }
}

impl<T> Clone for ForwardedRef<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Capture(slot) => Self::Capture(Rc::clone(slot)),
            Self::Callback(f) => Self::Callback(Rc::clone(f)),
        }
    }
}

impl<T> fmt::Debug for ForwardedRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Capture(_) => f.write_str("ForwardedRef::Capture"),
            Self::Callback(_) => f.write_str("ForwardedRef::Callback"),
        }
    }
}

/// Fan-out of one focus target to any number of observers.
pub struct MergedRef<T> {
    observers: Rc<RefCell<Vec<ForwardedRef<T>>>>,
}

impl<T> MergedRef<T> {
    /// Merges `observers`, notified in the given order.
    pub fn new(observers: impl IntoIterator<Item = ForwardedRef<T>>) -> Self {
        Self {
            observers: Rc::new(RefCell::new(observers.into_iter().collect())),
        }
    }

    /// Registers another observer.
    pub fn push(&self, observer: ForwardedRef<T>) {
        self.observers.borrow_mut().push(observer);
    }

    /// Number of registered observers.
    pub fn len(&self) -> usize {
        self.observers.borrow().len()
    }

    /// True when nobody observes the target.
    pub fn is_empty(&self) -> bool {
        self.observers.borrow().is_empty()
    }
}

impl<T: Clone> MergedRef<T> {
    /// Publishes the target, or its removal, to every observer.
    pub fn assign(&self, value: Option<T>) {
        // Snapshot so a callback may register further observers.
        let observers = self.observers.borrow().clone();
        for observer in &observers {
            observer.assign(value.clone());
        }
    }
}

impl<T> Clone for MergedRef<T> {
    fn clone(&self) -> Self {
        Self {
            observers: Rc::clone(&self.observers),
        }
    }
}

impl<T> Default for MergedRef<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn capture_and_callback_observe_the_same_target() {
        let capture = ForwardedRef::capture();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_by_callback = Rc::clone(&seen);
        let merged = MergedRef::new([
            capture.clone(),
            ForwardedRef::callback(move |value: Option<u32>| {
                seen_by_callback.borrow_mut().push(value)
            }),
        ]);

        merged.assign(Some(7));
        assert_eq!(capture.current(), Some(7));

        merged.assign(None);
        assert_eq!(capture.current(), None);
        assert_eq!(*seen.borrow(), vec![Some(7), None]);
    }

    #[test]
    fn observers_are_notified_in_registration_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let merged = MergedRef::default();
        for tag in ["first", "second", "third"] {
            let order = Rc::clone(&order);
            merged.push(ForwardedRef::callback(move |_: Option<()>| {
                order.borrow_mut().push(tag)
            }));
        }

        merged.assign(Some(()));

        assert_eq!(merged.len(), 3);
        assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn callback_may_register_observers_during_assign() {
        let merged: MergedRef<u8> = MergedRef::default();
        let late = ForwardedRef::capture();
        let registry = merged.clone();
        let late_for_callback = late.clone();
        merged.push(ForwardedRef::callback(move |_| {
            registry.push(late_for_callback.clone())
        }));

        merged.assign(Some(1));
        assert_eq!(late.current(), None);

        merged.assign(Some(2));
        assert_eq!(late.current(), Some(2));
    }

    #[test]
    fn callback_refs_hold_no_current_value() {
        let callback = ForwardedRef::callback(|_: Option<i32>| {});
        MergedRef::new([callback.clone()]).assign(Some(3));
        assert_eq!(callback.current(), None);
    }
}
