//! Integration tests for signals paired with controlled state.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use horizon_grid_core::{ControlledState, Signal, StateOwner};
use parking_lot::Mutex;

/// A minimal component that reports page requests the way grid components do.
struct Pager {
    page: ControlledState<usize>,
    page_changed: Signal<usize>,
}

impl Pager {
    fn new(page: ControlledState<usize>) -> Self {
        Self {
            page,
            page_changed: Signal::new(),
        }
    }

    fn go_to(&self, page: usize) {
        if self.page.request(page) {
            self.page_changed.emit(page);
        }
    }
}

#[test]
fn test_internal_pager_updates_then_notifies() {
    let pager = Pager::new(ControlledState::internal(1));
    let seen = Arc::new(Mutex::new(Vec::new()));

    let seen_clone = seen.clone();
    let page = pager.page.get();
    assert_eq!(page, 1);
    pager.page_changed.connect(move |&p| seen_clone.lock().push(p));

    pager.go_to(2);
    pager.go_to(2);
    pager.go_to(3);

    assert_eq!(pager.page.get(), 3);
    assert_eq!(*seen.lock(), vec![2, 3]);
}

#[test]
fn test_controlled_pager_waits_for_owner() {
    let pager = Arc::new(Pager::new(ControlledState::external(1)));
    assert_eq!(pager.page.owner(), StateOwner::External);

    // The owner pushes every requested page back, like a caller re-rendering
    // with new props.
    let weak = Arc::downgrade(&pager);
    pager.page_changed.connect(move |&p| {
        if let Some(pager) = weak.upgrade() {
            pager.page.sync(p);
        }
    });

    pager.go_to(4);
    assert_eq!(pager.page.get(), 4);
}

#[test]
fn test_controlled_pager_ignored_request_keeps_value() {
    let pager = Pager::new(ControlledState::external(1));
    let requests = Arc::new(AtomicUsize::new(0));

    let requests_clone = requests.clone();
    pager.page_changed.connect(move |_| {
        requests_clone.fetch_add(1, Ordering::SeqCst);
    });

    pager.go_to(2);
    pager.go_to(2);

    // Each request differs from the unchanged controlled value.
    assert_eq!(requests.load(Ordering::SeqCst), 2);
    assert_eq!(pager.page.get(), 1);
}
