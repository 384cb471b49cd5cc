//! Browser checks for the window scroll subscription.
//!
//! Run with `wasm-pack test --headless --firefox landing`.

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use imed_landing::scroll::{ScrollChannel, Subscription, WindowScroll};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn dispatch_scroll() {
    let window = web_sys::window().unwrap();
    let event = web_sys::Event::new("scroll").unwrap();
    window.dispatch_event(&event).unwrap();
}

#[wasm_bindgen_test]
fn window_scroll_reads_offset() {
    let y = WindowScroll.current().unwrap();
    assert!(y >= 0.0);
}

#[wasm_bindgen_test]
fn dropping_subscription_detaches_listener() {
    let calls = Rc::new(Cell::new(0u32));

    let sub = {
        let calls = calls.clone();
        Subscription::acquire(WindowScroll, move |_| calls.set(calls.get() + 1)).unwrap()
    };

    dispatch_scroll();
    assert_eq!(calls.get(), 1);

    drop(sub);
    dispatch_scroll();
    assert_eq!(calls.get(), 1);
}
