//! Scoped subscription to the viewport's scroll notifications.
//!
//! A [`Subscription`] is acquired when the view activates and releases its
//! listener when dropped, so no handler can outlive the view that owns it.
//! [`ScrollChannel`] abstracts the host so the same guard works against the
//! browser window and against an in-memory viewport in tests.

use leptos::ev;
use leptos::prelude::*;

use crate::error::ScrollError;
use crate::state::ScrollOffset;

/// A source of vertical scroll positions.
pub trait ScrollChannel {
    /// Token returned by `subscribe`, handed back to `unsubscribe`.
    type Handle;

    /// Registers `handler`, called with the raw scroll position on every
    /// scroll notification.
    fn subscribe(&self, handler: Box<dyn Fn(f64)>) -> Result<Self::Handle, ScrollError>;

    fn unsubscribe(&self, handle: Self::Handle);

    /// Reads the current raw scroll position.
    fn current(&self) -> Result<f64, ScrollError>;
}

/// Live registration on a [`ScrollChannel`]. Unsubscribes on drop.
pub struct Subscription<C: ScrollChannel> {
    channel: C,
    handle: Option<C::Handle>,
}

impl<C: ScrollChannel> Subscription<C> {
    pub fn acquire(channel: C, handler: impl Fn(f64) + 'static) -> Result<Self, ScrollError> {
        let handle = channel.subscribe(Box::new(handler))?;
        Ok(Self {
            channel,
            handle: Some(handle),
        })
    }

    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    /// Releases the listener now instead of at end of scope.
    pub fn release(mut self) {
        self.unsubscribe();
    }

    fn unsubscribe(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.channel.unsubscribe(handle);
            tracing::debug!("scroll listener released");
        }
    }
}

impl<C: ScrollChannel> Drop for Subscription<C> {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

/// Subscribes `sink` to clamped scroll offsets from `channel`.
pub fn track<C: ScrollChannel>(
    channel: C,
    sink: impl Fn(ScrollOffset) + 'static,
) -> Result<Subscription<C>, ScrollError> {
    Subscription::acquire(channel, move |raw| sink(ScrollOffset::new(raw)))
}

/// The browser window's `scroll` event.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowScroll;

impl ScrollChannel for WindowScroll {
    type Handle = WindowListenerHandle;

    fn subscribe(&self, handler: Box<dyn Fn(f64)>) -> Result<Self::Handle, ScrollError> {
        web_sys::window().ok_or(ScrollError::NoWindow)?;
        let handle = window_event_listener(ev::scroll, move |_| match read_scroll_y() {
            Ok(y) => handler(y),
            Err(err) => tracing::warn!(%err, "scroll event without a readable offset"),
        });
        tracing::debug!("scroll listener registered");
        Ok(handle)
    }

    fn unsubscribe(&self, handle: Self::Handle) {
        handle.remove();
    }

    fn current(&self) -> Result<f64, ScrollError> {
        read_scroll_y()
    }
}

fn read_scroll_y() -> Result<f64, ScrollError> {
    let window = web_sys::window().ok_or(ScrollError::NoWindow)?;
    window
        .scroll_y()
        .map_err(|e| ScrollError::Read(format!("{:?}", e)))
}

/// Tracks the window scroll offset for the lifetime of the calling
/// component.
///
/// The listener is released by the component's cleanup, whichever way the
/// component is torn down.
pub fn use_scroll_offset() -> ReadSignal<ScrollOffset> {
    let (offset, set_offset) = signal(ScrollOffset::TOP);

    match WindowScroll.current() {
        Ok(y) => set_offset.set(ScrollOffset::new(y)),
        Err(err) => tracing::warn!(%err, "initial scroll read failed, assuming top"),
    }

    match track(WindowScroll, move |o| set_offset.set(o)) {
        Ok(subscription) => on_cleanup(move || drop(subscription)),
        Err(err) => tracing::warn!(%err, "scroll reveal disabled"),
    }

    offset
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct Viewport {
        handlers: Rc<RefCell<Vec<(u32, Box<dyn Fn(f64)>)>>>,
        next: Rc<Cell<u32>>,
    }

    impl Viewport {
        fn scroll(&self, y: f64) {
            for (_, handler) in self.handlers.borrow().iter() {
                handler(y);
            }
        }

        fn listeners(&self) -> usize {
            self.handlers.borrow().len()
        }
    }

    impl ScrollChannel for Viewport {
        type Handle = u32;

        fn subscribe(&self, handler: Box<dyn Fn(f64)>) -> Result<u32, ScrollError> {
            let id = self.next.get();
            self.next.set(id + 1);
            self.handlers.borrow_mut().push((id, handler));
            Ok(id)
        }

        fn unsubscribe(&self, handle: u32) {
            self.handlers.borrow_mut().retain(|(id, _)| *id != handle);
        }

        fn current(&self) -> Result<f64, ScrollError> {
            Ok(0.0)
        }
    }

    #[test]
    fn drop_releases_listener() {
        let viewport = Viewport::default();
        let seen = Rc::new(Cell::new(ScrollOffset::TOP));
        {
            let seen = seen.clone();
            let _sub = track(viewport.clone(), move |o| seen.set(o)).unwrap();
            assert_eq!(viewport.listeners(), 1);
            viewport.scroll(300.0);
        }
        assert_eq!(viewport.listeners(), 0);
        viewport.scroll(700.0);
        assert_eq!(seen.get().get(), 300.0);
    }

    #[test]
    fn release_is_explicit_drop() {
        let viewport = Viewport::default();
        let sub = track(viewport.clone(), |_| {}).unwrap();
        assert!(sub.is_active());
        sub.release();
        assert_eq!(viewport.listeners(), 0);
    }

    #[test]
    fn track_clamps_overscroll() {
        let viewport = Viewport::default();
        let seen = Rc::new(Cell::new(ScrollOffset::new(99.0)));
        let sink = seen.clone();
        let _sub = track(viewport.clone(), move |o| sink.set(o)).unwrap();
        viewport.scroll(-40.0);
        assert_eq!(seen.get(), ScrollOffset::TOP);
    }
}
