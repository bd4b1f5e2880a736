//! Cancelable `requestAnimationFrame` loop

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::error::BackdropError;

struct LoopState {
    window: Window,
    cancelled: Cell<bool>,
    pending: Cell<Option<i32>>,
    callback: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl LoopState {
    fn schedule(&self) -> Result<(), BackdropError> {
        let callback = self.callback.borrow();
        let Some(callback) = callback.as_ref() else {
            return Ok(());
        };
        let id = self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())?;
        self.pending.set(Some(id));
        Ok(())
    }
}

/// Runs `tick` once immediately, then once per display refresh until
/// cancelled or dropped.
///
/// The callback holds only a weak reference to the loop state, so dropping
/// the handle releases the closure and nothing keeps rescheduling.
pub struct FrameLoop {
    state: Rc<LoopState>,
}

impl FrameLoop {
    pub fn start(window: Window, mut tick: impl FnMut() + 'static) -> Result<Self, BackdropError> {
        let state = Rc::new(LoopState {
            window,
            cancelled: Cell::new(false),
            pending: Cell::new(None),
            callback: RefCell::new(None),
        });

        tick();

        let weak: Weak<LoopState> = Rc::downgrade(&state);
        let callback = Closure::<dyn FnMut()>::new(move || {
            let Some(state) = weak.upgrade() else {
                return;
            };
            state.pending.set(None);
            if state.cancelled.get() {
                return;
            }

            tick();

            if !state.cancelled.get() {
                if let Err(err) = state.schedule() {
                    log::debug!("frame loop stopped: {err}");
                }
            }
        });
        *state.callback.borrow_mut() = Some(callback);

        state.schedule()?;
        log::debug!("frame loop started");
        Ok(Self { state })
    }

    pub fn is_running(&self) -> bool {
        !self.state.cancelled.get()
    }

    /// Cancels the pending frame request. Idempotent.
    pub fn cancel(&self) {
        if self.state.cancelled.replace(true) {
            return;
        }
        if let Some(id) = self.state.pending.take() {
            if let Err(err) = self.state.window.cancel_animation_frame(id) {
                log::debug!("cancel_animation_frame failed: {:?}", err);
            }
        }
        log::debug!("frame loop cancelled");
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
        self.state.callback.borrow_mut().take();
    }
}
