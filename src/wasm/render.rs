use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::window;

/// What a frame callback wants next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Done,
}

#[derive(Debug, Clone, Copy)]
enum Schedule {
    Frames,
    Interval,
}

/// Owner of a repeating callback, driven either by `requestAnimationFrame`
/// or by `setInterval`. Stops on [`RenderLoop::stop`] or when dropped.
pub struct RenderLoop {
    // The closure only holds a weak handle to its own slot, so dropping the
    // loop frees it.
    slot: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    handle: Rc<Cell<Option<i32>>>,
    schedule: Schedule,
}

/// Milliseconds on the page's high-resolution clock.
pub fn now() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

fn request_frame(callback: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    window()
        .ok_or("no window")?
        .request_animation_frame(callback.as_ref().unchecked_ref())
}

impl RenderLoop {
    /// Call `tick` before every repaint, with the current time, until it
    /// returns [`Flow::Done`].
    pub fn frames(mut tick: impl FnMut(f64) -> Flow + 'static) -> Result<Self, JsValue> {
        let slot: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let handle = Rc::new(Cell::new(None));

        let weak = Rc::downgrade(&slot);
        let next = handle.clone();
        *slot.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            next.set(None);
            if tick(now()) == Flow::Done {
                return;
            }

            // schedule next
            let Some(slot) = weak.upgrade() else {
                return;
            };
            let slot = slot.borrow();
            if let Some(callback) = slot.as_ref() {
                match request_frame(callback) {
                    Ok(id) => next.set(Some(id)),
                    Err(e) => log::error!("requestAnimationFrame failed: {e:?}"),
                }
            }
        }) as Box<dyn FnMut()>));

        let id = match slot.borrow().as_ref() {
            Some(callback) => request_frame(callback)?,
            None => return Err("frame callback missing".into()),
        };
        handle.set(Some(id));

        Ok(Self {
            slot,
            handle,
            schedule: Schedule::Frames,
        })
    }

    /// Call `tick` every `ms` milliseconds.
    pub fn interval(ms: u32, mut tick: impl FnMut() + 'static) -> Result<Self, JsValue> {
        let callback = Closure::wrap(Box::new(move || tick()) as Box<dyn FnMut()>);
        let id = window()
            .ok_or("no window")?
            .set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                ms as i32,
            )?;

        Ok(Self {
            slot: Rc::new(RefCell::new(Some(callback))),
            handle: Rc::new(Cell::new(Some(id))),
            schedule: Schedule::Interval,
        })
    }

    pub fn stop(&self) {
        if let (Some(id), Some(w)) = (self.handle.take(), window()) {
            match self.schedule {
                Schedule::Frames => {
                    w.cancel_animation_frame(id).ok();
                }
                Schedule::Interval => w.clear_interval_with_handle(id),
            }
        }
        self.slot.borrow_mut().take();
    }
}

impl Drop for RenderLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

/// A pending `setTimeout`. Dropping it clears the timer.
pub struct Timeout {
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Timeout {
    pub fn arm(ms: u32, f: impl FnOnce() + 'static) -> Result<Self, JsValue> {
        let callback = Closure::once(f);
        let id = window()
            .ok_or("no window")?
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                ms as i32,
            )?;
        Ok(Self {
            id,
            _callback: callback,
        })
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let Some(w) = window() {
            w.clear_timeout_with_handle(self.id);
        }
    }
}
