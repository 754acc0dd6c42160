use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, KeyboardEvent,
    TouchEvent, WheelEvent, Window,
};

use crate::snap::{Key, SnapScroll};

use super::backgrounds::Backgrounds;
use super::page::DomLayout;
use super::transition::Executor;

/// An attached DOM listener, removed again on drop.
struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn new(
        target: &EventTarget,
        kind: &'static str,
        passive: bool,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        Ok(Self {
            target: target.clone(),
            kind,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        self.target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref())
            .ok();
    }
}

fn first_touch_y(event: &Event) -> Option<f64> {
    let touch = event.dyn_ref::<TouchEvent>()?.touches().get(0)?;
    Some(touch.client_y() as f64)
}

/// Input wiring: wheel, keyboard, touch and anchor clicks go to the
/// controller, resize goes to both the controller and the backgrounds.
pub struct Controls {
    executor: Rc<Executor>,
    listeners: RefCell<Vec<Listener>>,
}

impl Controls {
    pub fn attach(
        window: &Window,
        document: &Document,
        wrapper: &HtmlElement,
        controller: Rc<RefCell<SnapScroll>>,
        executor: Rc<Executor>,
        layout: Rc<DomLayout>,
        backgrounds: Rc<Backgrounds>,
    ) -> Result<Self, JsValue> {
        let mut listeners = Vec::new();

        listeners.push({
            let (controller, executor, layout) = (controller.clone(), executor.clone(), layout.clone());
            Listener::new(wrapper, "wheel", false, move |event| {
                event.prevent_default();
                let Some(wheel) = event.dyn_ref::<WheelEvent>() else {
                    return;
                };
                let commands = controller.borrow_mut().on_wheel(wheel.delta_y(), &*layout);
                executor.run(commands);
            })?
        });

        listeners.push(Listener::new(window, "scroll", false, |event| {
            event.prevent_default();
        })?);

        listeners.push({
            let (controller, executor, layout) = (controller.clone(), executor.clone(), layout.clone());
            Listener::new(window, "keydown", false, move |event| {
                let Some(keyboard) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                let Some(key) = Key::from_name(&keyboard.key()).or_else(|| Key::from_code(keyboard.key_code()))
                else {
                    return;
                };
                event.prevent_default();
                let commands = controller.borrow_mut().on_key(key, &*layout);
                executor.run(commands);
            })?
        });

        listeners.push({
            let controller = controller.clone();
            Listener::new(wrapper, "touchstart", true, move |event| {
                if let Some(y) = first_touch_y(&event) {
                    controller.borrow_mut().on_touch_start(y);
                }
            })?
        });

        listeners.push({
            let (controller, executor) = (controller.clone(), executor.clone());
            Listener::new(wrapper, "touchmove", false, move |event| {
                event.prevent_default();
                if let Some(y) = first_touch_y(&event) {
                    let commands = controller.borrow_mut().on_touch_move(y);
                    executor.run(commands);
                }
            })?
        });

        listeners.push({
            let (controller, executor, layout) = (controller.clone(), executor.clone(), layout.clone());
            Listener::new(wrapper, "touchend", true, move |_| {
                let commands = controller.borrow_mut().on_touch_end(&*layout);
                executor.run(commands);
            })?
        });

        let anchors = document.query_selector_all("a[href^=\"#\"]")?;
        for i in 0..anchors.length() {
            let Some(anchor) = anchors.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            let (controller, executor, layout) = (controller.clone(), executor.clone(), layout.clone());
            let href_source = anchor.clone();
            listeners.push(Listener::new(&anchor, "click", false, move |event| {
                event.prevent_default();
                let href = href_source.get_attribute("href").unwrap_or_default();
                let commands = controller.borrow_mut().on_anchor(&href, &*layout);
                executor.run(commands);
            })?);
        }

        listeners.push({
            let (executor, layout) = (executor.clone(), layout.clone());
            Listener::new(window, "resize", true, move |_| {
                let commands = controller.borrow_mut().on_resize(&*layout);
                executor.run(commands);
                backgrounds.reset_canvas();
            })?
        });

        log::debug!("{} listeners attached", listeners.len());
        Ok(Self {
            executor,
            listeners: RefCell::new(listeners),
        })
    }

    pub fn stop(&self) {
        self.listeners.borrow_mut().clear();
        self.executor.stop();
    }
}
