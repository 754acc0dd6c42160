//! Carries out the controller's commands: wrapper and header tweens, class
//! swaps and the wheel decay timer.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::HtmlElement;

use crate::snap::{Command, SnapScroll};
use crate::tween::{Easing, Tween};

use super::page::{DomLayout, PageNodes};
use super::render::{Flow, RenderLoop, Timeout};

fn set_translate_y(element: &HtmlElement, y: f64) {
    element
        .style()
        .set_property("transform", &format!("translateY({y}px)"))
        .ok();
}

/// The vertical translation of one element. A new animation replaces the one
/// in flight, starting from wherever it got to.
struct Track {
    element: HtmlElement,
    y: Rc<Cell<f64>>,
    running: RefCell<Option<RenderLoop>>,
}

impl Track {
    fn new(element: HtmlElement) -> Self {
        Self {
            element,
            y: Rc::new(Cell::new(0.0)),
            running: RefCell::new(None),
        }
    }

    fn animate(
        &self,
        to: f64,
        duration_ms: f64,
        on_complete: Option<Box<dyn FnOnce()>>,
    ) -> Result<(), JsValue> {
        let mut tween = Tween::new(self.y.get(), to, duration_ms, Easing::Power4InOut);
        let element = self.element.clone();
        let y = self.y.clone();
        let mut on_complete = on_complete;

        let render_loop = RenderLoop::frames(move |now| {
            let sample = tween.sample(now);
            y.set(sample.value);
            set_translate_y(&element, sample.value);
            if !sample.finished {
                return Flow::Continue;
            }
            if let Some(done) = on_complete.take() {
                done();
            }
            Flow::Done
        })?;

        self.running.replace(Some(render_loop));
        Ok(())
    }

    fn stop(&self) {
        self.running.replace(None);
    }
}

pub struct Executor {
    wrapper: Track,
    header: Track,
    header_el: HtmlElement,
    main: HtmlElement,
    layout: Rc<DomLayout>,
    controller: Rc<RefCell<SnapScroll>>,
    wheel_decay: RefCell<Option<Timeout>>,
}

impl Executor {
    pub fn new(nodes: &PageNodes, layout: Rc<DomLayout>, controller: Rc<RefCell<SnapScroll>>) -> Rc<Self> {
        Rc::new(Self {
            wrapper: Track::new(nodes.wrapper.clone()),
            header: Track::new(nodes.header.clone()),
            header_el: nodes.header.clone(),
            main: nodes.main.clone(),
            layout,
            controller,
            wheel_decay: RefCell::new(None),
        })
    }

    pub fn run(self: &Rc<Self>, commands: Vec<Command>) {
        for command in commands {
            if let Err(e) = self.apply(command) {
                log::error!("command failed: {e:?}");
            }
        }
    }

    fn apply(self: &Rc<Self>, command: Command) -> Result<(), JsValue> {
        match command {
            Command::Scroll {
                target,
                y,
                duration_ms,
            } => {
                let this = Rc::downgrade(self);
                self.wrapper.animate(
                    y,
                    duration_ms,
                    Some(Box::new(move || {
                        let Some(this) = this.upgrade() else {
                            return;
                        };
                        let commands = this.controller.borrow_mut().finish_transition(&*this.layout);
                        log::debug!(
                            "transition to {target} settled on {}",
                            this.controller.borrow().current_section()
                        );
                        this.run(commands);
                    })),
                )?;
            }
            Command::Header {
                visible,
                duration_ms,
            } => {
                let to = if visible {
                    0.0
                } else {
                    -(self.header_el.offset_height() as f64)
                };
                self.header.animate(to, duration_ms, None)?;
            }
            Command::SwapMainHeight => {
                let classes = self.main.class_list();
                classes.remove_1("h-screen-minus-header")?;
                classes.add_1("h-screen")?;
            }
            Command::ArmWheelDecay { token, delay_ms } => {
                // Dropping the previous timeout clears it.
                self.wheel_decay.replace(None);
                let controller = Rc::downgrade(&self.controller);
                let timeout = Timeout::arm(delay_ms, move || {
                    if let Some(controller) = controller.upgrade() {
                        controller.borrow_mut().wheel_decay_elapsed(token);
                    }
                })?;
                self.wheel_decay.replace(Some(timeout));
            }
            Command::MarkActive { section, active } => {
                self.layout.set_active(section, active)?;
            }
        }
        Ok(())
    }

    /// Halt running tweens and the decay timer.
    pub fn stop(&self) {
        self.wrapper.stop();
        self.header.stop();
        self.wheel_decay.replace(None);
        self.controller.borrow_mut().cancel_wheel_decay();
    }
}
