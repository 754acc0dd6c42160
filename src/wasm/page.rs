use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::config::Config;
use crate::layout::{Rect, SectionLayout};
use crate::snap::SnapScroll;

use super::backgrounds::Backgrounds;
use super::controls::Controls;
use super::transition::Executor;

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("{what} not found ({selector:?})")]
    Missing { what: &'static str, selector: String },
    #[error("{0:?} is not an HTML element of the expected kind")]
    WrongElement(String),
    #[error("2d canvas context not available")]
    NoContext2d,
    #[error("dom call failed: {0}")]
    Js(String),
}

impl From<JsValue> for SetupError {
    fn from(value: JsValue) -> Self {
        SetupError::Js(format!("{value:?}"))
    }
}

impl From<SetupError> for JsValue {
    fn from(err: SetupError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub(super) fn query<T: JsCast>(root: &Element, selector: &str, what: &'static str) -> Result<T, SetupError> {
    root.query_selector(selector)?
        .ok_or_else(|| SetupError::Missing {
            what,
            selector: selector.to_owned(),
        })?
        .dyn_into::<T>()
        .map_err(|_| SetupError::WrongElement(selector.to_owned()))
}

fn query_document<T: JsCast>(document: &Document, selector: &str, what: &'static str) -> Result<T, SetupError> {
    document
        .query_selector(selector)?
        .ok_or_else(|| SetupError::Missing {
            what,
            selector: selector.to_owned(),
        })?
        .dyn_into::<T>()
        .map_err(|_| SetupError::WrongElement(selector.to_owned()))
}

/// Section geometry read straight from the DOM.
pub struct DomLayout {
    window: Window,
    sections: Vec<HtmlElement>,
}

impl DomLayout {
    pub fn sections(&self) -> &[HtmlElement] {
        &self.sections
    }

    pub fn set_active(&self, index: usize, active: bool) -> Result<(), JsValue> {
        if let Some(section) = self.sections.get(index) {
            section.class_list().toggle_with_force("active", active)?;
        }
        Ok(())
    }
}

impl SectionLayout for DomLayout {
    fn section_count(&self) -> usize {
        self.sections.len()
    }

    fn offset_top(&self, index: usize) -> f64 {
        self.sections
            .get(index)
            .map(|s| s.offset_top() as f64)
            .unwrap_or(0.0)
    }

    fn rect(&self, index: usize) -> Rect {
        let Some(section) = self.sections.get(index) else {
            return Rect::default();
        };
        let r = section.get_bounding_client_rect();
        Rect {
            top: r.top(),
            bottom: r.bottom(),
            left: r.left(),
            right: r.right(),
            width: r.width(),
            height: r.height(),
        }
    }

    fn viewport_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0)
    }
}

/// The `header`, `main` and wrapper elements the transitions animate.
pub struct PageNodes {
    pub header: HtmlElement,
    pub main: HtmlElement,
    pub wrapper: HtmlElement,
}

/// A mounted page. Everything keeps running until [`Page::stop`] is called or
/// the handle is freed.
#[wasm_bindgen]
pub struct Page {
    controller: Rc<RefCell<SnapScroll>>,
    controls: Controls,
    backgrounds: Rc<Backgrounds>,
}

impl Page {
    pub fn mount(config: Config) -> Result<Page, JsValue> {
        let window = web_sys::window().ok_or(SetupError::NoWindow)?;
        let document = window.document().ok_or(SetupError::NoDocument)?;
        let selectors = &config.selectors;

        let header: HtmlElement = query_document(&document, &selectors.header, "header")?;
        let main: HtmlElement = query_document(&document, &selectors.main, "main container")?;
        let wrapper: HtmlElement = query(&main, &selectors.wrapper, "section wrapper")?;

        let found = main.query_selector_all(&selectors.section)?;
        let mut sections = Vec::with_capacity(found.length() as usize);
        for i in 0..found.length() {
            if let Some(section) = found.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
                sections.push(section);
            }
        }
        if sections.is_empty() {
            return Err(SetupError::Missing {
                what: "sections",
                selector: selectors.section.clone(),
            }
            .into());
        }

        let layout = Rc::new(DomLayout {
            window: window.clone(),
            sections,
        });
        let controller = Rc::new(RefCell::new(SnapScroll::new(
            config.scroll.clone(),
            layout.section_count(),
        )));

        let nodes = PageNodes { header, main, wrapper };
        let executor = Executor::new(&nodes, layout.clone(), controller.clone());
        let initial = controller.borrow_mut().sync_active(&*layout);
        executor.run(initial);

        let backgrounds = Backgrounds::start(&config, layout.clone())?;
        let controls = Controls::attach(
            &window,
            &document,
            &nodes.wrapper,
            controller.clone(),
            executor,
            layout.clone(),
            backgrounds.clone(),
        )?;

        log::info!("mounted {} sections", layout.section_count());
        Ok(Page {
            controller,
            controls,
            backgrounds,
        })
    }
}

#[wasm_bindgen]
impl Page {
    #[wasm_bindgen(getter, js_name = currentSection)]
    pub fn current_section(&self) -> usize {
        self.controller.borrow().current_section()
    }

    /// Stop every animation loop and timer and detach all input listeners.
    pub fn stop(&self) {
        self.controls.stop();
        self.backgrounds.stop();
        log::info!("stopped");
    }
}
