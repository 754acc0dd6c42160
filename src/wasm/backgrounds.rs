use std::cell::RefCell;
use std::rc::Rc;

use web_sys::HtmlCanvasElement;

use crate::config::Config;
use crate::dispatch::{
    canvas_placements, kind_for_section, section_seed, wash_for_section, Cadence, CanvasPlacement,
    SectionScene,
};
use crate::surface::Surface;

use super::canvas::CanvasSurface;
use super::page::{query, DomLayout, SetupError};
use super::render::{Flow, RenderLoop};

struct SectionCanvas {
    canvas: HtmlCanvasElement,
    scene: Rc<RefCell<SectionScene>>,
}

/// One animated canvas per section, stacked one viewport height apart.
pub struct Backgrounds {
    layout: Rc<DomLayout>,
    sections: Vec<SectionCanvas>,
    loops: Vec<RenderLoop>,
}

fn place(canvas: &HtmlCanvasElement, placement: &CanvasPlacement) {
    canvas.set_width(placement.width);
    canvas.set_height(placement.height);
    canvas
        .style()
        .set_property("transform", &format!("translateY({}px)", placement.offset_y))
        .ok();
}

impl Backgrounds {
    pub fn start(config: &Config, layout: Rc<DomLayout>) -> Result<Rc<Self>, SetupError> {
        let base_seed = config
            .seed
            .unwrap_or_else(|| (js_sys::Math::random() * u64::MAX as f64) as u64);
        let placements = canvas_placements(&*layout);

        let mut sections = Vec::with_capacity(placements.len());
        let mut loops = Vec::with_capacity(placements.len());
        for (index, (section, placement)) in layout.sections().iter().zip(&placements).enumerate() {
            let canvas: HtmlCanvasElement = query(section, &config.selectors.canvas, "section canvas")?;
            place(&canvas, placement);

            let mut surface = CanvasSurface::new(canvas.clone())?;
            surface.cover(&wash_for_section(index));

            let scene = SectionScene::new(
                kind_for_section(index),
                config,
                placement.width as f64,
                placement.height as f64,
                section_seed(base_seed, index),
            );
            let cadence = scene.cadence(config);
            let scene = Rc::new(RefCell::new(scene));

            let driven = scene.clone();
            let render_loop = match cadence {
                Cadence::EveryFrame => RenderLoop::frames(move |_| {
                    driven.borrow_mut().step(&mut surface);
                    Flow::Continue
                })?,
                Cadence::EveryMs(ms) => RenderLoop::interval(ms, move || {
                    driven.borrow_mut().step(&mut surface);
                })?,
            };
            log::debug!("section {index}: {:?} {}x{}", kind_for_section(index), placement.width, placement.height);

            loops.push(render_loop);
            sections.push(SectionCanvas { canvas, scene });
        }

        Ok(Rc::new(Self {
            layout,
            sections,
            loops,
        }))
    }

    /// Re-derive every canvas' size and offset from the live layout and hand
    /// the new size to its scene.
    pub fn reset_canvas(&self) {
        let placements = canvas_placements(&*self.layout);
        for (section, placement) in self.sections.iter().zip(&placements) {
            place(&section.canvas, placement);
            section
                .scene
                .borrow_mut()
                .resize(placement.width as f64, placement.height as f64);
        }
    }

    pub fn stop(&self) {
        for render_loop in &self.loops {
            render_loop.stop();
        }
    }
}
