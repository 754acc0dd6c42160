use crate::color::Color;

/// The raster operations the section renderers need from a 2D drawing target.
///
/// The browser build implements this over `CanvasRenderingContext2d`; tests
/// implement it with a recorder.
pub trait Surface {
    fn width(&self) -> f64;
    fn height(&self) -> f64;

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &Color);

    /// `font` is a CSS font shorthand such as `"20px arial"`.
    fn fill_text(&mut self, text: &str, x: f64, y: f64, font: &str, color: &Color);

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &Color);

    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), line_width: f64, color: &Color);

    /// Paint `color` over the whole surface.
    fn cover(&mut self, color: &Color) {
        let (w, h) = (self.width(), self.height());
        self.fill_rect(0.0, 0.0, w, h, color);
    }
}
