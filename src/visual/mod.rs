use crate::spatial::Point;

use image::RgbImage;

mod bresenham;
pub mod color;
mod fill;

#[cfg(test)]
mod tests;

const DEFAULT_IMG_SIZE: u32 = 512;
const DOT_SIZE: u32 = 1;

pub struct VisOptions {
    im_size: u32,
    dot_color: usize,
}

impl VisOptions {
    pub fn new() -> Self {
        Self {
            im_size: DEFAULT_IMG_SIZE,
            dot_color: 2,
        }
    }

    pub fn im_size(mut self, size: u32) -> Self {
        self.im_size = size;
        self
    }

    pub fn dot_color(mut self, idx: usize) -> Self {
        self.dot_color = idx % color::STDCOL.len();
        self
    }
}

impl From<()> for VisOptions {
    fn from(_x: ()) -> Self {
        Self::new()
    }
}

// world-to-pixel mapping fitting all content at 80% of the frame
struct Frame {
    scale: f64,
    mid_x: f64,
    mid_y: f64,
    im_size: u32,
}

impl Frame {
    fn fit<T: Iterator<Item = Point>>(points: T, im_size: u32) -> Self {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;

        for p in points {
            x_min = x_min.min(p.x);
            x_max = x_max.max(p.x);
            y_min = y_min.min(p.y);
            y_max = y_max.max(p.y);
        }

        let max_range = (x_max - x_min).max(y_max - y_min);
        let target_range = 0.8 * (im_size as f64);
        let scale = if max_range > 0.0 {
            target_range / max_range
        } else {
            1.0
        };

        Frame {
            scale,
            mid_x: (x_max + x_min) / 2.0,
            mid_y: (y_max + y_min) / 2.0,
            im_size,
        }
    }

    fn pixel(&self, p: Point) -> (u32, u32) {
        // no y flip: point coordinates are already in screen orientation
        let x = ((p.x - self.mid_x) * self.scale + (self.im_size as f64) / 2.0).round();
        let y = ((p.y - self.mid_y) * self.scale + (self.im_size as f64) / 2.0).round();
        (x as u32, y as u32)
    }
}

// everything the renderer needs, copied out of the live structures
pub struct Visualizer {
    points: Vec<Point>,
    rings: Vec<Vec<Point>>,
}

impl Visualizer {
    // closed polygons to overlay, outermost first
    pub fn set_rings(&mut self, rings: Vec<Vec<Point>>) {
        self.rings = rings;
    }

    pub fn draw<T>(&self, fileloc: &str, options: T)
    where
        T: Into<VisOptions>,
    {
        let options = options.into();
        let size = options.im_size;

        let all = self.points.iter().chain(self.rings.iter().flatten());
        let frame = Frame::fit(all.cloned(), size);

        let mut img = RgbImage::new(size, size);

        // set points first
        let dot = color::STDCOL[options.dot_color];
        for &p in self.points.iter() {
            let (x, y) = frame.pixel(p);
            for (i, j) in fill::dot_points(x, y, size) {
                img.put_pixel(i, j, dot);
            }
        }

        // ring polygons over the top, fading through the gradient
        let fades = color::layer_fade(self.rings.len());
        for (ring, fade) in self.rings.iter().zip(fades) {
            let pix: Vec<(u32, u32)> = ring.iter().map(|&p| frame.pixel(p)).collect();

            for k in 0..pix.len() {
                let edge = bresenham::line_clipped(pix[k], pix[(k + 1) % pix.len()], size);
                for (x, y) in edge {
                    img.put_pixel(x, y, fade);
                }
            }
            for &(x, y) in pix.iter() {
                for (i, j) in fill::dot_points(x, y, size) {
                    img.put_pixel(i, j, fade);
                }
            }
        }

        img.save(fileloc).unwrap();
    }
}

impl From<Vec<Point>> for Visualizer {
    fn from(points: Vec<Point>) -> Self {
        Visualizer {
            points,
            rings: Vec::new(),
        }
    }
}
