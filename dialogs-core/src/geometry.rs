use crate::host::DialogHost;

/// Two dimensional point in page (CSS pixel) coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

impl std::ops::Add for Point {
    type Output = Point;
    fn add(self, o: Point) -> Point {
        Point::new(self.x + o.x, self.y + o.y)
    }
}

impl std::ops::Sub for Point {
    type Output = Point;
    fn sub(self, o: Point) -> Point {
        Point::new(self.x - o.x, self.y - o.y)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Size { width, height }
    }
}

/// Page-absolute box.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn from_parts(origin: Point, size: Size) -> Self {
        Rect {
            x: origin.x,
            y: origin.y,
            width: size.width,
            height: size.height,
        }
    }
}

/// Page-absolute bounding box of an element: its page offset combined with
/// the SVG bbox size for SVG elements or the rendered box for HTML ones.
pub fn bounding_box<H: DialogHost>(host: &H, el: &H::Element) -> Rect {
    let offset = host.page_offset(el);
    let size = host.svg_bbox(el).unwrap_or_else(|| host.offset_size(el));
    Rect::from_parts(offset, size)
}

/// Keep a box of `size` at `pos` fully inside `viewport`, each axis on its own.
/// When the box is larger than the viewport it is pinned to the top/left edge.
pub fn clamp_to_viewport(pos: Point, size: Size, viewport: Size) -> Point {
    let clamp = |v: f64, max: f64| v.min(max).max(0.0);
    Point {
        x: clamp(pos.x, viewport.width - size.width),
        y: clamp(pos.y, viewport.height - size.height),
    }
}
