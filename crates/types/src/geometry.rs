use crate::value::AttributeMap;

/// A fully resolved box, in card pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Geometry as supplied by a drawing call, where any field may be omitted.
///
/// Omitted fields are filled from a layout entry first and from defaults last.
/// A value the caller supplied is never replaced.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Geometry {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl Geometry {
    /// Names of the layout attributes that feed geometry.
    pub const FIELDS: [&'static str; 4] = ["x", "y", "width", "height"];

    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    pub fn with_x(mut self, x: f64) -> Self {
        self.x = Some(x);
        self
    }

    pub fn with_y(mut self, y: f64) -> Self {
        self.y = Some(y);
        self
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    /// Fills every omitted field with the matching numeric attribute, if any.
    pub fn fill_from(&mut self, attributes: &AttributeMap) {
        let number = |name: &str| attributes.get(name).and_then(|v| v.as_f64());
        self.x = self.x.or_else(|| number("x"));
        self.y = self.y.or_else(|| number("y"));
        self.width = self.width.or_else(|| number("width"));
        self.height = self.height.or_else(|| number("height"));
    }

    /// Collapses the geometry into a `Rect`, using `size` for a missing width or height.
    pub fn resolve(self, size: Size) -> Rect {
        Rect {
            x: self.x.unwrap_or(0.0),
            y: self.y.unwrap_or(0.0),
            width: self.width.unwrap_or(size.width),
            height: self.height.unwrap_or(size.height),
        }
    }
}
