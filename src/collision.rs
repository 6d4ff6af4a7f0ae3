/// Axis-aligned bounding boxes and the overlap test used for every contact.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Aabb {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}

/// Anything that occupies space on the play field.
pub trait Bounded {
    fn bounds(&self) -> Aabb;
}

impl Bounded for Aabb {
    fn bounds(&self) -> Aabb {
        *self
    }
}

/// Strict overlap: boxes that only share an edge do not collide.
pub fn overlaps(a: &impl Bounded, b: &impl Bounded) -> bool {
    let a = a.bounds();
    let b = b.bounds();
    a.x < b.x + b.w && a.x + a.w > b.x && a.y < b.y + b.h && a.y + a.h > b.y
}
