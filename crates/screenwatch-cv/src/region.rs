//! Candidate text regions
//!
//! A region pairs the bounding rectangle of one line-like blob with the crop
//! of the isolation mask under it. Crops come from the mask, not the original
//! frame: the mask is already dark text on a light ground, which is what the
//! recognizer wants.

use opencv::core::{Mat, Point, Rect};

/// One candidate text line.
#[derive(Debug, Clone)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub crop: Mat,
}

impl Region {
    pub fn new(rect: Rect, crop: Mat) -> Self {
        Self {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            crop,
        }
    }

    /// Bounding rectangle in frame coordinates.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn area(&self) -> f64 {
        (self.width * self.height) as f64
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Whether `rect` lies fully inside this region's rectangle.
    pub fn contains(&self, rect: Rect) -> bool {
        rect.x >= self.x
            && rect.y >= self.y
            && rect.x + rect.width <= self.x + self.width
            && rect.y + rect.height <= self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_geometry() {
        let crop = Mat::default();
        let region = Region::new(Rect::new(50, 40, 250, 26), crop);

        assert_eq!(region.rect(), Rect::new(50, 40, 250, 26));
        assert_eq!(region.center(), Point::new(175, 53));
        assert!(region.contains(Rect::new(60, 45, 100, 10)));
        assert!(!region.contains(Rect::new(0, 0, 10, 10)));
    }
}
