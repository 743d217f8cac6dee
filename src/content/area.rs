use super::{ContentError, Point, Size};

/// Axis-aligned pixel rectangle, `min` inclusive and `max` exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Area {
    min: Point,
    max: Point,
}

impl Area {
    /// The zero rectangle. It contains no pixel.
    pub const EMPTY: Self = Self {
        min: Point::ORIGIN,
        max: Point::ORIGIN,
    };

    /// Create an `Area` covering the single pixel at `(x, y)`.
    #[must_use]
    pub const fn pixel(x: i32, y: i32) -> Self {
        Self {
            min: Point::new(x, y),
            max: Point::new(x + 1, y + 1),
        }
    }

    /// The area covered by a whole frame of `size`, anchored at the origin.
    ///
    /// # Errors
    /// Will return `DimensionOverflow` if the size doesn't fit in `i32` coordinates.
    pub fn from_size(size: Size) -> Result<Self, ContentError> {
        let max = size.corner()?;
        if max.x == 0 || max.y == 0 {
            Ok(Self::EMPTY)
        } else {
            Ok(Self {
                min: Point::ORIGIN,
                max,
            })
        }
    }

    /// Top-left corner, inclusive.
    #[must_use]
    pub const fn min(&self) -> Point {
        self.min
    }

    /// Bottom-right corner, exclusive.
    #[must_use]
    pub const fn max(&self) -> Point {
        self.max
    }

    /// The width of the area.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.max.x - self.min.x
    }

    /// The height of the area.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.max.y - self.min.y
    }

    /// Does the area contain no pixel at all?
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Smallest area containing both `self` and `other`.
    /// An empty area doesn't extend the result.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        if self.is_empty() {
            return other;
        }
        if other.is_empty() {
            return self;
        }
        Self {
            min: Point::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    /// Largest area contained in both `self` and `other`, or [`Area::EMPTY`] if they don't overlap.
    #[must_use]
    pub fn intersect(self, other: Self) -> Self {
        let res = Self {
            min: Point::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y)),
            max: Point::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y)),
        };
        if res.is_empty() {
            Self::EMPTY
        } else {
            res
        }
    }

    /// The same area moved by `offset`.
    #[must_use]
    pub fn translate(self, offset: Point) -> Self {
        if self.is_empty() {
            return Self::EMPTY;
        }
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }
}

impl TryFrom<(Point, Point)> for Area {
    type Error = ContentError;

    fn try_from((min, max): (Point, Point)) -> Result<Self, Self::Error> {
        // A degenerated rectangle is only representable as `Area::EMPTY`.
        if max.x <= min.x || max.y <= min.y {
            Err(ContentError::InvalidAreaBounding { min, max })
        } else {
            Ok(Self { min, max })
        }
    }
}

impl<A: Into<Area>> FromIterator<A> for Area {
    fn from_iter<T: IntoIterator<Item = A>>(iter: T) -> Self {
        iter.into_iter()
            .map(Into::into)
            .fold(Self::EMPTY, Self::union)
    }
}
