use common::coordinate::Coordinate;
use common::shapes::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Quadrant {
    NW = 0,
    NE = 1,
    SW = 2,
    SE = 3,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [Quadrant::NW, Quadrant::NE, Quadrant::SW, Quadrant::SE];

    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }
}

pub(crate) struct Node<T, N> {
    pub(crate) rect: Rect<N>,
    pub(crate) center: (N, N),
    /// Either all four quadrants exist or the node sits at `max_depth`.
    pub(crate) children: Option<Box<[Node<T, N>; 4]>>,
    /// Set while some node below this one stores at least one item.
    pub(crate) has_children: bool,
    pub(crate) items: Vec<T>,
}

impl<T, N: Coordinate> Node<T, N> {
    /// Builds `rect` and every descendant `levels` deep.
    pub(crate) fn build(rect: Rect<N>, levels: usize, node_capacity: usize) -> Self {
        let children = if levels > 0 {
            Some(Box::new(Quadrant::ALL.map(|quadrant| {
                Node::build(child_rect(&rect, quadrant), levels - 1, node_capacity)
            })))
        } else {
            None
        };

        Node {
            rect,
            center: split_center(&rect),
            children,
            has_children: false,
            items: Vec::with_capacity(node_capacity),
        }
    }

    /// Whether this node or anything below it holds an item.
    #[inline]
    pub(crate) fn is_occupied(&self) -> bool {
        self.has_children || !self.items.is_empty()
    }

    /// Quadrant this node would route `rect` to, if it has children at all.
    #[inline]
    pub(crate) fn route(&self, rect: &Rect<N>) -> Option<Quadrant> {
        if self.children.is_none() {
            return None;
        }
        classify(self.center, rect)
    }
}

/// Split point of `rect`. For integer coordinates the west and north halves
/// take the extra unit of an odd width or height.
#[inline]
pub(crate) fn split_center<N: Coordinate>(rect: &Rect<N>) -> (N, N) {
    let (west_w, _) = N::split(rect.w);
    let (north_h, _) = N::split(rect.h);
    (rect.x + west_w, rect.y + north_h)
}

/// Rectangle of one quadrant of `rect`. The four quadrants tile `rect`
/// exactly.
pub(crate) fn child_rect<N: Coordinate>(rect: &Rect<N>, quadrant: Quadrant) -> Rect<N> {
    let (west_w, east_w) = N::split(rect.w);
    let (north_h, south_h) = N::split(rect.h);
    let east_x = rect.x + west_w;
    let south_y = rect.y + north_h;

    match quadrant {
        Quadrant::NW => Rect::new(rect.x, rect.y, west_w, north_h),
        Quadrant::NE => Rect::new(east_x, rect.y, east_w, north_h),
        Quadrant::SW => Rect::new(rect.x, south_y, west_w, south_h),
        Quadrant::SE => Rect::new(east_x, south_y, east_w, south_h),
    }
}

/// Quadrant that fully contains `rect`, or `None` when `rect` straddles
/// either split axis.
#[inline]
pub(crate) fn classify<N: Coordinate>(center: (N, N), rect: &Rect<N>) -> Option<Quadrant> {
    let (center_x, center_y) = center;
    let north = rect.bottom() <= center_y;
    let south = rect.y >= center_y;

    if rect.right() <= center_x {
        if north {
            Some(Quadrant::NW)
        } else if south {
            Some(Quadrant::SW)
        } else {
            None
        }
    } else if rect.x >= center_x {
        if north {
            Some(Quadrant::NE)
        } else if south {
            Some(Quadrant::SE)
        } else {
            None
        }
    } else {
        None
    }
}
