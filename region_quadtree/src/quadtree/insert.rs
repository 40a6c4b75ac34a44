use super::*;
use crate::collision_detection::rect_contains_rect;
use tracing::trace;

impl<T, N, R, E> QuadTree<T, N, R, E>
where
    N: Coordinate,
    R: Fn(&T) -> Rect<N>,
    E: Fn(&T, &T) -> bool,
{
    /// Stores `item` at the deepest node whose split point its rectangle
    /// does not straddle.
    ///
    /// The rectangle returned by `get_rect` must stay the same while the
    /// item is stored; placement is decided once, here.
    pub fn add(&mut self, item: T) -> QuadtreeResult<()> {
        let rect = (self.get_rect)(&item);
        if let Err(err) = self.ensure_insertable(&rect) {
            trace!(?rect, %err, "rejected insert");
            return Err(err);
        }
        self.root.insert(item, &rect);
        self.len += 1;
        Ok(())
    }

    fn ensure_insertable(&self, rect: &Rect<N>) -> QuadtreeResult<()> {
        validate_rect(rect)?;
        let bounds = &self.root.rect;
        if !rect_contains_rect(bounds, rect) {
            return Err(QuadtreeError::RectOutOfBounds {
                x: as_f64(rect.x),
                y: as_f64(rect.y),
                w: as_f64(rect.w),
                h: as_f64(rect.h),
                bounds_x: as_f64(bounds.x),
                bounds_y: as_f64(bounds.y),
                bounds_w: as_f64(bounds.w),
                bounds_h: as_f64(bounds.h),
            });
        }
        Ok(())
    }
}

impl<T, N: Coordinate> Node<T, N> {
    pub(crate) fn insert(&mut self, item: T, rect: &Rect<N>) {
        if let Some(quadrant) = self.route(rect) {
            if let Some(children) = self.children.as_deref_mut() {
                self.has_children = true;
                children[quadrant.index()].insert(item, rect);
                return;
            }
        }
        self.items.push(item);
    }
}
