use super::*;
use crate::collision_detection::rect_rect;

impl<T, N, R, E> QuadTree<T, N, R, E>
where
    N: Coordinate,
    R: Fn(&T) -> Rect<N>,
{
    /// Appends every stored item whose rectangle intersects `rect` to `items`.
    pub fn query(&self, rect: &Rect<N>, items: &mut Vec<T>)
    where
        T: Clone,
    {
        self.for_each_in_rect(rect, |item| items.push(item.clone()));
    }

    /// Calls `f` for every stored item whose rectangle intersects `rect`, in
    /// tree order.
    pub fn for_each_in_rect<F>(&self, rect: &Rect<N>, mut f: F)
    where
        F: FnMut(&T),
    {
        self.root.query(rect, &self.get_rect, &mut f);
    }
}

impl<T, N: Coordinate> Node<T, N> {
    fn query<R, F>(&self, query_rect: &Rect<N>, get_rect: &R, f: &mut F)
    where
        R: Fn(&T) -> Rect<N>,
        F: FnMut(&T),
    {
        for item in &self.items {
            if rect_rect(query_rect, &get_rect(item)) {
                f(item);
            }
        }

        if !self.has_children {
            return;
        }
        if let Some(children) = self.children.as_deref() {
            for child in children {
                if rect_rect(query_rect, &child.rect) {
                    child.query(query_rect, get_rect, f);
                }
            }
        }
    }
}
