use super::*;
use tracing::trace;

impl<T, N, R, E> QuadTree<T, N, R, E>
where
    N: Coordinate,
    R: Fn(&T) -> Rect<N>,
    E: Fn(&T, &T) -> bool,
{
    /// Removes the first stored item equal to `item`.
    ///
    /// The item is located by following the same routing `add` used, so its
    /// rectangle must be the one it was inserted with. Removing an item that
    /// is not stored does nothing.
    pub fn remove(&mut self, item: &T) {
        let rect = (self.get_rect)(item);
        if self.root.remove(item, &rect, &self.item_equal) {
            self.len -= 1;
        } else {
            trace!(?rect, "remove found no matching item");
        }
    }
}

impl<T, N: Coordinate> Node<T, N> {
    /// Returns whether an item was removed.
    pub(crate) fn remove<E>(&mut self, item: &T, rect: &Rect<N>, item_equal: &E) -> bool
    where
        E: Fn(&T, &T) -> bool,
    {
        if self.has_children {
            if let Some(quadrant) = self.route(rect) {
                if let Some(children) = self.children.as_deref_mut() {
                    let removed = children[quadrant.index()].remove(item, rect, item_equal);
                    self.has_children = children.iter().any(Node::is_occupied);
                    return removed;
                }
            }
        }

        match self.items.iter().position(|stored| item_equal(item, stored)) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }
}
