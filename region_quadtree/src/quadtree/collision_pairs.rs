use super::*;
use crate::collision_detection::rect_rect;
use smallvec::SmallVec;

type ItemRects<N> = SmallVec<[Rect<N>; 16]>;

impl<T, N, R, E> QuadTree<T, N, R, E>
where
    N: Coordinate,
    R: Fn(&T) -> Rect<N>,
{
    /// Appends every unordered pair of stored items whose rectangles
    /// intersect to `pairs`. Each pair appears once.
    pub fn query_all(&self, pairs: &mut Vec<(T, T)>)
    where
        T: Clone,
    {
        self.for_each_collision_pair(|a, b| pairs.push((a.clone(), b.clone())));
    }

    /// Calls `f` once for every unordered pair of intersecting items.
    ///
    /// Pairs are found per node: first among the node's own items, then
    /// between the node's items and everything stored below each child, and
    /// then recursively inside each child. Those three sets never overlap, so
    /// no pair is reported twice.
    pub fn for_each_collision_pair<F>(&self, mut f: F)
    where
        F: FnMut(&T, &T),
    {
        self.root.collision_pairs(&self.get_rect, &mut f);
    }
}

impl<T, N: Coordinate> Node<T, N> {
    fn collision_pairs<R, F>(&self, get_rect: &R, f: &mut F)
    where
        R: Fn(&T) -> Rect<N>,
        F: FnMut(&T, &T),
    {
        let rects: ItemRects<N> = self.items.iter().map(get_rect).collect();

        for (i, a) in self.items.iter().enumerate() {
            for (j, b) in self.items.iter().enumerate().skip(i + 1) {
                if rect_rect(&rects[i], &rects[j]) {
                    f(a, b);
                }
            }
        }

        if !self.has_children {
            return;
        }
        let Some(children) = self.children.as_deref() else {
            return;
        };

        if !self.items.is_empty() {
            for child in children {
                if !child.is_occupied() || !rects.iter().any(|rect| rect_rect(rect, &child.rect)) {
                    continue;
                }
                child.for_each_item(&mut |b: &T| {
                    let b_rect = get_rect(b);
                    for (a, a_rect) in self.items.iter().zip(rects.iter()) {
                        if rect_rect(a_rect, &b_rect) {
                            f(a, b);
                        }
                    }
                });
            }
        }

        for child in children {
            if child.is_occupied() {
                child.collision_pairs(get_rect, f);
            }
        }
    }

    /// Visits every item stored in this subtree.
    fn for_each_item<F>(&self, f: &mut F)
    where
        F: FnMut(&T),
    {
        for item in &self.items {
            f(item);
        }
        if !self.has_children {
            return;
        }
        if let Some(children) = self.children.as_deref() {
            for child in children {
                child.for_each_item(f);
            }
        }
    }
}
