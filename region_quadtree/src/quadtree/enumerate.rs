use super::*;

/// One step of a depth-first walk over the tree, for printers and
/// visualizers.
///
/// Each visited node produces an `Enter`, one `Item` per stored item and a
/// `Leave`. `quadrant` is `None` for the root.
#[derive(Debug)]
pub enum NodeEvent<'a, T, N> {
    Enter {
        level: usize,
        quadrant: Option<Quadrant>,
        rect: Rect<N>,
        has_children: bool,
    },
    Item {
        level: usize,
        quadrant: Option<Quadrant>,
        rect: Rect<N>,
        item: &'a T,
    },
    Leave {
        level: usize,
        quadrant: Option<Quadrant>,
        rect: Rect<N>,
    },
}

impl<T, N, R, E> QuadTree<T, N, R, E>
where
    N: Coordinate,
{
    /// Walks the tree depth first. Children are only visited below nodes
    /// whose subtree holds items.
    pub fn enumerate_nodes<F>(&self, mut f: F)
    where
        F: FnMut(NodeEvent<'_, T, N>),
    {
        self.root.enumerate(0, None, &mut f);
    }

    /// Retrieves every pre-built node rectangle, occupied or not.
    pub fn all_node_rects(&self, rects: &mut Vec<Rect<N>>) {
        self.root.node_rects(rects);
    }
}

impl<T, N: Coordinate> Node<T, N> {
    fn enumerate<'a, F>(&'a self, level: usize, quadrant: Option<Quadrant>, f: &mut F)
    where
        F: FnMut(NodeEvent<'a, T, N>),
    {
        let rect = self.rect;
        f(NodeEvent::Enter {
            level,
            quadrant,
            rect,
            has_children: self.has_children,
        });
        for item in &self.items {
            f(NodeEvent::Item {
                level,
                quadrant,
                rect,
                item,
            });
        }
        f(NodeEvent::Leave {
            level,
            quadrant,
            rect,
        });

        if !self.has_children {
            return;
        }
        if let Some(children) = self.children.as_deref() {
            for (child, &child_quadrant) in children.iter().zip(Quadrant::ALL.iter()) {
                child.enumerate(level + 1, Some(child_quadrant), f);
            }
        }
    }

    fn node_rects(&self, rects: &mut Vec<Rect<N>>) {
        rects.push(self.rect);
        if let Some(children) = self.children.as_deref() {
            for child in children {
                child.node_rects(rects);
            }
        }
    }
}
