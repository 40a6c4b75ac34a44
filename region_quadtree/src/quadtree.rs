//! Region quadtree over a fixed, eagerly built node hierarchy.
//!
//! Every node down to `max_depth` is allocated when the tree is constructed.
//! Inserting an item only decides where it is stored: an item goes to the
//! deepest node whose split point it does not straddle.

mod collision_pairs;
mod config;
mod enumerate;
mod insert;
mod node;
mod query_rect;
mod remove;

pub use config::Config;
pub use enumerate::NodeEvent;
pub use node::Quadrant;

use crate::error::{QuadtreeError, QuadtreeResult};
use common::coordinate::Coordinate;
use common::shapes::Rect;
use node::Node;
use tracing::debug;

/// Deepest hierarchy the tree agrees to pre-allocate.
pub const MAX_DEPTH_LIMIT: usize = 12;

pub type ItemEqualFn<T> = fn(&T, &T) -> bool;

pub struct QuadTree<T, N, R, E = ItemEqualFn<T>> {
    root: Node<T, N>,
    get_rect: R,
    item_equal: E,
    config: Config,
    node_count: usize,
    len: usize,
}

impl<T, N, R> QuadTree<T, N, R>
where
    T: PartialEq,
    N: Coordinate,
    R: Fn(&T) -> Rect<N>,
{
    pub fn new(bounding_box: Rect<N>, get_rect: R) -> QuadtreeResult<Self> {
        Self::new_with_config(bounding_box, get_rect, Config::default())
    }

    pub fn new_with_config(
        bounding_box: Rect<N>,
        get_rect: R,
        config: Config,
    ) -> QuadtreeResult<Self> {
        Self::with_item_equal(bounding_box, get_rect, T::eq as ItemEqualFn<T>, config)
    }
}

impl<T, N, R, E> QuadTree<T, N, R, E>
where
    N: Coordinate,
    R: Fn(&T) -> Rect<N>,
    E: Fn(&T, &T) -> bool,
{
    /// Builds a tree whose `remove` locates stored items with `item_equal`
    /// instead of `PartialEq`.
    pub fn with_item_equal(
        bounding_box: Rect<N>,
        get_rect: R,
        item_equal: E,
        config: Config,
    ) -> QuadtreeResult<Self> {
        validate_rect(&bounding_box)?;
        if config.max_depth > MAX_DEPTH_LIMIT {
            return Err(QuadtreeError::InvalidConfiguration {
                max_depth: config.max_depth,
                limit: MAX_DEPTH_LIMIT,
            });
        }

        let root = Node::build(bounding_box, config.max_depth, config.node_capacity);
        let node_count: usize = (0..=config.max_depth).map(|level| 1usize << (2 * level)).sum();
        debug!(
            ?bounding_box,
            max_depth = config.max_depth,
            node_capacity = config.node_capacity,
            node_count,
            "built quadtree hierarchy"
        );

        Ok(Self {
            root,
            get_rect,
            item_equal,
            config,
            node_count,
            len: 0,
        })
    }

    pub fn bounds(&self) -> Rect<N> {
        self.root.rect
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Number of pre-built nodes, root included.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

pub(crate) fn validate_rect<N: Coordinate>(rect: &Rect<N>) -> QuadtreeResult<()> {
    if !N::is_valid_len(rect.w) || !N::is_valid_len(rect.h) {
        return Err(QuadtreeError::InvalidRectangleDims {
            width: as_f64(rect.w),
            height: as_f64(rect.h),
        });
    }
    if !rect.x.is_finite_coord() || !rect.y.is_finite_coord() {
        return Err(QuadtreeError::NonFiniteCoordinate {
            x: as_f64(rect.x),
            y: as_f64(rect.y),
        });
    }
    if rect.x.checked_end(rect.w).is_none() || rect.y.checked_end(rect.h).is_none() {
        return Err(QuadtreeError::InvalidRectangleDims {
            width: as_f64(rect.w),
            height: as_f64(rect.h),
        });
    }
    Ok(())
}

#[inline]
pub(crate) fn as_f64<N: Coordinate>(value: N) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}
