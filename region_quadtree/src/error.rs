use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum QuadtreeError {
    #[error("rectangle width/height must be finite and non-negative (width: {width}, height: {height})")]
    InvalidRectangleDims { width: f64, height: f64 },
    #[error("rectangle origin must be finite (x: {x}, y: {y})")]
    NonFiniteCoordinate { x: f64, y: f64 },
    #[error(
        "rectangle must be within quadtree bounds (x: {x}, y: {y}, w: {w}, h: {h}, bounds_x: {bounds_x}, bounds_y: {bounds_y}, bounds_w: {bounds_w}, bounds_h: {bounds_h})"
    )]
    RectOutOfBounds {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        bounds_x: f64,
        bounds_y: f64,
        bounds_w: f64,
        bounds_h: f64,
    },
    #[error("max_depth {max_depth} exceeds the supported limit of {limit}")]
    InvalidConfiguration { max_depth: usize, limit: usize },
}

pub type QuadtreeResult<T> = Result<T, QuadtreeError>;
