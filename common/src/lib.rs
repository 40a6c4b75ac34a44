pub mod coordinate;
pub mod shapes;
