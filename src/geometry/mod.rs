mod arcseg;
mod poly;
mod ray;

pub use arcseg::Arcseg;
pub use poly::{Poly, PolyVertex};
pub use ray::Ray;
