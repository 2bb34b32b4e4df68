//! Metric and intersection queries across the value types.
mod distance;
mod intersect;

pub use crate::math::{angle, distance};
pub use distance::distance_along;
pub use intersect::{
    intersect_arcseg_ray, intersect_ray_arcseg, intersect_ray_arcseg_with, intersect_ray_poly,
    intersect_ray_poly_with, intersect_rays, intersect_rays_with,
};
