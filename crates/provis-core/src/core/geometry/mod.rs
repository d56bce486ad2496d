//! # Geometry Kernel
//!
//! Vector algebra and bounding-box geometry over atom coordinates.
//!
//! All vector arithmetic (addition, subtraction, scaling, dot and cross
//! products, magnitudes, distances) is carried directly by nalgebra's
//! [`Point3`](nalgebra::Point3) and [`Vector3`](nalgebra::Vector3)
//! operators. This module adds the operations nalgebra does not define,
//! together with the engine's degenerate-input policy: empty point sets and
//! zero vectors resolve to zero values by explicit branches, never to faults
//! or divisions by zero.

pub mod bounds;
pub mod kernel;
