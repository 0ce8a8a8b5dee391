//! Squared-distance fields measured from an array's geometric center
//!
//! The center sits at `(width / 2.0, height / 2.0)` in continuous
//! coordinates. Using the float midpoint rather than integer division keeps
//! the field symmetric for odd dimensions, where the true center falls
//! between cells.

use ndarray::{Array1, Array2, Axis};

/// Build the squared-distance field with straightforward per-cell loops
///
/// Cell `(y, x)` holds `(x - width/2)^2 + (y - height/2)^2`. Every value is
/// non-negative and the minimum occurs at the cell nearest the center.
pub fn squared_distance_field(height: usize, width: usize) -> Array2<f64> {
    let center_x = width as f64 / 2.0;
    let center_y = height as f64 / 2.0;

    Array2::from_shape_fn((height, width), |(y, x)| {
        let dx = x as f64 - center_x;
        let dy = y as f64 - center_y;
        dx.mul_add(dx, dy * dy)
    })
}

/// Build the squared-distance field from broadcast row and column offsets
///
/// Computes one squared offset per row and per column, then sums them via
/// broadcasting. Bit-identical to [`squared_distance_field`]: both paths
/// evaluate `dx*dx + dy*dy` on the same float center.
pub fn squared_distance_field_vectorized(height: usize, width: usize) -> Array2<f64> {
    let center_x = width as f64 / 2.0;
    let center_y = height as f64 / 2.0;

    let row_squares: Array1<f64> = (0..height)
        .map(|y| {
            let dy = y as f64 - center_y;
            dy * dy
        })
        .collect();
    let col_squares: Array1<f64> = (0..width)
        .map(|x| {
            let dx = x as f64 - center_x;
            dx * dx
        })
        .collect();

    let rows = row_squares.insert_axis(Axis(1));
    let cols = col_squares.insert_axis(Axis(0));
    &rows + &cols
}
