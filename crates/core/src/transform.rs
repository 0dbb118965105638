//! 2D affine transforms as 3x3 matrices.
//!
//! [`Mat3`] stores nine `f32` values in **column-major** order and acts on
//! column vectors `(x, y, 1)`: a point `p` maps to `M * p`. That is the layout
//! `uniformMatrix3fv` expects with `transpose = false`, and the layout
//! `glam::Mat3` uses, so matrices convert to both without shuffling.
//!
//! Composition chains in the **local frame**: [`translate`], [`rotate`] and
//! [`scale`] all right-multiply (`m * T`), so each call acts in the frame set
//! up by the calls before it. The usual pipeline reads left to right:
//!
//! ```text
//! let m = projection(w, h);       // pixels -> clip space
//! let m = translate(m, tx, ty);   // move the origin
//! let m = rotate(m, angle);       // spin around the moved origin
//! let m = scale(m, sx, sy);       // stretch in the rotated frame
//! ```
//!
//! All operations are pure and total. The only degenerate input is a zero
//! width or height passed to [`projection`], which yields non-finite values;
//! use [`CanvasSize`](crate::canvas::CanvasSize) to rule that out up front.

use std::ops::Mul;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A 3x3 matrix holding a 2D affine transform, column-major.
///
/// Element `(row, col)` lives at index `col * 3 + row`. Every matrix built
/// through this module keeps the bottom row at `[0, 0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mat3 {
    m: [f32; 9],
}

impl Mat3 {
    /// The identity transform.
    pub const IDENTITY: Mat3 = Mat3 {
        m: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
    };

    /// Builds a matrix from nine column-major values.
    pub const fn from_cols_array(m: [f32; 9]) -> Self {
        Self { m }
    }

    /// Returns the nine column-major values.
    pub const fn to_cols_array(&self) -> [f32; 9] {
        self.m
    }

    /// Borrows the values in the layout a GL `mat3` uniform expects
    /// (column-major, `transpose = false`).
    pub fn as_uniform(&self) -> &[f32; 9] {
        &self.m
    }

    /// Returns the element at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is greater than 2.
    pub fn get(&self, row: usize, col: usize) -> f32 {
        assert!(row < 3 && col < 3, "Mat3 index ({row}, {col}) out of range");
        self.m[col * 3 + row]
    }

    /// Maps pixel space of a `width` x `height` canvas onto clip space.
    ///
    /// Pixel `(0, 0)` lands on clip `(-1, 1)` (top-left) and pixel
    /// `(width, height)` on clip `(1, -1)` (bottom-right), matching a
    /// y-down pixel grid rendered by a y-up clip space.
    ///
    /// A zero `width` or `height` produces infinities; the result is then
    /// meaningless. Callers must guard against zero-size canvases.
    pub fn projection(width: f32, height: f32) -> Self {
        Self {
            m: [
                2.0 / width,
                0.0,
                0.0,
                0.0,
                -2.0 / height,
                0.0,
                -1.0,
                1.0,
                1.0,
            ],
        }
    }

    /// A pure translation by `(tx, ty)`.
    pub fn translation(tx: f32, ty: f32) -> Self {
        Self {
            m: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, tx, ty, 1.0],
        }
    }

    /// A pure rotation by `angle_radians`, counter-clockwise in a y-up frame.
    ///
    /// `(1, 0)` maps to `(cos a, sin a)`.
    pub fn rotation(angle_radians: f32) -> Self {
        let (s, c) = angle_radians.sin_cos();
        Self {
            m: [c, s, 0.0, -s, c, 0.0, 0.0, 0.0, 1.0],
        }
    }

    /// A pure non-uniform scale.
    pub fn scaling(sx: f32, sy: f32) -> Self {
        Self {
            m: [sx, 0.0, 0.0, 0.0, sy, 0.0, 0.0, 0.0, 1.0],
        }
    }

    /// Returns `self * rhs`: the transform that applies `rhs` first.
    pub fn multiply(&self, rhs: &Mat3) -> Mat3 {
        let a = &self.m;
        let b = &rhs.m;
        let mut out = [0.0f32; 9];
        for col in 0..3 {
            for row in 0..3 {
                out[col * 3 + row] = a[row] * b[col * 3]
                    + a[3 + row] * b[col * 3 + 1]
                    + a[6 + row] * b[col * 3 + 2];
            }
        }
        Mat3 { m: out }
    }

    /// Composes a translation in the local frame: `self * T(tx, ty)`.
    pub fn translate(self, tx: f32, ty: f32) -> Mat3 {
        self.multiply(&Mat3::translation(tx, ty))
    }

    /// Composes a rotation in the local frame: `self * R(angle_radians)`.
    pub fn rotate(self, angle_radians: f32) -> Mat3 {
        self.multiply(&Mat3::rotation(angle_radians))
    }

    /// Composes a scale in the local frame: `self * S(sx, sy)`.
    pub fn scale(self, sx: f32, sy: f32) -> Mat3 {
        self.multiply(&Mat3::scaling(sx, sy))
    }

    /// Applies the transform to a point with homogeneous `w = 1`.
    ///
    /// The bottom row is assumed to be `[0, 0, 1]`, so no perspective
    /// divide is performed.
    pub fn transform_point(&self, p: Vec2) -> Vec2 {
        let m = &self.m;
        Vec2::new(
            m[0] * p.x + m[3] * p.y + m[6],
            m[1] * p.x + m[4] * p.y + m[7],
        )
    }

    /// Returns the determinant.
    pub fn determinant(&self) -> f32 {
        let m = &self.m;
        m[0] * (m[4] * m[8] - m[7] * m[5]) - m[3] * (m[1] * m[8] - m[7] * m[2])
            + m[6] * (m[1] * m[5] - m[4] * m[2])
    }

    /// Returns the inverse transform, or `None` if the matrix is singular
    /// (for example after a zero scale).
    pub fn inverse(&self) -> Option<Mat3> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            return None;
        }

        let c0 = [self.m[0], self.m[1], self.m[2]];
        let c1 = [self.m[3], self.m[4], self.m[5]];
        let c2 = [self.m[6], self.m[7], self.m[8]];

        // Rows of the inverse are the pairwise cross products of the columns.
        let rows = [cross(c1, c2), cross(c2, c0), cross(c0, c1)];

        let inv_det = 1.0 / det;
        let mut out = [0.0f32; 9];
        for (row, r) in rows.iter().enumerate() {
            for col in 0..3 {
                out[col * 3 + row] = r[col] * inv_det;
            }
        }
        Some(Mat3 { m: out })
    }

    /// Returns whether the bottom row is exactly `[0, 0, 1]`.
    pub fn is_affine(&self) -> bool {
        self.m[2] == 0.0 && self.m[5] == 0.0 && self.m[8] == 1.0
    }

    /// Returns whether every element is within `tolerance` of `other`'s.
    pub fn abs_diff_eq(&self, other: &Mat3, tolerance: f32) -> bool {
        self.m
            .iter()
            .zip(other.m.iter())
            .all(|(a, b)| (a - b).abs() <= tolerance)
    }
}

fn cross(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Mat3 {
    type Output = Mat3;

    fn mul(self, rhs: Mat3) -> Mat3 {
        self.multiply(&rhs)
    }
}

impl From<glam::Mat3> for Mat3 {
    fn from(m: glam::Mat3) -> Self {
        Self {
            m: m.to_cols_array(),
        }
    }
}

impl From<Mat3> for glam::Mat3 {
    fn from(m: Mat3) -> Self {
        glam::Mat3::from_cols_array(&m.m)
    }
}

/// Maps a `width` x `height` pixel canvas to clip space. See [`Mat3::projection`].
pub fn projection(width: f32, height: f32) -> Mat3 {
    Mat3::projection(width, height)
}

/// Returns `m * T(tx, ty)`.
pub fn translate(m: Mat3, tx: f32, ty: f32) -> Mat3 {
    m.translate(tx, ty)
}

/// Returns `m * R(angle_radians)`.
pub fn rotate(m: Mat3, angle_radians: f32) -> Mat3 {
    m.rotate(angle_radians)
}

/// Returns `m * S(sx, sy)`.
pub fn scale(m: Mat3, sx: f32, sy: f32) -> Mat3 {
    m.scale(sx, sy)
}

/// Returns `a * b`.
pub fn multiply(a: Mat3, b: Mat3) -> Mat3 {
    a.multiply(&b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    const EPS: f32 = 1e-5;

    fn assert_vec_near(actual: Vec2, expected: Vec2) {
        assert!(
            (actual - expected).abs().max_element() < EPS,
            "expected {expected:?}, got {actual:?}"
        );
    }

    fn sample() -> Mat3 {
        Mat3::from_cols_array([1.5, -0.25, 0.0, 0.75, 2.0, 0.0, 12.0, -7.0, 1.0])
    }

    #[test]
    fn projection_maps_origin_to_top_left() {
        let m = projection(800.0, 600.0);
        assert_vec_near(m.transform_point(Vec2::ZERO), Vec2::new(-1.0, 1.0));
    }

    #[test]
    fn projection_maps_far_corner_to_bottom_right() {
        let m = projection(800.0, 600.0);
        assert_vec_near(
            m.transform_point(Vec2::new(800.0, 600.0)),
            Vec2::new(1.0, -1.0),
        );
    }

    #[test]
    fn projection_of_zero_width_is_not_finite() {
        let m = projection(0.0, 600.0);
        assert!(!m.to_cols_array()[0].is_finite());
    }

    #[test]
    fn canvas_centre_lands_on_clip_origin() {
        let m = projection(800.0, 600.0);
        let m = translate(m, 400.0, 300.0);
        let m = rotate(m, 0.0);
        let m = scale(m, 1.0, 1.0);
        assert_vec_near(m.transform_point(Vec2::ZERO), Vec2::ZERO);
    }

    #[test]
    fn translated_pixel_matches_hand_computed_clip() {
        // Pixel (200, 150) on an 800x600 canvas: x = 200/400 - 1, y = 1 - 150/300.
        let m = translate(projection(800.0, 600.0), 200.0, 150.0);
        assert_vec_near(m.transform_point(Vec2::ZERO), Vec2::new(-0.5, 0.5));
    }

    #[test]
    fn negative_scale_mirrors_x() {
        let m = scale(Mat3::IDENTITY, -1.0, 1.0);
        assert_eq!(m.transform_point(Vec2::new(10.0, 5.0)), Vec2::new(-10.0, 5.0));
    }

    #[test]
    fn zero_scale_collapses_without_error() {
        let m = scale(Mat3::IDENTITY, 0.0, 2.0);
        assert_eq!(m.transform_point(Vec2::new(10.0, 5.0)), Vec2::new(0.0, 10.0));
        assert!(m.inverse().is_none());
    }

    #[test]
    fn identity_parameters_are_exact_no_ops() {
        let m = sample();
        assert_eq!(translate(m, 0.0, 0.0), m);
        assert_eq!(rotate(m, 0.0), m);
        assert_eq!(scale(m, 1.0, 1.0), m);
    }

    #[test]
    fn rotation_is_counter_clockwise() {
        let m = rotate(Mat3::IDENTITY, FRAC_PI_2);
        assert_vec_near(m.transform_point(Vec2::X), Vec2::Y);
        assert_vec_near(m.transform_point(Vec2::Y), -Vec2::X);
    }

    #[test]
    fn translate_acts_in_local_frame() {
        // Scale first, then translate: the offset is scaled too.
        let m = scale(Mat3::IDENTITY, 2.0, 3.0);
        let m = translate(m, 5.0, 5.0);
        assert_vec_near(m.transform_point(Vec2::ZERO), Vec2::new(10.0, 15.0));
    }

    #[test]
    fn rotate_then_translate_moves_along_rotated_axis() {
        let m = rotate(Mat3::IDENTITY, FRAC_PI_2);
        let m = translate(m, 10.0, 0.0);
        assert_vec_near(m.transform_point(Vec2::ZERO), Vec2::new(0.0, 10.0));
    }

    #[test]
    fn multiply_is_not_commutative() {
        let t = Mat3::translation(10.0, 0.0);
        let r = Mat3::rotation(FRAC_PI_2);
        let tr = multiply(t, r).transform_point(Vec2::X);
        let rt = multiply(r, t).transform_point(Vec2::X);
        assert_vec_near(tr, Vec2::new(10.0, 1.0));
        assert_vec_near(rt, Vec2::new(0.0, 11.0));
    }

    #[test]
    fn mul_operator_matches_multiply() {
        let a = sample();
        let b = Mat3::rotation(0.3);
        assert_eq!(a * b, multiply(a, b));
    }

    #[test]
    fn composed_pipeline_stays_affine() {
        let m = scale(rotate(translate(projection(640.0, 480.0), 3.0, 4.0), 1.2), -2.0, 0.5);
        assert!(m.is_affine());
    }

    #[test]
    fn inverse_undoes_transform() {
        let m = scale(rotate(translate(Mat3::IDENTITY, 30.0, -12.0), 0.7), 2.0, -0.5);
        let inv = m.inverse().expect("invertible");
        let p = Vec2::new(3.5, -8.25);
        assert_vec_near(inv.transform_point(m.transform_point(p)), p);
        assert!((m * inv).abs_diff_eq(&Mat3::IDENTITY, EPS));
    }

    #[test]
    fn determinant_of_scale_is_product_of_factors() {
        assert!((Mat3::scaling(2.0, -3.0).determinant() + 6.0).abs() < EPS);
        assert!((Mat3::rotation(PI / 3.0).determinant() - 1.0).abs() < EPS);
    }

    #[test]
    fn uniform_layout_is_column_major() {
        let m = Mat3::translation(7.0, 9.0);
        let u = m.as_uniform();
        assert_eq!(u[6], 7.0);
        assert_eq!(u[7], 9.0);
        assert_eq!(m.get(0, 2), 7.0);
        assert_eq!(m.get(1, 2), 9.0);
    }

    #[test]
    fn glam_conversion_preserves_layout() {
        let m = sample();
        let g: glam::Mat3 = m.into();
        assert_eq!(g.to_cols_array(), m.to_cols_array());
        assert_eq!(Mat3::from(g), m);
        let p = Vec2::new(4.0, -2.0);
        assert_vec_near(g.transform_point2(p), m.transform_point(p));
    }

    #[test]
    fn serializes_as_flat_array() {
        let json = serde_json::to_value(Mat3::IDENTITY).unwrap();
        assert_eq!(json, serde_json::json!([1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn matrix() -> impl Strategy<Value = Mat3> {
            prop::array::uniform9(-4.0f32..4.0).prop_map(Mat3::from_cols_array)
        }

        fn affine() -> impl Strategy<Value = Mat3> {
            prop::array::uniform6(-4.0f32..4.0).prop_map(|v| {
                Mat3::from_cols_array([v[0], v[1], 0.0, v[2], v[3], 0.0, v[4], v[5], 1.0])
            })
        }

        proptest! {
            #[test]
            fn multiply_is_associative(a in matrix(), b in matrix(), c in matrix()) {
                let left = multiply(multiply(a, b), c);
                let right = multiply(a, multiply(b, c));
                prop_assert!(left.abs_diff_eq(&right, 1e-3), "{left:?} vs {right:?}");
            }

            #[test]
            fn multiply_agrees_with_glam(a in matrix(), b in matrix()) {
                let ours = multiply(a, b);
                let theirs = Mat3::from(glam::Mat3::from(a) * glam::Mat3::from(b));
                prop_assert!(ours.abs_diff_eq(&theirs, 1e-4), "{ours:?} vs {theirs:?}");
            }

            #[test]
            fn rotations_add(m in affine(), a in -PI..PI, b in -PI..PI) {
                let stepwise = rotate(rotate(m, a), b);
                let combined = rotate(m, a + b);
                prop_assert!(stepwise.abs_diff_eq(&combined, 1e-4), "{stepwise:?} vs {combined:?}");
            }

            #[test]
            fn projection_corners_hold_for_any_canvas(w in 1.0f32..8192.0, h in 1.0f32..8192.0) {
                let m = projection(w, h);
                let tl = m.transform_point(Vec2::ZERO);
                let br = m.transform_point(Vec2::new(w, h));
                prop_assert!((tl - Vec2::new(-1.0, 1.0)).abs().max_element() < 1e-5);
                prop_assert!((br - Vec2::new(1.0, -1.0)).abs().max_element() < 1e-5);
            }

            #[test]
            fn compositions_of_affine_stay_affine(
                tx in -1e3f32..1e3, ty in -1e3f32..1e3,
                angle in -PI..PI,
                sx in -5.0f32..5.0, sy in -5.0f32..5.0,
            ) {
                let m = scale(rotate(translate(projection(800.0, 600.0), tx, ty), angle), sx, sy);
                prop_assert!(m.is_affine());
            }
        }
    }
}
