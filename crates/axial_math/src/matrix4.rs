//! 4x4 transform matrix
//!
//! Storage is column-major: four [`Vector4`] lanes, lane `i` is column `i`,
//! so `m[c][r]` is the element in row `r`, column `c`. The translation of an
//! affine transform lives in lane 3. [`Matrix4::as_array`] exposes the 16
//! floats in that order, which is what OpenGL/Vulkan/wgpu uniform buffers
//! expect.
//!
//! Vectors are columns: `m * v` transforms `v`, and `a * b` applied to a
//! vector applies `b` first, then `a`.

use std::ops::{Index, IndexMut, Mul};

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::backend::{Active, Backend, MatLanes};
use crate::{Quaternion, RectF, Vector3, Vector4};

/// 4x4 matrix (column-major)
#[repr(C, align(16))]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Matrix4 {
    cols: [Vector4; 4],
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix4 {
    /// Identity matrix
    pub const IDENTITY: Self = Self::from_columns(Vector4::X, Vector4::Y, Vector4::Z, Vector4::W);

    /// All-zero matrix
    pub const ZERO: Self = Self::from_columns(Vector4::ZERO, Vector4::ZERO, Vector4::ZERO, Vector4::ZERO);

    /// Build from four columns
    #[inline]
    pub const fn from_columns(c0: Vector4, c1: Vector4, c2: Vector4, c3: Vector4) -> Self {
        Self { cols: [c0, c1, c2, c3] }
    }

    /// Build from four rows
    #[inline]
    pub fn from_rows(r0: Vector4, r1: Vector4, r2: Vector4, r3: Vector4) -> Self {
        Self::from_columns(r0, r1, r2, r3).transposed()
    }

    #[inline]
    fn from_lanes(m: MatLanes) -> Self {
        Self::from_columns(
            Vector4::from_lanes(m[0]),
            Vector4::from_lanes(m[1]),
            Vector4::from_lanes(m[2]),
            Vector4::from_lanes(m[3]),
        )
    }

    #[inline]
    fn lanes(&self) -> MatLanes {
        [self.cols[0].lanes, self.cols[1].lanes, self.cols[2].lanes, self.cols[3].lanes]
    }

    #[inline]
    pub fn identity() -> Self {
        Self::IDENTITY
    }

    #[inline]
    pub fn zero() -> Self {
        Self::ZERO
    }

    pub fn set_zero(&mut self) -> &mut Self {
        *self = Self::ZERO;
        self
    }

    pub fn set_identity(&mut self) -> &mut Self {
        *self = Self::IDENTITY;
        self
    }

    /// Uniform scale: diagonal `(r, r, r, 1)`
    pub fn scale_transform(r: f32) -> Self {
        Self::from_columns(
            Vector4::new(r, 0.0, 0.0, 0.0),
            Vector4::new(0.0, r, 0.0, 0.0),
            Vector4::new(0.0, 0.0, r, 0.0),
            Vector4::W,
        )
    }

    pub fn set_scale_transform(&mut self, r: f32) -> &mut Self {
        *self = Self::scale_transform(r);
        self
    }

    /// Rotation from a quaternion
    ///
    /// `q` must already be normalized. A non-unit quaternion yields a matrix
    /// that is not orthogonal; nothing checks for it.
    pub fn rotate_transform(q: Quaternion) -> Self {
        let (a, b, c, d) = (q.a(), q.b(), q.c(), q.d());

        Self::from_columns(
            Vector4::new(
                1.0 - 2.0 * (c * c + d * d),
                2.0 * (b * c + a * d),
                2.0 * (b * d - a * c),
                0.0,
            ),
            Vector4::new(
                2.0 * (b * c - a * d),
                1.0 - 2.0 * (b * b + d * d),
                2.0 * (a * b + c * d),
                0.0,
            ),
            Vector4::new(
                2.0 * (a * c + b * d),
                2.0 * (c * d - a * b),
                1.0 - 2.0 * (b * b + c * c),
                0.0,
            ),
            Vector4::W,
        )
    }

    pub fn set_rotate_transform(&mut self, q: Quaternion) -> &mut Self {
        *self = Self::rotate_transform(q);
        self
    }

    /// Rotation by `angle` radians about `axis` (Rodrigues' formula)
    ///
    /// The axis is normalized internally.
    pub fn rotate_axis_transform(angle: f32, axis: Vector3) -> Self {
        let (s, c) = angle.sin_cos();
        let r = axis.normalized();
        let t = r * (1.0 - c);

        let (rx, ry, rz) = (r.x(), r.y(), r.z());
        let (tx, ty, tz) = (t.x(), t.y(), t.z());

        Self::from_columns(
            Vector4::new(c + tx * rx, tx * ry + s * rz, tx * rz - s * ry, 0.0),
            Vector4::new(ty * rx - s * rz, c + ty * ry, ty * rz + s * rx, 0.0),
            Vector4::new(tz * rx + s * ry, tz * ry - s * rx, c + tz * rz, 0.0),
            Vector4::W,
        )
    }

    pub fn set_rotate_axis_transform(&mut self, angle: f32, axis: Vector3) -> &mut Self {
        *self = Self::rotate_axis_transform(angle, axis);
        self
    }

    /// Translation by `(x, y, z)`
    pub fn translation_transform(x: f32, y: f32, z: f32) -> Self {
        let mut m = Self::IDENTITY;
        m.cols[3] = Vector4::new(x, y, z, 1.0);
        m
    }

    pub fn set_translation_transform(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        *self = Self::translation_transform(x, y, z);
        self
    }

    /// Translation by `offset`
    #[inline]
    pub fn translation_transform_vec(offset: Vector3) -> Self {
        Self::translation_transform(offset.x(), offset.y(), offset.z())
    }

    pub fn set_translation_transform_vec(&mut self, offset: Vector3) -> &mut Self {
        *self = Self::translation_transform_vec(offset);
        self
    }

    /// Orthographic projection sized from a viewport in pixels
    ///
    /// The viewport is fitted with half-extents `l = 2w/(w+h)` and
    /// `t = 2h/(w+h)`, so the wider side spans more than one unit and the
    /// aspect ratio is kept.
    pub fn orth_project(view_w: u32, view_h: u32, near_plane: f32, far_plane: f32) -> Self {
        let (w, h) = (view_w as f32, view_h as f32);
        let l = (2.0 * w) / (w + h);
        let t = (2.0 * h) / (w + h);
        let depth = far_plane - near_plane;

        Self::from_columns(
            Vector4::new(1.0 / l, 0.0, 0.0, 0.0),
            Vector4::new(0.0, 1.0 / t, 0.0, 0.0),
            Vector4::new(0.0, 0.0, -2.0 / depth, 0.0),
            Vector4::new(0.0, 0.0, -(far_plane + near_plane) / depth, 1.0),
        )
    }

    pub fn set_orth_project(&mut self, view_w: u32, view_h: u32, near_plane: f32, far_plane: f32) -> &mut Self {
        *self = Self::orth_project(view_w, view_h, near_plane, far_plane);
        self
    }

    /// Orthographic projection mapping `rc` onto `[-1, 1]²`
    pub fn orth_project_rect(rc: &RectF, near_plane: f32, far_plane: f32) -> Self {
        let width = rc.right - rc.left;
        let height = rc.top - rc.bottom;
        let depth = far_plane - near_plane;

        Self::from_columns(
            Vector4::new(2.0 / width, 0.0, 0.0, 0.0),
            Vector4::new(0.0, 2.0 / height, 0.0, 0.0),
            Vector4::new(0.0, 0.0, -2.0 / depth, 0.0),
            Vector4::new(
                -(rc.right + rc.left) / width,
                -(rc.top + rc.bottom) / height,
                -(far_plane + near_plane) / depth,
                1.0,
            ),
        )
    }

    pub fn set_orth_project_rect(&mut self, rc: &RectF, near_plane: f32, far_plane: f32) -> &mut Self {
        *self = Self::orth_project_rect(rc, near_plane, far_plane);
        self
    }

    /// Symmetric perspective projection
    ///
    /// `fovy` is the vertical field of view in radians, `aspect` is
    /// width / height. `flip` negates the Y scale for targets whose clip space
    /// has Y pointing down (Vulkan).
    ///
    /// # Panics
    /// In debug builds, if `z_near >= z_far`.
    pub fn perspective_project(fovy: f32, aspect: f32, z_near: f32, z_far: f32, flip: bool) -> Self {
        debug_assert!(z_near < z_far, "near plane {} must be closer than far plane {}", z_near, z_far);

        let half = 0.5 * fovy;
        let h = half.cos() / half.sin();
        let w = h / aspect;
        let depth = z_far - z_near;

        Self::from_columns(
            Vector4::new(w, 0.0, 0.0, 0.0),
            Vector4::new(0.0, if flip { -h } else { h }, 0.0, 0.0),
            Vector4::new(0.0, 0.0, -(z_far + z_near) / depth, -1.0),
            Vector4::new(0.0, 0.0, -(2.0 * z_far * z_near) / depth, 0.0),
        )
    }

    pub fn set_perspective_project(&mut self, fovy: f32, aspect: f32, z_near: f32, z_far: f32, flip: bool) -> &mut Self {
        *self = Self::perspective_project(fovy, aspect, z_near, z_far, flip);
        self
    }

    /// Perspective projection with the aspect ratio taken from a size in pixels
    pub fn perspective_project_size(fovy: f32, width: u32, height: u32, z_near: f32, z_far: f32, flip: bool) -> Self {
        Self::perspective_project(fovy, width as f32 / height as f32, z_near, z_far, flip)
    }

    pub fn set_perspective_project_size(
        &mut self,
        fovy: f32,
        width: u32,
        height: u32,
        z_near: f32,
        z_far: f32,
        flip: bool,
    ) -> &mut Self {
        *self = Self::perspective_project_size(fovy, width, height, z_near, z_far, flip);
        self
    }

    /// Right-handed view matrix looking from `eye` towards `at`
    ///
    /// Rows are right, up and back (`-forward`); the camera looks down `-Z`.
    pub fn look_at(eye: Vector3, at: Vector3, up: Vector3) -> Self {
        let f = (at - eye).normalized();
        let s = f.cross(up).normalized();
        let u = s.cross(f);

        Self::from_columns(
            Vector4::new(s.x(), u.x(), -f.x(), 0.0),
            Vector4::new(s.y(), u.y(), -f.y(), 0.0),
            Vector4::new(s.z(), u.z(), -f.z(), 0.0),
            Vector4::new(-s.dot(eye), -u.dot(eye), f.dot(eye), 1.0),
        )
    }

    pub fn set_look_at(&mut self, eye: Vector3, at: Vector3, up: Vector3) -> &mut Self {
        *self = Self::look_at(eye, at, up);
        self
    }

    /// Stack `b` on top of this transform: returns `b · self`
    ///
    /// The result applies `self` first, then `b`.
    #[inline]
    pub fn add_transform(&self, b: &Matrix4) -> Matrix4 {
        Self::from_lanes(Active::mat_mul(&b.lanes(), &self.lanes()))
    }

    /// In-place [`Matrix4::add_transform`]: `self = b · self`
    #[inline]
    pub fn append_transform(&mut self, b: &Matrix4) -> &mut Self {
        *self = self.add_transform(b);
        self
    }

    /// Transpose in place
    pub fn transpose(&mut self) -> &mut Self {
        *self = self.transposed();
        self
    }

    /// Transposed copy
    #[inline]
    pub fn transposed(&self) -> Self {
        Self::from_lanes(Active::transpose(&self.lanes()))
    }

    /// Column `c`
    #[inline]
    pub fn column(&self, c: usize) -> Vector4 {
        self[c]
    }

    /// Row `r`
    #[inline]
    pub fn row(&self, r: usize) -> Vector4 {
        assert!(r < 4, "Matrix4 row out of range: {}", r);
        Vector4::new(self.cols[0][r], self.cols[1][r], self.cols[2][r], self.cols[3][r])
    }

    /// Raw view of the 16 floats, column-major
    #[inline]
    pub fn as_array(&self) -> &[f32; 16] {
        bytemuck::cast_ref(self)
    }

    /// Column-major `[[f32; 4]; 4]`, as used by uniform structs
    #[inline]
    pub fn to_cols_array_2d(&self) -> [[f32; 4]; 4] {
        self.lanes()
    }

    #[inline]
    pub fn as_ptr(&self) -> *const f32 {
        self.as_array().as_ptr()
    }
}

/// Storage lane `i`, which is column `i`
impl Index<usize> for Matrix4 {
    type Output = Vector4;
    #[inline]
    fn index(&self, i: usize) -> &Vector4 {
        assert!(i < 4, "Matrix4 index out of range: {}", i);
        &self.cols[i]
    }
}

impl IndexMut<usize> for Matrix4 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut Vector4 {
        assert!(i < 4, "Matrix4 index out of range: {}", i);
        &mut self.cols[i]
    }
}

/// Matrix product `self · rhs`
impl Mul for Matrix4 {
    type Output = Matrix4;
    #[inline]
    fn mul(self, rhs: Matrix4) -> Matrix4 {
        Self::from_lanes(Active::mat_mul(&self.lanes(), &rhs.lanes()))
    }
}

/// Homogeneous transform, no perspective divide
impl Mul<Vector4> for Matrix4 {
    type Output = Vector4;
    #[inline]
    fn mul(self, v: Vector4) -> Vector4 {
        Vector4::from_lanes(Active::mat_vec(&self.lanes(), v.lanes))
    }
}

/// Transform a point: `w = 1` is implied, and the result is divided by its
/// own `w` (perspective divide)
impl Mul<Vector3> for Matrix4 {
    type Output = Vector3;
    #[inline]
    fn mul(self, v: Vector3) -> Vector3 {
        let r = Active::mat_vec(&self.lanes(), [v.x(), v.y(), v.z(), 1.0]);
        Vector3::new(r[0] / r[3], r[1] / r[3], r[2] / r[3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn vec_approx_eq(a: Vector4, b: Vector4) -> bool {
        approx_eq(a.x(), b.x()) && approx_eq(a.y(), b.y()) && approx_eq(a.z(), b.z()) && approx_eq(a.w(), b.w())
    }

    fn vec3_approx_eq(a: Vector3, b: Vector3) -> bool {
        approx_eq(a.x(), b.x()) && approx_eq(a.y(), b.y()) && approx_eq(a.z(), b.z())
    }

    fn mat_approx_eq(a: &Matrix4, b: &Matrix4) -> bool {
        a.as_array().iter().zip(b.as_array().iter()).all(|(x, y)| approx_eq(*x, *y))
    }

    fn sample() -> Matrix4 {
        Matrix4::from_rows(
            Vector4::new(1.0, 2.0, 3.0, 4.0),
            Vector4::new(5.0, 6.0, 7.0, 8.0),
            Vector4::new(9.0, 10.0, 11.0, 12.0),
            Vector4::new(13.0, 14.0, 15.0, 16.0),
        )
    }

    #[test]
    fn test_default_is_identity() {
        assert_eq!(Matrix4::default(), Matrix4::IDENTITY);
        let v = Vector4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(Matrix4::identity() * v, v);
    }

    #[test]
    fn test_set_zero_and_identity() {
        let mut m = sample();
        m.set_zero();
        assert!(m.as_array().iter().all(|&x| x == 0.0));
        m.set_identity();
        assert_eq!(m, Matrix4::IDENTITY);
    }

    #[test]
    fn test_layout_is_column_major() {
        let m = sample();
        // First column of the row-built matrix
        assert_eq!(&m.as_array()[0..4], &[1.0, 5.0, 9.0, 13.0]);
        assert_eq!(m[0], Vector4::new(1.0, 5.0, 9.0, 13.0));
        assert_eq!(m.column(1), Vector4::new(2.0, 6.0, 10.0, 14.0));
        assert_eq!(m.row(1), Vector4::new(5.0, 6.0, 7.0, 8.0));
    }

    #[test]
    fn test_scale() {
        let m = Matrix4::scale_transform(2.0);
        assert_eq!(m * Vector4::new(1.0, 2.0, 3.0, 1.0), Vector4::new(2.0, 4.0, 6.0, 1.0));
    }

    #[test]
    fn test_translation() {
        let m = Matrix4::translation_transform(1.0, 2.0, 3.0);
        assert_eq!(m * Vector4::new(0.0, 0.0, 0.0, 1.0), Vector4::new(1.0, 2.0, 3.0, 1.0));
        // Directions are not translated
        assert_eq!(m * Vector4::new(1.0, 0.0, 0.0, 0.0), Vector4::new(1.0, 0.0, 0.0, 0.0));
        assert_eq!(Matrix4::translation_transform_vec(Vector3::new(1.0, 2.0, 3.0)), m);
    }

    #[test]
    fn test_rotate_quaternion_z() {
        let q = Quaternion::rotate_axis(FRAC_PI_2, Vector3::Z);
        let m = Matrix4::rotate_transform(q);
        let result = m * Vector3::X;
        assert!(vec3_approx_eq(result, Vector3::Y), "X should become Y, got {:?}", result);
    }

    #[test]
    fn test_rotate_axis_matches_quaternion() {
        let axis = Vector3::new(1.0, -2.0, 0.5);
        let angle = 1.234;
        let from_q = Matrix4::rotate_transform(Quaternion::rotate_axis(angle, axis));
        let from_axis = Matrix4::rotate_axis_transform(angle, axis);
        assert!(mat_approx_eq(&from_q, &from_axis), "{:?} vs {:?}", from_q, from_axis);
    }

    #[test]
    fn test_rotate_axis_x() {
        let m = Matrix4::rotate_axis_transform(FRAC_PI_2, Vector3::X);
        let result = m * Vector4::new(0.0, 1.0, 0.0, 0.0);
        assert!(vec_approx_eq(result, Vector4::new(0.0, 0.0, 1.0, 0.0)), "Y should become Z, got {:?}", result);
    }

    #[test]
    fn test_mul_composition() {
        // Two 45° rotations should equal one 90° rotation
        let r45 = Matrix4::rotate_axis_transform(FRAC_PI_4, Vector3::Z);
        let r90 = Matrix4::rotate_axis_transform(FRAC_PI_2, Vector3::Z);
        assert!(mat_approx_eq(&(r45 * r45), &r90));
    }

    #[test]
    fn test_mul_order() {
        // a * b applies b first
        let t = Matrix4::translation_transform(1.0, 0.0, 0.0);
        let s = Matrix4::scale_transform(2.0);
        let p = Vector4::new(1.0, 0.0, 0.0, 1.0);
        assert_eq!((t * s) * p, Vector4::new(3.0, 0.0, 0.0, 1.0));
        assert_eq!((s * t) * p, Vector4::new(4.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_add_and_append_transform_left_multiply() {
        let s = Matrix4::scale_transform(2.0);
        let t = Matrix4::translation_transform(1.0, 0.0, 0.0);

        // s.add_transform(t) = t · s: scale first, then translate
        let added = s.add_transform(&t);
        assert_eq!(added, t * s);
        assert_ne!(added, s * t);

        let mut appended = s;
        appended.append_transform(&t);
        assert_eq!(appended, added);

        // The receiver of add_transform is untouched
        assert_eq!(s, Matrix4::scale_transform(2.0));
    }

    #[test]
    fn test_transpose() {
        let m = sample();
        let t = m.transposed();
        assert_eq!(t.row(0), Vector4::new(1.0, 5.0, 9.0, 13.0));
        assert_eq!(t.transposed(), m);

        let mut n = m;
        n.transpose();
        assert_eq!(n, t);
    }

    #[test]
    fn test_vector3_perspective_divide() {
        let mut m = Matrix4::IDENTITY;
        m[3] = Vector4::new(0.0, 0.0, 0.0, 2.0);
        let r = m * Vector3::new(2.0, 4.0, 6.0);
        assert_eq!(r, Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_orth_project_viewport() {
        let m = Matrix4::orth_project(800, 600, 0.0, 10.0);
        let l = 1600.0 / 1400.0;
        let t = 1200.0 / 1400.0;
        assert!(approx_eq(m[0].x(), 1.0 / l));
        assert!(approx_eq(m[1].y(), 1.0 / t));
        assert!(approx_eq(m[2].z(), -0.2));
        assert!(approx_eq(m[3].z(), -1.0));
        assert_eq!(m[3].w(), 1.0);
    }

    #[test]
    fn test_orth_project_square_viewport() {
        // w == h gives unit half-extents
        let m = Matrix4::orth_project(512, 512, -1.0, 1.0);
        assert!(approx_eq(m[0].x(), 1.0));
        assert!(approx_eq(m[1].y(), 1.0));
    }

    #[test]
    fn test_orth_project_rect_maps_corners() {
        let rc = RectF::new(0.0, 800.0, 600.0, 0.0);
        let m = Matrix4::orth_project_rect(&rc, -1.0, 1.0);

        let top_left = m * Vector4::new(0.0, 600.0, 0.0, 1.0);
        assert!(vec_approx_eq(top_left, Vector4::new(-1.0, 1.0, 0.0, 1.0)), "got {:?}", top_left);

        let bottom_right = m * Vector4::new(800.0, 0.0, 0.0, 1.0);
        assert!(vec_approx_eq(bottom_right, Vector4::new(1.0, -1.0, 0.0, 1.0)), "got {:?}", bottom_right);
    }

    #[test]
    fn test_perspective_project() {
        let m = Matrix4::perspective_project(FRAC_PI_2, 2.0, 1.0, 3.0, false);
        // cot(45°) = 1
        assert!(approx_eq(m[0].x(), 0.5));
        assert!(approx_eq(m[1].y(), 1.0));
        assert!(approx_eq(m[2].z(), -2.0));
        assert_eq!(m[2].w(), -1.0);
        assert!(approx_eq(m[3].z(), -3.0));
        assert_eq!(m[3].w(), 0.0);

        // near plane maps to -1, far plane to +1
        let near = m * Vector3::new(0.0, 0.0, -1.0);
        let far = m * Vector3::new(0.0, 0.0, -3.0);
        assert!(approx_eq(near.z(), -1.0));
        assert!(approx_eq(far.z(), 1.0));
    }

    #[test]
    fn test_perspective_flip() {
        let m = Matrix4::perspective_project(FRAC_PI_2, 1.0, 0.1, 100.0, false);
        let flipped = Matrix4::perspective_project(FRAC_PI_2, 1.0, 0.1, 100.0, true);
        assert_eq!(flipped[1].y(), -m[1].y());
        assert_eq!(flipped[0], m[0]);
        assert_eq!(flipped[2], m[2]);
    }

    #[test]
    fn test_perspective_size_matches_aspect() {
        let a = Matrix4::perspective_project_size(1.0, 1920, 1080, 0.1, 100.0, false);
        let b = Matrix4::perspective_project(1.0, 1920.0 / 1080.0, 0.1, 100.0, false);
        assert_eq!(a, b);
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn test_perspective_rejects_inverted_planes() {
        let _ = Matrix4::perspective_project(1.0, 1.0, 10.0, 1.0, false);
    }

    #[test]
    fn test_look_at() {
        let eye = Vector3::new(0.0, 0.0, 5.0);
        let m = Matrix4::look_at(eye, Vector3::ZERO, Vector3::Y);

        // Looking down -Z from +5: the view matrix is a pure translation
        assert!(mat_approx_eq(&m, &Matrix4::translation_transform(0.0, 0.0, -5.0)), "got {:?}", m);

        // The eye maps to the origin, the target to (0, 0, -5)
        assert!(vec3_approx_eq(m * eye, Vector3::ZERO));
        assert!(vec3_approx_eq(m * Vector3::ZERO, Vector3::new(0.0, 0.0, -5.0)));
    }

    #[test]
    fn test_look_at_sign_conventions() {
        let eye = Vector3::new(1.0, 2.0, 3.0);
        let at = Vector3::new(4.0, -1.0, 0.5);
        let m = Matrix4::look_at(eye, at, Vector3::Y);

        let f = (at - eye).normalized();
        let s = f.cross(Vector3::Y).normalized();
        let u = s.cross(f);

        assert!(vec_approx_eq(m.row(0), Vector4::new(s.x(), s.y(), s.z(), -s.dot(eye))));
        assert!(vec_approx_eq(m.row(1), Vector4::new(u.x(), u.y(), u.z(), -u.dot(eye))));
        assert!(vec_approx_eq(m.row(2), Vector4::new(-f.x(), -f.y(), -f.z(), f.dot(eye))));
        assert_eq!(m.row(3), Vector4::W);
    }

    #[test]
    fn test_set_variants_overwrite() {
        let mut m = sample();
        m.set_translation_transform(1.0, 2.0, 3.0);
        assert_eq!(m, Matrix4::translation_transform(1.0, 2.0, 3.0));
        m.set_scale_transform(3.0);
        assert_eq!(m, Matrix4::scale_transform(3.0));
        m.set_rotate_transform(Quaternion::IDENTITY);
        assert_eq!(m, Matrix4::IDENTITY);
        m.set_look_at(Vector3::new(0.0, 0.0, 1.0), Vector3::ZERO, Vector3::Y);
        assert_eq!(m, Matrix4::look_at(Vector3::new(0.0, 0.0, 1.0), Vector3::ZERO, Vector3::Y));
    }

    #[test]
    fn test_pod_cast() {
        let m = Matrix4::translation_transform(1.0, 2.0, 3.0);
        let cols: [[f32; 4]; 4] = bytemuck::cast(m);
        assert_eq!(cols, m.to_cols_array_2d());
        let zero: Matrix4 = Zeroable::zeroed();
        assert_eq!(zero, Matrix4::ZERO);
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range() {
        let m = Matrix4::IDENTITY;
        let _ = m[4];
    }
}
