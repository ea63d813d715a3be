//! SSE backend for x86_64
//!
//! SSE and SSE2 are part of the x86_64 baseline, so no runtime feature
//! detection is needed. Loads and stores are unaligned because lanes travel
//! by value as `[f32; 4]`; the kernel types themselves are 16-byte aligned.

// Intrinsics are safe to call on newer toolchains when the feature is enabled
// for the whole target.
#![allow(unused_unsafe)]

use std::arch::x86_64::*;

use super::{Backend, Lanes, MatLanes};

/// `(y, z, x, w)` shuffle
const YZXW: i32 = 0b11_00_10_01;
/// `(z, x, y, w)` shuffle
const ZXYW: i32 = 0b11_01_00_10;

/// SSE register arithmetic
#[derive(Clone, Copy, Debug, Default)]
pub struct Sse;

#[inline(always)]
fn load(a: Lanes) -> __m128 {
    // SAFETY: `a` is four initialised f32 and the load is unaligned.
    unsafe { _mm_loadu_ps(a.as_ptr()) }
}

#[inline(always)]
fn store(v: __m128) -> Lanes {
    let mut out = [0.0f32; 4];
    // SAFETY: `out` has room for four f32 and the store is unaligned.
    unsafe { _mm_storeu_ps(out.as_mut_ptr(), v) };
    out
}

impl Backend for Sse {
    const NAME: &'static str = "sse";

    #[inline]
    fn add(a: Lanes, b: Lanes) -> Lanes {
        store(unsafe { _mm_add_ps(load(a), load(b)) })
    }

    #[inline]
    fn sub(a: Lanes, b: Lanes) -> Lanes {
        store(unsafe { _mm_sub_ps(load(a), load(b)) })
    }

    #[inline]
    fn neg(a: Lanes) -> Lanes {
        // xor with the sign bit, so 0.0 becomes -0.0 like scalar negation
        store(unsafe { _mm_xor_ps(load(a), _mm_set1_ps(-0.0)) })
    }

    #[inline]
    fn scale(a: Lanes, s: f32) -> Lanes {
        store(unsafe { _mm_mul_ps(load(a), _mm_set1_ps(s)) })
    }

    #[inline]
    fn dot2(a: Lanes, b: Lanes) -> f32 {
        let p = store(unsafe { _mm_mul_ps(load(a), load(b)) });
        p[0] + p[1]
    }

    #[inline]
    fn dot3(a: Lanes, b: Lanes) -> f32 {
        let p = store(unsafe { _mm_mul_ps(load(a), load(b)) });
        p[0] + p[1] + p[2]
    }

    #[inline]
    fn dot4(a: Lanes, b: Lanes) -> f32 {
        let p = store(unsafe { _mm_mul_ps(load(a), load(b)) });
        p[0] + p[1] + p[2] + p[3]
    }

    #[inline]
    fn cross(a: Lanes, b: Lanes) -> Lanes {
        let (va, vb) = (load(a), load(b));
        // a(y, z, x) * b(z, x, y) - a(z, x, y) * b(y, z, x)
        let r = unsafe {
            let r1 = _mm_mul_ps(_mm_shuffle_ps(va, va, YZXW), _mm_shuffle_ps(vb, vb, ZXYW));
            let r2 = _mm_mul_ps(_mm_shuffle_ps(va, va, ZXYW), _mm_shuffle_ps(vb, vb, YZXW));
            _mm_sub_ps(r1, r2)
        };
        store(r)
    }

    fn mat_mul(a: &MatLanes, b: &MatLanes) -> MatLanes {
        let cols = [load(a[0]), load(a[1]), load(a[2]), load(a[3])];
        let mut result = [[0.0f32; 4]; 4];

        for (out, bj) in result.iter_mut().zip(b.iter()) {
            // column j = Σk a[k] * b[j][k]
            let r = unsafe {
                let t1 = _mm_mul_ps(cols[0], _mm_set1_ps(bj[0]));
                let t2 = _mm_mul_ps(cols[1], _mm_set1_ps(bj[1]));
                let t3 = _mm_mul_ps(cols[2], _mm_set1_ps(bj[2]));
                let t4 = _mm_mul_ps(cols[3], _mm_set1_ps(bj[3]));
                _mm_add_ps(_mm_add_ps(t1, t2), _mm_add_ps(t3, t4))
            };
            *out = store(r);
        }

        result
    }

    #[inline]
    fn mat_vec(m: &MatLanes, v: Lanes) -> Lanes {
        let r = unsafe {
            let c1 = _mm_mul_ps(load(m[0]), _mm_set1_ps(v[0]));
            let c2 = _mm_mul_ps(load(m[1]), _mm_set1_ps(v[1]));
            let c3 = _mm_mul_ps(load(m[2]), _mm_set1_ps(v[2]));
            let c4 = _mm_mul_ps(load(m[3]), _mm_set1_ps(v[3]));
            _mm_add_ps(_mm_add_ps(c1, c2), _mm_add_ps(c3, c4))
        };
        store(r)
    }

    fn transpose(m: &MatLanes) -> MatLanes {
        let (c0, c1, c2, c3) = (load(m[0]), load(m[1]), load(m[2]), load(m[3]));
        unsafe {
            let t0 = _mm_unpacklo_ps(c0, c1);
            let t1 = _mm_unpackhi_ps(c0, c1);
            let t2 = _mm_unpacklo_ps(c2, c3);
            let t3 = _mm_unpackhi_ps(c2, c3);
            [
                store(_mm_movelh_ps(t0, t2)),
                store(_mm_movehl_ps(t2, t0)),
                store(_mm_movelh_ps(t1, t3)),
                store(_mm_movehl_ps(t3, t1)),
            ]
        }
    }
}
