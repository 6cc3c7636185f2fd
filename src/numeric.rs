/*!
* Element type definitions
*
* Column views work over any [Scalar] type. Primitive integers and floats are eligible for the
* block transfer path of the assignment engine, while other types such as
* [Complex](num_complex::Complex) numbers and
* [Wrapping](https://doc.rust-lang.org/std/num/struct.Wrapping.html) integers always take the
* element by element path.
*/

use std::fmt::Debug;
use std::ops::Add;
use std::ops::Sub;
use std::ops::Mul;
use std::ops::Div;
use std::marker::Sized;
use core::num::Wrapping;

use num_complex::Complex;

use crate::simd;

/**
 * A trait defining how to obtain 0 and 1 for every implementing type.
 *
 * The zero value doubles as the default value of a matrix element: a reset column holds only
 * zeros and structural invariants are expressed in terms of which elements must stay zero.
 *
 * The boilerplate implementations for primitives is performed with a macro.
 */
pub trait ZeroOne: Sized {
    fn zero() -> Self;
    fn one() -> Self;
}

macro_rules! zero_one_integral {
    ($T:ty) => {
        impl ZeroOne for $T {
            #[inline]
            fn zero() -> $T { 0 }
            #[inline]
            fn one() -> $T { 1 }
        }
    };
}

macro_rules! zero_one_wrapping_integral {
    ($T:ty) => {
        impl ZeroOne for $T {
            #[inline]
            fn zero() -> $T { Wrapping(0) }
            #[inline]
            fn one() -> $T { Wrapping(1) }
        }
    };
}

macro_rules! zero_one_float {
    ($T:ty) => {
        impl ZeroOne for $T {
            #[inline]
            fn zero() -> $T { 0.0 }
            #[inline]
            fn one() -> $T { 1.0 }
        }
    };
}

macro_rules! zero_one_complex {
    ($T:ty) => {
        impl ZeroOne for Complex<$T> {
            #[inline]
            fn zero() -> Complex<$T> { Complex::new(0.0, 0.0) }
            #[inline]
            fn one() -> Complex<$T> { Complex::new(1.0, 0.0) }
        }
    };
}

zero_one_integral!(u8);
zero_one_integral!(i8);
zero_one_integral!(u16);
zero_one_integral!(i16);
zero_one_integral!(u32);
zero_one_integral!(i32);
zero_one_integral!(u64);
zero_one_integral!(i64);
zero_one_integral!(u128);
zero_one_integral!(i128);
zero_one_wrapping_integral!(Wrapping<u8>);
zero_one_wrapping_integral!(Wrapping<i8>);
zero_one_wrapping_integral!(Wrapping<u16>);
zero_one_wrapping_integral!(Wrapping<i16>);
zero_one_wrapping_integral!(Wrapping<u32>);
zero_one_wrapping_integral!(Wrapping<i32>);
zero_one_wrapping_integral!(Wrapping<u64>);
zero_one_wrapping_integral!(Wrapping<i64>);
zero_one_wrapping_integral!(Wrapping<u128>);
zero_one_wrapping_integral!(Wrapping<i128>);
zero_one_float!(f32);
zero_one_float!(f64);
zero_one_integral!(usize);
zero_one_integral!(isize);
zero_one_complex!(f32);
zero_one_complex!(f64);

/**
 * The element types a column view can be assigned to and from.
 *
 * The two associated constants are read at compile time by the assignment engine to choose
 * between the block transfer path and the element by element path, so for a type that is not
 * eligible the block path is never instantiated.
 *
 * Types outside this crate can implement Scalar with an empty impl block, which leaves them on
 * the element by element path.
 */
pub trait Scalar where
    Self:
        Add<Output = Self>
        + Sub<Output = Self>
        + Mul<Output = Self>
        + Div<Output = Self>
        + PartialEq
        + Debug
        + Sized
        + Clone
        + ZeroOne,
{
    /**
     * Whether contiguous runs of this type may be transferred in hardware register sized
     * blocks.
     */
    const VECTORIZABLE: bool = false;

    /**
     * How many elements of this type fit in one block.
     */
    const LANES: usize = 1;

    /**
     * Copies `source` into `destination` for a large write-once transfer. The default is an
     * ordinary copy, types with a cache bypassing store override this.
     *
     * Both slices must have the same length.
     */
    #[inline]
    fn stream(destination: &mut [Self], source: &[Self]) {
        destination.clone_from_slice(source);
    }

    /**
     * Checks if this value is the default (zero) value.
     */
    #[inline]
    fn is_default(&self) -> bool {
        *self == Self::zero()
    }
}

macro_rules! scalar_vectorizable {
    ($T:ty) => {
        impl Scalar for $T {
            const VECTORIZABLE: bool = true;
            const LANES: usize = simd::REGISTER_BYTES / std::mem::size_of::<$T>();
        }
    };
}

macro_rules! scalar_streaming {
    ($T:ty, $stream:path) => {
        impl Scalar for $T {
            const VECTORIZABLE: bool = true;
            const LANES: usize = simd::REGISTER_BYTES / std::mem::size_of::<$T>();

            #[inline]
            fn stream(destination: &mut [$T], source: &[$T]) {
                $stream(destination, source)
            }
        }
    };
}

scalar_vectorizable!(u8);
scalar_vectorizable!(i8);
scalar_vectorizable!(u16);
scalar_vectorizable!(i16);
scalar_vectorizable!(u32);
scalar_vectorizable!(i32);
scalar_vectorizable!(u64);
scalar_vectorizable!(i64);
scalar_vectorizable!(usize);
scalar_vectorizable!(isize);
scalar_streaming!(f32, simd::stream_f32);
scalar_streaming!(f64, simd::stream_f64);

// 128 bit integers are wider than a register and complex numbers interleave two parts
impl Scalar for u128 {}
impl Scalar for i128 {}
impl Scalar for Complex<f32> {}
impl Scalar for Complex<f64> {}
impl Scalar for Wrapping<u8> {}
impl Scalar for Wrapping<i8> {}
impl Scalar for Wrapping<u16> {}
impl Scalar for Wrapping<i16> {}
impl Scalar for Wrapping<u32> {}
impl Scalar for Wrapping<i32> {}
impl Scalar for Wrapping<u64> {}
impl Scalar for Wrapping<i64> {}
impl Scalar for Wrapping<u128> {}
impl Scalar for Wrapping<i128> {}
