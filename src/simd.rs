/*!
 * Hardware block width, alignment and cache bypassing stores.
 *
 * Every x86_64 processor supports SSE2, so the 128 bit stores used here need no runtime feature
 * detection. Other architectures fall back to ordinary copies.
 */

/**
 * The width in bytes of one hardware vector register, and therefore of one block in the
 * assignment engine.
 */
pub const REGISTER_BYTES: usize = 16;

/**
 * The address alignment in bytes that aligned block loads and stores require.
 */
pub const ALIGNMENT: usize = REGISTER_BYTES;

/**
 * Checks if the address is a multiple of [ALIGNMENT].
 */
#[inline]
pub fn is_aligned<T>(pointer: *const T) -> bool {
    (pointer as usize) % ALIGNMENT == 0
}

/// Splits a transfer of `length` elements into an unaligned head, a body of whole blocks
/// and a tail.
#[cfg(target_arch = "x86_64")]
fn partition<T>(destination: &[T], lanes: usize) -> (usize, usize) {
    let length = destination.len();
    // align_offset may return usize::MAX, in which case everything is copied as head
    let head = destination.as_ptr().align_offset(ALIGNMENT).min(length);
    let body = (length - head) / lanes * lanes;
    (head, head + body)
}

/**
 * Copies `source` into `destination` with non-temporal stores, bypassing the cache for the
 * aligned body of the transfer.
 *
 * # Panics
 *
 * If the slices differ in length.
 */
#[cfg(target_arch = "x86_64")]
pub fn stream_f64(destination: &mut [f64], source: &[f64]) {
    use std::arch::x86_64::{_mm_loadu_pd, _mm_sfence, _mm_stream_pd};

    assert_eq!(destination.len(), source.len(), "Stream lengths do not match");
    let (head, tail) = partition(destination, 2);
    destination[..head].copy_from_slice(&source[..head]);
    for (block, values) in destination[head..tail]
        .chunks_exact_mut(2)
        .zip(source[head..tail].chunks_exact(2))
    {
        // SAFETY: SSE2 is baseline for x86_64. Both chunks hold exactly two f64 and `block`
        // starts on a 16 byte boundary because the head was split off at the first aligned
        // address and every chunk is 16 bytes wide.
        unsafe { _mm_stream_pd(block.as_mut_ptr(), _mm_loadu_pd(values.as_ptr())) };
    }
    destination[tail..].copy_from_slice(&source[tail..]);
    // SAFETY: SSE is baseline for x86_64.
    unsafe { _mm_sfence() };
}

/**
 * Copies `source` into `destination` with non-temporal stores, bypassing the cache for the
 * aligned body of the transfer.
 *
 * # Panics
 *
 * If the slices differ in length.
 */
#[cfg(target_arch = "x86_64")]
pub fn stream_f32(destination: &mut [f32], source: &[f32]) {
    use std::arch::x86_64::{_mm_loadu_ps, _mm_sfence, _mm_stream_ps};

    assert_eq!(destination.len(), source.len(), "Stream lengths do not match");
    let (head, tail) = partition(destination, 4);
    destination[..head].copy_from_slice(&source[..head]);
    for (block, values) in destination[head..tail]
        .chunks_exact_mut(4)
        .zip(source[head..tail].chunks_exact(4))
    {
        // SAFETY: SSE is baseline for x86_64. Both chunks hold exactly four f32 and `block`
        // starts on a 16 byte boundary, see stream_f64.
        unsafe { _mm_stream_ps(block.as_mut_ptr(), _mm_loadu_ps(values.as_ptr())) };
    }
    destination[tail..].copy_from_slice(&source[tail..]);
    // SAFETY: SSE is baseline for x86_64.
    unsafe { _mm_sfence() };
}

/**
 * Copies `source` into `destination`.
 *
 * # Panics
 *
 * If the slices differ in length.
 */
#[cfg(not(target_arch = "x86_64"))]
pub fn stream_f64(destination: &mut [f64], source: &[f64]) {
    destination.copy_from_slice(source);
}

/**
 * Copies `source` into `destination`.
 *
 * # Panics
 *
 * If the slices differ in length.
 */
#[cfg(not(target_arch = "x86_64"))]
pub fn stream_f32(destination: &mut [f32], source: &[f32]) {
    destination.copy_from_slice(source);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn streams_every_offset() {
        let source: Vec<f64> = (0..37).map(|x| x as f64 * 0.5).collect();
        // slicing at each offset exercises every head and tail split
        for offset in 0..4 {
            let mut destination = vec![0.0; 40];
            stream_f64(&mut destination[offset..offset + 33], &source[..33]);
            assert_eq!(&destination[offset..offset + 33], &source[..33]);
            assert!(destination[..offset].iter().all(|x| *x == 0.0));
            assert!(destination[offset + 33..].iter().all(|x| *x == 0.0));
        }
    }

    #[test]
    fn streams_single_precision() {
        let source: Vec<f32> = (0..19).map(|x| x as f32 - 3.0).collect();
        for offset in 0..4 {
            let mut destination = vec![0.0; 24];
            stream_f32(&mut destination[offset..offset + 19], &source);
            assert_eq!(&destination[offset..offset + 19], source.as_slice());
        }
    }

    #[test]
    fn alignment_of_blocks() {
        let values = [0.0_f64; 8];
        let aligned = (0..2).filter(|i| is_aligned(&values[*i] as *const f64)).count();
        // exactly one of two neighbouring f64 sits on a 16 byte boundary
        assert_eq!(aligned, 1);
    }
}
