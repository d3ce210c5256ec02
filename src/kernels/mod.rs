//! This module declares the pure, stateless value kernels.
//!
//! Each kernel maps one kind of value onto an integer the simple-8b packer can
//! take, and back, without loss. None of them holds state or depends on
//! another; the `bridge` picks the kernel for a column and chains it with
//! `zigzag` where a signed intermediate has to become unsigned.

/// Layer 0: Type Conversion
pub mod bitcast;
pub mod decimal;
pub mod object_id;

/// Layer 1: Bit-Width Reduction
pub mod zigzag;
