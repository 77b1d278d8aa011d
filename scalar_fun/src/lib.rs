#![doc = include_str!("../README.md")]
#![no_std]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod macros;

pub mod hash;
pub mod hex;

pub use digest;
pub use num_bigint;
pub use rand_core;

mod backend;
mod curve;
mod error;
mod params;
mod scalar;

pub mod op;

pub use curve::Curve;
pub use error::Error;
pub use params::Params;
pub use scalar::{CurveScalar, Operand};

#[cfg(feature = "serde")]
pub extern crate serde;

#[cfg(feature = "proptest")]
#[cfg_attr(docsrs, doc(cfg(feature = "proptest")))]
pub mod proptest;
