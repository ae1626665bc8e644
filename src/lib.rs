#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod algorithm;
mod art;
mod board;
mod digest;
mod error;

pub use crate::{
    algorithm::HashAlg,
    art::{Art, Mode},
    board::{Board, Layout},
    digest::Digest,
    error::{Error, Result},
};
