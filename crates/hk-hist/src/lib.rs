//! # hk-hist
//!
//! Named-axis N-dimensional histograms.
//!
//! A [`Histogram`] is a positional engine: ordered axes, row-major bin
//! storage, bulk fills, selection and assignment by axis position. A
//! [`NamedHist`] layers name-based addressing on top: axes carry unique
//! names, fills can be keyword-style, and selections accept name keys that
//! are resolved to positions before delegation.
//!
//! ## Example
//!
//! ```
//! use hk_hist::{Axis, Column, NamedHist, Selection, Selector};
//!
//! let mut h = NamedHist::new(vec![
//!     Axis::regular(10, 0.0, 100.0).unwrap().with_name("energy"),
//!     Axis::str_category(["a", "b"]).unwrap().with_name("category"),
//! ])
//! .unwrap();
//!
//! h.fill_named(
//!     vec![
//!         ("energy", Column::from(vec![5.0, 55.0])),
//!         ("category", Column::from(vec!["a", "b"])),
//!     ],
//!     None,
//! )
//! .unwrap();
//!
//! let count = h
//!     .select(&[("energy".into(), Selector::Bin(0)), ("category".into(), Selector::Bin(0))])
//!     .unwrap();
//! match count {
//!     Selection::Count(c) => assert_eq!(c, 1.0),
//!     Selection::Histogram(_) => unreachable!(),
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod axis;
pub mod error;
pub mod histogram;
pub mod named;

pub use axis::{Axis, BinLocation, Transform, Value};
pub use error::{HistError, Result};
pub use histogram::{Column, FlowCounts, Histogram, Selection, Selector};
pub use named::{AxisKey, NamedHist};
