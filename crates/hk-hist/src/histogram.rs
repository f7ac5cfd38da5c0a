//! Positional N-dimensional histogram engine.
//!
//! Storage is a row-major sum-of-weights array over the product of per-axis
//! bin counts, with a parallel sum-of-squared-weights array. Flow is
//! accounted in per-axis counters, never stored as extra cells. All
//! addressing here is positional; name-based addressing is layered on top
//! in [`crate::named`].

use std::collections::BTreeMap;

use crate::axis::{Axis, BinLocation};
use crate::error::{HistError, Result};

/// One column of fill data, one entry per event.
#[derive(Debug, Clone)]
pub enum Column {
    /// Continuous values.
    Float(Vec<f64>),
    /// Integer values.
    Int(Vec<i64>),
    /// String-category values.
    Str(Vec<String>),
}

impl Column {
    /// Number of entries in the column.
    pub fn len(&self) -> usize {
        match self {
            Column::Float(v) => v.len(),
            Column::Int(v) => v.len(),
            Column::Str(v) => v.len(),
        }
    }

    /// Whether the column has no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<f64>> for Column {
    fn from(v: Vec<f64>) -> Self {
        Column::Float(v)
    }
}

impl From<Vec<i64>> for Column {
    fn from(v: Vec<i64>) -> Self {
        Column::Int(v)
    }
}

impl From<Vec<String>> for Column {
    fn from(v: Vec<String>) -> Self {
        Column::Str(v)
    }
}

impl From<Vec<&str>> for Column {
    fn from(v: Vec<&str>) -> Self {
        Column::Str(v.into_iter().map(String::from).collect())
    }
}

/// Per-axis flow accounting (weights that fell outside the bins).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FlowCounts {
    /// Sum of weights below the first bin.
    pub underflow: f64,
    /// Sum of weights above the last bin (or unmatched categories).
    pub overflow: f64,
    /// Sum of squared weights below the first bin.
    pub underflow_sumw2: f64,
    /// Sum of squared weights above the last bin.
    pub overflow_sumw2: f64,
}

/// Selects bins along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    /// A single bin; the axis is reduced away in the result.
    Bin(usize),
    /// A half-open bin range `lo..hi`; the axis is kept, restricted.
    Range(usize, usize),
}

/// Result of a selection: a scalar when every axis was reduced, otherwise a
/// sub-histogram over the kept axes.
#[derive(Debug, Clone)]
pub enum Selection {
    /// Single-cell content.
    Count(f64),
    /// Sub-histogram over the axes that were not reduced.
    Histogram(Histogram),
}

/// An N-dimensional histogram with positional axis addressing.
#[derive(Debug, Clone)]
pub struct Histogram {
    axes: Vec<Axis>,
    bin_content: Vec<f64>,
    sumw2: Vec<f64>,
    flow: Vec<FlowCounts>,
    entries: u64,
}

impl Histogram {
    /// Create an empty histogram over the given axes. Axis order is
    /// significant: it defines positions `0..N-1`.
    pub fn new(axes: Vec<Axis>) -> Result<Self> {
        if axes.is_empty() {
            return Err(HistError::InvalidAxis(
                "histogram requires at least one axis".to_string(),
            ));
        }
        let cells: usize = axes.iter().map(Axis::num_bins).product();
        let n_axes = axes.len();
        Ok(Self {
            axes,
            bin_content: vec![0.0; cells],
            sumw2: vec![0.0; cells],
            flow: vec![FlowCounts::default(); n_axes],
            entries: 0,
        })
    }

    /// The ordered axes.
    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    /// Number of dimensions.
    pub fn num_dim(&self) -> usize {
        self.axes.len()
    }

    /// Raw bin contents, row-major over the axes.
    pub fn view(&self) -> &[f64] {
        &self.bin_content
    }

    /// Raw per-bin sums of squared weights, row-major over the axes.
    pub fn sumw2(&self) -> &[f64] {
        &self.sumw2
    }

    /// Per-axis flow counters.
    pub fn flow(&self) -> &[FlowCounts] {
        &self.flow
    }

    /// Total entries that landed in bins.
    pub fn entries(&self) -> u64 {
        self.entries
    }

    /// Sum of all bin contents (flow excluded).
    pub fn sum(&self) -> f64 {
        self.bin_content.iter().sum()
    }

    /// Reassign the name of the axis at `pos`.
    ///
    /// The engine attaches no meaning to names; uniqueness is enforced one
    /// layer up, in [`crate::named::NamedHist`].
    pub fn set_axis_name(&mut self, pos: usize, name: Option<String>) -> Result<()> {
        let n_axes = self.axes.len();
        let axis = self
            .axes
            .get_mut(pos)
            .ok_or(HistError::PositionOutOfRange { pos, n_axes })?;
        axis.set_name(name);
        Ok(())
    }

    /// Positional bulk fill: one column per axis, in axis order.
    ///
    /// `weight: None` is the unit-weight fill. When a weight slice is given
    /// it must have one entry per event. Out-of-range values are recorded in
    /// the flow counters of every out-of-range axis whose flag is enabled,
    /// and dropped from the bins; growable category axes grow instead.
    pub fn fill(&mut self, columns: &[Column], weight: Option<&[f64]>) -> Result<()> {
        let n_axes = self.axes.len();
        if columns.len() != n_axes {
            return Err(HistError::LengthMismatch(format!(
                "expected one column per axis ({}), got {}",
                n_axes,
                columns.len()
            )));
        }
        let n_entries = columns[0].len();
        for (k, col) in columns.iter().enumerate() {
            if col.len() != n_entries {
                return Err(HistError::LengthMismatch(format!(
                    "column {} has {} entries, expected {}",
                    k,
                    col.len(),
                    n_entries
                )));
            }
        }
        if let Some(w) = weight
            && w.len() != n_entries
        {
            return Err(HistError::LengthMismatch(format!(
                "weight has {} entries, expected {}",
                w.len(),
                n_entries
            )));
        }

        let mut dims: Vec<usize> = self.axes.iter().map(Axis::num_bins).collect();
        let mut locs: Vec<BinLocation> = Vec::with_capacity(n_axes);

        for entry in 0..n_entries {
            let w = weight.map_or(1.0, |ws| ws[entry]);

            locs.clear();
            for k in 0..n_axes {
                let loc = match &columns[k] {
                    Column::Float(v) => self.axes[k].locate_float(v[entry])?,
                    Column::Int(v) => {
                        let loc = self.axes[k].locate_int(v[entry])?;
                        if loc == BinLocation::Overflow && self.axes[k].supports_growth() {
                            match self.axes[k].grow_int(v[entry]) {
                                Some(bin) => {
                                    self.grow_storage(k, &dims);
                                    dims[k] += 1;
                                    BinLocation::Bin(bin)
                                }
                                None => loc,
                            }
                        } else {
                            loc
                        }
                    }
                    Column::Str(v) => {
                        let s = v[entry].as_str();
                        let loc = self.axes[k].locate_str(s)?;
                        if loc == BinLocation::Overflow && self.axes[k].supports_growth() {
                            match self.axes[k].grow_str(s) {
                                Some(bin) => {
                                    self.grow_storage(k, &dims);
                                    dims[k] += 1;
                                    BinLocation::Bin(bin)
                                }
                                None => loc,
                            }
                        } else {
                            loc
                        }
                    }
                };
                locs.push(loc);
            }

            if locs.iter().all(|l| matches!(l, BinLocation::Bin(_))) {
                let mut offset = 0usize;
                for (k, loc) in locs.iter().enumerate() {
                    if let BinLocation::Bin(b) = loc {
                        offset = offset * dims[k] + b;
                    }
                }
                self.bin_content[offset] += w;
                self.sumw2[offset] += w * w;
                self.entries += 1;
            } else {
                for (k, loc) in locs.iter().enumerate() {
                    match loc {
                        BinLocation::Underflow if self.axes[k].records_underflow() => {
                            self.flow[k].underflow += w;
                            self.flow[k].underflow_sumw2 += w * w;
                        }
                        BinLocation::Overflow if self.axes[k].records_overflow() => {
                            self.flow[k].overflow += w;
                            self.flow[k].overflow_sumw2 += w * w;
                        }
                        _ => {}
                    }
                }
            }
        }
        Ok(())
    }

    /// Read a single cell by per-axis bin indices.
    pub fn value_at(&self, bins: &[usize]) -> Result<f64> {
        let n_axes = self.axes.len();
        if bins.len() != n_axes {
            return Err(HistError::LengthMismatch(format!(
                "expected {} bin indices, got {}",
                n_axes,
                bins.len()
            )));
        }
        for (k, &b) in bins.iter().enumerate() {
            let n = self.axes[k].num_bins();
            if b >= n {
                return Err(HistError::BinOutOfRange { axis: k, bin: b, n_bins: n });
            }
        }
        Ok(self.bin_content[self.offset_of(bins)])
    }

    /// Select a sub-region. `Selector::Bin` reduces its axis away (a slice,
    /// not a sum); `Selector::Range` keeps the axis restricted; absent axes
    /// are kept whole. Flow counters and entry totals are not carried into
    /// the result.
    pub fn select(&self, by: &BTreeMap<usize, Selector>) -> Result<Selection> {
        let sels = self.axis_windows(by)?;
        let kept: Vec<usize> =
            (0..self.axes.len()).filter(|&k| !sels[k].reduced).collect();

        if kept.is_empty() {
            let coords: Vec<usize> = sels.iter().map(|s| s.lo).collect();
            return Ok(Selection::Count(self.bin_content[self.offset_of(&coords)]));
        }

        let new_axes: Vec<Axis> = kept
            .iter()
            .map(|&k| self.axes[k].slice(sels[k].lo, sels[k].hi))
            .collect::<Result<_>>()?;
        let mut out = Histogram::new(new_axes)?;

        let total: usize = sels.iter().map(|s| s.hi - s.lo).product();
        if total == 0 {
            return Ok(Selection::Histogram(out));
        }

        let mut coords: Vec<usize> = sels.iter().map(|s| s.lo).collect();
        'cells: loop {
            let src = self.offset_of(&coords);
            let mut dst = 0usize;
            for &k in &kept {
                dst = dst * (sels[k].hi - sels[k].lo) + (coords[k] - sels[k].lo);
            }
            out.bin_content[dst] = self.bin_content[src];
            out.sumw2[dst] = self.sumw2[src];

            for k in (0..coords.len()).rev() {
                coords[k] += 1;
                if coords[k] < sels[k].hi {
                    continue 'cells;
                }
                coords[k] = sels[k].lo;
            }
            break;
        }
        Ok(Selection::Histogram(out))
    }

    /// Write `value` into every cell covered by the selection. Direct
    /// assignment clears the accumulated sumw2 of the cell.
    pub fn set_region(&mut self, by: &BTreeMap<usize, Selector>, value: f64) -> Result<()> {
        let sels = self.axis_windows(by)?;
        let total: usize = sels.iter().map(|s| s.hi - s.lo).product();
        if total == 0 {
            return Ok(());
        }
        let mut coords: Vec<usize> = sels.iter().map(|s| s.lo).collect();
        'cells: loop {
            let off = self.offset_of(&coords);
            self.bin_content[off] = value;
            self.sumw2[off] = 0.0;

            for k in (0..coords.len()).rev() {
                coords[k] += 1;
                if coords[k] < sels[k].hi {
                    continue 'cells;
                }
                coords[k] = sels[k].lo;
            }
            break;
        }
        Ok(())
    }

    fn axis_windows(&self, by: &BTreeMap<usize, Selector>) -> Result<Vec<AxisWindow>> {
        let n_axes = self.axes.len();
        for (&pos, sel) in by {
            if pos >= n_axes {
                return Err(HistError::PositionOutOfRange { pos, n_axes });
            }
            let n_bins = self.axes[pos].num_bins();
            match *sel {
                Selector::Bin(b) if b >= n_bins => {
                    return Err(HistError::BinOutOfRange { axis: pos, bin: b, n_bins });
                }
                Selector::Range(lo, hi) if lo >= hi || hi > n_bins => {
                    return Err(HistError::BinOutOfRange {
                        axis: pos,
                        bin: hi.max(lo),
                        n_bins,
                    });
                }
                _ => {}
            }
        }
        Ok((0..n_axes)
            .map(|k| match by.get(&k) {
                Some(Selector::Bin(b)) => AxisWindow { lo: *b, hi: b + 1, reduced: true },
                Some(Selector::Range(lo, hi)) => AxisWindow { lo: *lo, hi: *hi, reduced: false },
                None => AxisWindow { lo: 0, hi: self.axes[k].num_bins(), reduced: false },
            })
            .collect())
    }

    fn offset_of(&self, coords: &[usize]) -> usize {
        let mut offset = 0usize;
        for (k, &c) in coords.iter().enumerate() {
            offset = offset * self.axes[k].num_bins() + c;
        }
        offset
    }

    /// Reallocate storage after axis `axis` gained one bin. `old_dims` are
    /// the per-axis bin counts before the growth.
    fn grow_storage(&mut self, axis: usize, old_dims: &[usize]) {
        let mut new_dims = old_dims.to_vec();
        new_dims[axis] += 1;
        let new_len: usize = new_dims.iter().product();
        let mut content = vec![0.0; new_len];
        let mut sumw2 = vec![0.0; new_len];

        let mut coords = vec![0usize; old_dims.len()];
        for old_off in 0..self.bin_content.len() {
            let mut rem = old_off;
            for d in (0..old_dims.len()).rev() {
                coords[d] = rem % old_dims[d];
                rem /= old_dims[d];
            }
            let mut new_off = 0usize;
            for (d, &c) in coords.iter().enumerate() {
                new_off = new_off * new_dims[d] + c;
            }
            content[new_off] = self.bin_content[old_off];
            sumw2[new_off] = self.sumw2[old_off];
        }
        self.bin_content = content;
        self.sumw2 = sumw2;
    }
}

struct AxisWindow {
    lo: usize,
    hi: usize,
    reduced: bool,
}
