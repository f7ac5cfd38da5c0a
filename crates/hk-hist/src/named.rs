//! Name-based addressing over the positional engine.
//!
//! [`NamedHist`] wraps a [`Histogram`] and a name → position map. Every
//! request is classified once (position-keyed iff every key is a position,
//! name-keyed iff every key is a name) and then translated to the
//! positional form the engine understands. Mixed-key requests are rejected
//! outright, and the same rule governs reads and writes.

use std::collections::{BTreeMap, HashMap};

use crate::axis::Axis;
use crate::error::{HistError, Result};
use crate::histogram::{Column, Histogram, Selection, Selector};

/// One key of a selection or assignment request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AxisKey {
    /// Positional key (legacy form), `0..n_axes`.
    Pos(usize),
    /// Name key, resolved against the axis names.
    Name(String),
}

impl From<usize> for AxisKey {
    fn from(pos: usize) -> Self {
        AxisKey::Pos(pos)
    }
}

impl From<&str> for AxisKey {
    fn from(name: &str) -> Self {
        AxisKey::Name(name.to_string())
    }
}

impl From<String> for AxisKey {
    fn from(name: String) -> Self {
        AxisKey::Name(name)
    }
}

/// A histogram whose axes can be addressed by name.
///
/// Axis names must be unique; construction fails on a duplicate, so
/// resolution is never ambiguous. Unnamed axes are allowed; they are
/// unreachable by name.
#[derive(Debug, Clone)]
pub struct NamedHist {
    hist: Histogram,
    by_name: HashMap<String, usize>,
}

impl NamedHist {
    /// Build a histogram over the given axes, enforcing name uniqueness.
    pub fn new(axes: Vec<Axis>) -> Result<Self> {
        Self::from_histogram(Histogram::new(axes)?)
    }

    /// Wrap an existing histogram, enforcing name uniqueness.
    pub fn from_histogram(hist: Histogram) -> Result<Self> {
        let mut by_name = HashMap::new();
        for (i, axis) in hist.axes().iter().enumerate() {
            if let Some(name) = axis.name()
                && by_name.insert(name.to_string(), i).is_some()
            {
                return Err(HistError::DuplicateAxisName(name.to_string()));
            }
        }
        Ok(Self { hist, by_name })
    }

    /// Resolve an axis name to its position.
    pub fn axis_position(&self, name: &str) -> Result<usize> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| HistError::UnknownAxisName(name.to_string()))
    }

    /// Rename (or un-name) the axis at `pos`, keeping names unique.
    pub fn rename_axis(&mut self, pos: usize, name: Option<String>) -> Result<()> {
        let n_axes = self.hist.num_dim();
        if pos >= n_axes {
            return Err(HistError::PositionOutOfRange { pos, n_axes });
        }
        if let Some(new) = &name
            && let Some(&other) = self.by_name.get(new)
            && other != pos
        {
            return Err(HistError::DuplicateAxisName(new.clone()));
        }
        if let Some(old) = self.hist.axes()[pos].name().map(String::from) {
            self.by_name.remove(&old);
        }
        if let Some(new) = &name {
            self.by_name.insert(new.clone(), pos);
        }
        self.hist.set_axis_name(pos, name)
    }

    /// Positional bulk fill (legacy form), delegated unchanged.
    pub fn fill(&mut self, columns: &[Column], weight: Option<&[f64]>) -> Result<()> {
        self.hist.fill(columns, weight)
    }

    /// Keyword fill: one `(name, column)` pair per axis, in any order.
    ///
    /// Every axis must be named and supplied; values are reordered to axis
    /// order and delegated to the positional fill with the explicit
    /// (possibly absent) weight.
    pub fn fill_named(&mut self, values: Vec<(&str, Column)>, weight: Option<&[f64]>) -> Result<()> {
        let mut by_pos: BTreeMap<usize, Column> = BTreeMap::new();
        for (name, column) in values {
            let pos = self.axis_position(name)?;
            if by_pos.insert(pos, column).is_some() {
                return Err(HistError::DuplicateSelector(pos));
            }
        }

        let mut ordered = Vec::with_capacity(self.hist.num_dim());
        for (pos, axis) in self.hist.axes().iter().enumerate() {
            let name = axis.name().ok_or(HistError::UnnamedAxis { axis: pos })?;
            match by_pos.remove(&pos) {
                Some(column) => ordered.push(column),
                None => return Err(HistError::MissingAxisValue(name.to_string())),
            }
        }
        self.hist.fill(&ordered, weight)
    }

    /// Select a sub-region by position keys or name keys (never both).
    pub fn select(&self, by: &[(AxisKey, Selector)]) -> Result<Selection> {
        let by_pos = self.resolve_keys(by)?;
        self.hist.select(&by_pos)
    }

    /// Assign `value` over a sub-region, classified exactly like [`select`].
    ///
    /// [`select`]: NamedHist::select
    pub fn set(&mut self, by: &[(AxisKey, Selector)], value: f64) -> Result<()> {
        let by_pos = self.resolve_keys(by)?;
        self.hist.set_region(&by_pos, value)
    }

    /// The wrapped positional histogram.
    pub fn hist(&self) -> &Histogram {
        &self.hist
    }

    /// Unwrap into the positional histogram.
    pub fn into_histogram(self) -> Histogram {
        self.hist
    }

    /// The ordered axes.
    pub fn axes(&self) -> &[Axis] {
        self.hist.axes()
    }

    /// Number of dimensions.
    pub fn num_dim(&self) -> usize {
        self.hist.num_dim()
    }

    /// Raw bin contents, row-major over the axes.
    pub fn view(&self) -> &[f64] {
        self.hist.view()
    }

    /// Sum of all bin contents (flow excluded).
    pub fn sum(&self) -> f64 {
        self.hist.sum()
    }

    /// Read a single cell by per-axis bin indices.
    pub fn value_at(&self, bins: &[usize]) -> Result<f64> {
        self.hist.value_at(bins)
    }

    /// Classify a request and translate it to positional form.
    ///
    /// The rule is the same for reads and writes: positional iff every key
    /// is [`AxisKey::Pos`] (bounds-checked), named iff every key is
    /// [`AxisKey::Name`] (every name must resolve), mixed is an error.
    fn resolve_keys(&self, by: &[(AxisKey, Selector)]) -> Result<BTreeMap<usize, Selector>> {
        let any_pos = by.iter().any(|(k, _)| matches!(k, AxisKey::Pos(_)));
        let any_name = by.iter().any(|(k, _)| matches!(k, AxisKey::Name(_)));
        if any_pos && any_name {
            return Err(HistError::MixedKeys);
        }

        let n_axes = self.hist.num_dim();
        let mut out = BTreeMap::new();
        for (key, sel) in by {
            let pos = match key {
                AxisKey::Pos(p) => {
                    if *p >= n_axes {
                        return Err(HistError::PositionOutOfRange { pos: *p, n_axes });
                    }
                    *p
                }
                AxisKey::Name(name) => self.axis_position(name)?,
            };
            if out.insert(pos, *sel).is_some() {
                return Err(HistError::DuplicateSelector(pos));
            }
        }
        Ok(out)
    }
}
