//! Histogram axes: continuous, integer, and category binnings with optional names.
//!
//! An axis owns its bin geometry and an optional `name`. The name is a
//! first-class field, not a metadata slot, so it survives every operation
//! that preserves the axis itself. Name-based addressing lives in
//! [`crate::named`]; the axis only stores and reports the name.

use std::collections::HashMap;

use crate::error::{HistError, Result};

/// A single fill value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Continuous value, accepted by [`Axis::regular`] and [`Axis::variable`] axes.
    Float(f64),
    /// Integer value, accepted by integer and int-category axes.
    Int(i64),
    /// String value, accepted by string-category axes.
    Str(String),
}

/// Where a value lands on an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinLocation {
    /// Below the first bin.
    Underflow,
    /// Inside bin `i`.
    Bin(usize),
    /// Above the last bin, or an unmatched category.
    Overflow,
}

/// Monotonic transform for regular axes: bins are uniform in transformed space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    /// Logarithmic binning; requires a positive range.
    Log,
    /// Square-root binning; requires a non-negative range.
    Sqrt,
    /// Power-law binning with the given exponent.
    Pow(f64),
}

impl Transform {
    fn forward(&self, x: f64) -> f64 {
        match self {
            Transform::Log => x.ln(),
            Transform::Sqrt => x.sqrt(),
            Transform::Pow(p) => x.powf(*p),
        }
    }

    fn inverse(&self, x: f64) -> f64 {
        match self {
            Transform::Log => x.exp(),
            Transform::Sqrt => x * x,
            Transform::Pow(p) => x.powf(1.0 / p),
        }
    }
}

#[derive(Debug, Clone)]
enum AxisKind {
    Regular { bins: usize, start: f64, stop: f64, transform: Option<Transform>, circular: bool },
    Variable { edges: Vec<f64> },
    Integer { start: i64, stop: i64 },
    IntCategory { categories: Vec<i64>, lookup: HashMap<i64, usize>, growth: bool },
    StrCategory { categories: Vec<String>, lookup: HashMap<String, usize>, growth: bool },
}

/// One histogram dimension.
///
/// Construct with one of the variant constructors ([`Axis::regular`],
/// [`Axis::variable`], [`Axis::integer`], [`Axis::int_category`],
/// [`Axis::str_category`], [`Axis::boolean`], and the growable/circular/
/// transformed forms), then attach a name with [`Axis::with_name`].
#[derive(Debug, Clone)]
pub struct Axis {
    kind: AxisKind,
    name: Option<String>,
    underflow: bool,
    overflow: bool,
}

impl Axis {
    /// Evenly spaced `bins` over `[start, stop)`.
    pub fn regular(bins: usize, start: f64, stop: f64) -> Result<Self> {
        Self::check_range(bins, start, stop)?;
        Ok(Self::continuous(AxisKind::Regular {
            bins,
            start,
            stop,
            transform: None,
            circular: false,
        }))
    }

    /// Evenly spaced `bins` over `[start, stop)` in transformed space.
    pub fn regular_transform(
        bins: usize,
        start: f64,
        stop: f64,
        transform: Transform,
    ) -> Result<Self> {
        Self::check_range(bins, start, stop)?;
        if let Transform::Pow(p) = transform
            && (!p.is_finite() || p == 0.0)
        {
            return Err(HistError::InvalidAxis(format!("power transform exponent {}", p)));
        }
        let (t0, t1) = (transform.forward(start), transform.forward(stop));
        if !t0.is_finite() || !t1.is_finite() || t0 >= t1 {
            return Err(HistError::InvalidAxis(format!(
                "range [{}, {}) is not representable under {:?}",
                start, stop, transform
            )));
        }
        Ok(Self::continuous(AxisKind::Regular {
            bins,
            start,
            stop,
            transform: Some(transform),
            circular: false,
        }))
    }

    /// Evenly spaced `bins` over `[start, stop)` where filling wraps around.
    ///
    /// A circular axis never records flow; values are reduced modulo the range.
    pub fn circular(bins: usize, start: f64, stop: f64) -> Result<Self> {
        Self::check_range(bins, start, stop)?;
        Ok(Self::continuous(AxisKind::Regular {
            bins,
            start,
            stop,
            transform: None,
            circular: true,
        }))
    }

    /// Irregularly spaced bins from a strictly increasing edge list
    /// (`edges.len() - 1` bins).
    pub fn variable(edges: Vec<f64>) -> Result<Self> {
        if edges.len() < 2 {
            return Err(HistError::InvalidAxis(format!(
                "variable axis needs at least 2 edges, got {}",
                edges.len()
            )));
        }
        for pair in edges.windows(2) {
            if !pair[0].is_finite() || !pair[1].is_finite() || pair[0] >= pair[1] {
                return Err(HistError::InvalidAxis(format!(
                    "edges must be finite and strictly increasing ({} then {})",
                    pair[0], pair[1]
                )));
            }
        }
        Ok(Self::continuous(AxisKind::Variable { edges }))
    }

    /// One bin per consecutive integer in `start..stop`.
    pub fn integer(start: i64, stop: i64) -> Result<Self> {
        if stop <= start {
            return Err(HistError::InvalidAxis(format!(
                "integer axis range {}..{} is empty",
                start, stop
            )));
        }
        Ok(Self::continuous(AxisKind::Integer { start, stop }))
    }

    /// Two bins for values 0 and 1, overflow disabled.
    pub fn boolean() -> Self {
        let mut axis = Self::continuous(AxisKind::Integer { start: 0, stop: 2 });
        axis.overflow = false;
        axis
    }

    /// Discrete integer categories, one bin each. Unmatched values overflow.
    pub fn int_category(categories: Vec<i64>) -> Result<Self> {
        Self::build_int_category(categories, false)
    }

    /// Discrete integer categories that grow on unmatched fills.
    ///
    /// The initial list may be empty; the owning histogram reallocates its
    /// storage when a new category is appended.
    pub fn growable_int_category(categories: Vec<i64>) -> Result<Self> {
        Self::build_int_category(categories, true)
    }

    /// Discrete string categories, one bin each. Unmatched values overflow.
    pub fn str_category<I, S>(categories: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::build_str_category(categories.into_iter().map(Into::into).collect(), false)
    }

    /// Discrete string categories that grow on unmatched fills.
    pub fn growable_str_category<I, S>(categories: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::build_str_category(categories.into_iter().map(Into::into).collect(), true)
    }

    /// Attach a name, consuming the axis.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Disable or enable the underflow counter, consuming the axis.
    pub fn with_underflow(mut self, enabled: bool) -> Self {
        self.underflow = enabled;
        self
    }

    /// Disable or enable the overflow counter, consuming the axis.
    pub fn with_overflow(mut self, enabled: bool) -> Self {
        self.overflow = enabled;
        self
    }

    /// The axis name, if set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Reassign (or clear) the axis name.
    ///
    /// Inside a [`crate::named::NamedHist`], rename through
    /// [`crate::named::NamedHist::rename_axis`] instead so uniqueness holds.
    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    /// Whether out-of-range-low values are recorded in the underflow counter.
    pub fn records_underflow(&self) -> bool {
        self.underflow
    }

    /// Whether out-of-range-high or unmatched values are recorded in the
    /// overflow counter.
    pub fn records_overflow(&self) -> bool {
        self.overflow
    }

    /// Number of bins (flow is accounted separately, never stored).
    pub fn num_bins(&self) -> usize {
        match &self.kind {
            AxisKind::Regular { bins, .. } => *bins,
            AxisKind::Variable { edges } => edges.len() - 1,
            AxisKind::Integer { start, stop } => (stop - start) as usize,
            AxisKind::IntCategory { categories, .. } => categories.len(),
            AxisKind::StrCategory { categories, .. } => categories.len(),
        }
    }

    /// Whether this axis may grow during filling.
    pub fn supports_growth(&self) -> bool {
        match &self.kind {
            AxisKind::IntCategory { growth, .. } | AxisKind::StrCategory { growth, .. } => *growth,
            _ => false,
        }
    }

    /// Bin edges for ordered axes; `None` for category axes.
    pub fn edges(&self) -> Option<Vec<f64>> {
        match &self.kind {
            AxisKind::Regular { bins, start, stop, transform, .. } => {
                let n = *bins;
                let (t0, t1) = match transform {
                    Some(t) => (t.forward(*start), t.forward(*stop)),
                    None => (*start, *stop),
                };
                let step = (t1 - t0) / n as f64;
                Some(
                    (0..=n)
                        .map(|i| {
                            let t = t0 + step * i as f64;
                            match transform {
                                Some(tr) => tr.inverse(t),
                                None => t,
                            }
                        })
                        .collect(),
                )
            }
            AxisKind::Variable { edges } => Some(edges.clone()),
            AxisKind::Integer { start, stop } => Some((*start..=*stop).map(|i| i as f64).collect()),
            AxisKind::IntCategory { .. } | AxisKind::StrCategory { .. } => None,
        }
    }

    /// Bin centers for ordered axes; `None` for category axes.
    pub fn centers(&self) -> Option<Vec<f64>> {
        let edges = self.edges()?;
        Some(edges.windows(2).map(|e| 0.5 * (e[0] + e[1])).collect())
    }

    /// Bin widths for ordered axes; `None` for category axes.
    pub fn widths(&self) -> Option<Vec<f64>> {
        let edges = self.edges()?;
        Some(edges.windows(2).map(|e| e[1] - e[0]).collect())
    }

    /// Locate a value on this axis.
    pub fn locate(&self, value: &Value) -> Result<BinLocation> {
        match value {
            Value::Float(v) => self.locate_float(*v),
            Value::Int(v) => self.locate_int(*v),
            Value::Str(s) => self.locate_str(s),
        }
    }

    pub(crate) fn locate_float(&self, v: f64) -> Result<BinLocation> {
        match &self.kind {
            AxisKind::Regular { bins, start, stop, transform, circular } => {
                if !v.is_finite() {
                    return Ok(BinLocation::Overflow);
                }
                let v = if *circular { start + (v - start).rem_euclid(stop - start) } else { v };
                let (t0, t1, tv) = match transform {
                    Some(t) => (t.forward(*start), t.forward(*stop), t.forward(v)),
                    None => (*start, *stop, v),
                };
                if !tv.is_finite() {
                    // e.g. log of a negative value: below every bin
                    return Ok(BinLocation::Underflow);
                }
                let f = (tv - t0) / (t1 - t0);
                if f < 0.0 {
                    Ok(BinLocation::Underflow)
                } else if f >= 1.0 {
                    Ok(BinLocation::Overflow)
                } else {
                    Ok(BinLocation::Bin(((f * *bins as f64) as usize).min(bins - 1)))
                }
            }
            AxisKind::Variable { edges } => {
                if !v.is_finite() {
                    return Ok(BinLocation::Overflow);
                }
                if v < edges[0] {
                    return Ok(BinLocation::Underflow);
                }
                if v >= edges[edges.len() - 1] {
                    return Ok(BinLocation::Overflow);
                }
                let bin = match edges.binary_search_by(|e| e.partial_cmp(&v).unwrap()) {
                    Ok(i) => i.min(edges.len() - 2),
                    Err(i) => i - 1,
                };
                Ok(BinLocation::Bin(bin))
            }
            AxisKind::Integer { .. } => Err(HistError::TypeMismatch(
                "integer axis expects integer values".to_string(),
            )),
            AxisKind::IntCategory { .. } | AxisKind::StrCategory { .. } => Err(
                HistError::TypeMismatch("category axis cannot bin a continuous value".to_string()),
            ),
        }
    }

    pub(crate) fn locate_int(&self, v: i64) -> Result<BinLocation> {
        match &self.kind {
            AxisKind::Regular { .. } | AxisKind::Variable { .. } => self.locate_float(v as f64),
            AxisKind::Integer { start, stop } => {
                if v < *start {
                    Ok(BinLocation::Underflow)
                } else if v >= *stop {
                    Ok(BinLocation::Overflow)
                } else {
                    Ok(BinLocation::Bin((v - start) as usize))
                }
            }
            AxisKind::IntCategory { lookup, .. } => {
                Ok(lookup.get(&v).map_or(BinLocation::Overflow, |&i| BinLocation::Bin(i)))
            }
            AxisKind::StrCategory { .. } => Err(HistError::TypeMismatch(
                "string-category axis expects string values".to_string(),
            )),
        }
    }

    pub(crate) fn locate_str(&self, s: &str) -> Result<BinLocation> {
        match &self.kind {
            AxisKind::StrCategory { lookup, .. } => {
                Ok(lookup.get(s).map_or(BinLocation::Overflow, |&i| BinLocation::Bin(i)))
            }
            _ => Err(HistError::TypeMismatch(format!(
                "string value '{}' on a non-string axis",
                s
            ))),
        }
    }

    /// Append an unmatched integer category; returns the new bin index.
    pub(crate) fn grow_int(&mut self, v: i64) -> Option<usize> {
        match &mut self.kind {
            AxisKind::IntCategory { categories, lookup, growth: true } => {
                let bin = categories.len();
                categories.push(v);
                lookup.insert(v, bin);
                Some(bin)
            }
            _ => None,
        }
    }

    /// Append an unmatched string category; returns the new bin index.
    pub(crate) fn grow_str(&mut self, s: &str) -> Option<usize> {
        match &mut self.kind {
            AxisKind::StrCategory { categories, lookup, growth: true } => {
                let bin = categories.len();
                categories.push(s.to_string());
                lookup.insert(s.to_string(), bin);
                Some(bin)
            }
            _ => None,
        }
    }

    /// Restrict the axis to bins `lo..hi`, preserving name and flags.
    pub(crate) fn slice(&self, lo: usize, hi: usize) -> Result<Axis> {
        let kind = match &self.kind {
            AxisKind::Regular { transform, .. } => {
                let edges = self.edges().expect("regular axis has edges");
                AxisKind::Regular {
                    bins: hi - lo,
                    start: edges[lo],
                    stop: edges[hi],
                    transform: *transform,
                    // a sub-range cannot wrap
                    circular: false,
                }
            }
            AxisKind::Variable { edges } => AxisKind::Variable { edges: edges[lo..=hi].to_vec() },
            AxisKind::Integer { start, .. } => {
                AxisKind::Integer { start: start + lo as i64, stop: start + hi as i64 }
            }
            AxisKind::IntCategory { categories, growth, .. } => {
                let categories = categories[lo..hi].to_vec();
                let lookup = categories.iter().enumerate().map(|(i, &c)| (c, i)).collect();
                AxisKind::IntCategory { categories, lookup, growth: *growth }
            }
            AxisKind::StrCategory { categories, growth, .. } => {
                let categories = categories[lo..hi].to_vec();
                let lookup =
                    categories.iter().enumerate().map(|(i, c)| (c.clone(), i)).collect();
                AxisKind::StrCategory { categories, lookup, growth: *growth }
            }
        };
        Ok(Axis {
            kind,
            name: self.name.clone(),
            underflow: self.underflow,
            overflow: self.overflow,
        })
    }

    fn continuous(kind: AxisKind) -> Self {
        let flow_default = !matches!(
            kind,
            AxisKind::IntCategory { .. } | AxisKind::StrCategory { .. }
        );
        Axis { kind, name: None, underflow: flow_default, overflow: true }
    }

    fn check_range(bins: usize, start: f64, stop: f64) -> Result<()> {
        if bins == 0 {
            return Err(HistError::InvalidAxis("axis needs at least one bin".to_string()));
        }
        if !start.is_finite() || !stop.is_finite() || start >= stop {
            return Err(HistError::InvalidAxis(format!("bad range [{}, {})", start, stop)));
        }
        Ok(())
    }

    fn build_int_category(categories: Vec<i64>, growth: bool) -> Result<Self> {
        if categories.is_empty() && !growth {
            return Err(HistError::InvalidAxis(
                "empty category list is only allowed on a growable axis".to_string(),
            ));
        }
        let mut lookup = HashMap::with_capacity(categories.len());
        for (i, &c) in categories.iter().enumerate() {
            if lookup.insert(c, i).is_some() {
                return Err(HistError::InvalidAxis(format!("duplicate category {}", c)));
            }
        }
        Ok(Self::continuous(AxisKind::IntCategory { categories, lookup, growth }))
    }

    fn build_str_category(categories: Vec<String>, growth: bool) -> Result<Self> {
        if categories.is_empty() && !growth {
            return Err(HistError::InvalidAxis(
                "empty category list is only allowed on a growable axis".to_string(),
            ));
        }
        let mut lookup = HashMap::with_capacity(categories.len());
        for (i, c) in categories.iter().enumerate() {
            if lookup.insert(c.clone(), i).is_some() {
                return Err(HistError::InvalidAxis(format!("duplicate category '{}'", c)));
            }
        }
        Ok(Self::continuous(AxisKind::StrCategory { categories, lookup, growth }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn name_round_trip_all_variants() {
        let axes = vec![
            Axis::regular(10, 0.0, 1.0).unwrap().with_name("a"),
            Axis::variable(vec![0.0, 1.0, 4.0]).unwrap().with_name("a"),
            Axis::integer(0, 5).unwrap().with_name("a"),
            Axis::int_category(vec![2, 4, 8]).unwrap().with_name("a"),
            Axis::str_category(["x", "y"]).unwrap().with_name("a"),
            Axis::boolean().with_name("a"),
        ];
        for mut axis in axes {
            assert_eq!(axis.name(), Some("a"));
            axis.set_name(Some("b".to_string()));
            assert_eq!(axis.name(), Some("b"));
            axis.set_name(None);
            assert_eq!(axis.name(), None);
        }
    }

    #[test]
    fn regular_locate() {
        let axis = Axis::regular(10, 0.0, 100.0).unwrap();
        assert_eq!(axis.locate_float(5.0).unwrap(), BinLocation::Bin(0));
        assert_eq!(axis.locate_float(55.0).unwrap(), BinLocation::Bin(5));
        assert_eq!(axis.locate_float(99.999).unwrap(), BinLocation::Bin(9));
        assert_eq!(axis.locate_float(-0.1).unwrap(), BinLocation::Underflow);
        assert_eq!(axis.locate_float(100.0).unwrap(), BinLocation::Overflow);
        assert_eq!(axis.locate_float(f64::NAN).unwrap(), BinLocation::Overflow);
    }

    #[test]
    fn regular_edges_and_centers() {
        let axis = Axis::regular(4, 0.0, 2.0).unwrap();
        let edges = axis.edges().unwrap();
        assert_eq!(edges, vec![0.0, 0.5, 1.0, 1.5, 2.0]);
        let centers = axis.centers().unwrap();
        assert_abs_diff_eq!(centers[0], 0.25, epsilon = 1e-12);
        assert_abs_diff_eq!(centers[3], 1.75, epsilon = 1e-12);
        assert_eq!(axis.widths().unwrap(), vec![0.5; 4]);
    }

    #[test]
    fn circular_wraps() {
        let axis = Axis::circular(4, 0.0, 360.0).unwrap();
        assert_eq!(axis.locate_float(370.0).unwrap(), BinLocation::Bin(0));
        assert_eq!(axis.locate_float(-10.0).unwrap(), BinLocation::Bin(3));
        assert_eq!(axis.locate_float(360.0).unwrap(), BinLocation::Bin(0));
    }

    #[test]
    fn log_transform_bins_uniform_in_log_space() {
        let axis = Axis::regular_transform(3, 1.0, 1000.0, Transform::Log).unwrap();
        let edges = axis.edges().unwrap();
        assert_abs_diff_eq!(edges[1], 10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(edges[2], 100.0, epsilon = 1e-9);
        assert_eq!(axis.locate_float(5.0).unwrap(), BinLocation::Bin(0));
        assert_eq!(axis.locate_float(500.0).unwrap(), BinLocation::Bin(2));
        assert_eq!(axis.locate_float(-1.0).unwrap(), BinLocation::Underflow);
    }

    #[test]
    fn log_transform_rejects_nonpositive_range() {
        assert!(Axis::regular_transform(3, 0.0, 10.0, Transform::Log).is_err());
        assert!(Axis::regular_transform(3, -1.0, 10.0, Transform::Log).is_err());
    }

    #[test]
    fn variable_locate_uses_edges() {
        let axis = Axis::variable(vec![0.0, 1.0, 2.0, 3.0]).unwrap();
        assert_eq!(axis.locate_float(-0.5).unwrap(), BinLocation::Underflow);
        assert_eq!(axis.locate_float(3.0).unwrap(), BinLocation::Overflow);
        assert_eq!(axis.locate_float(0.0).unwrap(), BinLocation::Bin(0));
        assert_eq!(axis.locate_float(1.0).unwrap(), BinLocation::Bin(1));
        assert_eq!(axis.locate_float(2.99).unwrap(), BinLocation::Bin(2));
    }

    #[test]
    fn variable_rejects_bad_edges() {
        assert!(Axis::variable(vec![1.0]).is_err());
        assert!(Axis::variable(vec![0.0, 0.0, 1.0]).is_err());
        assert!(Axis::variable(vec![0.0, 2.0, 1.0]).is_err());
    }

    #[test]
    fn integer_locate() {
        let axis = Axis::integer(-2, 3).unwrap();
        assert_eq!(axis.num_bins(), 5);
        assert_eq!(axis.locate_int(-2).unwrap(), BinLocation::Bin(0));
        assert_eq!(axis.locate_int(2).unwrap(), BinLocation::Bin(4));
        assert_eq!(axis.locate_int(3).unwrap(), BinLocation::Overflow);
        assert_eq!(axis.locate_int(-3).unwrap(), BinLocation::Underflow);
        assert!(axis.locate_float(0.5).is_err());
    }

    #[test]
    fn boolean_is_two_bin_integer_without_overflow() {
        let axis = Axis::boolean();
        assert_eq!(axis.num_bins(), 2);
        assert!(!axis.records_overflow());
        assert!(axis.records_underflow());
        assert_eq!(axis.locate_int(0).unwrap(), BinLocation::Bin(0));
        assert_eq!(axis.locate_int(1).unwrap(), BinLocation::Bin(1));
        assert_eq!(axis.locate_int(2).unwrap(), BinLocation::Overflow);
    }

    #[test]
    fn categories_locate_and_reject_duplicates() {
        let axis = Axis::str_category(["a", "b"]).unwrap();
        assert_eq!(axis.locate_str("a").unwrap(), BinLocation::Bin(0));
        assert_eq!(axis.locate_str("c").unwrap(), BinLocation::Overflow);
        assert!(axis.locate_int(1).is_err());
        assert!(Axis::str_category(["a", "a"]).is_err());
        assert!(Axis::int_category(vec![1, 1]).is_err());
        assert!(Axis::int_category(vec![]).is_err());
        assert!(Axis::growable_int_category(vec![]).is_ok());
    }

    #[test]
    fn growth_appends_categories() {
        let mut axis = Axis::growable_str_category(["a"]).unwrap();
        assert_eq!(axis.grow_str("b"), Some(1));
        assert_eq!(axis.locate_str("b").unwrap(), BinLocation::Bin(1));
        assert_eq!(axis.num_bins(), 2);

        let mut fixed = Axis::str_category(["a"]).unwrap();
        assert_eq!(fixed.grow_str("b"), None);
    }

    #[test]
    fn slice_preserves_geometry() {
        let axis = Axis::regular(10, 0.0, 100.0).unwrap().with_name("x");
        let sub = axis.slice(2, 5).unwrap();
        assert_eq!(sub.num_bins(), 3);
        assert_eq!(sub.name(), Some("x"));
        assert_eq!(sub.edges().unwrap(), vec![20.0, 30.0, 40.0, 50.0]);

        let cat = Axis::str_category(["a", "b", "c"]).unwrap();
        let sub = cat.slice(1, 3).unwrap();
        assert_eq!(sub.locate_str("b").unwrap(), BinLocation::Bin(0));
        assert_eq!(sub.locate_str("a").unwrap(), BinLocation::Overflow);

        let int = Axis::integer(5, 15).unwrap();
        let sub = int.slice(0, 4).unwrap();
        assert_eq!(sub.locate_int(8).unwrap(), BinLocation::Bin(3));
        assert_eq!(sub.locate_int(9).unwrap(), BinLocation::Overflow);
    }

    #[test]
    fn locate_by_value_enum() {
        let axis = Axis::regular(2, 0.0, 2.0).unwrap();
        assert_eq!(axis.locate(&Value::Float(0.5)).unwrap(), BinLocation::Bin(0));
        assert_eq!(axis.locate(&Value::Int(1)).unwrap(), BinLocation::Bin(1));
        assert!(axis.locate(&Value::Str("x".to_string())).is_err());
    }
}
