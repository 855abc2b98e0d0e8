/// Conjunction of up to four optional comparison bounds.
///
/// Bounds are not checked against each other: `ge(10).le(5)` is accepted and
/// simply never satisfied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds<T> {
    pub ge: Option<T>,
    pub gt: Option<T>,
    pub le: Option<T>,
    pub lt: Option<T>,
}

impl<T> Default for Bounds<T> {
    fn default() -> Self {
        Self {
            ge: None,
            gt: None,
            le: None,
            lt: None,
        }
    }
}

impl<T: PartialOrd + Copy> Bounds<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ge(mut self, value: T) -> Self {
        self.ge = Some(value);
        self
    }

    pub fn gt(mut self, value: T) -> Self {
        self.gt = Some(value);
        self
    }

    pub fn le(mut self, value: T) -> Self {
        self.le = Some(value);
        self
    }

    pub fn lt(mut self, value: T) -> Self {
        self.lt = Some(value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.ge.is_none() && self.gt.is_none() && self.le.is_none() && self.lt.is_none()
    }

    pub fn contains(&self, value: T) -> bool {
        self.ge.map_or(true, |b| value >= b)
            && self.gt.map_or(true, |b| value > b)
            && self.le.map_or(true, |b| value <= b)
            && self.lt.map_or(true, |b| value < b)
    }
}

/// 2^63: every `i64` lies in `[-I64_SPAN, I64_SPAN)`.
const I64_SPAN: f64 = 9_223_372_036_854_775_808.0;

/// One rounded bound, seen from the integers.
enum Edge {
    Always,
    Never,
    At(i64),
}

impl Edge {
    fn new(rounded: f64, always: bool, never: bool) -> Self {
        if always {
            Edge::Always
        } else if never {
            Edge::Never
        } else {
            Edge::At(rounded as i64)
        }
    }
}

impl Bounds<f64> {
    /// Integer bounds accepting exactly the whole numbers these bounds accept.
    pub fn to_integer(&self) -> Bounds<i64> {
        if self.is_empty() {
            return Bounds::new();
        }

        let all = [self.ge, self.gt, self.le, self.lt];
        if all.iter().flatten().any(|b| b.is_nan()) {
            // NaN compares false against everything
            return Bounds::never();
        }

        let ge = self.ge.map(|b| {
            let c = b.ceil();
            Edge::new(c, c <= -I64_SPAN, c >= I64_SPAN)
        });
        let gt = self.gt.map(|b| {
            let f = b.floor();
            Edge::new(f, f < -I64_SPAN, f >= I64_SPAN)
        });
        let le = self.le.map(|b| {
            let f = b.floor();
            Edge::new(f, f >= I64_SPAN, f < -I64_SPAN)
        });
        let lt = self.lt.map(|b| {
            let c = b.ceil();
            Edge::new(c, c >= I64_SPAN, c <= -I64_SPAN)
        });

        let edges = [&ge, &gt, &le, &lt];
        if edges.iter().any(|e| matches!(e, Some(Edge::Never))) {
            return Bounds::never();
        }

        let at = |edge: Option<Edge>| match edge {
            Some(Edge::At(n)) => Some(n),
            _ => None,
        };
        Bounds {
            ge: at(ge),
            gt: at(gt),
            le: at(le),
            lt: at(lt),
        }
    }
}

impl Bounds<i64> {
    /// Bounds no integer satisfies.
    fn never() -> Self {
        Bounds::new().gt(i64::MAX)
    }
}
