use std::ops::{Add, Mul, Neg, Sub};

/// Splitting constant 2^27 + 1 for Dekker multiplication of 53-bit
/// significands.
const SPLIT: f64 = 134_217_729.0;

/// Double-double value: the unevaluated sum of two `f64`s, with `lo`
/// below half an ulp of `hi`.
///
/// Carries roughly 106 significand bits, which is enough to evaluate
/// the 2x2 determinant of the orientation predicate exactly once the
/// operands have been reduced to coordinate differences. Only the
/// operations the predicates need are implemented.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dd {
    hi: f64,
    lo: f64,
}

impl Dd {
    /// The value zero.
    pub const ZERO: Dd = Dd { hi: 0.0, lo: 0.0 };

    /// Widens a plain double.
    #[must_use]
    pub fn new(x: f64) -> Self {
        Self { hi: x, lo: 0.0 }
    }

    /// Exact difference `a - b` of two doubles.
    #[must_use]
    pub fn diff(a: f64, b: f64) -> Self {
        Dd::new(a) + (-b)
    }

    /// Collapses back to the nearest double.
    #[must_use]
    pub fn to_f64(self) -> f64 {
        self.hi + self.lo
    }

    /// Sign of the value: -1, 0 or 1.
    #[must_use]
    pub fn signum(self) -> i32 {
        if self.hi > 0.0 {
            return 1;
        }
        if self.hi < 0.0 {
            return -1;
        }
        if self.lo > 0.0 {
            return 1;
        }
        if self.lo < 0.0 {
            return -1;
        }
        0
    }

    /// Whether the value is exactly zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.signum() == 0
    }

    // Two-sum of a double onto the pair, renormalized (Knuth).
    fn add_f64(self, y: f64) -> Self {
        let s = self.hi + y;
        let e = s - self.hi;
        let mut u = s - e;
        u = (y - e) + (self.hi - u);
        let f = u + self.lo;
        let hi = s + f;
        let h = f + (s - hi);
        let zhi = hi + h;
        let zlo = h + (hi - zhi);
        Dd { hi: zhi, lo: zlo }
    }

    // Two-sum of both components, renormalized.
    fn add_parts(self, yhi: f64, ylo: f64) -> Self {
        let s = self.hi + yhi;
        let t = self.lo + ylo;
        let e = s - self.hi;
        let f = t - self.lo;
        let mut u = s - e;
        let mut v = t - f;
        u = (yhi - e) + (self.hi - u);
        v = (ylo - f) + (self.lo - v);
        let e2 = u + t;
        let hi = s + e2;
        let h = e2 + (s - hi);
        let e3 = v + h;
        let zhi = hi + e3;
        let zlo = e3 + (hi - zhi);
        Dd { hi: zhi, lo: zlo }
    }

    // Dekker split product of both components, renormalized.
    fn mul_parts(self, yhi: f64, ylo: f64) -> Self {
        let mut big = SPLIT * self.hi;
        let mut hx = big - self.hi;
        let mut small = SPLIT * yhi;
        hx = big - hx;
        let tx = self.hi - hx;
        let mut hy = small - yhi;
        big = self.hi * yhi;
        hy = small - hy;
        let ty = yhi - hy;
        small = ((((hx * hy - big) + hx * ty) + tx * hy) + tx * ty)
            + (self.hi * ylo + self.lo * yhi);
        let zhi = big + small;
        hx = big - zhi;
        let zlo = small + hx;
        Dd { hi: zhi, lo: zlo }
    }
}

impl Add for Dd {
    type Output = Dd;

    fn add(self, rhs: Dd) -> Dd {
        self.add_parts(rhs.hi, rhs.lo)
    }
}

impl Add<f64> for Dd {
    type Output = Dd;

    fn add(self, rhs: f64) -> Dd {
        self.add_f64(rhs)
    }
}

impl Sub for Dd {
    type Output = Dd;

    fn sub(self, rhs: Dd) -> Dd {
        self.add_parts(-rhs.hi, -rhs.lo)
    }
}

impl Sub<f64> for Dd {
    type Output = Dd;

    fn sub(self, rhs: f64) -> Dd {
        self.add_f64(-rhs)
    }
}

impl Mul for Dd {
    type Output = Dd;

    fn mul(self, rhs: Dd) -> Dd {
        self.mul_parts(rhs.hi, rhs.lo)
    }
}

impl Neg for Dd {
    type Output = Dd;

    fn neg(self) -> Dd {
        Dd {
            hi: -self.hi,
            lo: -self.lo,
        }
    }
}
