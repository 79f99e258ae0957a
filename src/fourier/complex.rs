/// An immutable complex number. Every operation returns a new value; no
/// operation mutates an existing instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    /// Creates a complex number from its real and imaginary parts.
    pub fn new(re: f64, im: f64) -> Self {
        Complex { re, im }
    }

    /// Creates a complex number from a real sample, with zero imaginary part.
    pub fn from_real(re: f64) -> Self {
        Complex { re, im: 0.0 }
    }

    /// Creates a complex number from polar coordinates (radius, angle in radians).
    pub fn from_polar(radius: f64, angle: f64) -> Self {
        Complex {
            re: radius * angle.cos(),
            im: radius * angle.sin(),
        }
    }

    /// Component-wise sum.
    pub fn add(self, other: Self) -> Self {
        Complex {
            re: self.re + other.re,
            im: self.im + other.im,
        }
    }

    /// Component-wise difference.
    pub fn subtract(self, other: Self) -> Self {
        Complex {
            re: self.re - other.re,
            im: self.im - other.im,
        }
    }

    /// Complex product: (a + bi)(c + di) = (ac - bd) + (ad + bc)i.
    pub fn multiply(self, other: Self) -> Self {
        Complex {
            re: self.re * other.re - self.im * other.im,
            im: self.re * other.im + self.im * other.re,
        }
    }

    /// Scales both components by 1/scalar.
    pub fn divide(self, scalar: f64) -> Self {
        Complex {
            re: self.re / scalar,
            im: self.im / scalar,
        }
    }

    /// Negates the imaginary component.
    pub fn conjugate(self) -> Self {
        Complex {
            re: self.re,
            im: -self.im,
        }
    }

    /// Euclidean norm, sqrt(re² + im²). Always non-negative.
    pub fn magnitude(self) -> f64 {
        (self.re * self.re + self.im * self.im).sqrt()
    }
}
