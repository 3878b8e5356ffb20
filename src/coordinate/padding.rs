//! Padding amounts for growing or shrinking a bbox

/// Amount added on each side of a bbox
///
/// A `Scalar` applies the same amount to both axes. Negative amounts shrink
/// the box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Padding {
    /// Same amount on the x and y axes
    Scalar(f64),
    /// Separate amounts for the x and y axes
    PerAxis(f64, f64),
}

impl Padding {
    /// Amount applied on the x axis
    pub fn x(&self) -> f64 {
        match *self {
            Padding::Scalar(v) => v,
            Padding::PerAxis(x, _) => x,
        }
    }

    /// Amount applied on the y axis
    pub fn y(&self) -> f64 {
        match *self {
            Padding::Scalar(v) => v,
            Padding::PerAxis(_, y) => y,
        }
    }

    /// Multiply each axis by its own factor
    pub(crate) fn scaled(&self, fx: f64, fy: f64) -> Padding {
        Padding::PerAxis(self.x() * fx, self.y() * fy)
    }
}

impl From<f64> for Padding {
    fn from(v: f64) -> Self {
        Padding::Scalar(v)
    }
}

impl From<(f64, f64)> for Padding {
    fn from((x, y): (f64, f64)) -> Self {
        Padding::PerAxis(x, y)
    }
}

impl From<[f64; 2]> for Padding {
    fn from([x, y]: [f64; 2]) -> Self {
        Padding::PerAxis(x, y)
    }
}

impl std::str::FromStr for Padding {
    type Err = crate::errors::ExtentError;

    /// Parse "v" as a scalar or "x,y" as per-axis amounts
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse = |v: &str| v.trim().parse::<f64>()
            .map_err(|_| crate::errors::ExtentError::GenericError(format!("Invalid padding value: {}", v)));

        match s.split_once(',') {
            Some((x, y)) => Ok(Padding::PerAxis(parse(x)?, parse(y)?)),
            None => Ok(Padding::Scalar(parse(s)?)),
        }
    }
}
