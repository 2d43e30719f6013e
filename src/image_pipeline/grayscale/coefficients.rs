/// Luminosity weights in BGR order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    pub blue: f64,
    pub green: f64,
    pub red: f64,
}

/// Y = 0.114 * B + 0.587 * G + 0.299 * R
pub const BGR_LUMA: Coefficients = Coefficients {
    blue: 0.114,
    green: 0.587,
    red: 0.299,
};

impl Coefficients {
    /// Weights as `[blue, green, red]`.
    pub const fn to_array(self) -> [f64; 3] {
        [self.blue, self.green, self.red]
    }

    /// Weighted sum accumulated blue, green, red in that order.
    #[inline]
    pub fn weighted_sum(&self, blue: u8, green: u8, red: u8) -> f64 {
        self.blue * f64::from(blue) + self.green * f64::from(green) + self.red * f64::from(red)
    }
}

/// Truncates toward zero before narrowing, so a gray value is never rounded up.
/// The weights sum to one, which keeps every weighted sum inside `[0, 255]`.
#[inline]
pub(crate) fn truncate_to_u8(value: f64) -> u8 {
    value.trunc() as u8
}
