/// A click on the played-progress bar, in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressClick {
    pub click_x: f64,
    pub left: f64,
    pub width: f64,
}

impl ProgressClick {
    pub fn new(click_x: f64, left: f64, width: f64) -> Self {
        Self {
            click_x,
            left,
            width,
        }
    }

    pub fn percentage(&self) -> Option<f64> {
        checked_played_percentage(self.click_x, self.left, self.width)
    }
}

/// Percentage of the bar's width that lies left of the click.
///
/// Not clamped: clicks outside the bar give values below 0 or above 100.
pub fn played_percentage(click_x: f64, left: f64, width: f64) -> f64 {
    let offset = click_x - left;
    (offset / width) * 100.0
}

/// Like [`played_percentage`], but `None` when the bar has no usable width.
pub fn checked_played_percentage(click_x: f64, left: f64, width: f64) -> Option<f64> {
    if !width.is_finite() || width <= 0.0 {
        return None;
    }
    let percentage = played_percentage(click_x, left, width);
    percentage.is_finite().then_some(percentage)
}
