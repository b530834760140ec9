/// Steps completed out of the whole funnel, for the progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub current: usize,
    pub total: usize,
}

impl Progress {
    /// Rounded percentage of `current` over `total`.
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        ((self.current as f64 / self.total as f64) * 100.0).round() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_rounds_to_nearest() {
        assert_eq!(Progress { current: 3, total: 5 }.percent(), 60);
        assert_eq!(Progress { current: 1, total: 3 }.percent(), 33);
        assert_eq!(Progress { current: 2, total: 3 }.percent(), 67);
        assert_eq!(Progress { current: 0, total: 5 }.percent(), 0);
        assert_eq!(Progress { current: 0, total: 0 }.percent(), 0);
    }
}
