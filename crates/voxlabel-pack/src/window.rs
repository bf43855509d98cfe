//! Label windows
//!
//! Window `k` of width `W` covers input labels
//! `1 + k*W ..= (k + 1)*W` and shifts them onto `1..=W`.

/// One contiguous range of input labels and its output offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelWindow {
    /// Window index, starting at 0
    pub index: usize,
    /// First input label covered
    pub input_start: u32,
    /// Last input label covered
    pub input_end: u32,
    /// Output label of `input_start`
    pub output_start: u32,
}

impl LabelWindow {
    /// Window `index` for the given width.
    ///
    /// Returns `None` when `width` is 0 or the window starts beyond the
    /// 32-bit label range. `input_end` saturates at `u32::MAX` for the last
    /// window of a full 32-bit label range.
    pub fn new(index: usize, width: u32) -> Option<Self> {
        let last = width.checked_sub(1)?;
        let start = (index as u64)
            .checked_mul(u64::from(width))?
            .checked_add(1)?;
        let input_start = u32::try_from(start).ok()?;
        Some(Self {
            index,
            input_start,
            input_end: input_start.saturating_add(last),
            output_start: 1,
        })
    }

    /// Check whether `label` falls in this window.
    #[inline]
    pub fn contains(&self, label: u32) -> bool {
        self.input_start <= label && label <= self.input_end
    }

    /// Windowed value of `label`; 0 outside the window.
    #[inline]
    pub fn map(&self, label: u32) -> u32 {
        if self.contains(label) {
            label - self.input_start + self.output_start
        } else {
            0
        }
    }
}

/// Number of windows of `width` needed to cover `1..=max_label`.
///
/// Zero when `max_label` or `width` is 0.
pub fn window_count(max_label: u32, width: u32) -> usize {
    if width == 0 {
        return 0;
    }
    max_label.div_ceil(width) as usize
}
