//! Histograms of k-mer occurrence counts

/// Fixed-width binning of occurrence counts
///
/// Bin `b` covers values `[b * bin_width, (b + 1) * bin_width)`.
///
/// # Example
///
/// ```
/// use localign::CountHistogram;
///
/// let histogram = CountHistogram::from_values(&[1, 1, 2, 9], 5);
/// assert_eq!(histogram.bins(), &[3, 1]);
/// assert_eq!(histogram.total(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountHistogram {
    bin_width: u64,
    bins: Vec<u64>,
}

impl CountHistogram {
    /// Create an empty histogram with the given bin width (minimum 1)
    pub fn new(bin_width: u64) -> Self {
        Self {
            bin_width: bin_width.max(1),
            bins: Vec::new(),
        }
    }

    /// Build a histogram from a value series
    pub fn from_values(values: &[u64], bin_width: u64) -> Self {
        let mut histogram = Self::new(bin_width);
        for &value in values {
            histogram.add(value);
        }
        histogram
    }

    /// Bin width
    pub fn bin_width(&self) -> u64 {
        self.bin_width
    }

    /// Add one value
    pub fn add(&mut self, value: u64) {
        let bin = (value / self.bin_width) as usize;
        if bin >= self.bins.len() {
            self.bins.resize(bin + 1, 0);
        }
        self.bins[bin] += 1;
    }

    /// Per-bin counts, lowest bin first
    pub fn bins(&self) -> &[u64] {
        &self.bins
    }

    /// Total number of values binned
    pub fn total(&self) -> u64 {
        self.bins.iter().sum()
    }

    /// Render aligned text rows: value range, count, bar
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let peak = self.bins.iter().copied().max().unwrap_or(0);
        for (bin, &count) in self.bins.iter().enumerate() {
            let low = bin as u64 * self.bin_width;
            let high = low + self.bin_width - 1;
            let bar_len = if peak == 0 {
                0
            } else {
                (count * 50 / peak) as usize
            };
            out.push_str(&format!(
                "{:>8}-{:<8} {:>10} {}\n",
                low,
                high,
                count,
                "#".repeat(bar_len)
            ));
        }
        out
    }
}

/// Plotly-compatible histogram payload over a raw value series
///
/// The plotting service does its own binning, so the payload carries the
/// values themselves, not bins. JSON is formatted by hand; the field layout
/// matches the service's `data`/`filename`/`fileopt` plot call.
pub fn plotly_histogram_payload(values: &[u64], filename: &str) -> String {
    let series = values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "{{\"data\": [{{\"x\": [{}], \"type\": \"histogram\"}}], \
         \"filename\": \"{}\", \"fileopt\": \"overwrite\"}}",
        series, filename
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binning() {
        let histogram = CountHistogram::from_values(&[0, 1, 4, 5, 9, 10], 5);
        assert_eq!(histogram.bins(), &[3, 2, 1]);
        assert_eq!(histogram.total(), 6);
    }

    #[test]
    fn test_bin_width_one() {
        let histogram = CountHistogram::from_values(&[1, 1, 2], 1);
        assert_eq!(histogram.bins(), &[0, 2, 1]);
    }

    #[test]
    fn test_zero_bin_width_clamps_to_one() {
        let histogram = CountHistogram::from_values(&[3], 0);
        assert_eq!(histogram.bin_width(), 1);
        assert_eq!(histogram.bins(), &[0, 0, 0, 1]);
    }

    #[test]
    fn test_empty_histogram() {
        let histogram = CountHistogram::new(5);
        assert!(histogram.bins().is_empty());
        assert_eq!(histogram.total(), 0);
        assert_eq!(histogram.render_text(), "");
    }

    #[test]
    fn test_render_text_has_one_row_per_bin() {
        let histogram = CountHistogram::from_values(&[1, 6], 5);
        let text = histogram.render_text();
        assert_eq!(text.lines().count(), 2);
        assert!(text.contains("0-4"));
        assert!(text.contains("5-9"));
    }

    #[test]
    fn test_plotly_payload_shape() {
        let payload = plotly_histogram_payload(&[1, 2, 2], "basic-histogram");
        assert_eq!(
            payload,
            "{\"data\": [{\"x\": [1, 2, 2], \"type\": \"histogram\"}], \
             \"filename\": \"basic-histogram\", \"fileopt\": \"overwrite\"}"
        );
    }

    #[test]
    fn test_plotly_payload_empty_series() {
        let payload = plotly_histogram_payload(&[], "empty");
        assert!(payload.contains("\"x\": []"));
    }
}
