/// Partition of a total point count into consecutive segments.
///
/// Offsets are derived from the lengths alone, so any segment can be sampled
/// without walking the ones before it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SegmentPlan {
    lengths: Vec<usize>,
}

impl SegmentPlan {
    /// Split `total` into `parts` segments of `total / parts` points, the
    /// first `total % parts` segments taking one extra point each.
    pub fn even(total: usize, parts: usize) -> Self {
        if parts == 0 {
            return Self { lengths: Vec::new() };
        }
        let base = total / parts;
        let rem = total % parts;
        Self {
            lengths: (0..parts).map(|k| base + usize::from(k < rem)).collect(),
        }
    }

    /// A leading segment of `lead` points followed by the rest of `total`
    /// split evenly over `parts` segments.
    pub fn with_lead(total: usize, lead: usize, parts: usize) -> Self {
        let lead = lead.min(total);
        if parts == 0 {
            return Self { lengths: vec![total] };
        }
        let mut lengths = Vec::with_capacity(parts + 1);
        lengths.push(lead);
        lengths.extend(Self::even(total - lead, parts).lengths);
        Self { lengths }
    }

    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    pub fn segment_count(&self) -> usize {
        self.lengths.len()
    }

    pub fn total(&self) -> usize {
        self.lengths.iter().sum()
    }

    /// Global index of the first point of segment `k`
    pub fn offset(&self, k: usize) -> usize {
        self.lengths[..k].iter().sum()
    }
}
