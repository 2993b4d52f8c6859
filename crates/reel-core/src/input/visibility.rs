/// One intersection observer entry reduced to what the router needs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionSample {
    pub index: u16,
    pub ratio: f32,
    pub intersecting: bool,
}

/// Pick the intersecting section with the largest ratio from one observer
/// batch. Ties keep the earlier sample; a zero ratio never wins.
pub fn most_visible<I>(samples: I) -> Option<u16>
where
    I: IntoIterator<Item = IntersectionSample>,
{
    let mut best: Option<IntersectionSample> = None;
    for sample in samples {
        if !sample.intersecting {
            continue;
        }
        let max_ratio = best.map(|b| b.ratio).unwrap_or(0.0);
        if sample.ratio > max_ratio {
            best = Some(sample);
        }
    }
    best.map(|b| b.index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(index: u16, ratio: f32, intersecting: bool) -> IntersectionSample {
        IntersectionSample {
            index,
            ratio,
            intersecting,
        }
    }

    #[test]
    fn picks_largest_intersecting_ratio() {
        let batch = [sample(0, 0.3, true), sample(1, 0.7, true), sample(2, 0.9, false)];
        assert_eq!(most_visible(batch), Some(1));
    }

    #[test]
    fn ties_keep_first_and_zero_never_wins() {
        assert_eq!(most_visible([sample(3, 0.5, true), sample(4, 0.5, true)]), Some(3));
        assert_eq!(most_visible([sample(0, 0.0, true)]), None);
        let empty: [IntersectionSample; 0] = [];
        assert_eq!(most_visible(empty), None);
    }
}
