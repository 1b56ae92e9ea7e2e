//! Entropy-based cohesion (MWE)

use crate::metrics::ClassView;

/// Shannon entropy (bits) of a weight vector, normalized to a distribution.
///
/// Zero-weight bins contribute nothing; an all-zero vector has entropy `0.0`.
pub fn shannon_entropy(weights: &[f64]) -> f64 {
    let total: f64 = weights.iter().filter(|w| **w > 0.0).sum();
    if total <= 0.0 {
        return 0.0;
    }
    weights
        .iter()
        .filter(|w| **w > 0.0)
        .map(|w| {
            let p = w / total;
            p * (1.0 / p).log2()
        })
        .sum()
}

/// Maximal weighted entropy. Each attribute is treated as a topic whose usage
/// is spread over the methods; the topic's entropy, divided by the maximum
/// `log2 k`, says how evenly it ties the class together. The class scores its
/// best-spread topic.
pub(crate) fn mwe(view: &ClassView<'_>) -> f64 {
    let k = view.method_count();
    match k {
        0 => return 0.0,
        1 => return 1.0,
        _ => {}
    }
    let ceiling = (k as f64).log2();
    (0..view.attribute_count())
        .map(|attr| {
            let spread: Vec<f64> = view
                .uses
                .iter()
                .map(|used| if used.contains(&attr) { 1.0 } else { 0.0 })
                .collect();
            shannon_entropy(&spread) / ceiling
        })
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::*;
    use super::*;
    use crate::models::Method;

    #[test]
    fn test_entropy_skips_empty_bins() {
        approx(shannon_entropy(&[]), 0.0);
        approx(shannon_entropy(&[0.0, 0.0]), 0.0);
        approx(shannon_entropy(&[1.0, 0.0, 1.0]), 1.0);
        approx(shannon_entropy(&[1.0, 1.0, 1.0, 1.0]), 2.0);
        approx(shannon_entropy(&[5.0]), 0.0);
    }

    #[test]
    fn test_mwe_best_topic() {
        let class = class(
            &["a", "b"],
            vec![
                Method::new("m1").reading(["a", "b"]),
                Method::new("m2").reading(["a"]),
                Method::new("m3").reading(["a"]),
                Method::new("m4"),
            ],
        );
        // a spreads over 3 of 4 methods: log2(3) / log2(4)
        approx(mwe(&view(&class)), 3f64.log2() / 2.0);
    }

    #[test]
    fn test_mwe_without_attributes() {
        let class = class(&[], vec![Method::new("m1"), Method::new("m2")]);
        approx(mwe(&view(&class)), 0.0);
    }
}
