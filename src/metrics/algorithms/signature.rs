//! Parameter-type based cohesion (CAMC, NHD)
//!
//! Both build the method × parameter-type incidence matrix: row `i` holds the
//! distinct parameter types of method `i`, columns are the union `T` over all
//! methods.

use std::collections::BTreeSet;

use crate::metrics::ClassView;

fn parameter_type_union<'a>(view: &ClassView<'a>) -> BTreeSet<&'a str> {
    view.parameter_types
        .iter()
        .flat_map(|types| types.iter().copied())
        .collect()
}

/// Cohesion among methods of classes: density of the incidence matrix,
/// `Σ_i |P_i| / (k·|T|)`.
pub(crate) fn camc(view: &ClassView<'_>) -> f64 {
    let k = view.method_count();
    match k {
        0 => return 0.0,
        1 => return 1.0,
        _ => {}
    }
    let types = parameter_type_union(view);
    if types.is_empty() {
        return 0.0;
    }
    let filled: usize = view.parameter_types.iter().map(BTreeSet::len).sum();
    filled as f64 / (k * types.len()) as f64
}

/// Normalized Hamming distance (Counsell et al.):
/// `1 - 2/(|T|·k·(k-1)) · Σ_t c_t(k - c_t)` where `c_t` counts methods taking
/// type `t`. Agreement between every pair of rows gives `1.0`.
pub(crate) fn nhd(view: &ClassView<'_>) -> f64 {
    let k = view.method_count();
    match k {
        0 => return 0.0,
        1 => return 1.0,
        _ => {}
    }
    let types = parameter_type_union(view);
    if types.is_empty() {
        return 0.0;
    }
    let disagreement: usize = types
        .iter()
        .map(|t| {
            let takers = view
                .parameter_types
                .iter()
                .filter(|row| row.contains(t))
                .count();
            takers * (k - takers)
        })
        .sum();
    1.0 - 2.0 * disagreement as f64 / (types.len() * k * (k - 1)) as f64
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::*;
    use super::*;
    use crate::models::Method;

    #[test]
    fn test_camc_density() {
        let class = class(
            &[],
            vec![
                Method::new("m1").with_parameters(["int", "String"]),
                Method::new("m2").with_parameters(["int"]),
            ],
        );
        // 3 filled cells in a 2 × 2 matrix
        approx(camc(&view(&class)), 0.75);
    }

    #[test]
    fn test_camc_repeated_type_counts_once() {
        let class = class(
            &[],
            vec![
                Method::new("m1").with_parameters(["int", "int"]),
                Method::new("m2").with_parameters(["int"]),
            ],
        );
        approx(camc(&view(&class)), 1.0);
    }

    #[test]
    fn test_nhd_identical_signatures() {
        let class = class(
            &[],
            vec![
                Method::new("m1").with_parameters(["int"]),
                Method::new("m2").with_parameters(["int"]),
            ],
        );
        approx(nhd(&view(&class)), 1.0);
    }

    #[test]
    fn test_nhd_disagreement() {
        let class = class(
            &[],
            vec![
                Method::new("m1").with_parameters(["int"]),
                Method::new("m2").with_parameters(["String"]),
            ],
        );
        // each type: c = 1, c(k - c) = 1; 1 - 2·2/(2·2·1)
        approx(nhd(&view(&class)), 0.0);
    }

    #[test]
    fn test_no_parameters_anywhere() {
        let class = class(&[], vec![Method::new("m1"), Method::new("m2")]);
        approx(camc(&view(&class)), 0.0);
        approx(nhd(&view(&class)), 0.0);
    }
}
