//! Lack-of-cohesion counts over method/attribute usage (LCOM, LCOM2, LCOM3, LCOM5)
//!
//! Higher values mean a less cohesive class. A class with fewer than two
//! methods has nothing to lack and scores `0.0`.

use crate::metrics::ClassView;

/// Chidamber & Kemerer: `max(P - Q, 0)` where P counts method pairs with
/// disjoint attribute usage and Q counts pairs sharing at least one attribute.
pub(crate) fn lcom(view: &ClassView<'_>) -> f64 {
    if view.method_count() < 2 {
        return 0.0;
    }
    let (disjoint, sharing) = view.pairs().fold((0i64, 0i64), |(p, q), (i, j)| {
        if view.shares_attribute(i, j) {
            (p, q + 1)
        } else {
            (p + 1, q)
        }
    });
    (disjoint - sharing).max(0) as f64
}

/// `1 - Σa_j / (k·l)`: fraction of the method × attribute grid left unused
pub(crate) fn lcom2(view: &ClassView<'_>) -> f64 {
    let (k, l) = (view.method_count(), view.attribute_count());
    if k < 2 || l == 0 {
        return 0.0;
    }
    1.0 - view.total_usages() as f64 / (k * l) as f64
}

/// Henderson-Sellers over the attributes actually in use:
/// `(k - Σa_j / l') / (k - 1)` where `l'` counts attributes with `a_j > 0`.
///
/// Every counted attribute has at least one user, so the mean is at least 1
/// and the value stays in `[0, 1]`.
pub(crate) fn lcom3(view: &ClassView<'_>) -> f64 {
    let k = view.method_count();
    if k < 2 {
        return 0.0;
    }
    let used = view.attribute_users().into_iter().filter(|&a| a > 0).count();
    if used == 0 {
        return 0.0;
    }
    let k = k as f64;
    let mean_users = view.total_usages() as f64 / used as f64;
    (k - mean_users) / (k - 1.0)
}

/// Henderson-Sellers: `(k - Σa_j / l) / (k - 1)`, in `[0, 2]`
pub(crate) fn lcom5(view: &ClassView<'_>) -> f64 {
    let (k, l) = (view.method_count(), view.attribute_count());
    if k < 2 || l == 0 {
        return 0.0;
    }
    let k = k as f64;
    let mean_users = view.total_usages() as f64 / l as f64;
    (k - mean_users) / (k - 1.0)
}
