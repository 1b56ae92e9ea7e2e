//! Pairwise attribute-sharing cohesion (MMAC, SCOM, TCC)

use crate::metrics::ClassView;

/// Method-method through attributes cohesion:
/// `Σ_j a_j(a_j - 1) / (l·k·(k - 1))`.
pub(crate) fn mmac(view: &ClassView<'_>) -> f64 {
    let (k, l) = (view.method_count(), view.attribute_count());
    match k {
        0 => return 0.0,
        1 => return 1.0,
        _ if l == 0 => return 0.0,
        _ => {}
    }
    let similar: usize = view
        .attribute_users()
        .into_iter()
        .map(|users| users * users.saturating_sub(1))
        .sum();
    similar as f64 / (l * k * (k - 1)) as f64
}

/// Sensitive class cohesion (Fernández & Peña). Each pair contributes
/// `|I∩J| / min(|I|,|J|)` weighted by `|I∪J| / l`; pairs where either method
/// uses nothing contribute zero.
pub(crate) fn scom(view: &ClassView<'_>) -> f64 {
    let l = view.attribute_count();
    match view.method_count() {
        0 => return 0.0,
        1 => return 1.0,
        _ if l == 0 => return 0.0,
        _ => {}
    }
    let total: f64 = view
        .pairs()
        .map(|(i, j)| {
            let (a, b) = (&view.uses[i], &view.uses[j]);
            let smaller = a.len().min(b.len());
            if smaller == 0 {
                return 0.0;
            }
            let common = a.intersection(b).count() as f64;
            let union = a.union(b).count() as f64;
            (common / smaller as f64) * (union / l as f64)
        })
        .sum();
    total / view.pair_count()
}

/// Tight class cohesion (Bieman & Kang): share of method pairs directly
/// connected, where attribute usage includes everything reached through
/// transitive calls.
pub(crate) fn tcc(view: &ClassView<'_>) -> f64 {
    match view.method_count() {
        0 => return 0.0,
        1 => return 1.0,
        _ => {}
    }
    let reach = view.transitive_uses();
    let direct = view
        .pairs()
        .filter(|&(i, j)| !reach[i].is_disjoint(&reach[j]))
        .count();
    direct as f64 / view.pair_count()
}
