use std::cmp::Ordering;

/// Orders `items` by descending score and keeps the first `limit`.
///
/// The sort is stable, so equal scores keep their input (catalog) order.
pub fn top_k<T, F>(mut items: Vec<T>, limit: usize, score: F) -> Vec<T>
where
    F: Fn(&T) -> f64,
{
    items.sort_by(|left, right| {
        score(right)
            .partial_cmp(&score(left))
            .unwrap_or(Ordering::Equal)
    });
    items.truncate(limit);
    items
}
