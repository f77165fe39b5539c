//! Order bookkeeping for a parent's children.
//!
//! After any successful mutation the `order` values of a collection are
//! exactly `0..n` with no gaps or repeats.

use std::collections::HashSet;

use super::error::ReorderError;
use crate::document::{Item, ItemId};

pub fn sort_by_order<F>(items: &mut [Item<F>]) {
    items.sort_by_key(|item| item.order);
}

/// Order for a newly appended child: one past the current maximum.
/// `None` if the maximum is already `u32::MAX`.
pub fn next_order<F>(items: &[Item<F>]) -> Option<u32> {
    match items.iter().map(|item| item.order).max() {
        Some(max) => max.checked_add(1),
        None => Some(0),
    }
}

/// Reassign dense orders, keeping the current relative order.
pub fn renumber<F>(items: &mut [Item<F>]) {
    sort_by_order(items);
    for (index, item) in items.iter_mut().enumerate() {
        item.order = index as u32;
    }
}

/// Set each child's order to its position in `ids`. `ids` must be an exact
/// permutation of the current children; on error `items` is left untouched.
pub fn apply_reorder<F>(items: &mut [Item<F>], ids: &[ItemId]) -> Result<(), ReorderError> {
    let current: HashSet<&ItemId> = items.iter().map(|item| &item.id).collect();
    let mut seen = HashSet::with_capacity(ids.len());
    for id in ids {
        if !current.contains(id) {
            return Err(ReorderError::Unknown(id.clone()));
        }
        if !seen.insert(id) {
            return Err(ReorderError::Duplicate(id.clone()));
        }
    }
    if let Some(item) = items.iter().find(|item| !seen.contains(&item.id)) {
        return Err(ReorderError::Missing(item.id.clone()));
    }

    for item in items.iter_mut() {
        if let Some(position) = ids.iter().position(|id| *id == item.id) {
            item.order = position as u32;
        }
    }
    sort_by_order(items);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(orders: &[u32]) -> Vec<Item<&'static str>> {
        orders
            .iter()
            .map(|&order| Item::new(ItemId::generate(), order, "x"))
            .collect()
    }

    fn orders<F>(items: &[Item<F>]) -> Vec<u32> {
        items.iter().map(|item| item.order).collect()
    }

    #[test]
    fn next_order_of_empty_is_zero() {
        assert_eq!(next_order::<()>(&[]), Some(0));
    }

    #[test]
    fn next_order_skips_past_gaps() {
        assert_eq!(next_order(&items(&[0, 4, 2])), Some(5));
    }

    #[test]
    fn next_order_after_max_is_none() {
        assert_eq!(next_order(&items(&[0, u32::MAX])), None);
    }

    #[test]
    fn renumber_closes_gaps_in_relative_order() {
        let mut list = items(&[5, 0, 2]);
        let (first, second, third) = (list[1].id.clone(), list[2].id.clone(), list[0].id.clone());

        renumber(&mut list);

        assert_eq!(orders(&list), vec![0, 1, 2]);
        let ids: Vec<_> = list.iter().map(|item| item.id.clone()).collect();
        assert_eq!(ids, vec![first, second, third]);
    }

    #[test]
    fn reorder_assigns_positions() {
        let mut list = items(&[0, 1, 2]);
        let wanted = vec![list[1].id.clone(), list[0].id.clone(), list[2].id.clone()];

        apply_reorder(&mut list, &wanted).unwrap();

        let ids: Vec<_> = list.iter().map(|item| item.id.clone()).collect();
        assert_eq!(ids, wanted);
        assert_eq!(orders(&list), vec![0, 1, 2]);
    }

    #[test]
    fn reorder_rejects_unknown_id() {
        let mut list = items(&[0, 1]);
        let stranger = ItemId::generate();
        let ids = vec![list[0].id.clone(), list[1].id.clone(), stranger.clone()];

        assert_eq!(apply_reorder(&mut list, &ids), Err(ReorderError::Unknown(stranger)));
    }

    #[test]
    fn reorder_rejects_missing_id_and_leaves_orders() {
        let mut list = items(&[0, 1, 2]);
        let ids = vec![list[2].id.clone(), list[0].id.clone()];
        let missing = list[1].id.clone();

        assert_eq!(apply_reorder(&mut list, &ids), Err(ReorderError::Missing(missing)));
        assert_eq!(orders(&list), vec![0, 1, 2]);
    }

    #[test]
    fn reorder_rejects_duplicates() {
        let mut list = items(&[0, 1]);
        let twice = list[0].id.clone();
        let ids = vec![twice.clone(), twice.clone()];

        assert_eq!(apply_reorder(&mut list, &ids), Err(ReorderError::Duplicate(twice)));
    }
}
