//! Category hierarchy helpers for navigation menus and breadcrumbs.

use crate::domain::category::{Category, CategoryLevel, CategoryRef};

/// Number of defined hierarchy tiers. Breadcrumb walks never take more
/// hops than this, so cyclic parent data terminates.
const MAX_CHAIN_DEPTH: usize = 3;

/// Root-tier categories in their given order.
///
/// The caller is expected to have fetched the list already sorted for
/// display (the content API sorts by the `order` field); no extra sort is
/// applied here.
pub fn root_categories(categories: &[Category]) -> Vec<&Category> {
    categories
        .iter()
        .filter(|category| category.level == CategoryLevel::Root)
        .collect()
}

/// Direct children of `parent_id`, in their given order.
///
/// Works with both bare-id and expanded parent references. A parent
/// reference that resolves to no known category simply never matches, so
/// orphaned categories appear in no child list without being an error.
pub fn children_of(categories: &[Category], parent_id: i64) -> Vec<&Category> {
    categories
        .iter()
        .filter(|category| {
            category
                .parent
                .as_ref()
                .is_some_and(|parent| parent.id() == parent_id)
        })
        .collect()
}

/// Ancestors of `category`, ordered root-first and not including the
/// category itself.
///
/// The walk stops at a dangling parent reference, at any reference that
/// folds back onto an already-visited category, and after
/// [`MAX_CHAIN_DEPTH`] hops, so malformed data cannot loop.
pub fn parent_chain<'a>(categories: &'a [Category], category: &Category) -> Vec<&'a Category> {
    let mut chain: Vec<&Category> = Vec::new();
    let mut next = category.parent.as_ref().map(CategoryRef::id);

    while let Some(parent_id) = next {
        if chain.len() >= MAX_CHAIN_DEPTH {
            break;
        }
        if parent_id == category.id || chain.iter().any(|ancestor| ancestor.id == parent_id) {
            break;
        }
        match categories.iter().find(|candidate| candidate.id == parent_id) {
            Some(parent) => {
                chain.push(parent);
                next = parent.parent.as_ref().map(CategoryRef::id);
            }
            None => break,
        }
    }

    chain.reverse();
    chain
}
