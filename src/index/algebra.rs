//! Set algebra over sorted posting lists.
//!
//! Boolean queries reduce to intersection, union and difference of sorted
//! document-id lists; all three are linear two-pointer merges. The
//! positional variant of intersection keeps both sides' position lists
//! attached to every surviving document so phrase matching can verify
//! adjacency afterwards.

use crate::index::posting::{DocId, Position, PositionalPosting, PositionalPostingList};

/// Intersection of two sorted, duplicate-free id lists.
///
/// The result is sorted, duplicate-free and commutative: `intersect(a, b)`
/// equals `intersect(b, a)` element for element.
pub fn intersect(left: &[DocId], right: &[DocId]) -> Vec<DocId> {
    let mut result = Vec::with_capacity(left.len().min(right.len()));
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        match left[i].cmp(&right[j]) {
            std::cmp::Ordering::Equal => {
                result.push(left[i]);
                i += 1;
                j += 1;
            }
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
        }
    }

    result
}

/// Union of two sorted, duplicate-free id lists.
///
/// Emits the smaller head at each step, or the shared value once; whatever
/// remains of the unexhausted side is appended at the end. Sorted,
/// duplicate-free, commutative.
pub fn union(left: &[DocId], right: &[DocId]) -> Vec<DocId> {
    let mut result = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        match left[i].cmp(&right[j]) {
            std::cmp::Ordering::Equal => {
                result.push(left[i]);
                i += 1;
                j += 1;
            }
            std::cmp::Ordering::Less => {
                result.push(left[i]);
                i += 1;
            }
            std::cmp::Ordering::Greater => {
                result.push(right[j]);
                j += 1;
            }
        }
    }

    result.extend_from_slice(&left[i..]);
    result.extend_from_slice(&right[j..]);
    result
}

/// Asymmetric difference: every element of `left` absent from `right`.
///
/// A two-pointer scan rather than per-element lookup, since `left` can be
/// long. Order of `left` is preserved.
pub fn difference(left: &[DocId], right: &[DocId]) -> Vec<DocId> {
    let mut result = Vec::new();
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        match left[i].cmp(&right[j]) {
            std::cmp::Ordering::Equal => {
                i += 1;
                j += 1;
            }
            std::cmp::Ordering::Less => {
                result.push(left[i]);
                i += 1;
            }
            std::cmp::Ordering::Greater => j += 1,
        }
    }

    result.extend_from_slice(&left[i..]);
    result
}

/// One document surviving a positional intersection, carrying the position
/// lists from both input sides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedPosting {
    /// The document present on both sides.
    pub doc_id: DocId,
    /// Positions from the left input's entry for this document.
    pub left: Vec<Position>,
    /// Positions from the right input's entry for this document.
    pub right: Vec<Position>,
}

/// Intersection of two positional posting lists by document id.
///
/// Unlike [`intersect`], matching documents keep both sides' position lists
/// so a phrase check can verify term adjacency. The `left`/`right` roles in
/// the result always follow the argument order.
pub fn intersect_positional(
    left: &PositionalPostingList,
    right: &PositionalPostingList,
) -> Vec<MergedPosting> {
    let (l, r) = (left.entries(), right.entries());
    let mut result = Vec::with_capacity(l.len().min(r.len()));
    let (mut i, mut j) = (0, 0);

    while i < l.len() && j < r.len() {
        match l[i].doc_id.cmp(&r[j].doc_id) {
            std::cmp::Ordering::Equal => {
                result.push(MergedPosting {
                    doc_id: l[i].doc_id,
                    left: l[i].positions.clone(),
                    right: r[j].positions.clone(),
                });
                i += 1;
                j += 1;
            }
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
        }
    }

    result
}

/// Phrase consistency check over an intersected pair.
///
/// A document qualifies if some left position `p` has `p + offset` among
/// the right positions, where `offset` is the distance between the two
/// terms in the query. The surviving positions are the anchors `p`, so the
/// check chains across phrases longer than two terms: the anchor stays the
/// position of the first phrase term.
pub fn check_phrase(merged: Vec<MergedPosting>, offset: Position) -> PositionalPostingList {
    let mut entries = Vec::new();

    for posting in merged {
        let anchors: Vec<Position> = posting
            .left
            .iter()
            .copied()
            .filter(|&p| posting.right.binary_search(&(p + offset)).is_ok())
            .collect();

        if !anchors.is_empty() {
            entries.push(PositionalPosting {
                doc_id: posting.doc_id,
                positions: anchors,
            });
        }
    }

    entries.into()
}

/// Free-text consistency check over an intersected pair.
///
/// Every document present on both sides qualifies; positions are not
/// needed beyond this point (ranking is by term weights, not proximity),
/// so they are dropped from the carried result.
pub fn check_free_text(merged: Vec<MergedPosting>) -> PositionalPostingList {
    merged
        .into_iter()
        .map(|posting| PositionalPosting {
            doc_id: posting.doc_id,
            positions: Vec::new(),
        })
        .collect::<Vec<_>>()
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::posting::PositionalPostingList;

    fn positional(entries: &[(DocId, &[Position])]) -> PositionalPostingList {
        let mut list = PositionalPostingList::new();
        for &(doc_id, positions) in entries {
            for &p in positions {
                list.record(doc_id, p);
            }
        }
        list
    }

    #[test]
    fn test_intersect_basic() {
        assert_eq!(intersect(&[1, 3, 5, 7], &[2, 3, 7, 9]), vec![3, 7]);
    }

    #[test]
    fn test_intersect_commutative() {
        let a = [1, 4, 6, 10, 12];
        let b = [4, 5, 6, 13];
        assert_eq!(intersect(&a, &b), intersect(&b, &a));
    }

    #[test]
    fn test_intersect_with_empty() {
        assert_eq!(intersect(&[1, 2, 3], &[]), Vec::<DocId>::new());
        assert_eq!(intersect(&[], &[1, 2, 3]), Vec::<DocId>::new());
    }

    #[test]
    fn test_union_basic() {
        assert_eq!(union(&[1, 3, 5], &[2, 3, 6]), vec![1, 2, 3, 5, 6]);
    }

    #[test]
    fn test_union_commutative_and_size_identity() {
        let a = [1, 2, 5, 9];
        let b = [2, 3, 9, 11, 14];
        let u = union(&a, &b);
        assert_eq!(u, union(&b, &a));
        // |A ∪ B| = |A| + |B| - |A ∩ B|
        assert_eq!(u.len(), a.len() + b.len() - intersect(&a, &b).len());
        assert!(u.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_union_with_empty() {
        assert_eq!(union(&[], &[4, 8]), vec![4, 8]);
        assert_eq!(union(&[4, 8], &[]), vec![4, 8]);
    }

    #[test]
    fn test_difference_basic() {
        assert_eq!(difference(&[1, 2, 3, 4], &[2, 4]), vec![1, 3]);
    }

    #[test]
    fn test_difference_is_asymmetric() {
        let a = [1, 2, 3];
        let b = [2, 3, 4];
        assert_eq!(difference(&a, &b), vec![1]);
        assert_eq!(difference(&b, &a), vec![4]);
    }

    #[test]
    fn test_difference_self_and_empty() {
        let a = [3, 6, 9];
        assert_eq!(difference(&a, &a), Vec::<DocId>::new());
        assert_eq!(difference(&a, &[]), vec![3, 6, 9]);
        assert_eq!(difference(&[], &a), Vec::<DocId>::new());
    }

    #[test]
    fn test_intersect_positional_carries_both_sides() {
        let left = positional(&[(1, &[0, 4]), (3, &[2]), (5, &[7])]);
        let right = positional(&[(3, &[3, 8]), (5, &[1])]);

        let merged = intersect_positional(&left, &right);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].doc_id, 3);
        assert_eq!(merged[0].left, vec![2]);
        assert_eq!(merged[0].right, vec![3, 8]);
        assert_eq!(merged[1].doc_id, 5);
        assert_eq!(merged[1].left, vec![7]);
        assert_eq!(merged[1].right, vec![1]);
    }

    #[test]
    fn test_intersect_positional_roles_follow_argument_order() {
        let left = positional(&[(1, &[10])]);
        let right = positional(&[(1, &[20])]);

        let merged = intersect_positional(&left, &right);
        assert_eq!(merged[0].left, vec![10]);
        assert_eq!(merged[0].right, vec![20]);

        let swapped = intersect_positional(&right, &left);
        assert_eq!(swapped[0].left, vec![20]);
        assert_eq!(swapped[0].right, vec![10]);
    }

    #[test]
    fn test_check_phrase_keeps_anchor_positions() {
        // "cat sat": cat at 1, sat at 2 -> offset 1 satisfied, anchor 1.
        let left = positional(&[(1, &[1])]);
        let right = positional(&[(1, &[2])]);
        let merged = intersect_positional(&left, &right);

        let result = check_phrase(merged, 1);
        assert_eq!(result.doc_ids(), vec![1]);
        assert_eq!(result.get(1).unwrap().positions, vec![1]);
    }

    #[test]
    fn test_check_phrase_drops_offset_mismatch() {
        // "sat cat": sat at 2, cat at 1 -> no p with p + 1 in {1}.
        let left = positional(&[(1, &[2])]);
        let right = positional(&[(1, &[1])]);
        let merged = intersect_positional(&left, &right);

        let result = check_phrase(merged, 1);
        assert!(result.is_empty());
    }

    #[test]
    fn test_check_phrase_multiple_anchors() {
        let left = positional(&[(4, &[0, 5, 9])]);
        let right = positional(&[(4, &[1, 10])]);
        let merged = intersect_positional(&left, &right);

        let result = check_phrase(merged, 1);
        assert_eq!(result.get(4).unwrap().positions, vec![0, 9]);
    }

    #[test]
    fn test_check_free_text_keeps_all_matching_documents() {
        let left = positional(&[(1, &[3]), (2, &[9])]);
        let right = positional(&[(1, &[40]), (2, &[0])]);
        let merged = intersect_positional(&left, &right);

        let result = check_free_text(merged);
        assert_eq!(result.doc_ids(), vec![1, 2]);
    }
}
