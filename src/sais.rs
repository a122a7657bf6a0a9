// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! SA-IS: Suffix Array by Induced Sorting
//!
//! Linear-time O(n) suffix array construction. This is the construction
//! routine the rest of the crate treats as a black box: give it the corpus
//! bytes (sentinel included), get back the sorted permutation of positions.
//!
//! # Algorithm Overview
//!
//! ```text
//! Input: "banana$"            ($ = sentinel, value 0)
//!
//! Step 1: Classify suffixes
//! ┌───┬───┬───┬───┬───┬───┬───┐
//! │ b │ a │ n │ a │ n │ a │ $ │
//! ├───┼───┼───┼───┼───┼───┼───┤
//! │ L │ S │ L │ S │ L │ L │ S │   (S = smaller than next, L = larger)
//! └───┴───┴───┴───┴───┴───┴───┘
//!
//! Step 2: LMS (leftmost S-type) positions: 1, 3, 6
//!
//! Step 3: Induced sort from the LMS seeds
//!         - LMS suffixes at bucket tails
//!         - L-type positions, left to right
//!         - S-type positions, right to left
//!
//! Step 4: Name LMS substrings; recurse if names are not unique
//!
//! Step 5: Induce again from the correctly ordered LMS suffixes
//!
//! Output: [6, 5, 3, 1, 0, 4, 2]
//! ```
//!
//! One generic implementation serves both the byte alphabet of the corpus
//! and the integer alphabet of the reduced problem.
//!
//! # References
//!
//! - Nong, Zhang, Chan (2009): "Linear Suffix Array Construction by Almost Pure Induced-Sorting"
//! - <https://doi.org/10.1109/DCC.2009.42>

/// Suffix type classification.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum SuffixType {
    /// S-type: suffix is lexicographically smaller than the next suffix
    S,
    /// L-type: suffix is lexicographically larger than the next suffix
    L,
}

/// Marker for an unfilled slot in the working array.
const EMPTY: usize = usize::MAX;

/// Alphabet symbol: anything with a dense bucket number.
trait Symbol: Copy + Ord {
    fn bucket(self) -> usize;
}

impl Symbol for u8 {
    #[inline]
    fn bucket(self) -> usize {
        self as usize
    }
}

impl Symbol for usize {
    #[inline]
    fn bucket(self) -> usize {
        self
    }
}

/// Build the suffix array of `text` in O(n) time.
///
/// `text` must end with a sentinel that is unique and strictly smaller than
/// every other byte (see [`crate::corpus::SENTINEL`]). The returned vector is
/// a permutation of `0..text.len()`; its first entry is the sentinel position.
pub fn build_suffix_array(text: &[u8]) -> Vec<usize> {
    sais(text, 256)
}

fn sais<T: Symbol>(text: &[T], alphabet_size: usize) -> Vec<usize> {
    let n = text.len();
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![0];
    }

    let types = classify_suffixes(text);
    let lms_positions: Vec<usize> = (1..n).filter(|&i| is_lms(&types, i)).collect();

    if lms_positions.is_empty() {
        // Only reachable without a proper sentinel: sort directly
        let mut sa: Vec<usize> = (0..n).collect();
        sa.sort_by(|&a, &b| text[a..].cmp(&text[b..]));
        return sa;
    }

    let bucket_sizes = compute_bucket_sizes(text, alphabet_size);
    let mut sa = vec![EMPTY; n];

    // First pass: LMS in text order, enough to order the LMS substrings
    induce(text, &types, &bucket_sizes, &lms_positions, &mut sa);

    // Name LMS substrings in sorted order
    let mut name = 0usize;
    let mut prev_pos: Option<usize> = None;
    let mut lms_names = vec![EMPTY; n];

    for &pos in &sa {
        if pos == EMPTY || !is_lms(&types, pos) {
            continue;
        }
        if let Some(prev) = prev_pos {
            if !lms_substrings_equal(text, &types, prev, pos) {
                name += 1;
            }
        }
        lms_names[pos] = name;
        prev_pos = Some(pos);
    }

    let unique_count = name + 1;
    let reduced: Vec<usize> = lms_positions.iter().map(|&pos| lms_names[pos]).collect();

    let sorted_lms_indices = if unique_count < lms_positions.len() {
        sais(&reduced, unique_count)
    } else {
        // All unique: the names themselves give the order
        let mut order: Vec<usize> = (0..reduced.len()).collect();
        order.sort_by_key(|&i| reduced[i]);
        order
    };

    let sorted_lms: Vec<usize> = sorted_lms_indices
        .iter()
        .map(|&i| lms_positions[i])
        .collect();

    // Second pass: LMS in suffix order gives the final array
    induce(text, &types, &bucket_sizes, &sorted_lms, &mut sa);

    sa
}

/// Seed LMS suffixes at bucket tails, then induce L-type and S-type positions.
fn induce<T: Symbol>(
    text: &[T],
    types: &[SuffixType],
    bucket_sizes: &[usize],
    lms: &[usize],
    sa: &mut [usize],
) {
    let n = text.len();
    sa.fill(EMPTY);

    let mut tails = compute_bucket_tails(bucket_sizes);
    for &pos in lms.iter().rev() {
        let c = text[pos].bucket();
        tails[c] -= 1;
        sa[tails[c]] = pos;
    }

    let mut heads = compute_bucket_heads(bucket_sizes);
    for i in 0..n {
        let pos = sa[i];
        if pos == EMPTY || pos == 0 {
            continue;
        }
        let j = pos - 1;
        if types[j] == SuffixType::L {
            let c = text[j].bucket();
            sa[heads[c]] = j;
            heads[c] += 1;
        }
    }

    let mut tails = compute_bucket_tails(bucket_sizes);
    for i in (0..n).rev() {
        let pos = sa[i];
        if pos == EMPTY || pos == 0 {
            continue;
        }
        let j = pos - 1;
        if types[j] == SuffixType::S {
            let c = text[j].bucket();
            tails[c] -= 1;
            sa[tails[c]] = j;
        }
    }
}

/// Classify each suffix as S-type or L-type. The last position is S-type.
fn classify_suffixes<T: Symbol>(text: &[T]) -> Vec<SuffixType> {
    let n = text.len();
    let mut types = vec![SuffixType::S; n];

    for i in (0..n - 1).rev() {
        types[i] = if text[i] > text[i + 1] {
            SuffixType::L
        } else if text[i] < text[i + 1] {
            SuffixType::S
        } else {
            types[i + 1]
        };
    }

    types
}

#[inline]
fn is_lms(types: &[SuffixType], i: usize) -> bool {
    i > 0 && types[i] == SuffixType::S && types[i - 1] == SuffixType::L
}

fn compute_bucket_sizes<T: Symbol>(text: &[T], alphabet_size: usize) -> Vec<usize> {
    let mut sizes = vec![0; alphabet_size];
    for &c in text {
        sizes[c.bucket()] += 1;
    }
    sizes
}

fn compute_bucket_heads(sizes: &[usize]) -> Vec<usize> {
    let mut heads = Vec::with_capacity(sizes.len());
    let mut sum = 0;
    for &size in sizes {
        heads.push(sum);
        sum += size;
    }
    heads
}

fn compute_bucket_tails(sizes: &[usize]) -> Vec<usize> {
    let mut tails = Vec::with_capacity(sizes.len());
    let mut sum = 0;
    for &size in sizes {
        sum += size;
        tails.push(sum);
    }
    tails
}

/// Two LMS substrings are equal when symbols and types match up to and
/// including the next LMS position of both.
fn lms_substrings_equal<T: Symbol>(text: &[T], types: &[SuffixType], i: usize, j: usize) -> bool {
    if i == j {
        return true;
    }

    let n = text.len();
    let mut k = 0;

    loop {
        let pi = i + k;
        let pj = j + k;

        if pi >= n || pj >= n {
            return pi >= n && pj >= n;
        }
        if text[pi] != text[pj] || types[pi] != types[pj] {
            return false;
        }
        if k > 0 {
            let lms_i = is_lms(types, pi);
            let lms_j = is_lms(types, pj);
            if lms_i && lms_j {
                return true;
            }
            if lms_i != lms_j {
                return false;
            }
        }

        k += 1;
    }
}
