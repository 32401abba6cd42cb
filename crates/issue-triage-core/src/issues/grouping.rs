#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Duplicate grouping
//!
//! Builds groups of issues whose titles share specific keywords:
//!
//! 1. Index every issue's keywords (keyword → issue numbers).
//! 2. Inside each keyword bucket of 2..=14 issues, compare every unordered
//!    pair once and record accepted matches under the higher-ranked issue.
//! 3. Walk candidate primaries from the highest score down and greedily claim
//!    up to five unclaimed related issues each.
//!
//! The walk is order-sensitive: rank is the position in a stable descending
//! sort by score, so ties keep input order. An issue is claimed by at most
//! one group.

use std::collections::{BTreeSet, HashMap, HashSet};

use itertools::Itertools;

use super::{
    keywords::{extract_keywords, KeywordIndex, KeywordSet},
    similarity::similarity,
    types::{DuplicateGroup, GroupMember, ScoredIssue},
};

/// Keyword buckets smaller than this cannot produce a pair.
pub const MIN_BUCKET_SIZE: usize = 2;

/// Keyword buckets larger than this are too generic to carry signal.
pub const MAX_BUCKET_SIZE: usize = 14;

/// Maximum number of issues in one group, primary included.
pub const MAX_GROUP_SIZE: usize = 6;

/// Matches recorded for one candidate primary.
#[derive(Debug, Clone, Default)]
struct Candidacy {
    related: BTreeSet<u64>,
    shared: BTreeSet<String>,
}

/// Per-run lookup tables over the scored issues.
struct Catalog<'a> {
    issues: HashMap<u64, &'a ScoredIssue>,
    keywords: HashMap<u64, KeywordSet>,
    rank: HashMap<u64, usize>,
}

impl<'a> Catalog<'a> {
    fn build(scored: &'a [ScoredIssue]) -> Self {
        let ordered: Vec<&ScoredIssue> = scored
            .iter()
            .sorted_by(|a, b| b.score.total_cmp(&a.score))
            .collect();

        let mut issues = HashMap::with_capacity(ordered.len());
        let mut rank = HashMap::with_capacity(ordered.len());
        for (position, issue) in ordered.into_iter().enumerate() {
            if issues.contains_key(&issue.number()) {
                tracing::warn!(
                    number = issue.number(),
                    "Duplicate issue number in input; keeping the higher-ranked record"
                );
                continue;
            }
            issues.insert(issue.number(), issue);
            rank.insert(issue.number(), position);
        }

        let keywords = issues
            .iter()
            .map(|(number, issue)| (*number, extract_keywords(issue.title())))
            .collect();

        Self {
            issues,
            keywords,
            rank,
        }
    }

    fn rank_of(&self, number: u64) -> usize {
        self.rank.get(&number).copied().unwrap_or(usize::MAX)
    }

    fn keywords_of(&self, number: u64) -> Option<&KeywordSet> {
        self.keywords.get(&number)
    }

    fn index(&self) -> KeywordIndex {
        let mut index = KeywordIndex::new();
        self.keywords
            .iter()
            .for_each(|(number, keywords)| index.insert(*number, keywords));
        index
    }
}

/// Find groups of potentially duplicate issues.
///
/// Issues may be passed in any order; ranking is derived from their scores.
/// Groups are returned in the order their primaries were processed, i.e.
/// by descending primary score.
#[must_use]
pub fn find_duplicate_groups(scored: &[ScoredIssue]) -> Vec<DuplicateGroup> {
    let catalog = Catalog::build(scored);
    let index = catalog.index();
    let candidates = collect_candidates(&catalog, &index);

    tracing::debug!(
        issues = catalog.issues.len(),
        keywords = index.len(),
        candidates = candidates.len(),
        "Built keyword index"
    );

    build_groups(&catalog, &candidates)
}

fn collect_candidates(catalog: &Catalog<'_>, index: &KeywordIndex) -> HashMap<u64, Candidacy> {
    let mut candidates: HashMap<u64, Candidacy> = HashMap::new();
    let mut seen: HashSet<(u64, u64)> = HashSet::new();

    for (_, bucket) in index.buckets_within(MIN_BUCKET_SIZE..=MAX_BUCKET_SIZE) {
        for (&a, &b) in bucket.iter().tuple_combinations() {
            if !seen.insert((a, b)) {
                continue;
            }
            let (Some(keywords_a), Some(keywords_b)) =
                (catalog.keywords_of(a), catalog.keywords_of(b))
            else {
                continue;
            };

            let matched = similarity(keywords_a, keywords_b);
            if !matched.is_match() {
                continue;
            }

            let (primary, other) = if catalog.rank_of(a) <= catalog.rank_of(b) {
                (a, b)
            } else {
                (b, a)
            };
            let candidacy = candidates.entry(primary).or_default();
            candidacy.related.insert(other);
            candidacy.shared.extend(matched.shared);
        }
    }

    candidates
}

fn build_groups(catalog: &Catalog<'_>, candidates: &HashMap<u64, Candidacy>) -> Vec<DuplicateGroup> {
    let mut consumed: HashSet<u64> = HashSet::new();
    let mut groups = Vec::new();

    let primaries = candidates
        .keys()
        .copied()
        .sorted_by_key(|number| catalog.rank_of(*number));

    for primary in primaries {
        if consumed.contains(&primary) {
            continue;
        }
        let Some(candidacy) = candidates.get(&primary) else {
            continue;
        };

        let related: Vec<u64> = candidacy
            .related
            .iter()
            .copied()
            .filter(|number| !consumed.contains(number))
            .sorted_by_key(|number| catalog.rank_of(*number))
            .take(MAX_GROUP_SIZE.saturating_sub(1))
            .collect();
        if related.is_empty() {
            continue;
        }

        let shared_keywords = common_keywords(catalog, primary, &related)
            .filter(|common| !common.is_empty())
            .unwrap_or_else(|| candidacy.shared.clone());

        let members = std::iter::once(primary)
            .chain(related.iter().copied())
            .filter_map(|number| catalog.issues.get(&number))
            .map(|issue| GroupMember::from_scored(issue))
            .collect();

        consumed.insert(primary);
        consumed.extend(related.iter().copied());

        groups.push(DuplicateGroup {
            primary,
            related,
            shared_keywords,
            members,
        });
    }

    groups
}

/// Keywords present in the primary's title and in every related title.
fn common_keywords(catalog: &Catalog<'_>, primary: u64, related: &[u64]) -> Option<KeywordSet> {
    let start = catalog.keywords_of(primary)?.clone();
    Some(related.iter().fold(start, |common, number| {
        catalog.keywords_of(*number).map_or_else(BTreeSet::new, |keywords| {
            common.intersection(keywords).cloned().collect()
        })
    }))
}
