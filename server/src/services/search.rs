//! Sidebar chemical search with similarity ranking.
//!
//! DESIGN
//! ======
//! Matching happens in SQL (substring on name and alphabetical name, exact on
//! formula); ranking happens here. The ranking key is a tuple compared
//! lexicographically, highest first:
//!
//! 1. length of the longest common substring of the lowercased query and name;
//! 2. that length minus the offset where it starts in the name, so names that
//!    begin with the query beat names that merely contain it;
//! 3. the Ratcliff/Obershelp similarity of the raw strings, so "acetone"
//!    outranks "acetone, spectrophotometric grade".
//!
//! With no query there is nothing to rank against, so results come back by
//! stock on hand (descending) and then name.
//!
//! TRADE-OFFS
//! ==========
//! The similarity pass is quadratic in string length. Chemical names are
//! short and the result set is a single inventory's worth, so this stays
//! well under a millisecond in practice.

use std::cmp::Ordering;

use records::SearchHit;
use sqlx::{PgPool, Row};

use super::pubchem::SynonymSource;

/// Synonyms shorter than this are element symbols or abbreviations that
/// match far too much of the catalogue.
const MIN_SYNONYM_CHARS: usize = 4;

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Room and manufacturer restrictions from the sidebar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilters {
    /// Location id; only chemicals with a live bottle in this room match.
    pub room: Option<i32>,
    /// Manufacturer ids; a chemical matches if any live bottle comes from one of them.
    pub manufacturers: Vec<i32>,
}

impl SearchFilters {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.room.is_some() || !self.manufacturers.is_empty()
    }
}

// =============================================================================
// QUERY PREPARATION
// =============================================================================

/// Strip path separators and surrounding whitespace from the raw query.
pub(crate) fn clean_query(raw: &str) -> String {
    raw.replace('/', "").trim().to_owned()
}

/// Parse a comma-separated id list, skipping blanks and junk.
pub(crate) fn parse_id_list(raw: &str) -> Vec<i32> {
    raw.split(',').filter_map(|part| part.trim().parse().ok()).collect()
}

/// Build the term list: the query first, then long-enough synonyms, without
/// case-insensitive duplicates.
pub(crate) fn search_terms(query: &str, synonyms: Vec<String>) -> Vec<String> {
    if query.is_empty() {
        return Vec::new();
    }
    let mut terms = vec![query.to_owned()];
    let mut seen = vec![query.to_lowercase()];
    for synonym in synonyms {
        let synonym = synonym.trim();
        if synonym.chars().count() < MIN_SYNONYM_CHARS {
            continue;
        }
        let folded = synonym.to_lowercase();
        if seen.contains(&folded) {
            continue;
        }
        seen.push(folded);
        terms.push(synonym.to_owned());
    }
    terms
}

// =============================================================================
// SIMILARITY
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Block {
    pub a: usize,
    pub b: usize,
    pub size: usize,
}

/// Longest common run of `a[alo..ahi]` and `b[blo..bhi]`.
///
/// Ties go to the earliest start in `a`, then the earliest in `b`.
fn longest_match_in(a: &[char], b: &[char], alo: usize, ahi: usize, blo: usize, bhi: usize) -> Block {
    let mut best = Block { a: alo, b: blo, size: 0 };
    let mut prev = vec![0usize; bhi - blo + 1];
    for i in alo..ahi {
        let mut cur = vec![0usize; bhi - blo + 1];
        for j in blo..bhi {
            if a[i] == b[j] {
                let k = prev[j - blo] + 1;
                cur[j - blo + 1] = k;
                if k > best.size {
                    best = Block { a: i + 1 - k, b: j + 1 - k, size: k };
                }
            }
        }
        prev = cur;
    }
    best
}

pub(crate) fn longest_match(a: &[char], b: &[char]) -> Block {
    longest_match_in(a, b, 0, a.len(), 0, b.len())
}

/// Total size of the recursive matching blocks (Ratcliff/Obershelp).
fn matched_chars(a: &[char], b: &[char]) -> usize {
    let mut total = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];
    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let block = longest_match_in(a, b, alo, ahi, blo, bhi);
        if block.size == 0 {
            continue;
        }
        total += block.size;
        if alo < block.a && blo < block.b {
            pending.push((alo, block.a, blo, block.b));
        }
        if block.a + block.size < ahi && block.b + block.size < bhi {
            pending.push((block.a + block.size, ahi, block.b + block.size, bhi));
        }
    }
    total
}

/// Ratcliff/Obershelp ratio in `[0, 1]`: twice the matched characters over the total length.
pub(crate) fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let score = 2.0 * matched_chars(&a, &b) as f64 / total as f64;
    score
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Similarity {
    pub size: usize,
    pub anchored: i64,
    pub ratio: f64,
}

impl Similarity {
    fn compare(&self, other: &Self) -> Ordering {
        self.size
            .cmp(&other.size)
            .then(self.anchored.cmp(&other.anchored))
            .then(self.ratio.total_cmp(&other.ratio))
    }
}

pub(crate) fn similarity(query: &str, entry: &str) -> Similarity {
    let q: Vec<char> = query.to_lowercase().chars().collect();
    let e: Vec<char> = entry.to_lowercase().chars().collect();
    let block = longest_match(&q, &e);
    let size = i64::try_from(block.size).unwrap_or(i64::MAX);
    let start = i64::try_from(block.b).unwrap_or(i64::MAX);
    Similarity { size: block.size, anchored: size - start, ratio: ratio(query, entry) }
}

/// Order hits for display. See the module docs for the ranking rules.
pub(crate) fn rank(query: &str, hits: &mut [SearchHit]) {
    if query.is_empty() {
        hits.sort_by(|a, b| b.quantity.cmp(&a.quantity).then_with(|| a.chemical_name.cmp(&b.chemical_name)));
        return;
    }
    let mut keyed: Vec<(Similarity, SearchHit)> =
        hits.iter().map(|h| (similarity(query, &h.chemical_name), h.clone())).collect();
    keyed.sort_by(|(a, _), (b, _)| b.compare(a));
    for (slot, (_, hit)) in hits.iter_mut().zip(keyed) {
        *slot = hit;
    }
}

// =============================================================================
// SEARCH
// =============================================================================

/// Run a sidebar search. When `synonyms` is given, PubChem synonyms for the
/// query widen the match; a lookup failure falls back to the plain query.
pub async fn search_chemicals(
    pool: &PgPool,
    synonyms: Option<&dyn SynonymSource>,
    raw_query: &str,
    filters: &SearchFilters,
) -> Result<Vec<SearchHit>, SearchError> {
    let query = clean_query(raw_query);

    let extra = match synonyms {
        Some(source) if !query.is_empty() => match source.synonyms(&query).await {
            Ok(found) => found,
            Err(e) => {
                tracing::warn!(error = %e, %query, "synonym lookup failed; searching without synonyms");
                Vec::new()
            }
        },
        _ => Vec::new(),
    };
    let terms = search_terms(&query, extra);

    let rows = sqlx::query(
        r"SELECT c.id, c.name, c.formula,
                 COUNT(i.id) FILTER (
                     WHERE NOT i.is_dead
                       AND ($2::int IS NULL OR s.location_id = $2)
                       AND (cardinality($3::int[]) = 0 OR cm.manufacturer_id = ANY($3))
                 ) AS quantity
          FROM chemicals c
          LEFT JOIN chemical_manufacturers cm ON cm.chemical_id = c.id
          LEFT JOIN inventory i ON i.chemical_manufacturer_id = cm.id
          LEFT JOIN sub_locations s ON s.id = i.sub_location_id
          WHERE cardinality($1::text[]) = 0
             OR EXISTS (
                 SELECT 1 FROM unnest($1::text[]) AS t(term)
                 WHERE strpos(lower(c.name), lower(t.term)) > 0
                    OR strpos(lower(c.alphabetical_name), lower(t.term)) > 0
                    OR c.formula = t.term)
          GROUP BY c.id, c.name, c.formula",
    )
    .bind(&terms)
    .bind(filters.room)
    .bind(&filters.manufacturers)
    .fetch_all(pool)
    .await?;

    let mut hits: Vec<SearchHit> = rows
        .into_iter()
        .map(|r| SearchHit {
            id: r.get("id"),
            chemical_name: r.get("name"),
            formula: r.get("formula"),
            quantity: r.get("quantity"),
        })
        .collect();
    if filters.is_active() {
        hits.retain(|h| h.quantity > 0);
    }

    rank(&query, &mut hits);
    tracing::debug!(%query, terms = terms.len(), results = hits.len(), "search complete");
    Ok(hits)
}

#[cfg(test)]
#[path = "search_test.rs"]
mod tests;
