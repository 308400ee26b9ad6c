//! Property-Based Tests for SeatMatrix
//!
//! These tests verify:
//! - Fallback resolution invariants (chain starts with the category, ends in GM)
//! - Filter invariants over randomly generated seat matrices
//! - Projection shape and 1-based re-indexing
//! - Resolution and filtering return the same answer on repeated calls

use proptest::prelude::*;
use seatmatrix::dataset::CellValue;
use seatmatrix::logic::fallback::GENERAL_MERIT;
use seatmatrix::logic::filter::{all_colleges, filter, projection_columns, QueryOutcome};
use seatmatrix::{FallbackTable, SeatMatrix};

// =============================================================================
// Fallback Resolution Properties
// =============================================================================

fn builtin() -> FallbackTable {
    FallbackTable::builtin().unwrap()
}

/// Strategy for picking one of the built-in category codes
fn known_category_strategy() -> impl Strategy<Value = String> {
    let codes: Vec<String> = builtin().categories().iter().map(|c| c.to_string()).collect();
    prop::sample::select(codes)
}

proptest! {
    /// Known categories resolve to a chain that starts with themselves and ends in GM
    #[test]
    fn known_category_chain_shape(category in known_category_strategy()) {
        let chain = builtin().resolve(&category);
        prop_assert!(!chain.is_empty());
        prop_assert_eq!(&chain[0], &category);
        prop_assert_eq!(chain.last().map(String::as_str), Some(GENERAL_MERIT));
    }

    /// Unknown categories resolve to themselves alone
    #[test]
    fn unknown_category_resolves_to_itself(category in "[a-z0-9]{1,6}") {
        let table = builtin();
        prop_assume!(!table.contains(&category));
        prop_assert_eq!(table.resolve(&category), vec![category.clone()]);
    }

    /// Chains never repeat a category
    #[test]
    fn chains_have_no_duplicates(category in known_category_strategy()) {
        let chain = builtin().resolve(&category);
        let mut deduped = chain.clone();
        deduped.sort();
        deduped.dedup();
        prop_assert_eq!(deduped.len(), chain.len());
    }

    /// Resolving the same code twice gives the same chain
    #[test]
    fn resolve_is_deterministic(
        category in prop_oneof![known_category_strategy(), any::<String>()],
    ) {
        let table = builtin();
        prop_assert_eq!(table.resolve(&category), table.resolve(&category));
    }
}

// =============================================================================
// Filter Properties
// =============================================================================

const COLLEGES: [&str; 3] = ["ABC College", "PQR College", "XYZ College"];
const CATEGORIES: [&str; 3] = ["1R", "1G", "GM"];

/// (college index, 1R, 1G, GM)
type RowSeed = (usize, i64, i64, i64);

fn row_strategy() -> impl Strategy<Value = RowSeed> {
    (0usize..COLLEGES.len(), 0i64..3, 0i64..3, 0i64..3)
}

fn build_matrix(rows: &[RowSeed]) -> SeatMatrix {
    let headers = [
        "College Code", "Place", "College Name", "Branch Name", "Branch code", "1R", "1G", "GM",
        "SNQ", "Total",
    ];
    let records = rows
        .iter()
        .enumerate()
        .map(|(i, &(college, r, g, m))| {
            vec![
                CellValue::Text(format!("E{:03}", college)),
                CellValue::Text("Bangalore".to_string()),
                CellValue::Text(COLLEGES[college].to_string()),
                CellValue::Text(format!("Branch {}", i)),
                CellValue::Text(format!("B{}", i)),
                CellValue::Int(r),
                CellValue::Int(g),
                CellValue::Int(m),
                CellValue::Int(0),
                CellValue::Int(r + g + m),
            ]
        })
        .collect();
    SeatMatrix::from_records(&headers, records).unwrap()
}

fn seats(seed: &RowSeed, category: &str) -> i64 {
    match category {
        "1R" => seed.1,
        "1G" => seed.2,
        _ => seed.3,
    }
}

proptest! {
    /// The filter keeps exactly the rows of the college with seats in the chain
    #[test]
    fn filter_matches_reference(
        rows in prop::collection::vec(row_strategy(), 0..24),
        college in 0usize..COLLEGES.len(),
        category in prop::sample::select(CATEGORIES.to_vec()),
    ) {
        let matrix = build_matrix(&rows);
        let chain = builtin().resolve(category);
        let expected = rows
            .iter()
            .filter(|seed| seed.0 == college && chain.iter().any(|c| seats(seed, c) != 0))
            .count();

        match filter(&matrix, COLLEGES[college], &chain).unwrap() {
            QueryOutcome::NoData => prop_assert_eq!(expected, 0),
            QueryOutcome::Rows(table) => {
                prop_assert_eq!(table.len(), expected);
                prop_assert_eq!(&table.columns, &projection_columns(&chain));
                let indices: Vec<usize> = table.rows.iter().map(|r| r.index).collect();
                prop_assert_eq!(indices, (1..=expected).collect::<Vec<_>>());
            }
        }
    }

    /// A college that is not in the dataset never matches
    #[test]
    fn unknown_college_is_no_data(
        rows in prop::collection::vec(row_strategy(), 0..24),
        category in prop::sample::select(CATEGORIES.to_vec()),
    ) {
        let matrix = build_matrix(&rows);
        let chain = builtin().resolve(category);
        let outcome = filter(&matrix, "Nowhere Institute", &chain).unwrap();
        prop_assert!(outcome.is_no_data());
    }

    /// Filtering the same matrix twice gives equal outcomes
    #[test]
    fn filter_is_deterministic(
        rows in prop::collection::vec(row_strategy(), 0..24),
        college in 0usize..COLLEGES.len(),
        category in prop::sample::select(CATEGORIES.to_vec()),
    ) {
        let matrix = build_matrix(&rows);
        let chain = builtin().resolve(category);
        let first = filter(&matrix, COLLEGES[college], &chain).unwrap();
        let second = filter(&matrix, COLLEGES[college], &chain).unwrap();
        prop_assert_eq!(first, second);
    }

    /// The overview keeps every row regardless of seat counts
    #[test]
    fn overview_keeps_every_row(
        rows in prop::collection::vec(row_strategy(), 0..24),
        category in prop::sample::select(CATEGORIES.to_vec()),
    ) {
        let matrix = build_matrix(&rows);
        let table = all_colleges(&matrix, &builtin().resolve(category)).unwrap();
        prop_assert_eq!(table.len(), rows.len());
        prop_assert_eq!(table.columns[0].as_str(), "College Name");
    }
}
