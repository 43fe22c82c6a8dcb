//! FILENAME: tests/common/mod.rs
//! Test harness and fixtures for grid widget integration tests.

use grid_core::Record;
use grid_widget::{GridOptions, GridState, RenderRow, RenderRowKind};
use group_engine::{AggregateKind, AggregateSpec, GroupDescriptor};

/// Sales dataset shared across the integration tests.
pub struct SalesFixture;

impl SalesFixture {
    pub fn data() -> Vec<(&'static str, &'static str, &'static str, f64, f64)> {
        vec![
            ("North", "Widget", "Q1", 10000.0, 100.0),
            ("North", "Widget", "Q2", 12000.0, 120.0),
            ("North", "Gadget", "Q1", 8000.0, 80.0),
            ("North", "Gadget", "Q2", 9000.0, 90.0),
            ("South", "Widget", "Q1", 15000.0, 150.0),
            ("South", "Widget", "Q2", 14000.0, 140.0),
            ("South", "Gadget", "Q1", 11000.0, 110.0),
            ("South", "Gadget", "Q2", 13000.0, 130.0),
            ("East", "Widget", "Q1", 9000.0, 90.0),
            ("East", "Widget", "Q2", 11000.0, 110.0),
            ("East", "Gadget", "Q1", 7000.0, 70.0),
            ("East", "Gadget", "Q2", 8500.0, 85.0),
        ]
    }

    pub fn rows() -> Vec<Record> {
        Self::data()
            .into_iter()
            .map(|(region, product, quarter, sales, quantity)| {
                Record::new()
                    .with_field("region", region)
                    .with_field("product", product)
                    .with_field("quarter", quarter)
                    .with_field("sales", sales)
                    .with_field("quantity", quantity)
            })
            .collect()
    }
}

/// Grid state over the sales fixture, grouped by region with sum/avg
/// aggregates on sales.
pub fn create_sales_state() -> GridState {
    let mut options = GridOptions::default();
    options.group_by = vec![GroupDescriptor::ascending("region")];
    options.aggregates = AggregateSpec::new()
        .with_field("sales", [AggregateKind::Sum, AggregateKind::Avg])
        .with_field("quantity", [AggregateKind::Sum]);
    GridState::with_rows(SalesFixture::rows(), options)
}

/// Shorthand for asserting the kind sequence of a rendered page.
pub fn assert_kinds(rows: &[RenderRow], expected: &[RenderRowKind]) {
    let kinds: Vec<RenderRowKind> = rows.iter().map(|r| r.kind).collect();
    assert_eq!(kinds, expected, "render row kinds mismatch");
}

/// Looks up an aggregate on a header or footer row, panicking with the
/// row key on a miss.
pub fn aggregate_of(row: &RenderRow, key: &str) -> f64 {
    let aggregates = row
        .aggregates
        .as_ref()
        .unwrap_or_else(|| panic!("row {} has no aggregates", row.key));
    *aggregates
        .get(key)
        .unwrap_or_else(|| panic!("row {} has no aggregate {}", row.key, key))
}
