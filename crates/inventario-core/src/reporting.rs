//! # Dashboard Reporting
//!
//! Pure math for the subcategory/month sales report.
//!
//! ## Pipeline
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │  SQL (inventario-db)                                             │
//! │  GROUP BY subcategory, strftime('%m'), strftime('%Y')            │
//! │  → SubcategorySalesRow { sums and averages }                     │
//! │       │                                                          │
//! │       ▼                                                          │
//! │  subcategory_report() (THIS MODULE)                              │
//! │  ├── month number → Spanish month name                           │
//! │  ├── per-unit profit = avg sale price − avg purchase price       │
//! │  ├── total profit   = per-unit profit × units sold               │
//! │  └── monetary outputs rounded to 2 decimals                      │
//! │       │                                                          │
//! │       ▼                                                          │
//! │  SubcategoryReport (wire shape of /api/dashboard-subcategorias)  │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Row order is whatever the query produced: `ORDER BY year, month` on the
//! zero-padded strings, which sorts correctly as long as years stay four
//! digits.

use serde::{Deserialize, Serialize};

/// One GROUP BY row from the dashboard aggregation query.
///
/// Averages are `Option` because SQLite's AVG over all-NULL inputs is NULL
/// (line items may be stored without a unit price).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct SubcategorySalesRow {
    /// Product subcategory; NULL when products were created without one.
    pub subcategory: Option<String>,

    /// Calendar month extracted from the sale timestamp, zero-padded
    /// (`"01"`..`"12"`), or NULL/garbage when the timestamp was unparseable.
    pub month: Option<String>,

    /// Four-digit calendar year, same caveat as `month`.
    pub year: Option<String>,

    /// SUM of line item quantities in the group.
    pub units_sold: Option<i64>,

    /// AVG of line item unit prices in the group.
    pub avg_sale_price: Option<f64>,

    /// AVG of the matching products' purchase prices.
    pub avg_purchase_price: Option<f64>,
}

/// One output row of `GET /api/dashboard-subcategorias`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubcategoryReport {
    /// Subcategory label. The wire key is `producto` for historical
    /// reasons: the dashboard charts subcategories on its product axis.
    #[serde(rename = "producto")]
    pub subcategory: Option<String>,

    /// Spanish month name. Absent (not null) when the month number is
    /// outside the `01`..`12` table; unknown values pass through unlabeled.
    #[serde(rename = "mes", skip_serializing_if = "Option::is_none")]
    pub month: Option<String>,

    #[serde(rename = "ventas")]
    pub units_sold: i64,

    /// Average sale unit price, 2 decimals.
    #[serde(rename = "precio")]
    pub avg_sale_price: f64,

    /// Total profit = (avg sale − avg purchase) × units sold, 2 decimals.
    #[serde(rename = "ingresos")]
    pub profit: f64,
}

/// Maps a zero-padded month number to its fixed Spanish name.
pub fn month_name(month: &str) -> Option<&'static str> {
    match month {
        "01" => Some("Enero"),
        "02" => Some("Febrero"),
        "03" => Some("Marzo"),
        "04" => Some("Abril"),
        "05" => Some("Mayo"),
        "06" => Some("Junio"),
        "07" => Some("Julio"),
        "08" => Some("Agosto"),
        "09" => Some("Septiembre"),
        "10" => Some("Octubre"),
        "11" => Some("Noviembre"),
        "12" => Some("Diciembre"),
        _ => None,
    }
}

/// Rounds to 2 decimal places, half away from zero.
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Turns aggregation rows into dashboard report rows.
///
/// NULL averages (groups whose line items carry no prices) are treated as
/// 0.0 rather than failing the whole report.
pub fn subcategory_report(rows: Vec<SubcategorySalesRow>) -> Vec<SubcategoryReport> {
    rows.into_iter()
        .map(|row| {
            let units_sold = row.units_sold.unwrap_or(0);
            let avg_sale = row.avg_sale_price.unwrap_or(0.0);
            let avg_purchase = row.avg_purchase_price.unwrap_or(0.0);
            let unit_profit = avg_sale - avg_purchase;

            SubcategoryReport {
                subcategory: row.subcategory,
                month: row.month.as_deref().and_then(month_name).map(String::from),
                units_sold,
                avg_sale_price: round2(avg_sale),
                profit: round2(unit_profit * units_sold as f64),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(
        subcategory: &str,
        month: &str,
        units: i64,
        avg_sale: f64,
        avg_purchase: f64,
    ) -> SubcategorySalesRow {
        SubcategorySalesRow {
            subcategory: Some(subcategory.to_string()),
            month: Some(month.to_string()),
            year: Some("2025".to_string()),
            units_sold: Some(units),
            avg_sale_price: Some(avg_sale),
            avg_purchase_price: Some(avg_purchase),
        }
    }

    #[test]
    fn month_table_covers_the_calendar() {
        assert_eq!(month_name("01"), Some("Enero"));
        assert_eq!(month_name("09"), Some("Septiembre"));
        assert_eq!(month_name("12"), Some("Diciembre"));
        // Out-of-table values get no label.
        assert_eq!(month_name("13"), None);
        assert_eq!(month_name("1"), None);
        assert_eq!(month_name(""), None);
    }

    #[test]
    fn round2_uses_standard_rounding() {
        assert_eq!(round2(10.567), 10.57);
        assert_eq!(round2(10.564), 10.56);
        assert_eq!(round2(-3.456), -3.46);
        assert_eq!(round2(20.0), 20.0);
    }

    #[test]
    fn two_items_same_month_aggregate() {
        // Unit prices 10 and 20, purchase price 5, quantities 1 and 1:
        // SQL hands us the already-grouped row (sum=2, avgs 15 and 5).
        let report = subcategory_report(vec![row("Camisetas", "03", 2, 15.0, 5.0)]);

        assert_eq!(report.len(), 1);
        let entry = &report[0];
        assert_eq!(entry.units_sold, 2);
        assert_eq!(entry.avg_sale_price, 15.0);
        assert_eq!(entry.profit, 20.0); // (15 - 5) * 2
        assert_eq!(entry.month.as_deref(), Some("Marzo"));
    }

    #[test]
    fn unknown_month_serializes_without_mes_key() {
        let mut bad = row("Gorras", "xx", 1, 10.0, 4.0);
        bad.month = Some("xx".to_string());

        let report = subcategory_report(vec![bad]);
        assert_eq!(report[0].month, None);

        let json = serde_json::to_value(&report[0]).unwrap();
        assert!(json.get("mes").is_none());
        assert_eq!(json["producto"], "Gorras");
    }

    #[test]
    fn null_averages_fall_back_to_zero() {
        let report = subcategory_report(vec![SubcategorySalesRow {
            subcategory: None,
            month: Some("05".to_string()),
            year: Some("2025".to_string()),
            units_sold: Some(3),
            avg_sale_price: None,
            avg_purchase_price: None,
        }]);

        assert_eq!(report[0].avg_sale_price, 0.0);
        assert_eq!(report[0].profit, 0.0);
        assert_eq!(report[0].subcategory, None);
    }

    #[test]
    fn profit_is_rounded_after_multiplication() {
        // avg sale 10.333, avg purchase 5.0, 3 units:
        // unit profit 5.333 → total 15.999 → 16.00
        let report = subcategory_report(vec![row("Medias", "07", 3, 10.333, 5.0)]);
        assert_eq!(report[0].profit, 16.0);
        assert_eq!(report[0].avg_sale_price, 10.33);
    }
}
