//! Aggregates seen as report rows

use contracts::domain::a003_purchase::aggregate::Purchase;
use contracts::domain::a004_shortage::aggregate::Shortage;
use contracts::domain::common::AggregateId;
use contracts::reports::ReportItem;

use crate::reports::csv_report::CsvExportable;

/// Placeholder for report columns a record has no value for
const NO_VALUE: &str = "-";

fn headers(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

impl CsvExportable for Shortage {
    fn csv_headers(&self) -> Vec<String> {
        headers(&["index", "esfCil", "treatment", "quantity", "user", "time"])
    }

    fn csv_row(&self) -> Vec<String> {
        vec![
            self.index.clone(),
            self.esf_cil.clone(),
            self.treatment.clone(),
            self.quantity.to_string(),
            self.user.clone(),
            self.time.clone(),
        ]
    }
}

impl CsvExportable for Purchase {
    fn csv_headers(&self) -> Vec<String> {
        headers(&[
            "id",
            "displayId",
            "supplier",
            "supplierInitials",
            "date",
            "itemsDescription",
            "amount",
            "status",
        ])
    }

    fn csv_row(&self) -> Vec<String> {
        vec![
            self.base.id.as_string(),
            self.display_id().to_string(),
            self.supplier().to_string(),
            self.supplier_initials.clone(),
            self.date.to_string(),
            self.items_description.clone(),
            self.amount.to_string(),
            self.status.to_string(),
        ]
    }
}

pub fn shortage_item(shortage: &Shortage) -> ReportItem {
    ReportItem {
        index: shortage.index.clone(),
        esf_cil: shortage.esf_cil.clone(),
        treatment: shortage.treatment.clone(),
        quantity: shortage.quantity,
        user: Some(shortage.user.clone()),
        time: Some(shortage.time.clone()),
    }
}

/// One group per order: supplier as the line, status beside it
pub fn purchase_item(purchase: &Purchase) -> ReportItem {
    ReportItem {
        index: purchase.display_id().to_string(),
        esf_cil: purchase.supplier().to_string(),
        treatment: purchase.status.to_string(),
        quantity: 1,
        user: Some(NO_VALUE.to_string()),
        time: Some(purchase.date.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::seed;

    #[test]
    fn test_shortage_row_matches_headers() {
        let shortage = &seed::shortages()[0];
        assert_eq!(shortage.csv_headers().len(), shortage.csv_row().len());
        assert_eq!(
            shortage.csv_row(),
            vec!["1.56", "+2.00 -1.00", "HMC", "2", "Admin User", "5 min ago"]
        );
    }

    #[test]
    fn test_purchase_row() {
        let purchase = &seed::purchases()[1];
        let row = purchase.csv_row();
        assert_eq!(row.len(), 8);
        assert_eq!(row[1], "#PO-1002");
        assert_eq!(row[4], "2023-10-25");
        assert_eq!(row[6], "2100.5");
        assert_eq!(row[7], "Pending");

        let first = &seed::purchases()[0];
        assert_eq!(first.csv_row()[6], "4500");
    }

    #[test]
    fn test_purchase_item() {
        let item = purchase_item(&seed::purchases()[0]);
        assert_eq!(item.index, "#PO-1001");
        assert_eq!(item.esf_cil, "Essilor International");
        assert_eq!(item.treatment, "Received");
        assert_eq!(item.quantity, 1);
        assert_eq!(item.user.as_deref(), Some("-"));
        assert_eq!(item.time.as_deref(), Some("2023-10-24"));
    }

    #[test]
    fn test_shortage_item() {
        let item = shortage_item(&seed::shortages()[3]);
        assert_eq!(item.index, "1.59");
        assert_eq!(item.quantity, 4);
        assert_eq!(item.time.as_deref(), Some("1 day ago"));
    }
}
