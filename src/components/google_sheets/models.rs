use serde::{Deserialize, Serialize};

/// One CRM record, appended as a spreadsheet row.
///
/// Column order is fixed: Date, Time, Title, Email, Summary, Status,
/// NextStep. Status and next step are set by the writer, not derived from
/// the summary text.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CrmRow {
    pub date: String,
    pub time: String,
    pub title: String,
    pub email: String,
    pub summary: String,
    pub status: String,
    pub next_step: String,
}

impl CrmRow {
    /// Cells in spreadsheet column order
    pub fn to_cells(&self) -> Vec<String> {
        vec![
            self.date.clone(),
            self.time.clone(),
            self.title.clone(),
            self.email.clone(),
            self.summary.clone(),
            self.status.clone(),
            self.next_step.clone(),
        ]
    }
}

/// Request body for the values-append call
#[derive(Debug, Serialize)]
pub(super) struct ValueRange {
    pub values: Vec<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_cell_order() {
        let row = CrmRow {
            date: "2026-02-08".to_string(),
            time: "14:00".to_string(),
            title: "Investor pitch".to_string(),
            email: "jane@fund.vc".to_string(),
            summary: "Discussed the seed round.".to_string(),
            status: "New".to_string(),
            next_step: "Pending GPT parse".to_string(),
        };

        let cells = row.to_cells();
        assert_eq!(cells.len(), 7);
        assert_eq!(cells[0], "2026-02-08");
        assert_eq!(cells[3], "jane@fund.vc");
        assert_eq!(cells[5], "New");
        assert_eq!(cells[6], "Pending GPT parse");
    }
}
