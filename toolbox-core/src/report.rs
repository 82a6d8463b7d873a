//! Plain-text templates for routine site correspondence.

use chrono::NaiveDate;

/// Notice-of-delay email body for a held-up item.
pub fn delay_notice(item: &str) -> String {
    format!(
        "Subject: Notice of Delay - {item}\n\n\
         Dear Manager,\n\
         We regret to inform you of a delay regarding {item} due to supply chain issues.\n\
         We will update the schedule shortly."
    )
}

/// Inspection-request email body for a completed installation.
pub fn inspection_request(item: &str) -> String {
    format!(
        "Subject: Inspection Request - {item}\n\n\
         Dear Manager,\n\
         Installation of {item} is complete.\n\
         Please schedule an inspection at your earliest convenience."
    )
}

/// Date-stamped daily work report.
pub fn daily_report(date: NaiveDate, work: &str) -> String {
    format!(
        "Daily Report - {}\n\
         ==============================\n\
         Today's Work: {work}\n",
        date.format("%Y-%m-%d")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_notice_names_the_item() {
        let body = delay_notice("Piping Material");
        assert!(body.starts_with("Subject: Notice of Delay - Piping Material"));
        assert!(body.contains("delay regarding Piping Material"));
    }

    #[test]
    fn inspection_request_names_the_item() {
        let body = inspection_request("Cable Tray");
        assert!(body.starts_with("Subject: Inspection Request - Cable Tray"));
        assert!(body.contains("Installation of Cable Tray is complete"));
    }

    #[test]
    fn daily_report_is_date_stamped() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 28).unwrap();
        let body = daily_report(date, "Concrete Pouring at Zone A");
        assert!(body.contains("2026-08-28"));
        assert!(body.contains("Concrete Pouring at Zone A"));
    }
}
