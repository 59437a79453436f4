//! CSV export (opens directly in Excel: UTF-8 BOM, Chinese header)

use chrono::{Local, NaiveDate, TimeZone};
use shared::models::Lead;

pub const CSV_HEADER: &str = "提交时间,来源,姓名,公司,邮箱,电话,留言";

const BOM: char = '\u{feff}';

/// Export with submission times in local time
pub fn export_csv(leads: &[Lead]) -> String {
    export_csv_in(leads, &Local)
}

pub fn export_csv_in<Tz: TimeZone>(leads: &[Lead], tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let mut out = String::new();
    out.push(BOM);
    out.push_str(CSV_HEADER);
    for lead in leads {
        out.push('\n');
        let submitted = lead
            .created_at
            .with_timezone(tz)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string();
        let fields = [
            submitted.as_str(),
            lead.source.as_str(),
            lead.name.as_str(),
            lead.company.as_deref().unwrap_or_default(),
            lead.email.as_str(),
            lead.phone.as_deref().unwrap_or_default(),
            lead.message.as_str(),
        ];
        let row: Vec<String> = fields.iter().map(|f| escape_field(f)).collect();
        out.push_str(&row.join(","));
    }
    out
}

/// `leads_export_YYYY-MM-DD.csv`
pub fn export_file_name(date: NaiveDate) -> String {
    format!("leads_export_{}.csv", date.format("%Y-%m-%d"))
}

/// RFC 4180: quote fields containing a comma, quote or line break
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use shared::models::{LeadSource, LeadSubmission};

    #[test]
    fn test_escape_field() {
        assert_eq!(escape_field("plain"), "plain");
        assert_eq!(escape_field("a,b"), "\"a,b\"");
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_field("line1\nline2"), "\"line1\nline2\"");
    }

    #[test]
    fn test_export_layout() {
        let at = "2024-05-01T08:30:00Z".parse().unwrap();
        let lead = LeadSubmission::new("张先生", "13800138000", LeadSource::ContactPage)
            .with_company("未来科技")
            .with_message("需采购 5 台, 请报价")
            .into_lead("lead-1".into(), at);

        let csv = export_csv_in(&[lead], &Utc);
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("\u{feff}提交时间,来源,姓名,公司,邮箱,电话,留言"));
        assert_eq!(
            lines.next(),
            Some("2024-05-01 08:30:00,ContactPage,张先生,未来科技,,13800138000,\"需采购 5 台, 请报价\"")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_empty_export_is_header_only() {
        assert_eq!(export_csv_in(&[], &Utc), format!("{BOM}{CSV_HEADER}"));
    }

    #[test]
    fn test_file_name() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 9).unwrap();
        assert_eq!(export_file_name(date), "leads_export_2024-06-09.csv");
    }
}
