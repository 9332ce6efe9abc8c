use serde::Serialize;

use super::fields::IntakeFields;
use super::record::Record;

/// Payload posted to the write endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub id: String,
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Profession")]
    pub profession: String,
    #[serde(rename = "Description")]
    pub description: String,
}

impl Submission {
    /// Builds a submission from the current field values, trimming
    /// surrounding whitespace from each.
    pub fn new(id: String, fields: &IntakeFields) -> Self {
        Self {
            id,
            company: fields.organization.trim().to_string(),
            profession: fields.role.trim().to_string(),
            description: fields.description.trim().to_string(),
        }
    }

    /// Resolves the id to submit under: the record's own link, then the id
    /// it was requested with, then the empty string.
    pub fn effective_id(record: &Record, requested_id: Option<&str>) -> String {
        record
            .link()
            .or(requested_id)
            .unwrap_or_default()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    fn record_with_link(link: Option<&str>) -> Record {
        Record {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            payment: None,
            link: link.map(str::to_string),
            company: None,
            profession: None,
            submitted: None,
        }
    }

    mod trimming {
        use super::*;

        #[test]
        fn trims_each_field() {
            let fields = IntakeFields {
                organization: "  Acme  ".into(),
                role: " Lead ".into(),
                description: " Build X ".into(),
            };
            let submission = Submission::new("rec-1".into(), &fields);
            assert_eq!(submission.company, "Acme");
            assert_eq!(submission.profession, "Lead");
            assert_eq!(submission.description, "Build X");
        }

        #[test]
        fn keeps_inner_line_breaks() {
            let fields = IntakeFields {
                description: "\n line one\nline two \n".into(),
                ..IntakeFields::default()
            };
            let submission = Submission::new(String::new(), &fields);
            assert_eq!(submission.description, "line one\nline two");
        }

        #[quickcheck]
        fn output_never_has_surrounding_whitespace(org: String, role: String, desc: String) -> bool {
            let fields = IntakeFields {
                organization: org,
                role,
                description: desc,
            };
            let s = Submission::new(String::new(), &fields);
            [&s.company, &s.profession, &s.description]
                .iter()
                .all(|v| v.trim() == v.as_str())
        }
    }

    mod effective_id {
        use super::*;

        #[test]
        fn prefers_record_link() {
            let record = record_with_link(Some("rec-9"));
            assert_eq!(Submission::effective_id(&record, Some("query-id")), "rec-9");
        }

        #[test]
        fn falls_back_to_requested_id() {
            let record = record_with_link(None);
            assert_eq!(
                Submission::effective_id(&record, Some("query-id")),
                "query-id"
            );
        }

        #[test]
        fn blank_link_falls_back_to_requested_id() {
            let record = record_with_link(Some(""));
            assert_eq!(
                Submission::effective_id(&record, Some("query-id")),
                "query-id"
            );
        }

        #[test]
        fn empty_when_both_absent() {
            let record = record_with_link(None);
            assert_eq!(Submission::effective_id(&record, None), "");
        }
    }

    #[test]
    fn serializes_with_wire_keys() {
        let submission = Submission {
            id: "rec-1".into(),
            company: "Acme".into(),
            profession: "Lead".into(),
            description: "Build X".into(),
        };
        let value = serde_json::to_value(&submission).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": "rec-1",
                "Company": "Acme",
                "Profession": "Lead",
                "Description": "Build X",
            })
        );
    }
}
