//! RoleRecord - the professional role being profiled.
//!
//! Every edit returns a new record. Department and specific role only make
//! sense relative to the chosen profession, so changing the profession clears
//! both and changing the department clears the role.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

use super::catalog::{department_names, role_names};
use super::{KeyResponsibility, MasterKra};

/// Fallback title for a role with nothing selected.
pub const UNTITLED_ROLE: &str = "Untitled Role";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RoleRecordWire")]
pub struct RoleRecord {
    profession: String,
    department: String,
    specific_role: String,
    description: String,
    day_to_day_tasks: Vec<String>,
    key_responsibilities: Vec<KeyResponsibility>,
}

impl RoleRecord {
    // ───────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────

    pub fn profession(&self) -> &str {
        &self.profession
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn specific_role(&self) -> &str {
        &self.specific_role
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn day_to_day_tasks(&self) -> &[String] {
        &self.day_to_day_tasks
    }

    pub fn key_responsibilities(&self) -> &[KeyResponsibility] {
        &self.key_responsibilities
    }

    /// Name used in titles and prompts: specific role, else profession,
    /// else "Untitled Role".
    pub fn role_name(&self) -> &str {
        if !self.specific_role.trim().is_empty() {
            self.specific_role.as_str()
        } else if !self.profession.trim().is_empty() {
            self.profession.as_str()
        } else {
            UNTITLED_ROLE
        }
    }

    /// Department choices for the current profession.
    pub fn department_choices(&self) -> Vec<&'static str> {
        department_names(&self.profession)
    }

    /// Specific-role choices for the current profession and department.
    pub fn role_choices(&self) -> Vec<&'static str> {
        role_names(&self.profession, &self.department)
    }

    /// Master entries for the current profession that are not yet selected.
    pub fn available_master_kras<'a>(&self, master: &'a [MasterKra]) -> Vec<&'a MasterKra> {
        master
            .iter()
            .filter(|kra| kra.bucket == self.profession)
            .filter(|kra| !self.has_responsibility(&kra.label))
            .collect()
    }

    /// Returns true if a responsibility with this label is already present.
    pub fn has_responsibility(&self, label: &str) -> bool {
        self.key_responsibilities
            .iter()
            .any(|r| r.matches_label(label))
    }

    // ───────────────────────────────────────────────────────────────
    // Edits
    // ───────────────────────────────────────────────────────────────

    /// Selects a profession. Choosing a different one resets department
    /// and specific role.
    pub fn with_profession(&self, profession: impl Into<String>) -> Self {
        let profession = profession.into();
        let mut next = self.clone();
        if next.profession != profession {
            next.department.clear();
            next.specific_role.clear();
        }
        next.profession = profession;
        next
    }

    /// Selects a department. Choosing a different one resets the specific role.
    pub fn with_department(&self, department: impl Into<String>) -> Self {
        let department = department.into();
        let mut next = self.clone();
        if next.department != department {
            next.specific_role.clear();
        }
        next.department = department;
        next
    }

    pub fn with_specific_role(&self, role: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.specific_role = role.into();
        next
    }

    pub fn with_description(&self, description: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.description = description.into();
        next
    }

    /// Appends a day-to-day task.
    pub fn with_task(&self, task: impl Into<String>) -> Result<Self, ValidationError> {
        let task = task.into();
        if task.trim().is_empty() {
            return Err(ValidationError::empty_field("day_to_day_task"));
        }
        let mut next = self.clone();
        next.day_to_day_tasks.push(task.trim().to_string());
        Ok(next)
    }

    /// Removes the task at `index`.
    pub fn without_task(&self, index: usize) -> Result<Self, ValidationError> {
        if index >= self.day_to_day_tasks.len() {
            return Err(ValidationError::out_of_range(
                "day_to_day_task",
                0,
                self.day_to_day_tasks.len() as i32 - 1,
                index as i32,
            ));
        }
        let mut next = self.clone();
        next.day_to_day_tasks.remove(index);
        Ok(next)
    }

    /// Appends a key responsibility; labels are unique ignoring case.
    pub fn with_responsibility(&self, responsibility: KeyResponsibility) -> Result<Self, DomainError> {
        let label = responsibility.label.trim();
        if label.is_empty() {
            return Err(ValidationError::empty_field("key_responsibility").into());
        }
        if self.has_responsibility(label) {
            return Err(DomainError::new(
                ErrorCode::DuplicateResponsibility,
                format!("Key responsibility '{}' is already listed", label),
            )
            .with_detail("label", label));
        }
        let mut next = self.clone();
        next.key_responsibilities.push(KeyResponsibility {
            source_id: responsibility.source_id,
            label: label.to_string(),
        });
        Ok(next)
    }

    /// Removes the responsibility with this label (ignoring case), if any.
    pub fn without_responsibility(&self, label: &str) -> Self {
        let mut next = self.clone();
        next.key_responsibilities.retain(|r| !r.matches_label(label));
        next
    }
}

/// Lenient wire shape. Responsibilities are de-duplicated on the way in,
/// keeping the first of any labels that match ignoring case, and blank
/// labels are dropped.
#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RoleRecordWire {
    profession: String,
    department: String,
    specific_role: String,
    description: String,
    day_to_day_tasks: Vec<String>,
    key_responsibilities: Vec<KeyResponsibility>,
}

impl From<RoleRecordWire> for RoleRecord {
    fn from(wire: RoleRecordWire) -> Self {
        let mut key_responsibilities: Vec<KeyResponsibility> = Vec::new();
        for responsibility in wire.key_responsibilities {
            let label = responsibility.label.trim();
            if label.is_empty() || key_responsibilities.iter().any(|r| r.matches_label(label)) {
                continue;
            }
            key_responsibilities.push(KeyResponsibility {
                source_id: responsibility.source_id,
                label: label.to_string(),
            });
        }
        Self {
            profession: wire.profession,
            department: wire.department,
            specific_role: wire.specific_role,
            description: wire.description,
            day_to_day_tasks: wire.day_to_day_tasks,
            key_responsibilities,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend_engineer() -> RoleRecord {
        RoleRecord::default()
            .with_profession("Software Engineering")
            .with_department("Backend Development")
            .with_specific_role("API Developer")
    }

    #[test]
    fn profession_then_department_restricts_role_choices() {
        let record = RoleRecord::default()
            .with_profession("Software Engineering")
            .with_department("Backend Development");
        assert_eq!(
            record.role_choices(),
            ["Backend Engineer", "API Developer", "Database Engineer", "Systems Programmer"]
        );
    }

    #[test]
    fn changing_profession_clears_department_and_role() {
        let record = backend_engineer().with_profession("Healthcare");
        assert_eq!(record.profession(), "Healthcare");
        assert_eq!(record.department(), "");
        assert_eq!(record.specific_role(), "");
    }

    #[test]
    fn reselecting_same_profession_keeps_selection() {
        let record = backend_engineer().with_profession("Software Engineering");
        assert_eq!(record.department(), "Backend Development");
        assert_eq!(record.specific_role(), "API Developer");
    }

    #[test]
    fn changing_department_clears_role_only() {
        let record = backend_engineer().with_department("Frontend Development");
        assert_eq!(record.profession(), "Software Engineering");
        assert_eq!(record.specific_role(), "");
    }

    #[test]
    fn edits_do_not_touch_original() {
        let original = backend_engineer();
        let _ = original.with_profession("Law");
        assert_eq!(original.department(), "Backend Development");
    }

    #[test]
    fn role_name_falls_back() {
        assert_eq!(RoleRecord::default().role_name(), UNTITLED_ROLE);
        assert_eq!(
            RoleRecord::default().with_profession("Finance").role_name(),
            "Finance"
        );
        assert_eq!(backend_engineer().role_name(), "API Developer");
    }

    #[test]
    fn tasks_are_appended_and_removed() {
        let record = RoleRecord::default()
            .with_task("Review pull requests")
            .unwrap()
            .with_task("  Triage incidents ")
            .unwrap();
        assert_eq!(record.day_to_day_tasks(), ["Review pull requests", "Triage incidents"]);

        let record = record.without_task(0).unwrap();
        assert_eq!(record.day_to_day_tasks(), ["Triage incidents"]);
        assert!(record.without_task(5).is_err());
        assert!(record.with_task("   ").is_err());
    }

    #[test]
    fn responsibility_labels_are_unique_ignoring_case() {
        let record = RoleRecord::default()
            .with_responsibility(KeyResponsibility::authored("Mentor juniors"))
            .unwrap();

        let err = record
            .with_responsibility(KeyResponsibility::authored("mentor JUNIORS"))
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::DuplicateResponsibility);
        assert!(record
            .with_responsibility(KeyResponsibility::authored(" "))
            .is_err());
    }

    #[test]
    fn non_ascii_labels_are_unique_ignoring_case() {
        let record = RoleRecord::default()
            .with_responsibility(KeyResponsibility::authored("Éthique médicale"))
            .unwrap();

        let err = record
            .with_responsibility(KeyResponsibility::authored("éthique médicale"))
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::DuplicateResponsibility);
        assert!(record.has_responsibility("ÉTHIQUE MÉDICALE"));
    }

    #[test]
    fn deserialization_drops_duplicate_responsibilities() {
        let record: RoleRecord = serde_json::from_str(
            r#"{"keyResponsibilities":[
                {"sourceId":4,"label":"Triage"},
                {"label":"TRIAGE"},
                {"label":"  "},
                {"label":"Éthique"},
                {"label":"éthique"}
            ]}"#,
        )
        .unwrap();

        let labels: Vec<&str> = record
            .key_responsibilities()
            .iter()
            .map(|r| r.label.as_str())
            .collect();
        assert_eq!(labels, ["Triage", "Éthique"]);
        assert_eq!(record.key_responsibilities()[0].source_id, Some(4));
    }

    #[test]
    fn removing_responsibility_ignores_case() {
        let record = RoleRecord::default()
            .with_responsibility(KeyResponsibility::authored("On-call rotation"))
            .unwrap()
            .without_responsibility("ON-CALL ROTATION");
        assert!(record.key_responsibilities().is_empty());
    }

    #[test]
    fn available_master_kras_filter_by_bucket_and_selection() {
        let master = vec![
            MasterKra::new(1, "Design REST APIs", "Software Engineering"),
            MasterKra::new(2, "Own database schema", "Software Engineering"),
            MasterKra::new(3, "Patient triage", "Healthcare"),
        ];
        let record = backend_engineer()
            .with_responsibility(KeyResponsibility::from_master(&master[0]))
            .unwrap();

        let available: Vec<i64> = record
            .available_master_kras(&master)
            .into_iter()
            .map(|k| k.id)
            .collect();
        assert_eq!(available, [2]);
    }

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let record: RoleRecord =
            serde_json::from_str(r#"{"profession":"Law","specificRole":"Judge"}"#).unwrap();
        assert_eq!(record.profession(), "Law");
        assert_eq!(record.department(), "");
        assert!(record.key_responsibilities().is_empty());
    }
}
