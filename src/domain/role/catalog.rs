//! Static profession -> department -> role catalog.
//!
//! Drives the cascading role selection on the first wizard step.

/// A department and the specific roles it offers.
#[derive(Debug)]
pub struct Department {
    pub name: &'static str,
    pub roles: &'static [&'static str],
}

/// A profession and its departments.
#[derive(Debug)]
pub struct Profession {
    pub name: &'static str,
    pub departments: &'static [Department],
}

impl Profession {
    /// Looks up a department by exact name.
    pub fn department(&self, name: &str) -> Option<&'static Department> {
        self.departments.iter().find(|d| d.name == name)
    }
}

pub static PROFESSIONS: &[Profession] = &[
    Profession {
        name: "Software Engineering",
        departments: &[
            Department {
                name: "Backend Development",
                roles: &[
                    "Backend Engineer",
                    "API Developer",
                    "Database Engineer",
                    "Systems Programmer",
                ],
            },
            Department {
                name: "Frontend Development",
                roles: &["Frontend Engineer", "UI Developer", "Accessibility Engineer"],
            },
            Department {
                name: "DevOps & Infrastructure",
                roles: &["Site Reliability Engineer", "Platform Engineer", "Cloud Architect"],
            },
            Department {
                name: "Quality Assurance",
                roles: &["QA Engineer", "Test Automation Engineer"],
            },
        ],
    },
    Profession {
        name: "Healthcare",
        departments: &[
            Department {
                name: "Nursing",
                roles: &["Registered Nurse", "Nurse Practitioner", "Charge Nurse"],
            },
            Department {
                name: "Surgery",
                roles: &["Surgeon", "Surgical Resident", "Anaesthetist"],
            },
            Department {
                name: "Emergency Medicine",
                roles: &["Emergency Physician", "Paramedic", "Triage Nurse"],
            },
        ],
    },
    Profession {
        name: "Finance",
        departments: &[
            Department {
                name: "Investment Banking",
                roles: &["Analyst", "Associate", "Mergers & Acquisitions Advisor"],
            },
            Department {
                name: "Risk Management",
                roles: &["Risk Analyst", "Credit Risk Officer", "Compliance Officer"],
            },
            Department {
                name: "Accounting",
                roles: &["Financial Accountant", "Auditor", "Controller"],
            },
        ],
    },
    Profession {
        name: "Education",
        departments: &[
            Department {
                name: "K-12 Teaching",
                roles: &["Classroom Teacher", "Special Education Teacher", "Head of Year"],
            },
            Department {
                name: "Higher Education",
                roles: &["Lecturer", "Research Supervisor", "Programme Director"],
            },
            Department {
                name: "Instructional Design",
                roles: &["Instructional Designer", "Learning Technologist"],
            },
        ],
    },
    Profession {
        name: "Law",
        departments: &[
            Department {
                name: "Litigation",
                roles: &["Trial Lawyer", "Paralegal"],
            },
            Department {
                name: "Corporate Law",
                roles: &["Corporate Counsel", "Contracts Manager"],
            },
            Department {
                name: "Judiciary",
                roles: &["Judge", "Court Clerk"],
            },
        ],
    },
];

/// Looks up a profession by exact name.
pub fn find_profession(name: &str) -> Option<&'static Profession> {
    PROFESSIONS.iter().find(|p| p.name == name)
}

/// All profession names in catalog order.
pub fn profession_names() -> Vec<&'static str> {
    PROFESSIONS.iter().map(|p| p.name).collect()
}

/// Department choices for a profession; empty for unknown professions.
pub fn department_names(profession: &str) -> Vec<&'static str> {
    find_profession(profession)
        .map(|p| p.departments.iter().map(|d| d.name).collect())
        .unwrap_or_default()
}

/// Specific-role choices for a department of a profession.
pub fn role_names(profession: &str, department: &str) -> Vec<&'static str> {
    find_profession(profession)
        .and_then(|p| p.department(department))
        .map(|d| d.roles.to_vec())
        .unwrap_or_default()
}
