//! Fixed option catalogs for filters and job forms.

/// Job categories offered in filters and the posting form.
pub const CATEGORIES: [&str; 11] = [
    "Engineering",
    "Design",
    "Marketing",
    "Sales",
    "IT & Software",
    "Customer-service",
    "Product",
    "Operations",
    "Finance",
    "HR",
    "Other",
];

/// Employment types. Underscored values match the server contract.
pub const JOB_TYPES: [&str; 5] = ["Remote", "Full_Time", "Part_Time", "Contract", "Internship"];
