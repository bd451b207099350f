//! Canonical test values for bill documents

/// Patient-related fixture values
pub struct PatientFixtures;

impl PatientFixtures {
    pub fn mrn() -> &'static str {
        "M001"
    }

    pub fn other_mrn() -> &'static str {
        "M002"
    }

    pub fn name() -> &'static str {
        "Jane Roe"
    }

    pub fn other_name() -> &'static str {
        "John Q. Public"
    }
}

/// Bill-related fixture values
pub struct BillFixtures;

impl BillFixtures {
    pub fn bill_number() -> &'static str {
        "B-2024-0042"
    }

    pub fn hospital_name() -> &'static str {
        "St. Example General"
    }

    pub fn extraction_date() -> &'static str {
        "2024-06-01T10:00:00"
    }

    pub fn medicine_description() -> &'static str {
        "Paracetamol 500mg"
    }

    pub fn diagnostic_description() -> &'static str {
        "Complete Blood Count (CBC)"
    }
}
