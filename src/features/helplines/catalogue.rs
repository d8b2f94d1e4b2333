//! Delhi civic authorities and their complaint lines.

use crate::features::issues::models::IssueCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Helpline {
    pub key: &'static str,
    pub authority: &'static str,
    pub helpline: &'static str,
    pub alternate_helpline: &'static str,
    pub department: &'static str,
    pub grievance_portal: &'static str,
    pub description: &'static str,
}

/// Used for `General` and anything that does not resolve to a category
pub const DEFAULT_HELPLINE: Helpline = Helpline {
    key: "default",
    authority: "Delhi Government",
    helpline: "1076",
    alternate_helpline: "011-23392007",
    department: "Citizen Services",
    grievance_portal: "Delhi Government Portal",
    description: "For general civic issues and complaints",
};

const MCD_SANITATION: Helpline = Helpline {
    key: "waste",
    authority: "Municipal Corporation of Delhi (MCD)",
    helpline: "155305",
    alternate_helpline: "011-23970404",
    department: "Sanitation Department",
    grievance_portal: "MCD Citizen Services Portal",
    description: "For garbage collection, waste management, and sanitation issues",
};

const DJB: Helpline = Helpline {
    key: "water",
    authority: "Delhi Jal Board (DJB)",
    helpline: "1916",
    alternate_helpline: "011-23634467",
    department: "Customer Care Center",
    grievance_portal: "DJB Online Complaint System",
    description: "For water supply, leakage, and pipeline issues",
};

const DPCC: Helpline = Helpline {
    key: "air",
    authority: "Delhi Pollution Control Committee (DPCC)",
    helpline: "011-42200500",
    alternate_helpline: "1800-11-4000",
    department: "Environmental Monitoring",
    grievance_portal: "DPCC Grievance Redressal System",
    description: "For air pollution, industrial emissions, and environmental complaints",
};

const TRAFFIC_POLICE: Helpline = Helpline {
    key: "transport",
    authority: "Delhi Traffic Police",
    helpline: "1075",
    alternate_helpline: "011-25844444",
    department: "Traffic Control Room",
    grievance_portal: "Delhi Traffic Police Complaint Portal",
    description: "For traffic violations, road safety, and transport issues",
};

const DISCOMS: Helpline = Helpline {
    key: "energy",
    authority: "Delhi DISCOMs",
    helpline: "1912",
    alternate_helpline: "1800-103-0808",
    department: "Customer Care",
    grievance_portal: "Consumer Grievance Redressal Forum",
    description: "For power outages, electricity supply, and billing issues",
};

const MCD_ELECTRICAL: Helpline = Helpline {
    key: "street_lighting",
    authority: "Municipal Corporation of Delhi (MCD)",
    helpline: "155305",
    alternate_helpline: "011-23970404",
    department: "Electrical Department",
    grievance_portal: "MCD Citizen Services Portal",
    description: "For street light maintenance and lighting issues",
};

const PWD: Helpline = Helpline {
    key: "roads",
    authority: "Public Works Department (PWD)",
    helpline: "011-23393233",
    alternate_helpline: "1800-11-0000",
    department: "Engineering Division",
    grievance_portal: "PWD Delhi Complaint System",
    description: "For road maintenance, potholes, and infrastructure issues",
};

const HEALTH_DEPARTMENT: Helpline = Helpline {
    key: "health",
    authority: "Delhi Health Department",
    helpline: "104",
    alternate_helpline: "011-22307145",
    department: "Public Health Services",
    grievance_portal: "Delhi Health Services Portal",
    description: "For public health concerns and medical facility complaints",
};

/// Every catalogue entry, default last
pub const ALL_HELPLINES: [Helpline; 9] = [
    MCD_SANITATION,
    DJB,
    DPCC,
    TRAFFIC_POLICE,
    DISCOMS,
    MCD_ELECTRICAL,
    PWD,
    HEALTH_DEPARTMENT,
    DEFAULT_HELPLINE,
];

pub fn helpline_for_category(category: IssueCategory) -> Helpline {
    match category {
        IssueCategory::Waste => MCD_SANITATION,
        IssueCategory::Water => DJB,
        IssueCategory::Air => DPCC,
        IssueCategory::Transport => TRAFFIC_POLICE,
        IssueCategory::Energy => DISCOMS,
        IssueCategory::StreetLighting => MCD_ELECTRICAL,
        IssueCategory::Roads => PWD,
        IssueCategory::Health => HEALTH_DEPARTMENT,
        IssueCategory::General => DEFAULT_HELPLINE,
    }
}

/// Resolve a free-form category label; unknown labels get the default entry
pub fn helpline_for_label(label: &str) -> Helpline {
    IssueCategory::from_label(label)
        .map(helpline_for_category)
        .unwrap_or(DEFAULT_HELPLINE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_an_entry() {
        for category in IssueCategory::ALL {
            let entry = helpline_for_category(category);
            assert!(ALL_HELPLINES.contains(&entry));
        }
    }

    #[test]
    fn test_aliases_resolve_to_the_same_authority() {
        assert_eq!(helpline_for_label("Garbage"), helpline_for_label("waste"));
        assert_eq!(helpline_for_label("Power").helpline, "1912");
        assert_eq!(helpline_for_label("street_light").key, "street_lighting");
        assert_eq!(helpline_for_label("TRAFFIC").authority, "Delhi Traffic Police");
    }

    #[test]
    fn test_unknown_label_falls_back_to_default() {
        assert_eq!(helpline_for_label("Noise"), DEFAULT_HELPLINE);
        assert_eq!(helpline_for_label(""), DEFAULT_HELPLINE);
    }

    #[test]
    fn test_keys_are_unique() {
        let mut keys: Vec<&str> = ALL_HELPLINES.iter().map(|h| h.key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), ALL_HELPLINES.len());
    }
}
