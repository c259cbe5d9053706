//! Directory of mental health professionals.
//!
//! The listing is a built-in static table; there is no external lookup.
//! Filtering combines a free-text search over name, profession and
//! specialty with exact specialty and location matches.

use serde::Serialize;

/// A listed professional.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Professional {
    pub id: u32,
    pub name: &'static str,
    pub profession: &'static str,
    pub specialty: &'static str,
    pub location: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub rating: f32,
    pub experience: &'static str,
    pub description: &'static str,
    pub accepts_insurance: bool,
}

/// Directory search criteria. Empty fields match everything.
#[derive(Debug, Clone, Default)]
pub struct DirectoryFilter {
    pub search: Option<String>,
    pub specialty: Option<String>,
    pub location: Option<String>,
}

/// The built-in listing.
pub fn builtin() -> &'static [Professional] {
    &PROFESSIONALS
}

/// Apply a filter to the built-in listing.
///
/// The free-text term matches case-insensitively as a substring of the
/// name, profession or specialty; specialty and location filters require
/// exact matches.
pub fn filter(criteria: &DirectoryFilter) -> Vec<&'static Professional> {
    PROFESSIONALS
        .iter()
        .filter(|p| match &criteria.search {
            Some(term) => {
                let term = term.to_lowercase();
                p.name.to_lowercase().contains(&term)
                    || p.profession.to_lowercase().contains(&term)
                    || p.specialty.to_lowercase().contains(&term)
            }
            None => true,
        })
        .filter(|p| match &criteria.specialty {
            Some(specialty) => p.specialty == specialty,
            None => true,
        })
        .filter(|p| match &criteria.location {
            Some(location) => p.location == location,
            None => true,
        })
        .collect()
}

/// Distinct specialties, in listing order.
pub fn specialties() -> Vec<&'static str> {
    distinct(|p| p.specialty)
}

/// Distinct locations, in listing order.
pub fn locations() -> Vec<&'static str> {
    distinct(|p| p.location)
}

fn distinct(field: fn(&Professional) -> &'static str) -> Vec<&'static str> {
    let mut values = Vec::new();
    for professional in &PROFESSIONALS {
        let value = field(professional);
        if !values.contains(&value) {
            values.push(value);
        }
    }
    values
}

static PROFESSIONALS: [Professional; 6] = [
    Professional {
        id: 1,
        name: "Dr. Sarah Johnson",
        profession: "Psychiatrist",
        specialty: "Anxiety & Depression",
        location: "New York, NY",
        phone: "(555) 123-4567",
        email: "sarah.johnson@example.com",
        rating: 4.9,
        experience: "15 years",
        description: "Specializes in cognitive behavioral therapy and medication management for anxiety and depression.",
        accepts_insurance: true,
    },
    Professional {
        id: 2,
        name: "Michael Chen, LCSW",
        profession: "Licensed Clinical Social Worker",
        specialty: "Trauma & PTSD",
        location: "Los Angeles, CA",
        phone: "(555) 234-5678",
        email: "michael.chen@example.com",
        rating: 4.8,
        experience: "12 years",
        description: "Expert in trauma-informed care and EMDR therapy for PTSD and complex trauma.",
        accepts_insurance: true,
    },
    Professional {
        id: 3,
        name: "Dr. Emily Rodriguez",
        profession: "Clinical Psychologist",
        specialty: "Child & Adolescent",
        location: "Chicago, IL",
        phone: "(555) 345-6789",
        email: "emily.rodriguez@example.com",
        rating: 4.7,
        experience: "10 years",
        description: "Focuses on helping children and teenagers with behavioral and emotional challenges.",
        accepts_insurance: false,
    },
    Professional {
        id: 4,
        name: "James Wilson, MFT",
        profession: "Marriage & Family Therapist",
        specialty: "Couples & Family",
        location: "Austin, TX",
        phone: "(555) 456-7890",
        email: "james.wilson@example.com",
        rating: 4.6,
        experience: "8 years",
        description: "Specializes in relationship counseling and family therapy using systemic approaches.",
        accepts_insurance: true,
    },
    Professional {
        id: 5,
        name: "Dr. Lisa Park",
        profession: "Psychiatrist",
        specialty: "Bipolar & Mood Disorders",
        location: "Seattle, WA",
        phone: "(555) 567-8901",
        email: "lisa.park@example.com",
        rating: 4.9,
        experience: "18 years",
        description: "Expert in mood disorders with extensive experience in medication management.",
        accepts_insurance: true,
    },
    Professional {
        id: 6,
        name: "Robert Thompson, PhD",
        profession: "Clinical Psychologist",
        specialty: "Addiction & Substance Abuse",
        location: "Miami, FL",
        phone: "(555) 678-9012",
        email: "robert.thompson@example.com",
        rating: 4.5,
        experience: "14 years",
        description: "Specializes in addiction treatment and dual diagnosis therapy.",
        accepts_insurance: true,
    },
];
