use crate::models::{Dentist, EventInfo, Review, SocialLinks};
use crate::pricing::FALLBACK_BASE_PRICE;

// Demo catalog. Pages fall back to these values whenever the backend is
// unreachable, so the site stays fully browsable offline.

pub const COUNTRIES: [&str; 29] = [
    "United States",
    "United Kingdom",
    "Canada",
    "Australia",
    "Germany",
    "France",
    "India",
    "China",
    "Japan",
    "Brazil",
    "Mexico",
    "South Korea",
    "Italy",
    "Spain",
    "Netherlands",
    "Sweden",
    "Switzerland",
    "Singapore",
    "United Arab Emirates",
    "Saudi Arabia",
    "South Africa",
    "New Zealand",
    "Ireland",
    "Belgium",
    "Austria",
    "Norway",
    "Denmark",
    "Finland",
    "Other",
];

pub const COUNTRY_CODES: [(&str, &str); 12] = [
    ("+1", "US/CA"),
    ("+44", "UK"),
    ("+91", "IN"),
    ("+61", "AU"),
    ("+49", "DE"),
    ("+33", "FR"),
    ("+81", "JP"),
    ("+86", "CN"),
    ("+971", "UAE"),
    ("+65", "SG"),
    ("+55", "BR"),
    ("+27", "ZA"),
];

pub fn mock_event() -> EventInfo {
    EventInfo {
        id: "webinar-2026-feb".to_string(),
        name: "Master Class in Modern Dentistry 2026".to_string(),
        date: "2026-02-15".to_string(),
        time: "09:00".to_string(),
        duration_hours: 12,
        platform: "In-Person".to_string(),
        max_capacity: 500,
        current_registrations: 342,
        base_price: FALLBACK_BASE_PRICE,
        status: "upcoming".to_string(),
        description: "Join the world's top 5 dentists for an intensive 12-hour masterclass covering the latest techniques and technologies in modern dentistry.".to_string(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

pub fn mock_dentists() -> Vec<Dentist> {
    vec![
        Dentist {
            id: "1".to_string(),
            name: "Dr. Sarah Mitchell".to_string(),
            credentials: "DDS, PhD, FACD".to_string(),
            specialty: "Prosthodontics & Implantology".to_string(),
            biography: "Dr. Sarah Mitchell is a world-renowned prosthodontist with over 20 years of experience in complex dental reconstructions. She has pioneered several innovative techniques in full-mouth rehabilitation and is a sought-after speaker at international dental conferences. Her research on digital dentistry has been published in over 50 peer-reviewed journals.".to_string(),
            profile_image_url: "https://images.unsplash.com/photo-1559839734-2b71ea197ec2?w=400&h=400&fit=crop&crop=face".to_string(),
            achievements: strings(&[
                "Pierre Fauchard Academy Fellow",
                "American College of Dentists Fellow",
                "Published 50+ research papers",
                "Developed the Mitchell Implant Technique",
            ]),
            social_links: SocialLinks {
                linkedin: Some("https://linkedin.com".to_string()),
                twitter: Some("https://twitter.com".to_string()),
                research_gate: Some("https://researchgate.net".to_string()),
            },
            topics_covered: strings(&[
                "Full-mouth Rehabilitation",
                "Digital Implant Planning",
                "Esthetic Prosthodontics",
            ]),
            institution: "Harvard School of Dental Medicine".to_string(),
            years_experience: 20,
        },
        Dentist {
            id: "2".to_string(),
            name: "Dr. James Chen".to_string(),
            credentials: "DMD, MS, FICOI".to_string(),
            specialty: "Endodontics & Microsurgery".to_string(),
            biography: "Dr. James Chen is a distinguished endodontist and microsurgery expert. He leads the Endodontics department at UCLA and has trained over 500 dentists worldwide in advanced root canal techniques. His expertise in using surgical microscopes has revolutionized minimally invasive endodontic procedures.".to_string(),
            profile_image_url: "https://images.unsplash.com/photo-1612349317150-e413f6a5b16d?w=400&h=400&fit=crop&crop=face".to_string(),
            achievements: strings(&[
                "UCLA Outstanding Faculty Award",
                "International Congress of Oral Implantologists Fellow",
                "Inventor of the Chen Retreatment System",
                "Author of \"Modern Endodontics\"",
            ]),
            social_links: SocialLinks {
                linkedin: Some("https://linkedin.com".to_string()),
                twitter: None,
                research_gate: Some("https://researchgate.net".to_string()),
            },
            topics_covered: strings(&[
                "Microscopic Endodontics",
                "Root Canal Retreatment",
                "Apical Surgery",
            ]),
            institution: "UCLA School of Dentistry".to_string(),
            years_experience: 18,
        },
        Dentist {
            id: "3".to_string(),
            name: "Dr. Emily Rodriguez".to_string(),
            credentials: "DDS, MSD, Diplomate ABP".to_string(),
            specialty: "Periodontics & Regeneration".to_string(),
            biography: "Dr. Emily Rodriguez is a board-certified periodontist specializing in regenerative procedures and soft tissue grafting. She is a pioneer in using growth factors and stem cells for periodontal regeneration. Her clinic in Miami serves as a teaching center for advanced periodontal techniques.".to_string(),
            profile_image_url: "https://images.unsplash.com/photo-1594824476967-48c8b964273f?w=400&h=400&fit=crop&crop=face".to_string(),
            achievements: strings(&[
                "American Board of Periodontology Diplomate",
                "AAP Award for Innovation in Periodontics",
                "Featured in Top 40 Under 40 Dentists",
                "TED Talk speaker on Dental Regeneration",
            ]),
            social_links: SocialLinks {
                linkedin: Some("https://linkedin.com".to_string()),
                twitter: Some("https://twitter.com".to_string()),
                research_gate: None,
            },
            topics_covered: strings(&[
                "Regenerative Periodontics",
                "Soft Tissue Grafting",
                "Periodontal Plastic Surgery",
            ]),
            institution: "University of Miami".to_string(),
            years_experience: 15,
        },
        Dentist {
            id: "4".to_string(),
            name: "Dr. Michael Thompson".to_string(),
            credentials: "BDS, MDS, FDSRCS".to_string(),
            specialty: "Oral & Maxillofacial Surgery".to_string(),
            biography: "Dr. Michael Thompson is a dual-qualified oral and maxillofacial surgeon with expertise in orthognathic surgery and facial reconstruction. He has performed over 3,000 complex surgical procedures and leads the Craniofacial Surgery Unit at Johns Hopkins Hospital. His work on 3D-printed surgical guides has transformed surgical planning.".to_string(),
            profile_image_url: "https://images.unsplash.com/photo-1537368910025-700350fe46c7?w=400&h=400&fit=crop&crop=face".to_string(),
            achievements: strings(&[
                "Royal College of Surgeons Fellow",
                "Pioneer in Virtual Surgical Planning",
                "Johns Hopkins Excellence in Surgery Award",
                "Published 80+ surgical case studies",
            ]),
            social_links: SocialLinks {
                linkedin: Some("https://linkedin.com".to_string()),
                twitter: None,
                research_gate: Some("https://researchgate.net".to_string()),
            },
            topics_covered: strings(&[
                "Orthognathic Surgery",
                "Facial Trauma",
                "3D Surgical Planning",
            ]),
            institution: "Johns Hopkins Hospital".to_string(),
            years_experience: 22,
        },
        Dentist {
            id: "5".to_string(),
            name: "Dr. Aisha Patel".to_string(),
            credentials: "BDS, MDS, FICOI".to_string(),
            specialty: "Cosmetic & Digital Dentistry".to_string(),
            biography: "Dr. Aisha Patel is a leading cosmetic dentist and digital dentistry expert. She founded the Digital Smile Institute and has trained thousands of dentists in CAD/CAM technology and smile design. Her innovative approach to combining aesthetics with technology has made her one of the most influential dentists of her generation.".to_string(),
            profile_image_url: "https://images.unsplash.com/photo-1551836022-d5d88e9218df?w=400&h=400&fit=crop&crop=face".to_string(),
            achievements: strings(&[
                "Founder of Digital Smile Institute",
                "Winner of Smile Design Award 2023",
                "Author of \"The Digital Smile Revolution\"",
                "Key Opinion Leader for Cerec & Invisalign",
            ]),
            social_links: SocialLinks {
                linkedin: Some("https://linkedin.com".to_string()),
                twitter: Some("https://twitter.com".to_string()),
                research_gate: None,
            },
            topics_covered: strings(&[
                "Digital Smile Design",
                "CAD/CAM Dentistry",
                "Veneer Techniques",
            ]),
            institution: "Digital Smile Institute".to_string(),
            years_experience: 16,
        },
    ]
}

pub fn mock_reviews() -> Vec<Review> {
    vec![
        Review {
            id: "1".to_string(),
            attendee_name: "Dr. Robert Williams".to_string(),
            attendee_credential: "DDS, Private Practice Owner".to_string(),
            attendee_photo_url: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=100&h=100&fit=crop&crop=face".to_string(),
            rating: 5,
            review_text: "This was the most comprehensive dental education event I've ever attended. The speakers were world-class and the interactive Q&A sessions were invaluable. I've already implemented several techniques in my practice.".to_string(),
            event_date: "2025-11-15".to_string(),
            verified: true,
        },
        Review {
            id: "2".to_string(),
            attendee_name: "Dr. Lisa Chang".to_string(),
            attendee_credential: "DMD, Prosthodontist".to_string(),
            attendee_photo_url: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=100&h=100&fit=crop&crop=face".to_string(),
            rating: 5,
            review_text: "Absolutely transformative experience! Dr. Mitchell's session on digital implant planning alone was worth the entire registration fee. The networking opportunities were exceptional.".to_string(),
            event_date: "2025-11-15".to_string(),
            verified: true,
        },
        Review {
            id: "3".to_string(),
            attendee_name: "Dr. Ahmed Hassan".to_string(),
            attendee_credential: "BDS, MDS, Endodontist".to_string(),
            attendee_photo_url: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=100&h=100&fit=crop&crop=face".to_string(),
            rating: 5,
            review_text: "The quality of instruction was unparalleled. Every minute of the 12 hours was packed with actionable insights. The materials kit and certificate were beautiful bonuses.".to_string(),
            event_date: "2025-08-20".to_string(),
            verified: true,
        },
        Review {
            id: "4".to_string(),
            attendee_name: "Dr. Maria Santos".to_string(),
            attendee_credential: "DDS, Periodontist".to_string(),
            attendee_photo_url: "https://images.unsplash.com/photo-1544005313-94ddf0286df2?w=100&h=100&fit=crop&crop=face".to_string(),
            rating: 5,
            review_text: "As a specialist, I was skeptical about what I could learn from a general masterclass. I was completely wrong - the advanced techniques shared here opened new horizons for my practice.".to_string(),
            event_date: "2025-08-20".to_string(),
            verified: true,
        },
        Review {
            id: "5".to_string(),
            attendee_name: "Dr. David Kim".to_string(),
            attendee_credential: "DMD, General Dentist".to_string(),
            attendee_photo_url: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=100&h=100&fit=crop&crop=face".to_string(),
            rating: 5,
            review_text: "Best investment in my dental career. The knowledge I gained has directly translated to better patient outcomes and increased practice revenue. Highly recommend!".to_string(),
            event_date: "2025-05-10".to_string(),
            verified: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn event_capacity_figures() {
        let event = mock_event();
        assert_eq!(event.base_price, 499);
        assert_eq!(event.max_capacity, 500);
        assert_eq!(event.current_registrations, 342);
        assert_eq!(event.spots_left(), 158);
        assert_eq!(event.long_date(), "February 15, 2026");
    }

    #[test]
    fn five_dentists_with_unique_ids() {
        let dentists = mock_dentists();
        assert_eq!(dentists.len(), 5);
        let ids: HashSet<_> = dentists.iter().map(|d| d.id.clone()).collect();
        assert_eq!(ids.len(), 5);
        for dentist in &dentists {
            assert_eq!(dentist.achievements.len(), 4);
            assert_eq!(dentist.topics_covered.len(), 3);
        }
    }

    #[test]
    fn reviews_are_five_star_and_verified() {
        let reviews = mock_reviews();
        assert_eq!(reviews.len(), 5);
        for review in &reviews {
            assert_eq!(review.rating, 5);
            assert!(review.verified);
        }
    }

    #[test]
    fn country_selects_have_expected_shape() {
        assert_eq!(COUNTRIES.len(), 29);
        assert_eq!(COUNTRIES[0], "United States");
        assert_eq!(COUNTRIES[28], "Other");
        assert_eq!(COUNTRY_CODES.len(), 12);
        assert_eq!(COUNTRY_CODES[0], ("+1", "US/CA"));
    }
}
