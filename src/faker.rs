//! Word-pool text faker
//!
//! Realistic-looking names, companies, addresses and filler text built from
//! fixed pools and the caller's random source, so a seeded run is fully
//! reproducible.

use crate::sampling::choose;
use rand::Rng;

const FIRST_NAMES: [&str; 40] = [
    "James", "Mary", "Robert", "Patricia", "John",
    "Jennifer", "Michael", "Linda", "David", "Elizabeth",
    "William", "Barbara", "Richard", "Susan", "Joseph",
    "Jessica", "Thomas", "Sarah", "Charles", "Karen",
    "Daniel", "Lisa", "Matthew", "Nancy", "Anthony",
    "Sandra", "Mark", "Ashley", "Steven", "Kimberly",
    "Andrew", "Emily", "Kenji", "Priya", "Carlos",
    "Fatima", "Mateo", "Nadia", "Viktor", "Yuki",
];

const LAST_NAMES: [&str; 40] = [
    "Smith", "Johnson", "Williams", "Brown", "Jones",
    "Garcia", "Miller", "Davis", "Rodriguez", "Martinez",
    "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson",
    "Thomas", "Taylor", "Moore", "Jackson", "Martin",
    "Lee", "Perez", "Thompson", "White", "Harris",
    "Sanchez", "Clark", "Ramirez", "Lewis", "Robinson",
    "Walker", "Young", "Allen", "King", "Wright",
    "Scott", "Torres", "Nguyen", "Hill", "Flores",
];

const COMPANY_SUFFIXES: [&str; 8] = [
    "Inc", "LLC", "Group", "Corporation", "Systems", "Technologies", "and Sons", "Ltd",
];

const STREET_SUFFIXES: [&str; 10] = [
    "Street", "Avenue", "Road", "Boulevard", "Lane",
    "Drive", "Court", "Way", "Parkway", "Place",
];

const CITIES: [&str; 30] = [
    "Arlington", "Huntsville", "San Diego", "Norfolk", "Colorado Springs",
    "Dayton", "Tampa", "Fort Worth", "Reston", "Herndon",
    "Oklahoma City", "Albuquerque", "Tucson", "Jacksonville", "Charleston",
    "Fayetteville", "Killeen", "Omaha", "Ogden", "Warner Robins",
    "Melbourne", "Bethesda", "Chantilly", "Columbia", "Boston",
    "Seattle", "Denver", "Austin", "Pittsburgh", "Orlando",
];

const STATE_ABBRS: [&str; 50] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA",
    "HI", "ID", "IL", "IN", "IA", "KS", "KY", "LA", "ME", "MD",
    "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ",
    "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC",
    "SD", "TN", "TX", "UT", "VT", "VA", "WA", "WV", "WI", "WY",
];

const EMAIL_DOMAINS: [&str; 5] = [
    "example.com", "example.org", "example.net", "mail.example.com", "contractor.example.com",
];

const TLDS: [&str; 4] = ["com", "net", "org", "biz"];

const JOBS: [&str; 20] = [
    "Business Development Manager", "Contracts Manager", "Program Director",
    "Capture Manager", "Chief Financial Officer", "Operations Manager",
    "Systems Engineer", "Proposal Manager", "Account Executive",
    "Director of Government Relations", "Pricing Analyst", "Chief Executive Officer",
    "Project Coordinator", "Logistics Manager", "Security Officer",
    "Quality Manager", "Supply Chain Analyst", "Software Architect",
    "Compliance Officer", "Vice President of Sales",
];

const BS_VERBS: [&str; 20] = [
    "implement", "utilize", "integrate", "streamline", "optimize",
    "evolve", "transform", "embrace", "enable", "orchestrate",
    "leverage", "reinvent", "aggregate", "architect", "enhance",
    "incentivize", "morph", "empower", "envisioneer", "deploy",
];

const BS_ADJECTIVES: [&str; 20] = [
    "clicks-and-mortar", "value-added", "vertical", "proactive", "robust",
    "revolutionary", "scalable", "leading-edge", "innovative", "intuitive",
    "strategic", "e-business", "mission-critical", "sticky", "one-to-one",
    "24/7", "end-to-end", "global", "granular", "frictionless",
];

const BS_NOUNS: [&str; 20] = [
    "synergies", "web-readiness", "paradigms", "markets", "partnerships",
    "infrastructures", "platforms", "initiatives", "channels", "eyeballs",
    "communities", "ROI", "solutions", "e-tailers", "action-items",
    "portals", "niches", "technologies", "content", "supply-chains",
];

const CATCH_ADJECTIVES: [&str; 20] = [
    "Adaptive", "Advanced", "Automated", "Balanced", "Centralized",
    "Configurable", "Cross-platform", "Decentralized", "Distributed", "Enhanced",
    "Ergonomic", "Focused", "Integrated", "Managed", "Multi-layered",
    "Networked", "Optimized", "Persistent", "Secured", "Synchronized",
];

const CATCH_DESCRIPTORS: [&str; 20] = [
    "24hour", "asymmetric", "bi-directional", "client-driven", "coherent",
    "dedicated", "dynamic", "explicit", "fault-tolerant", "heuristic",
    "hybrid", "interactive", "logistical", "modular", "multimedia",
    "real-time", "scalable", "systematic", "tangible", "zero-defect",
];

const CATCH_NOUNS: [&str; 20] = [
    "ability", "algorithm", "architecture", "capability", "circuit",
    "database", "encoding", "firmware", "framework", "hierarchy",
    "infrastructure", "interface", "matrix", "model", "neural-net",
    "paradigm", "protocol", "solution", "system engine", "toolset",
];

const LOREM: [&str; 40] = [
    "field", "budget", "review", "support", "mission", "report", "system",
    "program", "cost", "schedule", "deliver", "require", "provide", "analysis",
    "team", "contract", "office", "plan", "design", "test", "update", "period",
    "funding", "performance", "agency", "vendor", "quality", "data", "phase",
    "option", "scope", "labor", "travel", "material", "invoice", "estimate",
    "milestone", "award", "task", "order",
];

pub fn first_name<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    *choose(&FIRST_NAMES, rng)
}

pub fn last_name<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    *choose(&LAST_NAMES, rng)
}

pub fn name<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{} {}", first_name(rng), last_name(rng))
}

pub fn company<R: Rng + ?Sized>(rng: &mut R) -> String {
    match rng.gen_range(0..3) {
        0 => format!("{} {}", last_name(rng), choose(&COMPANY_SUFFIXES, rng)),
        1 => format!("{}-{}", last_name(rng), last_name(rng)),
        _ => format!("{}, {} and {}", last_name(rng), last_name(rng), last_name(rng)),
    }
}

/// Lowercase alphanumeric slug of a company name, used for domains
fn slug(name: &str) -> String {
    let mut slug: String = name
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty() && !part.eq_ignore_ascii_case("and"))
        .take(2)
        .collect::<Vec<_>>()
        .join("-")
        .to_ascii_lowercase();
    if slug.is_empty() {
        slug.push_str("company");
    }
    slug
}

pub fn domain_for<R: Rng + ?Sized>(company: &str, rng: &mut R) -> String {
    format!("{}.{}", slug(company), choose(&TLDS, rng))
}

pub fn url<R: Rng + ?Sized>(company: &str, rng: &mut R) -> String {
    format!("https://www.{}/", domain_for(company, rng))
}

pub fn company_email<R: Rng + ?Sized>(company: &str, rng: &mut R) -> String {
    format!("{}@{}", first_name(rng).to_ascii_lowercase(), domain_for(company, rng))
}

pub fn email<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{}.{}{}@{}",
        first_name(rng).to_ascii_lowercase(),
        last_name(rng).to_ascii_lowercase(),
        rng.gen_range(1..100),
        choose(&EMAIL_DOMAINS, rng)
    )
}

pub fn phone_number<R: Rng + ?Sized>(rng: &mut R) -> String {
    let area = rng.gen_range(201..990);
    let exchange = rng.gen_range(200..1000);
    let line = rng.gen_range(0..10_000);
    match rng.gen_range(0..3) {
        0 => format!("({}){}-{:04}", area, exchange, line),
        1 => format!("{}-{}-{:04}", area, exchange, line),
        _ => format!("+1-{}-{}-{:04}x{}", area, exchange, line, rng.gen_range(100..1000)),
    }
}

pub fn street_address<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{} {} {}",
        rng.gen_range(100..10_000),
        last_name(rng),
        choose(&STREET_SUFFIXES, rng)
    )
}

pub fn city<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    *choose(&CITIES, rng)
}

pub fn state_abbr<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    *choose(&STATE_ABBRS, rng)
}

pub fn zipcode<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{:05}", rng.gen_range(501..99_951))
}

/// Single-line mailing address: street, city, state and zip
pub fn address<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{}, {}, {} {}",
        street_address(rng),
        city(rng),
        state_abbr(rng),
        zipcode(rng)
    )
}

pub fn job<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    *choose(&JOBS, rng)
}

/// Business jargon, e.g. "streamline scalable platforms"
pub fn bs<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{} {} {}",
        choose(&BS_VERBS, rng),
        choose(&BS_ADJECTIVES, rng),
        choose(&BS_NOUNS, rng)
    )
}

pub fn catch_phrase<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{} {} {}",
        choose(&CATCH_ADJECTIVES, rng),
        choose(&CATCH_DESCRIPTORS, rng),
        choose(&CATCH_NOUNS, rng)
    )
}

/// Capitalized sentence of 4 to 10 words ending in a period
pub fn sentence<R: Rng + ?Sized>(rng: &mut R) -> String {
    let count = rng.gen_range(4..=10);
    let words: Vec<&str> = (0..count).map(|_| *choose(&LOREM, rng)).collect();
    let mut text = words.join(" ");
    if let Some(first) = text.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    text.push('.');
    text
}

pub fn paragraph<R: Rng + ?Sized>(sentences: usize, rng: &mut R) -> String {
    (0..sentences.max(1))
        .map(|_| sentence(rng))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_name_has_two_parts() {
        let mut rng = StdRng::seed_from_u64(1);
        let n = name(&mut rng);
        assert_eq!(n.split(' ').count(), 2);
    }

    #[test]
    fn test_sentence_shape() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..50 {
            let s = sentence(&mut rng);
            assert!(s.ends_with('.'));
            assert!(s.chars().next().unwrap().is_ascii_uppercase());
            let words = s.split(' ').count();
            assert!((4..=10).contains(&words));
        }
    }

    #[test]
    fn test_paragraph_sentence_count() {
        let mut rng = StdRng::seed_from_u64(3);
        let p = paragraph(3, &mut rng);
        assert_eq!(p.matches('.').count(), 3);
    }

    #[test]
    fn test_company_contacts_share_domain_shape() {
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..50 {
            let c = company(&mut rng);
            let email = company_email(&c, &mut rng);
            assert_eq!(email.matches('@').count(), 1);
            assert!(url(&c, &mut rng).starts_with("https://www."));
        }
    }

    #[test]
    fn test_zipcode_and_state() {
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(zipcode(&mut rng).len(), 5);
        assert_eq!(state_abbr(&mut rng).len(), 2);
        assert!(!address(&mut rng).contains('\n'));
    }
}
