//! Company profiling: heuristic size tier, industry tag, and hiring-focus narrative.
//!
//! Everything here is a lookup over static name/keyword tables. Results are
//! heuristics and are flagged as such on the assembled record.

use serde::{Deserialize, Serialize};

/// Placeholder stored on an analysis when no company was supplied.
pub const NOT_SPECIFIED: &str = "Not specified";
pub const DEFAULT_INDUSTRY: &str = "Technology Services";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SizeCategory {
    Enterprise,
    #[serde(rename = "Mid-size")]
    MidSize,
    Startup,
    Unknown,
}

impl SizeCategory {
    pub fn label(&self) -> &'static str {
        match self {
            SizeCategory::Enterprise => "Enterprise",
            SizeCategory::MidSize => "Mid-size",
            SizeCategory::Startup => "Startup",
            SizeCategory::Unknown => "Unknown",
        }
    }

    pub fn employee_range(&self) -> &'static str {
        match self {
            SizeCategory::Enterprise => "2000+",
            SizeCategory::MidSize => "200-2000",
            SizeCategory::Startup => "<200",
            SizeCategory::Unknown => "N/A",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub category: SizeCategory,
    pub label: String,
    pub range: String,
}

impl From<SizeCategory> for CompanyProfile {
    fn from(category: SizeCategory) -> Self {
        Self {
            category,
            label: category.label().to_string(),
            range: category.employee_range().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HiringFocus {
    pub title: String,
    pub points: Vec<String>,
    pub tip: String,
}

const KNOWN_ENTERPRISES: &[&str] = &[
    "amazon", "google", "microsoft", "meta", "facebook", "apple", "netflix", "uber", "airbnb",
    "infosys", "tcs", "wipro", "cognizant", "accenture", "capgemini", "hcl", "tech mahindra",
    "ibm", "oracle", "salesforce", "adobe", "intel", "cisco", "vmware", "dell", "hp",
    "deloitte", "kpmg", "ey", "pwc", "mckinsey", "bcg", "bain",
    "jpmorgan", "goldman sachs", "morgan stanley", "barclays", "citi", "hsbc",
    "walmart", "target", "costco", "flipkart", "paytm", "phonepe", "razorpay",
    "samsung", "lg", "sony", "qualcomm", "nvidia", "amd",
    "zoho", "freshworks", "atlassian", "servicenow", "workday", "splunk",
    "paypal", "stripe", "square", "visa", "mastercard",
    "twitter", "linkedin", "snap", "pinterest", "spotify", "slack",
    "boeing", "lockheed", "northrop", "raytheon",
    "johnson & johnson", "pfizer", "novartis", "roche",
    "reliance", "tata", "mahindra", "birla", "adani", "hdfc", "icici",
];

const KNOWN_MIDSIZE: &[&str] = &[
    "zomato", "swiggy", "dunzo", "meesho", "cred", "groww", "zerodha", "upstox",
    "byju", "unacademy", "vedantu", "toppr", "whitehat",
    "oyo", "makemytrip", "yatra", "cleartrip", "goibibo",
    "ola", "rapido", "bounce", "vogo",
    "dream11", "mpl", "games24x7",
    "postman", "hasura", "browserstack", "druva", "icertis",
    "nykaa", "myntra", "ajio", "lenskart", "firstcry",
    "practo", "pharmeasy", "1mg", "netmeds",
    "cars24", "spinny", "droom", "cardekho",
    "urban company", "housejoy",
    "slice", "jupiter", "fi", "niyo",
];

/// Industry → keywords, scanned in order; first hit wins.
const INDUSTRY_KEYWORDS: &[(&str, &[&str])] = &[
    ("E-commerce", &["ecommerce", "e-commerce", "retail", "shopping", "cart", "marketplace"]),
    ("Fintech", &["fintech", "banking", "payment", "finance", "trading", "investment", "insurance", "lending"]),
    ("Healthcare", &["health", "medical", "pharma", "hospital", "clinical", "biotech", "diagnostic"]),
    ("EdTech", &["education", "learning", "edtech", "course", "tutorial", "student", "academic"]),
    ("SaaS", &["saas", "software as a service", "cloud platform", "b2b", "enterprise software"]),
    ("Social Media", &["social", "media", "content", "community", "networking", "influencer"]),
    ("Gaming", &["gaming", "game", "esports", "fantasy", "entertainment"]),
    ("Logistics", &["logistics", "delivery", "shipping", "supply chain", "warehouse", "fleet"]),
    ("Travel", &["travel", "hotel", "flight", "booking", "tourism", "hospitality"]),
    ("Mobility", &["mobility", "ride", "cab", "transport", "vehicle", "automotive"]),
    ("Consulting", &["consulting", "advisory", "strategy", "management consulting"]),
    ("Manufacturing", &["manufacturing", "industrial", "production", "assembly", "factory"]),
];

struct HiringFocusTemplate {
    title: &'static str,
    points: [&'static str; 5],
    tip: &'static str,
}

const ENTERPRISE_FOCUS: HiringFocusTemplate = HiringFocusTemplate {
    title: "Structured Process",
    points: [
        "Heavy emphasis on DSA & algorithmic problem-solving",
        "Core CS fundamentals (OS, DBMS, Networks)",
        "System design for experienced roles",
        "Multiple interview rounds with standardized evaluation",
        "Behavioral assessments using STAR method",
    ],
    tip: "Prepare thoroughly for DSA - most enterprise companies have online assessments as initial filters.",
};

const MIDSIZE_FOCUS: HiringFocusTemplate = HiringFocusTemplate {
    title: "Balanced Approach",
    points: [
        "Mix of DSA and practical coding challenges",
        "Focus on relevant tech stack proficiency",
        "Project discussions and architecture decisions",
        "Cultural fit and growth mindset evaluation",
        "May include take-home assignments",
    ],
    tip: "Balance DSA prep with hands-on project work - mid-size companies value practical experience.",
};

const STARTUP_FOCUS: HiringFocusTemplate = HiringFocusTemplate {
    title: "Practical & Fast-paced",
    points: [
        "Emphasis on practical problem-solving ability",
        "Deep stack knowledge over breadth",
        "Real-world coding exercises or pair programming",
        "Quick iteration and ownership mindset",
        "Culture fit is often weighted heavily",
    ],
    tip: "Showcase your ability to build and ship quickly - startups value doers over theorists.",
};

const UNKNOWN_FOCUS: HiringFocusTemplate = HiringFocusTemplate {
    title: "General Preparation",
    points: [
        "Cover DSA fundamentals for technical rounds",
        "Prepare project explanations thoroughly",
        "Review core CS concepts",
        "Practice behavioral questions",
        "Research the specific company before interview",
    ],
    tip: "Research the company to understand their interview style before the interview day.",
};

/// Classifies a company by name against the enterprise and mid-size lists.
///
/// Matching is bidirectional substring containment, enterprise list first.
/// Short names can collide with unrelated entries ("ey" inside "jersey");
/// that looseness is accepted. Unlisted names are treated as startups.
pub fn classify_size(name: &str) -> CompanyProfile {
    let normalized = name.trim().to_lowercase();
    if normalized.is_empty() || name.trim() == NOT_SPECIFIED {
        return SizeCategory::Unknown.into();
    }

    let listed = |list: &[&str]| {
        list.iter()
            .any(|entry| normalized.contains(entry) || entry.contains(normalized.as_str()))
    };

    if listed(KNOWN_ENTERPRISES) {
        SizeCategory::Enterprise.into()
    } else if listed(KNOWN_MIDSIZE) {
        SizeCategory::MidSize.into()
    } else {
        SizeCategory::Startup.into()
    }
}

/// Returns the first industry whose keyword appears in `name + jd_text`.
pub fn infer_industry(name: &str, jd_text: &str) -> String {
    let combined = format!("{name} {jd_text}").to_lowercase();

    INDUSTRY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| combined.contains(kw)))
        .map(|(industry, _)| industry.to_string())
        .unwrap_or_else(|| DEFAULT_INDUSTRY.to_string())
}

pub fn hiring_focus(size: SizeCategory) -> HiringFocus {
    let template = match size {
        SizeCategory::Enterprise => &ENTERPRISE_FOCUS,
        SizeCategory::MidSize => &MIDSIZE_FOCUS,
        SizeCategory::Startup => &STARTUP_FOCUS,
        SizeCategory::Unknown => &UNKNOWN_FOCUS,
    };
    HiringFocus {
        title: template.title.to_string(),
        points: template.points.iter().map(|p| p.to_string()).collect(),
        tip: template.tip.to_string(),
    }
}
