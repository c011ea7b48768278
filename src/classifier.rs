//! Keyword rules that derive topic tags from item text.

pub struct TagRule {
    pub tag: &'static str,
    pub keywords: &'static [&'static str],
}

/// Keywords are lowercase; matching is a plain substring test.
pub const TAG_RULES: &[TagRule] = &[
    TagRule {
        tag: "EUDR",
        keywords: &["eudr", "deforestation regulation", "eu deforestation"],
    },
    TagRule {
        tag: "CBAM",
        keywords: &["cbam", "carbon border", "carbon adjustment mechanism"],
    },
    TagRule {
        tag: "CSRD",
        keywords: &[
            "csrd",
            "corporate sustainability reporting",
            "sustainability reporting directive",
        ],
    },
    TagRule {
        tag: "due diligence",
        keywords: &["due diligence", "diligencia debida"],
    },
    TagRule {
        tag: "deforestation",
        keywords: &["deforestation", "deforestación", "forest loss"],
    },
    TagRule {
        tag: "organic",
        keywords: &["organic", "orgánico", "organics", "ecológico"],
    },
    TagRule {
        tag: "recycled",
        keywords: &["recycled", "reciclado", "circular economy", "economía circular"],
    },
    TagRule {
        tag: "biofuels/ISCC",
        keywords: &["biofuel", "iscc", "renewable fuel", "combustible renovable"],
    },
    TagRule {
        tag: "textiles",
        keywords: &["textile", "textil", "clothing", "apparel", "ropa"],
    },
    TagRule {
        tag: "agriculture",
        keywords: &[
            "agriculture",
            "agricultural",
            "agricultura",
            "agro",
            "farming",
            "crop",
        ],
    },
    TagRule {
        tag: "forestry",
        keywords: &["forestry", "forest", "forestal", "timber", "madera"],
    },
    TagRule {
        tag: "exports/imports",
        keywords: &[
            "export",
            "import",
            "exportación",
            "importación",
            "trade",
            "comercio exterior",
            "arancel",
            "tariff",
        ],
    },
];

/// Tags whose keywords appear in `text`, in rule-table order.
pub fn classify(text: &str) -> Vec<&'static str> {
    if text.is_empty() {
        return Vec::new();
    }
    let lower = text.to_lowercase();
    TAG_RULES
        .iter()
        .filter(|rule| rule.keywords.iter().any(|kw| lower.contains(kw)))
        .map(|rule| rule.tag)
        .collect()
}

/// The full tag vocabulary, for building filter controls.
pub fn all_tags() -> Vec<&'static str> {
    TAG_RULES.iter().map(|rule| rule.tag).collect()
}

/// Source tags followed by derived tags, without duplicates.
pub fn merge_tags(source_tags: &[String], derived: &[&str]) -> Vec<String> {
    let mut merged: Vec<String> = Vec::with_capacity(source_tags.len() + derived.len());
    let candidates = source_tags.iter().map(String::as_str).chain(derived.iter().copied());
    for tag in candidates {
        if !merged.iter().any(|t| t == tag) {
            merged.push(tag.to_string());
        }
    }
    merged
}
