// src/strategy.rs
// Static catalog of paragraph-division strategies.

/// A named configuration of rules controlling how the completion service
/// should decide paragraph breaks. Catalog entries live for the process
/// lifetime and are never mutated.
#[derive(Debug)]
pub struct Strategy {
    pub id: &'static str,
    pub description: &'static str,
    pub rules: &'static [&'static str],
}

static SEMANTIC: Strategy = Strategy {
    id: "semantic",
    description: "Divide by meaning and logical topics",
    rules: &[
        "Analyze the meaning and themes of the text",
        "Split paragraphs at natural topic transition points",
        "Each paragraph must have a clear and complete main idea",
        "Prioritize logical connection over sentence count",
        "Create paragraphs with appropriate length for the content",
    ],
};

static BALANCED: Strategy = Strategy {
    id: "balanced",
    description: "Balance between meaning and length",
    rules: &[
        "Divide by meaning but try to keep paragraphs relatively even in length",
        "Each paragraph should have 2-4 sentences, unless logic requires otherwise",
        "Find balance between coherence and length",
        "Prioritize meaning when there's conflict with length",
    ],
};

static DETAILED: Strategy = Strategy {
    id: "detailed",
    description: "Detailed breakdown for readability",
    rules: &[
        "Split into many short paragraphs for easy reading",
        "Each paragraph focuses on one specific aspect",
        "Create many natural stopping points for readers",
        "Suitable for long and complex texts",
    ],
};

impl Strategy {
    /// Lookup by id. Unknown ids resolve to "semantic"; the lookup is
    /// total by policy, never an error.
    pub fn resolve(id: &str) -> &'static Strategy {
        match id {
            "balanced" => &BALANCED,
            "detailed" => &DETAILED,
            _ => &SEMANTIC,
        }
    }

    /// The closed set of valid strategy ids, in catalog order.
    pub fn ids() -> &'static [&'static str] {
        &["semantic", "balanced", "detailed"]
    }

    pub fn all() -> [&'static Strategy; 3] {
        [&SEMANTIC, &BALANCED, &DETAILED]
    }
}
