//! Filename classification
//!
//! Maps a filename to a one-line, human-readable guess at what the file is
//! for. Rules are checked top to bottom and the first hit wins, so a name
//! like `google-auth-callback.js` is labeled by the `auth` rule and never
//! reaches the `callback` rule below it.

use std::path::Path;

/// Label returned when no rule matches.
pub const FALLBACK_LABEL: &str = "Code file";

/// Directory name that switches `index.js`/`index.ts` between the
/// homepage and entry-point labels.
const PAGES_DIR: &str = "pages";

/// How a rule tests the lower-cased filename.
#[derive(Debug, Clone, Copy)]
pub enum Pattern {
    /// Name equals any of the given names.
    Exact(&'static [&'static str]),
    /// Name contains any of the given substrings.
    Contains(&'static [&'static str]),
    /// Name ends with the given suffix.
    Suffix(&'static str),
    /// Name equals `name` and the full path does (or does not) have a
    /// `pages` directory component.
    ExactWithPages { name: &'static str, in_pages: bool },
}

impl Pattern {
    fn matches(&self, name: &str, path: &Path) -> bool {
        match *self {
            Pattern::Exact(names) => names.contains(&name),
            Pattern::Contains(needles) => needles.iter().any(|n| name.contains(n)),
            Pattern::Suffix(suffix) => name.ends_with(suffix),
            Pattern::ExactWithPages { name: expected, in_pages } => {
                name == expected && has_pages_component(path) == in_pages
            }
        }
    }
}

/// A single entry in the rule table.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub pattern: Pattern,
    pub label: &'static str,
}

const fn exact(names: &'static [&'static str], label: &'static str) -> Rule {
    Rule {
        pattern: Pattern::Exact(names),
        label,
    }
}

const fn contains(needles: &'static [&'static str], label: &'static str) -> Rule {
    Rule {
        pattern: Pattern::Contains(needles),
        label,
    }
}

/// Ordered rule table. Reordering changes which label overlapping names get.
pub static RULES: &[Rule] = &[
    // Config files
    exact(
        &[".env", ".env.local"],
        "Environment variables (passwords, API keys)",
    ),
    exact(&[".gitignore"], "Files Git should ignore"),
    exact(&[".gitattributes"], "Git file handling settings"),
    exact(&["package.json"], "Project dependencies and scripts"),
    exact(&["package-lock.json"], "Locked dependency versions"),
    exact(&["tsconfig.json"], "TypeScript settings"),
    exact(&["next.config.js"], "Next.js framework settings"),
    exact(
        &["vercel.json"],
        "Vercel deployment settings (cron jobs, routes)",
    ),
    exact(
        &["next-env.d.ts"],
        "Next.js TypeScript definitions (auto-generated)",
    ),
    // Documentation
    exact(&["readme.md"], "Project documentation"),
    exact(&["deployment.md"], "Deployment instructions"),
    // Database
    contains(&["sql"], "Database setup/queries"),
    contains(&["seed"], "Fills database with test data"),
    contains(&["clean-db"], "Clears database"),
    contains(&["verify-db"], "Checks database is working"),
    contains(&["supabase"], "Database connection"),
    // Auth. "google-auth" is shadowed by "auth" but kept as listed.
    contains(&["auth", "google-auth"], "Google login/authentication"),
    contains(&["callback"], "Handles OAuth redirect after login"),
    contains(&["url.js"], "Generates login URL"),
    // Core features
    contains(&["calendar"], "Google Calendar integration"),
    contains(&["classification"], "Sorts/categorizes emails using AI"),
    contains(&["embeddings"], "Converts text to AI-searchable format"),
    contains(&["scheduling"], "Books meetings/appointments"),
    contains(&["threading"], "Groups related emails together"),
    contains(&["ingestion", "ingest"], "Pulls in emails/data for processing"),
    contains(&["morning-brief", "daily-brief"], "Sends daily summary email"),
    contains(&["security"], "Security helpers (encryption, signing)"),
    // Agent
    contains(&["logic"], "Main sales agent brain"),
    contains(&["commands"], "Agent actions/commands"),
    contains(&["conflict"], "Handles scheduling conflicts"),
    // Pages
    Rule {
        pattern: Pattern::ExactWithPages {
            name: "index.js",
            in_pages: true,
        },
        label: "Homepage",
    },
    Rule {
        pattern: Pattern::ExactWithPages {
            name: "index.ts",
            in_pages: false,
        },
        label: "Main entry point",
    },
    // Utilities
    contains(&["setup"], "Initial setup script"),
    contains(&["test"], "Testing script"),
    Rule {
        pattern: Pattern::Suffix(".bak"),
        label: "Backup file",
    },
];

fn has_pages_component(path: &Path) -> bool {
    path.components().any(|c| c.as_os_str() == PAGES_DIR)
}

/// Describe a file from its name, consulting `full_path` only for the
/// `pages` directory check.
///
/// Total over all inputs: anything unmatched (including the empty name)
/// gets [`FALLBACK_LABEL`].
pub fn classify(filename: &str, full_path: &Path) -> &'static str {
    let name = filename.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.pattern.matches(&name, full_path))
        .map_or(FALLBACK_LABEL, |rule| rule.label)
}
