//! Keyword to icon matching for slide titles
//!
//! The table is an ordered association list. Lookup lower-cases the title and
//! returns the glyph of the first keyword contained in it, so earlier entries
//! win when several keywords appear.

/// Ordered keyword table (lowercase keyword, glyph)
pub static ICON_TABLE: &[(&str, &str)] = &[
    // Introduction & overview
    ("introduction", "📊"),
    ("overview", "👁️"),
    ("agenda", "📋"),
    ("outline", "📝"),
    // Business & strategy
    ("strategy", "🎯"),
    ("business", "💼"),
    ("market", "📈"),
    ("trading", "💹"),
    ("finance", "💰"),
    ("investment", "💵"),
    ("sales", "🤝"),
    ("marketing", "📢"),
    // Analysis & data
    ("analysis", "🔍"),
    ("data", "📊"),
    ("statistics", "📉"),
    ("metrics", "📏"),
    ("report", "📄"),
    ("research", "🔬"),
    // Technology
    ("technology", "💻"),
    ("ai", "🤖"),
    ("artificial intelligence", "🤖"),
    ("machine learning", "🧠"),
    ("algorithm", "⚙️"),
    ("automation", "🔄"),
    ("digital", "📱"),
    ("software", "💾"),
    // Risk & security
    ("risk", "⚠️"),
    ("security", "🔒"),
    ("protection", "🛡️"),
    ("safety", "🦺"),
    // Growth & success
    ("growth", "📈"),
    ("success", "🏆"),
    ("achievement", "🎖️"),
    ("goals", "🎯"),
    ("target", "🎯"),
    // Future & innovation
    ("future", "🔮"),
    ("innovation", "💡"),
    ("trends", "📊"),
    ("forecast", "🌤️"),
    ("prediction", "🔮"),
    // Communication
    ("communication", "💬"),
    ("team", "👥"),
    ("collaboration", "🤝"),
    ("meeting", "🗓️"),
    // Process & timeline
    ("process", "⚙️"),
    ("timeline", "📅"),
    ("roadmap", "🗺️"),
    ("workflow", "🔄"),
    // Results & conclusion
    ("results", "✅"),
    ("conclusion", "🏁"),
    ("summary", "📝"),
    ("takeaway", "🎁"),
    ("recommendation", "👍"),
    // Problems & solutions
    ("problem", "❗"),
    ("challenge", "🧗"),
    ("solution", "💡"),
    ("benefits", "✨"),
    ("advantages", "➕"),
    // Education & learning
    ("education", "🎓"),
    ("learning", "📚"),
    ("training", "🏋️"),
    ("knowledge", "🧠"),
];

/// Fallback groups checked in order when no table keyword matches
static FALLBACK_GROUPS: &[(&[&str], &str)] = &[
    (&["intro", "start", "begin", "welcome"], "📊"),
    (&["end", "conclude", "final", "summary"], "🏁"),
    (&["thank", "questions", "q&a"], "🙏"),
];

/// Find the glyph for a title, or `None` when nothing matches.
pub fn match_icon(title: &str) -> Option<&'static str> {
    let lower = title.to_lowercase();

    ICON_TABLE
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, icon)| *icon)
        .or_else(|| {
            FALLBACK_GROUPS
                .iter()
                .find(|(words, _)| words.iter().any(|word| lower.contains(word)))
                .map(|(_, icon)| *icon)
        })
}

/// Title text as shown on a slide: `"{icon}  {title}"` or the bare title.
pub fn decorate_title(title: &str) -> String {
    match match_icon(title) {
        Some(icon) => format!("{}  {}", icon, title),
        None => title.to_string(),
    }
}
