//! Prompt builders for the text generator
//!
//! Each builder produces the full instruction text sent to the generator.
//! The wording asks for plain output, but nothing downstream relies on the
//! generator obeying it.

use aidoc_model::DocumentType;

/// Prompt for the body of one section
pub fn section_prompt(topic: &str, section_title: &str, doc_type: DocumentType) -> String {
    match doc_type {
        DocumentType::Word => format!(
            "You are writing a section for a professional document about: {topic}\n\
             \n\
             Section Title: {section_title}\n\
             \n\
             Write detailed, well-structured content for this section (3-4 paragraphs).\n\
             Make it professional, informative, and engaging.\n\
             Use clear language and proper formatting.\n\
             Do not include the section title in your response.\n"
        ),
        DocumentType::Slide => format!(
            "You are creating content for a PowerPoint slide about: {topic}\n\
             \n\
             Slide Title: {section_title}\n\
             \n\
             Write concise, impactful content for this slide (4-6 bullet points).\n\
             Keep it brief and presentation-friendly.\n\
             Each point should be clear and actionable.\n\
             Do not include the slide title in your response.\n\
             Format as bullet points using • symbol.\n"
        ),
    }
}

/// Prompt to rewrite existing content following a user instruction
pub fn refine_prompt(current_content: &str, instruction: &str) -> String {
    format!(
        "Current Content:\n\
         {current_content}\n\
         \n\
         User Instruction: {instruction}\n\
         \n\
         Rewrite the content following the user's instruction.\n\
         Maintain professional quality and coherence.\n\
         Keep the same general structure unless asked to change it.\n\
         Do not add any preamble or explanation, just provide the refined content.\n"
    )
}

/// Prompt for a list of section or slide titles
pub fn outline_prompt(topic: &str, count: usize, doc_type: DocumentType) -> String {
    let (kind, container, extra_rule, example) = match doc_type {
        DocumentType::Word => (
            "section titles",
            "a professional document",
            "",
            "Introduction\nMarket Analysis\nKey Findings\nRecommendations\nConclusion",
        ),
        DocumentType::Slide => (
            "slide titles",
            "a PowerPoint presentation",
            "- Keep titles SHORT (3-7 words max)\n",
            "Introduction to AI Trading\nHow AI Analyzes Markets\nKey Trading Algorithms\nBenefits and Risks\nFuture of AI Trading",
        ),
    };

    format!(
        "Generate EXACTLY {count} {kind} for {container} about: {topic}\n\
         \n\
         IMPORTANT RULES:\n\
         - Return ONLY the {kind}\n\
         - One title per line\n\
         - NO explanations, NO introductions, NO extra text\n\
         - Start each line with just the title\n\
         - Do NOT number them\n\
         {extra_rule}\
         \n\
         Example format:\n\
         {example}\n"
    )
}
