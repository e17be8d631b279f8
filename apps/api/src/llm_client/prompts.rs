// Shared prompt fragments. Document-specific prompts live in
// generation::prompts.

/// System prompt fragment that enforces plain-text output.
pub const PLAIN_TEXT_SYSTEM: &str = "Respond with the document text only. \
    Do NOT use markdown: no headings with #, no **bold**, no code fences. \
    Do NOT include explanations, notes or apologies before or after the document.";

/// Instruction that keeps generated content tied to the applicant's own data.
pub const GROUNDING_INSTRUCTION: &str = "\
    Use only the facts provided about the candidate. \
    Do NOT invent employers, schools, dates, degrees or certifications. \
    When a detail is missing, leave it out rather than guessing.";
