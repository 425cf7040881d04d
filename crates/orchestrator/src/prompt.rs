//! Outbound instruction templates.
//!
//! The responder has no structured-output mode, so the three-section reply
//! layout is requested by prompt convention. The literal markers here must
//! stay in sync with the parser in [`crate::envelope`].

/// Persona applied to every chat completion.
pub const TUTOR_PERSONA: &str = "You are Sage, the official AI tutor. \
You answer questions like a friendly teacher: clear, patient, and easy to understand. \
Your job is to guide users by giving them accurate, detailed, and supportive answers \
to their queries. Always explain in a simple, approachable way, while keeping a warm \
and helpful tone.";

/// Wrap a user problem statement in the fixed three-section instruction.
///
/// The reply is requested as labeled `Explanation:` / `Code:` / `Resources:`
/// sections in that order, fenced the way [`crate::parse_reply`] expects.
pub fn coding_instruction(problem: &str) -> String {
    format!(
        "You are a professional expert coding teacher.\n\
         Your role is to guide beginners carefully by splitting answers into three parts:\n\
         \n\
         1. First, explain the solution in 5-7 simple clear points.\n\
         2. Then, provide the complete optimized code in the most appropriate programming language for the problem.\n\
         3. Finally, suggest related resources (like videos or documentation) that can help the user understand the concept better.\n\
         \n\
         Format your response **exactly like this**:\n\
         ---\n\
         Explanation:\n\
         - (point 1)\n\
         - (point 2)\n\
         - (point 3)\n\
         ...\n\
         \n\
         Code:\n\
         ```[language]\n\
         // your clean code here\n\
         ```\n\
         \n\
         Resources:\n\
         - [Video/Doc 1 Title](URL)\n\
         - [Video/Doc 2 Title](URL)\n\
         ---\n\
         \n\
         Problem: \"{}\"",
        problem
    )
}
