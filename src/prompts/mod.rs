// NOTE:
// The persona is written in French and asks for Malagasy output.
// Keep both files in sync with the frontend copy if the wording changes.

macro_rules! prompt_file {
    ($lang:literal, $name:literal) => {
        include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/lang/",
            $lang,
            "/",
            $name
        ))
    };
}

const SYSTEM_INSTRUCTION: &str = prompt_file!("mg", "system_instruction.txt");

const EXPLAIN_PREFIX: &str =
    "Explique cet article du Code Civil Malgache de façon simple et pédagogique en Malagasy :";

pub fn system_instruction() -> &'static str {
    SYSTEM_INSTRUCTION.trim()
}

/// Wraps the user's article in the fixed explanation request.
pub fn explain_prompt(text: &str) -> String {
    format!("{EXPLAIN_PREFIX}\n\n{text}")
}
