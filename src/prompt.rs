//! Prompt assembly: wraps the corpus text and the user's question in a fixed
//! instruction template.
//!
//! The template constrains the model to the supplied documents and demands a
//! structured answer (authority level, legal basis, conclusion). Assembly never
//! refuses: an empty corpus still produces a prompt, and the template's
//! "not found" clause covers the no-information case.
//!
//! The question is interpolated without escaping. A crafted question could
//! imitate the document delimiters and break out of the intended structure;
//! see DESIGN.md for the recorded decision on this known risk.

pub const DOCUMENTS_BEGIN: &str = "=== BEGIN DOCUMENTS ===";
pub const DOCUMENTS_END: &str = "=== END DOCUMENTS ===";

/// Built-in instruction template, overridable via `[prompt].instructions`.
pub const DEFAULT_INSTRUCTIONS: &str = "\
You are a legal assistant. Answer the question using ONLY the documents above.
Do not use outside knowledge. Structure the answer as:
1. Authority level (which level of authority is competent, if applicable)
2. Legal basis (cite the specific articles or passages from the documents)
3. Conclusion (a short, direct answer)
If the documents contain no matching information, reply exactly that the
information was not found in the provided documents.";

/// Builds the full prompt with the built-in instruction template.
pub fn build_prompt(corpus_text: &str, question: &str) -> String {
    build_prompt_with(DEFAULT_INSTRUCTIONS, corpus_text, question)
}

/// Builds the full prompt with a caller-supplied instruction template.
pub fn build_prompt_with(instructions: &str, corpus_text: &str, question: &str) -> String {
    format!(
        "{begin}\n{corpus}\n{end}\n\n{instructions}\n\nQuestion: {question}",
        begin = DOCUMENTS_BEGIN,
        corpus = corpus_text,
        end = DOCUMENTS_END,
        instructions = instructions,
        question = question,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corpus_sits_between_delimiters() {
        let prompt = build_prompt("Điều 5: thẩm quyền cấp xã.", "Cấp nào?");
        let begin = prompt.find(DOCUMENTS_BEGIN).unwrap();
        let body = prompt.find("Điều 5: thẩm quyền cấp xã.").unwrap();
        let end = prompt.find(DOCUMENTS_END).unwrap();
        assert!(begin < body && body < end);
    }

    #[test]
    fn question_appears_after_instructions() {
        let prompt = build_prompt("body", "what is the rule?");
        assert!(prompt.ends_with("Question: what is the rule?"));
    }

    #[test]
    fn empty_corpus_still_produces_a_prompt() {
        let prompt = build_prompt("", "anything?");
        assert!(prompt.contains(DOCUMENTS_BEGIN));
        assert!(prompt.contains("not found in the provided documents"));
        assert!(prompt.contains("anything?"));
    }

    #[test]
    fn template_forbids_outside_knowledge() {
        let prompt = build_prompt("x", "y");
        assert!(prompt.contains("Do not use outside knowledge"));
    }

    #[test]
    fn custom_instructions_replace_the_template() {
        let prompt = build_prompt_with("Answer in one word.", "body", "q?");
        assert!(prompt.contains("Answer in one word."));
        assert!(!prompt.contains("legal assistant"));
        assert!(prompt.contains(DOCUMENTS_BEGIN));
    }
}
