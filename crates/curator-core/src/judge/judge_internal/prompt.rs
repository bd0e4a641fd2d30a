use crate::model::CanonicalMode;

pub(crate) const TASK: &str = "Evaluate content as JSON";
pub(crate) const CRITERIA: &str = "JSON only. Must match schema exactly.";

pub(crate) fn mode_brief(mode: CanonicalMode) -> &'static str {
    match mode {
        CanonicalMode::Genlayer => {
            "Mode: GENLAYER PROJECT. Evaluate as a GenLayer dApp concept.\n\
             Focus on: on-chain usefulness, trust/verification, consensus/AI appropriateness, UX, feasibility, uniqueness.\n\
             Be strict about what must be on-chain vs off-chain.\n"
        }
        CanonicalMode::Startup => {
            "Mode: STARTUP PITCH. Evaluate as a startup idea/pitch.\n\
             Focus on: differentiation, market clarity, user pain, business model, execution plan, defensibility.\n\
             Be strict about vague claims.\n"
        }
        CanonicalMode::Article => {
            "Mode: ARTICLE. Evaluate as a written article/blog draft.\n\
             Focus on: clarity, structure, thesis, specificity, usefulness, readability, originality.\n\
             Be strict about fluff.\n"
        }
        CanonicalMode::Meme => {
            "Mode: MEME IDEA. Evaluate as a meme/punchline concept.\n\
             Focus on: originality, comedic clarity, punch, relatability, shareability, brevity.\n\
             Be strict about weak or generic jokes.\n"
        }
        CanonicalMode::General => {
            "Mode: GENERAL. Evaluate as general content.\n\
             Focus on: originality, clarity, value, execution, virality.\n"
        }
    }
}

pub(crate) fn build_prompt_impl(
    mode: CanonicalMode,
    title: &str,
    url: &str,
    content: &str,
) -> String {
    format!(
        "You are a strict but helpful content evaluator.\n\
         {brief}\
         Return ONLY valid JSON with exactly these keys:\n\
         {{ \"scores\": {{ \"originality\":1..10, \"clarity\":1..10, \"value\":1..10, \"execution\":1..10, \"virality\":1..10 }}, \
         \"feedback\": string (<= 280 chars), \"improvements\": array of 3 short strings (<= 90 chars each), \
         \"tags\": array of 3 to 6 short strings, \"total\": integer 0..50 }}\n\
         Rules:\n\
         - No markdown.\n\
         - No extra keys.\n\
         - Keep strings single-line (no newlines).\n\n\
         Title: {title}\n\
         URL: {url}\n\
         Content:\n{content}\n",
        brief = mode_brief(mode),
    )
}
