//! Deterministic scoring used whenever the oracle path fails.
//!
//! Every value is a pure function of `(mode, content, submitter)`: replicas
//! re-executing the same request must land on the same bundle, and a
//! submitter cannot reroll a score without changing the content.

use crate::identity::AccountId;
use crate::model::{CanonicalMode, ScoreBundle, Scores};
use sha2::{Digest, Sha256};
use tracing::debug;

const SCORE_BASE: u8 = 6;
const SCORE_SPREAD: u8 = 4;

struct ModeCopy {
    feedback: &'static str,
    improvements: [&'static str; 3],
    tags: [&'static str; 3],
}

fn copy_for(mode: CanonicalMode) -> ModeCopy {
    match mode {
        CanonicalMode::Genlayer => ModeCopy {
            feedback: "Good direction. Clarify what must be on-chain, why GenLayer is essential, and define the core user loop.",
            improvements: [
                "Explain why it must be on-chain",
                "Define the core on-chain action and data",
                "Add one concrete user journey",
            ],
            tags: ["genlayer", "onchain", "ux"],
        },
        CanonicalMode::Startup => ModeCopy {
            feedback: "Promising. Tighten the ICP, sharpen differentiation, and outline a realistic go-to-market path.",
            improvements: [
                "Define the ICP and pain point",
                "Add a defensible differentiator",
                "Outline a first acquisition channel",
            ],
            tags: ["startup", "icp", "gtm"],
        },
        CanonicalMode::Article => ModeCopy {
            feedback: "Decent draft. Improve structure, add concrete examples, and make the thesis more explicit.",
            improvements: [
                "Add a clear thesis in the first paragraph",
                "Use 2-3 concrete examples",
                "Improve structure with headings",
            ],
            tags: ["writing", "structure", "clarity"],
        },
        CanonicalMode::Meme => ModeCopy {
            feedback: "Nice attempt. Make the punchline clearer, add a unique twist, and cut extra words.",
            improvements: [
                "Make the setup shorter",
                "Add a sharper twist/punchline",
                "Increase relatability with one detail",
            ],
            tags: ["meme", "punchline", "shareable"],
        },
        CanonicalMode::General => ModeCopy {
            feedback: "Solid start. Make the hook sharper, define the audience, and add one unique twist to stand out.",
            improvements: [
                "State the target audience in one line",
                "Add a unique differentiator or mechanic",
                "Give a concrete example of use",
            ],
            tags: ["mvp", "iteration", "clarity"],
        },
    }
}

fn digest(mode: CanonicalMode, content: &str, submitter: &AccountId) -> [u8; 32] {
    let mut h = Sha256::new();
    h.update(mode.as_str().as_bytes());
    h.update(b"|");
    h.update(content.as_bytes());
    h.update(submitter.as_str().as_bytes());
    let mut out = [0u8; 32];
    out.copy_from_slice(&h.finalize());
    out
}

/// Builds the fallback bundle. Sub-scores land in `[6, 9]`, total in `[30, 45]`.
pub fn fallback_score(mode: CanonicalMode, content: &str, submitter: &AccountId) -> ScoreBundle {
    let h = digest(mode, content, submitter);
    let sub = |i: usize| i64::from(h[i] % SCORE_SPREAD + SCORE_BASE);
    let scores = Scores {
        originality: sub(0),
        clarity: sub(1),
        value: sub(2),
        execution: sub(3),
        virality: sub(4),
    };
    let copy = copy_for(mode);
    debug!(mode = %mode, digest = %hex::encode(&h[..8]), total = scores.sum(), "fallback scored");

    ScoreBundle {
        scores,
        total: scores.sum(),
        feedback: copy.feedback.to_string(),
        improvements: copy.improvements.iter().map(|s| s.to_string()).collect(),
        tags: copy.tags.iter().map(|s| s.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> AccountId {
        AccountId::parse("0x1111111111111111111111111111111111111111").unwrap()
    }

    fn bob() -> AccountId {
        AccountId::parse("0x2222222222222222222222222222222222222222").unwrap()
    }

    #[test]
    fn same_inputs_same_bundle() {
        let content = "A decentralized escrow that resolves disputes with an LLM jury.";
        let a = fallback_score(CanonicalMode::Genlayer, content, &alice());
        let b = fallback_score(CanonicalMode::Genlayer, content, &alice());
        assert_eq!(a, b);
    }

    #[test]
    fn scores_stay_in_band() {
        for i in 0..64 {
            let content = format!("content variant number {i} with enough padding to matter");
            for mode in CanonicalMode::ALL {
                let bundle = fallback_score(mode, &content, &bob());
                for s in [
                    bundle.scores.originality,
                    bundle.scores.clarity,
                    bundle.scores.value,
                    bundle.scores.execution,
                    bundle.scores.virality,
                ] {
                    assert!((6..=9).contains(&s), "sub-score {s} out of band");
                }
                assert!((30..=45).contains(&bundle.total));
                assert_eq!(bundle.total, bundle.scores.sum());
            }
        }
    }

    #[test]
    fn copy_differs_per_mode() {
        let content = "identical content for every mode in this table check";
        let feedbacks: std::collections::HashSet<String> = CanonicalMode::ALL
            .iter()
            .map(|m| fallback_score(*m, content, &alice()).feedback)
            .collect();
        assert_eq!(feedbacks.len(), 5);

        let meme = fallback_score(CanonicalMode::Meme, content, &alice());
        assert_eq!(meme.tags, vec!["meme", "punchline", "shareable"]);
        assert_eq!(meme.improvements.len(), 3);
    }

    #[test]
    fn digest_binds_submitter() {
        let content = "the same words submitted by two different accounts here";
        assert_ne!(
            digest(CanonicalMode::General, content, &alice()),
            digest(CanonicalMode::General, content, &bob())
        );
    }
}
