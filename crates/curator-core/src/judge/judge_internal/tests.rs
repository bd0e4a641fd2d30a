use crate::config::CuratorConfig;
use crate::errors::JudgeError;
use crate::identity::AccountId;
use crate::judge::JudgeService;
use crate::model::{CanonicalMode, EvaluationRequest};
use crate::oracle::fake::{ScriptedOracle, ScriptedReply};
use crate::oracle::StaticNamespace;
use serde_json::{json, Value};
use std::sync::Arc;

fn alice() -> AccountId {
    AccountId::parse(&format!("0x{:040x}", 0xa11ce_u64)).unwrap()
}

fn content_of(len: usize) -> String {
    "abcdefghij".repeat(len / 10 + 1)[..len].to_string()
}

fn request(mode: &str, content: &str) -> EvaluationRequest {
    EvaluationRequest {
        mode: mode.to_string(),
        title: "  My Title  ".to_string(),
        url: "https://example.com/post".to_string(),
        content: content.to_string(),
        submitter: alice(),
    }
}

fn service_with(oracle: Option<Arc<ScriptedOracle>>) -> JudgeService {
    let mut ns = StaticNamespace::new();
    if let Some(o) = oracle {
        ns = ns.register("eq_principle_prompt", o);
    }
    JudgeService::new(CuratorConfig::default(), Arc::new(ns)).unwrap()
}

fn last_result(svc: &JudgeService) -> Value {
    serde_json::from_str(&svc.get_last_result(alice().as_str())).unwrap()
}

fn last_debug(svc: &JudgeService) -> Value {
    serde_json::from_str(&svc.get_last_debug(alice().as_str())).unwrap()
}

const GOOD_JSON: &str = r#"{"scores":{"originality":9,"clarity":8,"value":8,"execution":7,"virality":9},"feedback":"Sharp hook.","improvements":["a","b","c"],"tags":["x","y","z"],"total":41}"#;

#[tokio::test]
async fn contract_oracle_text_is_used_directly() {
    let oracle = Arc::new(ScriptedOracle::new(vec![ScriptedReply::Text(format!(
        "Here you go:\n```json\n{GOOD_JSON}\n```"
    ))]));
    let mut svc = service_with(Some(oracle.clone()));

    assert!(svc.judge_content(request("blog", &content_of(300))).await.unwrap());

    let result = last_result(&svc);
    assert_eq!(result["mode"], "article");
    assert_eq!(result["title"], "My Title");
    assert_eq!(result["total"], 41);
    assert_eq!(result["scores"]["originality"], 9);
    assert_eq!(result["fallback"], false);
    assert_eq!(result["saved"], true);

    let debug = last_debug(&svc);
    assert_eq!(debug["error"], "");
    assert_eq!(debug["eq"], "eq_principle_prompt");
    assert!(debug["raw"].as_str().unwrap().starts_with("Here you go:"));

    let prompts = oracle.prompts().await;
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("Mode: ARTICLE."));
    assert!(prompts[0].contains("Title: My Title"));
}

#[tokio::test]
async fn contract_structured_record_skips_extraction() {
    let record: Value = serde_json::from_str(GOOD_JSON).unwrap();
    let oracle = Arc::new(ScriptedOracle::new(vec![ScriptedReply::Record(record)]));
    let mut svc = service_with(Some(oracle));

    svc.judge_content(request("meme", &content_of(80))).await.unwrap();

    assert_eq!(last_result(&svc)["total"], 41);
    assert_eq!(last_debug(&svc)["raw"], "");
}

#[tokio::test]
async fn contract_too_short_rejects_without_writes() {
    let mut svc = service_with(None);
    let before = svc.state().to_snapshot_json().unwrap();

    let err = svc
        .judge_content(request("general", &content_of(49)))
        .await
        .unwrap_err();
    assert!(matches!(err, JudgeError::Validation { .. }));
    assert_eq!(svc.state().to_snapshot_json().unwrap(), before);
}

#[tokio::test]
async fn contract_too_long_rejects_without_writes() {
    let mut svc = service_with(None);
    svc.judge_content(request("general", &content_of(100)))
        .await
        .unwrap();
    let before = svc.state().to_snapshot_json().unwrap();

    let err = svc
        .judge_content(request("general", &content_of(4001)))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("too long"));
    assert_eq!(svc.state().to_snapshot_json().unwrap(), before);
}

#[tokio::test]
async fn contract_length_is_measured_after_trim() {
    let mut svc = service_with(None);
    let padded = format!("   \n{}\n   ", content_of(49));
    assert!(svc.judge_content(request("general", &padded)).await.is_err());

    let exact = format!("  {}  ", content_of(50));
    assert!(svc.judge_content(request("general", &exact)).await.unwrap());
    let upper = content_of(4000);
    assert!(svc.judge_content(request("general", &upper)).await.unwrap());
}

#[tokio::test]
async fn contract_no_oracle_falls_back() {
    let mut svc = service_with(None);
    assert!(svc
        .judge_content(request("startup", &content_of(3000)))
        .await
        .unwrap());

    let result = last_result(&svc);
    assert_eq!(result["fallback"], true);
    let total = result["total"].as_u64().unwrap();
    assert!((30..=45).contains(&total));
    assert_eq!(result["tags"], json!(["startup", "icp", "gtm"]));
    assert_eq!(result["saved"], total >= 35);
    assert_eq!(svc.state().gallery.len(), usize::from(total >= 35));

    let debug = last_debug(&svc);
    assert_eq!(debug["eq"], "");
    assert_eq!(debug["raw"], "");
    assert!(debug["error"].as_str().unwrap().contains("no callable oracle"));
}

#[tokio::test]
async fn contract_invocation_error_falls_back() {
    let oracle = Arc::new(ScriptedOracle::new(vec![ScriptedReply::Fail(
        "validator timeout".into(),
    )]));
    let mut svc = service_with(Some(oracle));
    svc.judge_content(request("dapp", &content_of(120))).await.unwrap();

    assert_eq!(last_result(&svc)["fallback"], true);
    assert_eq!(last_result(&svc)["mode"], "genlayer");
    let debug = last_debug(&svc);
    assert_eq!(debug["eq"], "eq_principle_prompt");
    assert!(debug["error"].as_str().unwrap().contains("validator timeout"));
}

#[tokio::test]
async fn contract_malformed_text_falls_back_and_keeps_preview() {
    let oracle = Arc::new(ScriptedOracle::new(vec![ScriptedReply::Text(
        "I'd rate this a solid eight out of ten!".into(),
    )]));
    let mut svc = service_with(Some(oracle));
    svc.judge_content(request("joke", &content_of(60))).await.unwrap();

    assert_eq!(last_result(&svc)["fallback"], true);
    let debug = last_debug(&svc);
    assert!(debug["error"].as_str().unwrap().starts_with("malformed oracle output"));
    assert_eq!(debug["raw"], "I'd rate this a solid eight out of ten!");
}

#[tokio::test]
async fn contract_signature_degradation_reaches_bare_closure() {
    let oracle = Arc::new(
        ScriptedOracle::new(vec![ScriptedReply::Text(GOOD_JSON.into())]).with_max_arity(0),
    );
    let mut svc = service_with(Some(oracle.clone()));
    svc.judge_content(request("general", &content_of(200))).await.unwrap();

    assert_eq!(last_result(&svc)["fallback"], false);
    assert_eq!(oracle.calls().await.len(), 3);
}

#[tokio::test]
async fn contract_mismatch_at_every_arity_falls_back_after_three_calls() {
    let oracle = Arc::new(
        ScriptedOracle::new(vec![ScriptedReply::Text(GOOD_JSON.into())]).rejecting_every_arity(),
    );
    let mut svc = service_with(Some(oracle.clone()));
    svc.judge_content(request("general", &content_of(200))).await.unwrap();

    let calls = oracle.calls().await;
    assert_eq!(calls.len(), 3);
    assert_eq!(calls[2].arity(), 0);
    assert!(oracle.prompts().await.is_empty());

    let result = last_result(&svc);
    assert_eq!(result["fallback"], true);
    assert!((30..=45).contains(&result["total"].as_i64().unwrap()));

    let debug = last_debug(&svc);
    assert_eq!(debug["eq"], "eq_principle_prompt");
    assert!(debug["error"].as_str().unwrap().starts_with("signature mismatch"));
    assert_eq!(debug["raw"], "");
}

#[tokio::test]
async fn contract_total_is_clamped_and_missing_fields_default() {
    let oracle = Arc::new(ScriptedOracle::new(vec![ScriptedReply::Text(
        r#"{"total": 120, "feedback": "wild"}"#.into(),
    )]));
    let mut svc = service_with(Some(oracle));
    svc.judge_content(request("general", &content_of(200))).await.unwrap();

    let result = last_result(&svc);
    assert_eq!(result["total"], 50);
    assert_eq!(result["scores"]["clarity"], 0);
    assert_eq!(result["improvements"], json!([]));
    assert_eq!(result["fallback"], false);
    assert_eq!(result["saved"], true);
}

#[tokio::test]
async fn contract_low_total_is_not_saved() {
    let oracle = Arc::new(ScriptedOracle::new(vec![ScriptedReply::Text(
        r#"{"total": 12}"#.into(),
    )]));
    let mut svc = service_with(Some(oracle));
    svc.judge_content(request("general", &content_of(200))).await.unwrap();

    assert_eq!(last_result(&svc)["saved"], false);
    assert_eq!(svc.get_gallery(), "[]");
}

#[tokio::test]
async fn contract_gallery_rolls_over_at_capacity() {
    let replies = (0..21)
        .map(|_| ScriptedReply::Text(GOOD_JSON.into()))
        .collect();
    let oracle = Arc::new(ScriptedOracle::new(replies));
    let mut svc = service_with(Some(oracle));

    for i in 0..21 {
        let mut req = request("general", &content_of(100));
        req.title = format!("entry-{i}");
        svc.judge_content(req).await.unwrap();
    }

    let gallery: Vec<Value> = serde_json::from_str(&svc.get_gallery()).unwrap();
    assert_eq!(gallery.len(), 20);
    assert_eq!(gallery[0]["title"], "entry-1");
    assert_eq!(gallery[19]["title"], "entry-20");
    assert_eq!(gallery[19]["author"], alice().as_str());
    assert_eq!(gallery[19]["tags"], json!(["x", "y", "z"]));
}

#[tokio::test]
async fn contract_fallback_is_replay_consistent() {
    let mut first = service_with(None);
    let mut second = service_with(None);
    let req = request("essay", &content_of(500));

    first.judge_content(req.clone()).await.unwrap();
    second.judge_content(req).await.unwrap();

    assert_eq!(
        first.get_last_result(alice().as_str()),
        second.get_last_result(alice().as_str())
    );
    assert_eq!(first.get_gallery(), second.get_gallery());
}

#[tokio::test]
async fn contract_reads_default_for_unknown_or_malformed_accounts() {
    let svc = service_with(None);
    let empty: Value = serde_json::from_str(&svc.get_last_result("not-an-address")).unwrap();
    assert_eq!(empty["total"], 0);
    assert_eq!(empty["mode"], CanonicalMode::General.as_str());
    assert_eq!(empty["tags"], json!([]));

    assert_eq!(
        svc.get_last_debug("0x0000000000000000000000000000000000000000"),
        r#"{"error":"no debug","eq":"","raw":""}"#
    );
    assert_eq!(svc.get_gallery(), "[]");
}
