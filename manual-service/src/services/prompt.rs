//! Prompt composition for manual generation.
//!
//! The deployed product serves Jeju Special Self-Governing Province municipal
//! police staff, so the instruction is written in Korean and the model is
//! expected to answer in Korean.

use crate::models::GenerationRequest;

const ROLE_LINE: &str = "당신은 제주특별자치도 자치경찰 업무 전문가입니다.";

const OUTPUT_INSTRUCTIONS: &str = r#"다음 JSON 형식으로만 응답하세요. 마크다운 없이 순수 JSON만:

{
  "legal": "관련 법령과 법적 정의를 3-5문장으로 설명",
  "cases": "실제 업무 사례 2-3개를 상황-대응-결과 형식으로",
  "checklist": "단계별 처리 체크리스트 5-8개 항목 (번호 포함)",
  "aiAnalysis": "주의사항과 실무 팁 3-5개 (• 기호 포함)"
}"#;

/// Build the single text input sent to the model.
pub fn build_prompt(request: &GenerationRequest) -> String {
    let reference = request
        .manual_data
        .as_ref()
        .map(|manual| {
            format!(
                "기존 매뉴얼 참고:\n법적정의: {}\n업무사례: {}",
                manual.legal, manual.cases
            )
        })
        .unwrap_or_default();

    format!(
        "{ROLE_LINE}\n\n업무 분야: {}\n업무 항목: {}\n\n{}\n\n{OUTPUT_INSTRUCTIONS}",
        request.category(),
        request.menu(),
        reference
    )
}
