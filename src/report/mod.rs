//! Diagnosis report: the serializable record handed to display surfaces and
//! to the external persistence endpoint, plus the per-label description and
//! guidance text, expressed as exhaustive matches over the closed enums.

use crate::core::{Archetype, FactorScores, PersonalityResult, SecondaryAxis};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Completed diagnosis for one student.
///
/// The JSON shape matches the submission payload of the remote store: the
/// student identifier, the diagnosis date, and the two result labels, with
/// the factor tallies carried along for the report view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosisReport {
    #[serde(rename = "studentId")]
    pub student_id: String,

    #[serde(rename = "diagnosisDate")]
    pub diagnosis_date: NaiveDate,

    pub scores: FactorScores,

    #[serde(flatten)]
    pub result: PersonalityResult,
}

impl DiagnosisReport {
    pub fn new(
        student_id: impl Into<String>,
        diagnosis_date: NaiveDate,
        scores: FactorScores,
        result: PersonalityResult,
    ) -> Self {
        Self {
            student_id: student_id.into(),
            diagnosis_date,
            scores,
            result,
        }
    }
}

impl Archetype {
    /// Korean description shown on the report view.
    pub fn description_ko(&self) -> &'static str {
        match self {
            Archetype::Sakura => "새로운 것을 배우는 것을 좋아하며, 호기심이 많고 창의적입니다.",
            Archetype::Ume => "차분하고 신중하며, 깊이 있는 사고를 하는 성향입니다.",
            Archetype::Momo => "활발하고 적극적이며, 다른 사람들과 어울리기를 좋아합니다.",
            Archetype::Sumomo => "독립적이고 추진력이 있으며, 스스로 길을 개척하는 성향입니다.",
            Archetype::Anzu => "다정하고 세심하며, 주변 사람을 먼저 배려하는 성향입니다.",
            Archetype::Kaki => "성실하고 책임감이 강하며, 꾸준히 목표를 향해 나아갑니다.",
        }
    }

    /// Learning guidance bullet points for the report view.
    pub fn guidance_ko(&self) -> &'static [&'static str] {
        match self {
            Archetype::Sakura => &[
                "다양한 주제의 프로젝트 학습",
                "실험과 탐구 활동",
                "창의적 문제 해결 과제",
            ],
            Archetype::Ume => &[
                "체계적인 단계별 학습",
                "깊이 있는 주제 연구",
                "개별 학습 시간 충분히 제공",
            ],
            Archetype::Momo => &[
                "그룹 활동 중심 학습",
                "발표와 토론 기회 제공",
                "실전 문제 해결 활동",
            ],
            Archetype::Sumomo => &[
                "자기주도적 학습 과제",
                "목표 설정과 자기 평가 훈련",
                "도전적인 심화 과제 제공",
            ],
            Archetype::Anzu => &[
                "협력 학습과 또래 교수 활동",
                "정서적 지지가 있는 학습 환경",
                "봉사와 연계된 체험 학습",
            ],
            Archetype::Kaki => &[
                "꾸준한 반복과 복습 중심 학습",
                "명확한 규칙과 일정 제공",
                "성취를 확인할 수 있는 과제",
            ],
        }
    }
}

impl SecondaryAxis {
    /// Korean description shown on the report view.
    pub fn description_ko(&self) -> &'static str {
        match self {
            SecondaryAxis::Digital => "논리적이고 체계적인 접근을 선호하며, 효율성을 중시합니다.",
            SecondaryAxis::Analog => "감성적이고 직관적인 접근을 선호하며, 창의성을 중시합니다.",
        }
    }

    /// Learning guidance bullet points for the report view.
    pub fn guidance_ko(&self) -> &'static [&'static str] {
        match self {
            SecondaryAxis::Digital => &[
                "온라인 학습 도구 활용",
                "데이터 기반 학습 방법",
                "체계적인 문제 해결 접근",
            ],
            SecondaryAxis::Analog => &[
                "hands-on 학습 활동",
                "예술적 요소를 활용한 학습",
                "자유로운 표현 활동",
            ],
        }
    }
}
