//! Seven-category written interpretation of a chart.
//!
//! Each description is three sentences: an observation from the chart,
//! its meaning (`이 결과의 의미는?`), and an applied tip
//! (`삶에 적용하는 팁:`).

use serde::Serialize;

use saju_chart::FourPillarsResult;

use crate::messages;

/// Interpretation categories in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKey {
    Temperament,
    Fortune,
    Relationship,
    Career,
    Wealth,
    Honor,
    Health,
}

pub const ALL_CATEGORY_KEYS: [CategoryKey; 7] = [
    CategoryKey::Temperament,
    CategoryKey::Fortune,
    CategoryKey::Relationship,
    CategoryKey::Career,
    CategoryKey::Wealth,
    CategoryKey::Honor,
    CategoryKey::Health,
];

impl CategoryKey {
    pub const fn key(self) -> &'static str {
        match self {
            Self::Temperament => "temperament",
            Self::Fortune => "fortune",
            Self::Relationship => "relationship",
            Self::Career => "career",
            Self::Wealth => "wealth",
            Self::Honor => "honor",
            Self::Health => "health",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Temperament => "타고난 기질과 성격",
            Self::Fortune => "운의 흐름",
            Self::Relationship => "관계운",
            Self::Career => "직업·적성",
            Self::Wealth => "재물운",
            Self::Honor => "명예·사회적 인정",
            Self::Health => "건강 포인트",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterpretationCategory {
    pub key: CategoryKey,
    pub title: &'static str,
    pub description: String,
}

/// Build all seven categories, in [`ALL_CATEGORY_KEYS`] order.
pub fn build_interpretation(result: &FourPillarsResult) -> Vec<InterpretationCategory> {
    ALL_CATEGORY_KEYS
        .iter()
        .map(|&key| InterpretationCategory {
            key,
            title: key.title(),
            description: describe(result, key),
        })
        .collect()
}

fn describe(result: &FourPillarsResult, key: CategoryKey) -> String {
    let pillars = &result.pillars;
    let summary = &result.summary;
    let strong = summary.strongest.element;
    let weak = summary.weakest.element;
    let (strong_k, weak_k) = (strong.korean(), weak.korean());
    let max = summary.strongest.count;
    let min = summary.weakest.count;
    let even = max == min;
    let weak_routine = messages::routine_tip(weak);

    let sentences: [String; 3] = match key {
        CategoryKey::Temperament => {
            let day = &pillars.day;
            [
                format!(
                    "사주의 중심이 되는 {} 일주에서 {}({}) 기운과 {} 지지가 겹쳐 {} 성향이 두드러집니다.",
                    day.name(),
                    day.stem.korean(),
                    day.stem_element().label(),
                    day.branch.korean(),
                    messages::temperament(day.stem_element()),
                ),
                format!(
                    "이 결과의 의미는? 강한 {strong_k} 기운이 {max}개 쌓여 자신의 주도권을 확보하기 쉬운 흐름을 만든다는 뜻입니다."
                ),
                format!(
                    "삶에 적용하는 팁: 강한 {strong_k} 기운은 자신감이 필요한 자리에서 쓰고, 부족한 {weak_k} 기운은 {weak_routine}"
                ),
            ]
        }
        CategoryKey::Fortune => {
            let gap = max - min;
            let mut flow = if gap <= 1 {
                messages::FLOW_BALANCED.to_string()
            } else {
                messages::flow_focused(strong)
            };
            let (yang, yin) = (summary.polarity_counts.yang, summary.polarity_counts.yin);
            let diff = yang.abs_diff(yin);
            if diff >= 2 {
                flow.push(' ');
                flow.push_str(&if yin > yang {
                    messages::flow_yin_dominant(diff)
                } else {
                    messages::flow_yang_dominant(diff)
                });
            }
            [
                format!(
                    "{strong_k} 기운과 {weak_k} 기운의 차이가 {gap}개라 흐름이 한쪽으로 기울어 있습니다."
                ),
                format!(
                    "이 결과의 의미는? {} {flow}",
                    messages::gender_tone(result.meta.gender)
                ),
                format!(
                    "삶에 적용하는 팁: {} 부족한 {weak_k} 영역은 하루 10분이라도 {weak_routine}",
                    messages::routine_tip(strong)
                ),
            ]
        }
        CategoryKey::Relationship => [
            format!(
                "일주({})와 연주({})의 관계가 {} 흐름과 연결되기 때문입니다.",
                pillars.day.branch.korean(),
                pillars.year.branch.korean(),
                messages::relationship(pillars.year.branch),
            ),
            format!(
                "이 결과의 의미는? {} 영향으로 자신이 주도하는 인간관계 스타일이 형성된다는 뜻입니다.",
                messages::relationship(pillars.day.branch)
            ),
            format!(
                "삶에 적용하는 팁: 강한 {strong_k} 기운을 만남과 협업에 활용하고, 부족한 {weak_k} 감각은 일정에 휴식과 경청 시간을 배치해 보완하세요."
            ),
        ],
        CategoryKey::Career => {
            let month = &pillars.month;
            [
                format!(
                    "월주({})에서 {}({}) 기운이 직업 환경을 설계하는 축을 담당하기 때문입니다.",
                    month.name(),
                    month.stem.korean(),
                    month.stem_element().label(),
                ),
                format!(
                    "이 결과의 의미는? {}",
                    messages::career(month.stem_element())
                ),
                format!(
                    "삶에 적용하는 팁: 강한 {strong_k} 기운을 프로젝트의 추진력으로 삼고, 부족한 {weak_k} 기운은 {weak_routine}"
                ),
            ]
        }
        CategoryKey::Wealth => [
            format!(
                "{strong_k} 기운이 {}개로 가장 높아 재물 흐름을 끌어오는 열쇠가 됩니다.",
                summary.element_counts.get(strong)
            ),
            format!("이 결과의 의미는? {}", messages::wealth_focus(strong)),
            if even {
                "삶에 적용하는 팁: 오행 균형이 좋아 계획적인 저축과 투자가 빛을 발합니다."
                    .to_string()
            } else {
                format!("삶에 적용하는 팁: 부족한 {weak_k} 기운은 {weak_routine}")
            },
        ],
        CategoryKey::Honor => [
            format!("{strong_k} 기운이 주축이 되어 사회적 평가가 해당 기운과 연결되기 쉽습니다."),
            format!(
                "이 결과의 의미는? {}{}",
                messages::honor_focus(strong),
                if even {
                    " 오행 균형이 좋아 다양한 영역에서 신뢰를 얻기 좋은 구조입니다."
                } else {
                    ""
                }
            ),
            if even {
                "삶에 적용하는 팁: 꾸준한 약속 이행과 기록 관리로 명성을 쌓아보세요.".to_string()
            } else {
                format!("삶에 적용하는 팁: 부족한 {weak_k} 기운을 보완하면 인정 폭이 더욱 넓어집니다.")
            },
        ],
        CategoryKey::Health => [
            format!(
                "{weak_k} 기운이 {}개로 가장 낮아 몸이 해당 부위를 먼저 신호로 보냅니다.",
                summary.element_counts.get(weak)
            ),
            format!("이 결과의 의미는? {}", messages::health_tip(weak)),
            if even {
                "삶에 적용하는 팁: 현재의 생활 리듬을 유지하면서 주기적인 컨디션 점검을 이어가세요."
                    .to_string()
            } else {
                format!(
                    "삶에 적용하는 팁: {weak_routine} 강한 {strong_k} 기운은 무리하지 않도록 속도를 조절하세요."
                )
            },
        ],
    };
    sentences.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_and_titles() {
        let keys: Vec<&str> = ALL_CATEGORY_KEYS.iter().map(|k| k.key()).collect();
        assert_eq!(
            keys,
            ["temperament", "fortune", "relationship", "career", "wealth", "honor", "health"]
        );
        assert_eq!(CategoryKey::Career.title(), "직업·적성");
    }
}
