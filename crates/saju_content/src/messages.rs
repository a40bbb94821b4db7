//! Korean text tables for readings.
//!
//! Every table is an exhaustive match over a closed enum, so a new
//! element, branch or relation cannot be added without its text.

use saju_base::{Branch, BranchRelation, Element, ElementRelation};
use saju_chart::Gender;

use crate::daily_fortune::Alignment;

pub fn temperament(element: Element) -> &'static str {
    match element {
        Element::Wood => "목(木)의 기운이 강한 사람은 성장과 확장을 추구하며, 사람들 사이를 연결하고 새로운 시도를 즐깁니다.",
        Element::Fire => "화(火)의 기운이 강한 사람은 열정과 추진력이 뛰어나며, 감성이 풍부하고 리더십을 발휘하기 쉽습니다.",
        Element::Earth => "토(土)의 기운이 강한 사람은 안정과 신뢰를 중시하며, 균형 감각이 좋아 주변을 묵묵히 지탱합니다.",
        Element::Metal => "금(金)의 기운이 강한 사람은 치밀하고 원칙적이며, 명확한 목표 아래 집중력 있게 움직입니다.",
        Element::Water => "수(水)의 기운이 강한 사람은 유연하고 지혜로우며, 정보와 흐름을 잘 읽는 감각을 가집니다.",
    }
}

pub fn relationship(branch: Branch) -> &'static str {
    match branch {
        Branch::Ja => "쥐띠의 지지는 언변과 순발력이 좋아 주변 사람들과 빠르게 친해지는 장점이 있습니다.",
        Branch::Chuk => "소띠의 지지는 신뢰와 성실함으로 인정받아, 차분한 관계를 오래 유지합니다.",
        Branch::In => "호랑이띠의 지지는 주도적이고 도전적인 관계를 선호해, 적극적인 만남에 강합니다.",
        Branch::Myo => "토끼띠의 지지는 배려심과 섬세함이 뛰어나 조화로운 인간관계를 만들기 쉽습니다.",
        Branch::Jin => "용띠의 지지는 카리스마와 호기심이 강해, 다채로운 인연을 끌어들이는 힘이 있습니다.",
        Branch::Sa => "뱀띠의 지지는 통찰력이 깊어, 사람들의 속마음을 잘 파악하며 관계를 다지는 편입니다.",
        Branch::O => "말띠의 지지는 밝고 활동적인 분위기로, 네트워크를 넓히고 활기찬 인맥을 유지합니다.",
        Branch::Mi => "양띠의 지지는 온화하고 안정적인 기운으로, 서로를 돌보는 관계를 만들기 쉽습니다.",
        Branch::Sin => "원숭이띠의 지지는 재치와 아이디어가 풍부해, 협력 속에서 시너지를 내는 관계가 많습니다.",
        Branch::Yu => "닭띠의 지지는 성실함과 목표 지향성이 뚜렷해, 함께 성장하는 동료와 잘 맞습니다.",
        Branch::Sul => "개띠의 지지는 의리와 책임감이 강하여, 든든한 동료·파트너로 인정받습니다.",
        Branch::Hae => "돼지띠의 지지는 포용력과 따뜻함이 있어, 신뢰를 바탕으로한 관계가 오래갑니다.",
    }
}

pub fn career(element: Element) -> &'static str {
    match element {
        Element::Wood => "창의와 기획, 교육, 상담, 문화·콘텐츠 분야에서 잠재력이 돋보입니다.",
        Element::Fire => "리더십이 필요한 경영, 마케팅, 공연·예술, 교육·강연 분야와 인연이 깊습니다.",
        Element::Earth => "조직관리, 금융, 행정·법률, 부동산, 연구직 등 안정과 신뢰가 필요한 분야에 강점이 있습니다.",
        Element::Metal => "전문지식과 분석이 필요한 기술, IT, 금융, 의학, 법조계와 같은 영역에서 실력을 발휘하기 쉽습니다.",
        Element::Water => "정보와 흐름을 다루는 IT, 연구, 해외업무, 교육, 상담, 기획 분야와 궁합이 좋습니다.",
    }
}

pub fn wealth_focus(element: Element) -> &'static str {
    match element {
        Element::Wood => "사람과 기회를 연결하는 능력이 재물운을 끌어들이므로, 네트워크 관리가 곧 재산이 됩니다.",
        Element::Fire => "명확한 목표 설정과 추진력이 수입을 늘립니다. 감정적 소비만 조심하면 재물운이 안정됩니다.",
        Element::Earth => "꾸준한 저축과 부동산·토지 관련 자산 운영에서 강점을 보여 장기적으로 재물이 모입니다.",
        Element::Metal => "분석력과 전문성을 키울수록 재물운이 상승합니다. 명확한 기준 아래 투자하면 유리합니다.",
        Element::Water => "정보 수집과 트렌드 파악을 통해 유연하게 재테크하면 재물운이 좋아집니다.",
    }
}

pub fn honor_focus(element: Element) -> &'static str {
    match element {
        Element::Wood => "협력과 확장 속에서 명성을 얻으니, 공동 프로젝트와 사회 활동을 늘려 보세요.",
        Element::Fire => "빛나는 존재감을 기반으로 대중 앞에서 인정받기 쉬워 발표·홍보 영역에서 명예를 누립니다.",
        Element::Earth => "신뢰와 책임감이 명예를 키우므로, 꾸준한 성과 관리와 약속을 지키는 태도가 관건입니다.",
        Element::Metal => "전문 분야의 권위가 명예를 부르니, 자격과 스펙을 갖추고 묵묵히 실력을 쌓으세요.",
        Element::Water => "지혜와 조정 능력이 명성을 가져옵니다. 다양한 사람들의 의견을 조율하는 자리에서 빛납니다.",
    }
}

pub fn health_tip(element: Element) -> &'static str {
    match element {
        Element::Wood => "목 기운이 약하면 간·근육 계통을 돌보세요. 규칙적인 스트레칭과 휴식이 필요합니다.",
        Element::Fire => "화 기운이 약하면 심혈관/혈압 관리가 중요합니다. 지나친 야근과 스트레스 조절에 신경 쓰세요.",
        Element::Earth => "토 기운이 약하면 위장과 비장 관리가 필요합니다. 식습관과 규칙적인 생활 리듬을 지키세요.",
        Element::Metal => "금 기운이 약하면 호흡기·피부 관리가 중요합니다. 규칙적인 운동과 청결 유지가 도움이 됩니다.",
        Element::Water => "수 기운이 약하면 신장·비뇨기와 하체 순환에 주의하세요. 충분한 수분과 휴식이 필요합니다.",
    }
}

pub fn routine_tip(element: Element) -> &'static str {
    match element {
        Element::Wood => "새로운 배움과 사람을 꾸준히 만나는 루틴을 통해 기운이 확장됩니다.",
        Element::Fire => "짧은 운동과 명확한 목표 정리가 화 기운을 긍정적으로 발산하도록 돕습니다.",
        Element::Earth => "하루 일과와 공간을 정돈하며 규칙적인 식사 시간을 지키면 토 기운이 안정됩니다.",
        Element::Metal => "자료 정리와 계획 점검 시간을 정기적으로 확보하면 금 기운이 바로 섭니다.",
        Element::Water => "충분한 수분과 휴식, 조용한 기록 시간을 마련하면 수 기운이 부드럽게 흘러갑니다.",
    }
}

pub fn gender_tone(gender: Gender) -> &'static str {
    match gender {
        Gender::Male => "남성 사주에서는 양적인 추진력과 외향 에너지가 주도합니다.",
        Gender::Female => "여성 사주에서는 섬세한 감각과 조화로운 기운이 중심이 됩니다.",
    }
}

pub const FLOW_BALANCED: &str =
    "오행이 비교적 고르게 분포해 스스로 균형을 유지하기 좋은 흐름입니다.";

pub fn flow_focused(element: Element) -> String {
    format!(
        "{} 기운이 두드러져 이와 관련된 기회가 자주 찾아옵니다. 반대로 부족한 오행을 보충하면 더 큰 성장을 기대할 수 있습니다.",
        element.korean()
    )
}

pub fn flow_yin_dominant(diff: u8) -> String {
    format!(
        "음 기운이 {diff}개 더 많아 섬세함과 내면 탐구에 집중하기 좋은 시기입니다. 다만 과도한 생각은 피하세요."
    )
}

pub fn flow_yang_dominant(diff: u8) -> String {
    format!(
        "양 기운이 {diff}개 더 많아 행동력과 추진력을 활용하기 좋습니다. 속도를 조절해 균형을 맞추면 더 안정적입니다."
    )
}

pub fn daily_activity(element: Element) -> &'static str {
    match element {
        Element::Wood => "사람들과 소통하고 아이디어를 제안하는 자리에서 성과를 거둘 확률이 높습니다.",
        Element::Fire => "발표·영업처럼 존재감을 드러내는 활동에 적극 나서면 호응을 얻습니다.",
        Element::Earth => "체크리스트를 정리하고 누락된 일정을 정비하면 안정감을 되찾습니다.",
        Element::Metal => "자료 분석과 계획 수립에 집중하면 기대 이상의 깔끔한 마무리를 할 수 있습니다.",
        Element::Water => "정보를 수집하고 흐름을 읽어 대응하면 유연하게 기회를 챙길 수 있습니다.",
    }
}

pub fn daily_care(element: Element) -> &'static str {
    match element {
        Element::Wood => "분주함 속에서도 휴식 시간을 확보해 과로를 예방하세요.",
        Element::Fire => "감정이 과열되기 쉬우니 대화에서 한 템포 쉬어가는 여유가 필요합니다.",
        Element::Earth => "고집이 강해질 수 있어 타인의 조언을 한 번 더 듣는 것이 도움이 됩니다.",
        Element::Metal => "세부에 몰입하다 보면 경직될 수 있으니 시야를 넓히는 시간을 마련하세요.",
        Element::Water => "우유부단해질 수 있으니 결정해야 할 일은 오늘 안에 마무리하세요.",
    }
}

pub fn daily_alignment(alignment: Alignment) -> &'static str {
    match alignment {
        Alignment::Strong => "오늘의 일진과 가장 강한 오행이 맞물려 추진력이 붙습니다. 자신 있게 주도권을 잡아도 좋겠습니다.",
        Alignment::Weak => "오늘의 일진이 부족한 오행을 자극하므로 페이스를 조절하고 기본기를 다지는 데 집중하세요.",
        Alignment::Supportive => "오늘의 일진이 당신의 기운을 든든하게 보완해 주니 과감하게 실행해도 무리가 없습니다.",
        Alignment::Neutral => "오늘의 일진은 비교적 중립적인 흐름이니 평소 루틴을 유지하며 컨디션을 살피면 좋습니다.",
    }
}

pub fn daily_relation(relation: ElementRelation) -> &'static str {
    match relation {
        ElementRelation::Aligned => "오늘의 기운이 당신의 일주 오행과 같아 컨디션이 자연스럽게 맞춰집니다.",
        ElementRelation::Output => "당신의 기운이 오늘 흐름을 이끌어 창의성과 표현력이 돋보입니다.",
        ElementRelation::Resource => "오늘의 기운이 당신을 북돋우니 재충전과 학습, 준비에 집중해 보세요.",
        ElementRelation::Authority => "당신의 기운이 상황을 다루기 쉬워 리더십을 발휘하기 좋습니다.",
        ElementRelation::Pressure => "오늘의 기운이 당신을 시험하니 무리한 약속보다는 우선순위를 정리하세요.",
        ElementRelation::Neutral => "오늘의 기운이 비교적 중립적이라 평소 페이스를 유지하기 좋습니다.",
    }
}

/// Branch-relation line; empty for an unrelated branch.
pub fn daily_branch(relation: BranchRelation) -> &'static str {
    match relation {
        BranchRelation::Same => "일주 지지와 같은 기운이 들어와 익숙한 인연 속에서 힘을 얻습니다.",
        BranchRelation::Harmony => "일주 지지와 육합을 이루어 협력과 조율이 유리하게 작용합니다.",
        BranchRelation::Clash => "일주 지지와 충이 생겨 변수가 많을 수 있으니 유연하게 대응하세요.",
        BranchRelation::Neutral => "",
    }
}

pub const BALANCE_YANG_HEAVY_YANG_DAY: &str =
    "양 기운이 겹쳐 속도가 붙지만, 휴식과 속도 조절을 통해 균형을 잡으세요.";
pub const BALANCE_YANG_HEAVY_YIN_DAY: &str =
    "오늘은 음 기운이 더해져 감정 조율이 쉬워집니다. 차분함을 유지하면 시너지가 납니다.";
pub const BALANCE_YIN_HEAVY_YIN_DAY: &str =
    "음 기운이 겹쳐 내면에 집중하기 좋지만 생각이 깊어질 수 있으니 몸을 가볍게 움직여 보세요.";
pub const BALANCE_YIN_HEAVY_YANG_DAY: &str =
    "양 기운이 더해져 실행력이 보완되니 작은 실천으로 흐름을 바꿔보세요.";
pub const BALANCE_STEADY: &str =
    "음양 균형이 안정적이라 큰 무리 없이 계획을 이어갈 수 있습니다.";
