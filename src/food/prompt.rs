/// Formatting rules appended to every plan request. The parser relies on the
/// first two: meal lines labelled 아침/점심/저녁 followed by `:`.
const PLAN_RULES: [&str; 5] = [
    "끼니마다 아침/점심/저녁으로 구분하고 \"아침: 메뉴 칼로리\" 형식으로 한 줄씩 적기",
    "메뉴 이름은 한 단어로 적기",
    "메뉴별 재료와 칼로리를 함께 표시하기",
    "예산이나 목적(다이어트, 간단한 식사, 벌크업 등)이 있으면 그에 맞춰 구성하기",
    "마지막에 필요한 재료 목록을 정리하기",
];

pub fn build_meal_plan_prompt(request: &str) -> String {
    let rules = PLAN_RULES
        .iter()
        .enumerate()
        .map(|(i, rule)| format!("{}. {}", i + 1, rule))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "다음 조건으로 하루 식단을 만들어줘: {}\n\n{}",
        request.trim(),
        rules
    )
}
