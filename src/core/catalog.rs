//! Static questionnaire catalog: 60 yes/no questions, 10 per factor,
//! presented as six sections in factor order A, B, C, D, E, S.

use crate::core::{Factor, Question};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Number of questions in each section.
pub const QUESTIONS_PER_SECTION: usize = 10;

/// Total catalog size.
pub const CATALOG_LEN: usize = 60;

static CATALOG: [Question; CATALOG_LEN] = [
    // A因子
    Question { id: 1, text: "他人の言葉をさえぎって、自分の考えを述べることがある", factor: Factor::A },
    Question { id: 2, text: "他人のミスをきびしく批判する事が多い", factor: Factor::A },
    Question { id: 3, text: "待ち合わせ時間は厳守する", factor: Factor::A },
    Question { id: 4, text: "理想の実現ために努力する", factor: Factor::A },
    Question { id: 5, text: "規則、倫理、道徳などを重視する", factor: Factor::A },
    Question { id: 6, text: "他人に責任感を強く要求する", factor: Factor::A },
    Question { id: 7, text: "小さな不正でも、うやむやにしない", factor: Factor::A },
    Question { id: 8, text: "子供や部下を厳しく教育する", factor: Factor::A },
    Question { id: 9, text: "権利を主張する前に義務を果たすべきと思う", factor: Factor::A },
    Question { id: 10, text: "「・・すべきである」「・・ねばならない」という表現をよくする", factor: Factor::A },
    // B因子
    Question { id: 11, text: "他人に対する思いやりの気持ちが強い", factor: Factor::B },
    Question { id: 12, text: "義理や人情を重視する", factor: Factor::B },
    Question { id: 13, text: "相手の長所に良く気がつく", factor: Factor::B },
    Question { id: 14, text: "他人から頼まれたらなかなかイヤとは言えない", factor: Factor::B },
    Question { id: 15, text: "子供や他人の世話をするのが好き", factor: Factor::B },
    Question { id: 16, text: "何事も臨機応変に対応できる", factor: Factor::B },
    Question { id: 17, text: "子供や部下の失敗に寛大である", factor: Factor::B },
    Question { id: 18, text: "相手の話をよく聞き、共感し易い", factor: Factor::B },
    Question { id: 19, text: "洗濯、料理、掃除などは好きな方だ", factor: Factor::B },
    Question { id: 20, text: "ボランティアに参加する事が好き", factor: Factor::B },
    // C因子
    Question { id: 21, text: "自分の損得を優先して行動する", factor: Factor::C },
    Question { id: 22, text: "会話で感情的になることは少ない", factor: Factor::C },
    Question { id: 23, text: "物事は分析的に良く考えてから決める", factor: Factor::C },
    Question { id: 24, text: "他人の意見は、賛否両論を聞き、自分の意見の参考にする", factor: Factor::C },
    Question { id: 25, text: "何事も事実や数字に基づいて判断する", factor: Factor::C },
    Question { id: 26, text: "情緒的というより、論理的である", factor: Factor::C },
    Question { id: 27, text: "物事の決断はすばやくできる", factor: Factor::C },
    Question { id: 28, text: "仕事は能率的にテキパキ片付けていく", factor: Factor::C },
    Question { id: 29, text: "将来のことを冷静に予測して計画的に行動する", factor: Factor::C },
    Question { id: 30, text: "身体の調子の悪いときは、大事をとって無理をしない", factor: Factor::C },
    // D因子
    Question { id: 31, text: "自分をわがままだと思う", factor: Factor::D },
    Question { id: 32, text: "自分は好奇心旺盛だと思う", factor: Factor::D },
    Question { id: 33, text: "娯楽、飲食などは満足するまで求める", factor: Factor::D },
    Question { id: 34, text: "思ったことを遠慮なく言ってしまう", factor: Factor::D },
    Question { id: 35, text: "欲しいものは、すぐ手に入れないと気が済まない", factor: Factor::D },
    Question { id: 36, text: "「わぁ」「すごい」「へぇ」などオーバーな表現を良く使う", factor: Factor::D },
    Question { id: 37, text: "物事を直感で判断する事が多い", factor: Factor::D },
    Question { id: 38, text: "図に乗ると度をこし、はめをはずしてしまう", factor: Factor::D },
    Question { id: 39, text: "物事は明るく前向きに考える", factor: Factor::D },
    Question { id: 40, text: "感動し易く、涙もろい", factor: Factor::D },
    // E因子
    Question { id: 41, text: "思っていることを口に出せない事が多い", factor: Factor::E },
    Question { id: 42, text: "他人から気に入られたいと思う", factor: Factor::E },
    Question { id: 43, text: "遠慮がちで消極的な方である", factor: Factor::E },
    Question { id: 44, text: "自分の考えをとおすより、妥協することが多い", factor: Factor::E },
    Question { id: 45, text: "他人の顔色や、言うことが気になる", factor: Factor::E },
    Question { id: 46, text: "つらい時には、じっと我慢してしまう", factor: Factor::E },
    Question { id: 47, text: "他人の期待に応えようと、過剰な努力をすることがある", factor: Factor::E },
    Question { id: 48, text: "人前では自分の感情を抑えてしまう", factor: Factor::E },
    Question { id: 49, text: "劣等感を強く感じる事がある", factor: Factor::E },
    Question { id: 50, text: "少数派に成るより、多数派でいる方が安心する", factor: Factor::E },
    // ストレス因子
    Question { id: 51, text: "便秘や下痢をするが時々ある", factor: Factor::S },
    Question { id: 52, text: "眼が疲れやすい", factor: Factor::S },
    Question { id: 53, text: "食欲がない事が時々ある", factor: Factor::S },
    Question { id: 54, text: "首筋や肩がこることがよくある", factor: Factor::S },
    Question { id: 55, text: "胃や腸の具合はあまり良くない", factor: Factor::S },
    Question { id: 56, text: "頭が重いとか、頭痛がする", factor: Factor::S },
    Question { id: 57, text: "よく眠れないことがある", factor: Factor::S },
    Question { id: 58, text: "「かぜ」をひきやすい", factor: Factor::S },
    Question { id: 59, text: "イライラして、落ち着かない", factor: Factor::S },
    Question { id: 60, text: "「だるい」と感じることがよくある", factor: Factor::S },
];

static BY_ID: Lazy<HashMap<u32, &'static Question>> =
    Lazy::new(|| CATALOG.iter().map(|q| (q.id, q)).collect());

/// The full catalog in presentation order.
pub fn questions() -> &'static [Question] {
    &CATALOG
}

/// Questions belonging to one factor, in presentation order.
pub fn questions_for(factor: Factor) -> impl Iterator<Item = &'static Question> {
    CATALOG.iter().filter(move |q| q.factor == factor)
}

/// Look up a question by id.
pub fn question(id: u32) -> Option<&'static Question> {
    BY_ID.get(&id).copied()
}

/// The contiguous slice of questions for one wizard section.
///
/// Sections follow factor order, so section `i` is `Factor::ALL[i]`.
pub fn section(index: usize) -> Option<&'static [Question]> {
    if index >= Factor::ALL.len() {
        return None;
    }
    let start = index * QUESTIONS_PER_SECTION;
    Some(&CATALOG[start..start + QUESTIONS_PER_SECTION])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_sixty_questions() {
        assert_eq!(questions().len(), CATALOG_LEN);
    }

    #[test]
    fn test_ids_are_dense_and_unique() {
        for (index, q) in questions().iter().enumerate() {
            assert_eq!(q.id as usize, index + 1);
        }
    }

    #[test]
    fn test_ten_questions_per_factor() {
        for factor in Factor::ALL {
            assert_eq!(questions_for(factor).count(), QUESTIONS_PER_SECTION);
        }
    }

    #[test]
    fn test_sections_follow_factor_order() {
        for (index, factor) in Factor::ALL.iter().enumerate() {
            let slice = section(index).unwrap();
            assert_eq!(slice.len(), QUESTIONS_PER_SECTION);
            assert!(slice.iter().all(|q| q.factor == *factor));
        }
        assert!(section(6).is_none());
    }

    #[test]
    fn test_lookup_by_id() {
        assert_eq!(question(1).unwrap().factor, Factor::A);
        assert_eq!(question(60).unwrap().factor, Factor::S);
        assert!(question(0).is_none());
        assert!(question(61).is_none());
    }
}
