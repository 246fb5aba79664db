use crate::assessment::domain::{Aspect, Domain, QuestionSetKind};

pub(crate) struct Guidance {
    pub title: &'static str,
    pub suggestions: &'static [&'static str],
}

pub(crate) fn domain_guidance(domain: Domain, kind: QuestionSetKind) -> Guidance {
    match (domain, kind) {
        (Domain::SelfRelation, _) => Guidance {
            title: "自我覺察與成長",
            suggestions: &[
                "每日進行10-15分鐘的冥想或正念練習",
                "寫日記記錄內心感受和想法",
                "設定個人成長目標並定期檢視",
                "學習情緒管理技巧",
            ],
        },
        (Domain::Others, _) => Guidance {
            title: "人際關係建立",
            suggestions: &[
                "主動關心身邊的家人朋友",
                "參與社區活動或志工服務",
                "練習同理心和傾聽技巧",
                "建立支持性的社交網絡",
            ],
        },
        (Domain::Nature, _) => Guidance {
            title: "自然連結體驗",
            suggestions: &[
                "每週安排戶外活動時間",
                "觀察和欣賞自然美景",
                "參與環保行動或生態保護",
                "在生活中融入自然元素",
            ],
        },
        (Domain::Transcendent, QuestionSetKind::Religious) => Guidance {
            title: "靈性修養深化",
            suggestions: &[
                "定期參與宗教活動或靈修",
                "閱讀靈性成長相關書籍",
                "與靈性導師或同修交流",
                "在日常生活中實踐信仰價值",
            ],
        },
        (Domain::Transcendent, QuestionSetKind::NonReligious) => Guidance {
            title: "生命意義探索",
            suggestions: &[
                "思考人生目標和價值觀",
                "參與有意義的公益活動",
                "探索哲學或人文思想",
                "培養感恩和敬畏之心",
            ],
        },
    }
}

pub(crate) fn aspect_guidance(aspect: Aspect) -> Guidance {
    match aspect {
        Aspect::SelfAwareness => Guidance {
            title: "培養自我覺察",
            suggestions: &[
                "每天花幾分鐘留意呼吸與身體感受",
                "睡前回顧一天中情緒起伏的時刻",
                "請信任的朋友分享他們眼中的你",
            ],
        },
        Aspect::MeaningInLife => Guidance {
            title: "尋找生命意義",
            suggestions: &[
                "寫下對你最重要的三個價值",
                "檢視日常安排是否反映這些價值",
                "投入一項能幫助他人的長期計畫",
            ],
        },
        Aspect::InnerPeace => Guidance {
            title: "安頓內在平靜",
            suggestions: &[
                "練習腹式呼吸或漸進式肌肉放鬆",
                "減少睡前使用電子產品的時間",
                "為自己保留每天固定的安靜時段",
            ],
        },
        Aspect::GratitudeForgiveness => Guidance {
            title: "練習感恩與寬恕",
            suggestions: &[
                "每天記錄三件值得感謝的事",
                "寫一封感謝信給曾幫助過你的人",
                "嘗試理解傷害你的人背後的處境",
            ],
        },
        Aspect::LoveEmpathy => Guidance {
            title: "深化愛與同理",
            suggestions: &[
                "對話時先傾聽再回應",
                "每週主動為他人做一件小事",
                "留意身邊需要陪伴的人",
            ],
        },
        Aspect::HumilityAwe => Guidance {
            title: "找回謙卑與敬畏",
            suggestions: &[
                "在戶外靜坐觀察天空、山林或海洋",
                "閱讀關於宇宙或自然奧秘的書籍",
                "承認自己的有限並向他人請教",
            ],
        },
        Aspect::HopeFaith => Guidance {
            title: "建立盼望與信心",
            suggestions: &[
                "回想過去度過困難的經驗",
                "與抱持盼望的人保持聯繫",
                "為未來設定一個小而具體的期待",
            ],
        },
    }
}
