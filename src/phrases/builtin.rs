// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Built-in phrase bank.
//!
//! A jidaigeki-Eurobeat dictionary themed around the black samurai Yasuke.
//! The anthem keyword marks the chorus-opener shout lines; the signature
//! keyword marks the name-drop chorus endings.

use super::PhraseBank;

pub const ANTHEM_KEYWORD: &str = "ヤスケ！";
pub const SIGNATURE_KEYWORD: &str = "ヤスケ";

const INTRO_TAGS: [&str; 6] = [
    "いざ尋常に勝負",
    "鳴り響け戦太鼓",
    "風が呼んでいる",
    "刮目せよ、開幕だ",
    "さあ幕が上がる",
    "遠雷が告げる宴",
];

const OUTRO_TAGS: [&str; 5] = [
    "物語はまだ終わらない",
    "吼えろ 最後の雄叫びを",
    "夜明けの空に 名を刻め",
    "また会おう 戦場のどこかで",
    "風とともに去りゆく背中",
];

const VERSE_PHRASES: [&str; 8] = [
    "異国の海を越えてきた男",
    "名もなき風が背中を押す",
    "都の灯り 揺れる影法師",
    "刀を握る その手は熱く",
    "誰も知らない明日を見てた",
    "土埃舞う 修羅の道を",
    "約束の地はまだ遠くとも",
    "心に誓う 主君の夢を",
];

const PRE_CHORUS_PHRASES: [&str; 6] = [
    "高まる鼓動 抑えきれない",
    "嵐の前の静けさを破れ",
    "今こそ時だ 刃を抜け",
    "迷いは捨てた あとは進むだけ",
    "胸の炎が出口を探す",
    "カウントダウンが鳴り始める",
];

const CHORUS_OPENERS: [&str; 6] = [
    "ヤスケ！夜を駆けろ",
    "ヤスケ！嵐を呼べ",
    "ヤスケ！天下へ轟け",
    "立ち上がれ漆黒の侍",
    "呼び覚ませ眠る魂",
    "走り出せ運命の道",
];

const CHORUS_LINES: [&str; 8] = [
    "刀一閃 闇を裂いて",
    "鼓動は雷鳴 胸に響け",
    "振り向くな 夜明けは近い",
    "燃やせ燃やせ 魂の火を",
    "駆け抜けろ 千の戦場",
    "運命さえも斬り捨てて",
    "星をつかめ この手で今",
    "轟け轟け 勝どきの声",
];

const CHORUS_ENDINGS: [&str; 5] = [
    "その名はヤスケ 伝説になれ",
    "吼えろヤスケ 永遠に",
    "明日へ斬り込め 侍魂",
    "夜明けとともに 突き進め",
    "この戦い終わらせるまで",
];

const BRIDGE_PHRASES: [&str; 5] = [
    "月明かりの下 ひとり佇む",
    "遠い故郷の歌が聞こえる",
    "涙は見せない それが定め",
    "静寂の中 三味線が泣く",
    "倒れてもなお 立ち上がるのみ",
];

const TITLE_STARTERS: [&str; 8] = [
    "漆黒の",
    "疾風の",
    "雷鳴の",
    "炎の",
    "月下の",
    "戦場の",
    "不滅の",
    "暁の",
];

const TITLE_ENDERS: [&str; 8] = [
    "侍",
    "ヤスケ",
    "魂",
    "伝説",
    "進撃",
    "雄叫び",
    "戦記",
    "疾走",
];

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Construct the built-in bank
pub fn bank() -> PhraseBank {
    PhraseBank {
        intro_tags: to_strings(&INTRO_TAGS),
        outro_tags: to_strings(&OUTRO_TAGS),
        verse_phrases: to_strings(&VERSE_PHRASES),
        pre_chorus_phrases: to_strings(&PRE_CHORUS_PHRASES),
        chorus_openers: to_strings(&CHORUS_OPENERS),
        chorus_lines: to_strings(&CHORUS_LINES),
        chorus_endings: to_strings(&CHORUS_ENDINGS),
        bridge_phrases: to_strings(&BRIDGE_PHRASES),
        title_starters: to_strings(&TITLE_STARTERS),
        title_enders: to_strings(&TITLE_ENDERS),
        opener_keyword: ANTHEM_KEYWORD.to_string(),
        ending_keyword: SIGNATURE_KEYWORD.to_string(),
    }
}
