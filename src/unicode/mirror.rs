//! Mirrored glyph lookup.
//!
//! A subset of the Unicode `Bidi_Mirroring_Glyph` property covering the
//! brackets, quotation marks and relational operators that show up in
//! structured text. Every pair is symmetric.

const MIRROR_PAIRS: &[(char, char)] = &[
    ('(', ')'),
    ('<', '>'),
    ('[', ']'),
    ('{', '}'),
    ('«', '»'),
    ('\u{2039}', '\u{203A}'), // ‹ ›
    ('\u{2045}', '\u{2046}'), // ⁅ ⁆
    ('\u{207D}', '\u{207E}'), // ⁽ ⁾
    ('\u{208D}', '\u{208E}'), // ₍ ₎
    ('\u{2208}', '\u{220B}'), // ∈ ∋
    ('\u{2209}', '\u{220C}'), // ∉ ∌
    ('\u{220A}', '\u{220D}'), // ∊ ∍
    ('\u{2264}', '\u{2265}'), // ≤ ≥
    ('\u{2266}', '\u{2267}'), // ≦ ≧
    ('\u{2268}', '\u{2269}'), // ≨ ≩
    ('\u{226A}', '\u{226B}'), // ≪ ≫
    ('\u{226E}', '\u{226F}'), // ≮ ≯
    ('\u{2270}', '\u{2271}'), // ≰ ≱
    ('\u{2272}', '\u{2273}'), // ≲ ≳
    ('\u{227A}', '\u{227B}'), // ≺ ≻
    ('\u{227C}', '\u{227D}'), // ≼ ≽
    ('\u{2282}', '\u{2283}'), // ⊂ ⊃
    ('\u{2286}', '\u{2287}'), // ⊆ ⊇
    ('\u{228F}', '\u{2290}'), // ⊏ ⊐
    ('\u{2291}', '\u{2292}'), // ⊑ ⊒
    ('\u{22A2}', '\u{22A3}'), // ⊢ ⊣
    ('\u{2308}', '\u{2309}'), // ⌈ ⌉
    ('\u{230A}', '\u{230B}'), // ⌊ ⌋
    ('\u{2329}', '\u{232A}'), // 〈 〉
    ('\u{27E6}', '\u{27E7}'), // ⟦ ⟧
    ('\u{27E8}', '\u{27E9}'), // ⟨ ⟩
    ('\u{27EA}', '\u{27EB}'), // ⟪ ⟫
    ('\u{2983}', '\u{2984}'), // ⦃ ⦄
    ('\u{2985}', '\u{2986}'), // ⦅ ⦆
    ('\u{3008}', '\u{3009}'), // 〈 〉
    ('\u{300A}', '\u{300B}'), // 《 》
    ('\u{300C}', '\u{300D}'), // 「 」
    ('\u{300E}', '\u{300F}'), // 『 』
    ('\u{3010}', '\u{3011}'), // 【 】
    ('\u{3014}', '\u{3015}'), // 〔 〕
    ('\u{3016}', '\u{3017}'), // 〖 〗
    ('\u{3018}', '\u{3019}'), // 〘 〙
    ('\u{301A}', '\u{301B}'), // 〚 〛
    ('\u{FF08}', '\u{FF09}'), // （ ）
    ('\u{FF1C}', '\u{FF1E}'), // ＜ ＞
    ('\u{FF3B}', '\u{FF3D}'), // ［ ］
    ('\u{FF5B}', '\u{FF5D}'), // ｛ ｝
];

/// Mirror-image counterpart of `ch`, if it has one.
#[must_use]
pub fn mirror(ch: char) -> Option<char> {
    MIRROR_PAIRS.iter().find_map(|&(left, right)| {
        if ch == left {
            Some(right)
        } else if ch == right {
            Some(left)
        } else {
            None
        }
    })
}
