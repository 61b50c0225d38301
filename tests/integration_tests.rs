//! 통합 테스트 - 공개 API 기준 변환 동작

use ancient_names::core::{
    decode_brahmi, decode_simple, encode_brahmi, encode_simple, registry, ScriptRegistry,
};
use ancient_names::{translate_to_ancient, translate_to_english, Direction, Script, Translator};

fn simple(script: Script) -> &'static ancient_names::core::SubstitutionTable {
    registry().table(script).unwrap()
}

#[test]
fn test_namo_all_scripts() {
    let result = translate_to_ancient("namo");
    assert_eq!(result[&Script::Brahmi], "𑀦𑀫𑁀"); // na + mo
    assert_eq!(result[&Script::Tamil], "நஅமஒ");
    assert_eq!(result[&Script::Aramaic], "𐡍𐡀𐡌o"); // o 없음
    assert_eq!(result[&Script::Latin], "NAMO");
}

#[test]
fn test_brahmi_longest_match() {
    let brahmi = registry().brahmi();
    assert_eq!(encode_brahmi("tai", brahmi), "𑀢𑀿");
    assert_eq!(encode_brahmi("k", brahmi), "𑀓");
    assert_eq!(encode_brahmi("Asoka", brahmi), "𑀅𑀲𑁀𑀓");
}

#[test]
fn test_brahmi_decode_keeps_vowel_signs() {
    let brahmi = registry().brahmi();
    assert_eq!(decode_brahmi("𑀅𑀲𑁀𑀓", brahmi), "as𑁀k");
}

#[test]
fn test_unmapped_passthrough() {
    let tamil = simple(Script::Tamil);
    let encoded = encode_simple("a1!", tamil.forward());
    assert!(encoded.contains('1'));
    assert!(encoded.contains('!'));
    assert_eq!(encoded, "அ1!");
}

#[test]
fn test_case_insensitive() {
    let tamil = simple(Script::Tamil);
    assert_eq!(encode_simple("K", tamil.forward()), encode_simple("k", tamil.forward()));
    assert_eq!(
        encode_brahmi("NAMO", registry().brahmi()),
        encode_brahmi("namo", registry().brahmi())
    );
}

#[test]
fn test_empty_string() {
    for script in Script::ALL.into_iter().filter(Script::is_simple) {
        assert_eq!(encode_simple("", simple(script).forward()), "");
    }
    assert_eq!(encode_brahmi("", registry().brahmi()), "");
}

#[test]
fn test_simple_roundtrip_mapped_subset() {
    // 매핑된 글자는 소문자로 복원, 나머지는 그대로
    for script in Script::ALL.into_iter().filter(Script::is_simple) {
        let table = simple(script);
        let text = "Hektor 3";
        let decoded = decode_simple(&encode_simple(text, table.forward()), table.reverse());
        let expected: String = text
            .chars()
            .map(|c| {
                let lower = c.to_ascii_lowercase();
                if table.forward().contains_key(&lower) {
                    lower
                } else {
                    c
                }
            })
            .collect();
        assert_eq!(decoded, expected, "{}", script);
    }
}

#[test]
fn test_to_english_per_script() {
    let result = translate_to_english("ΝΑΜΟ נאמ");
    assert_eq!(result[&Script::Greek], "namo נאמ");
    assert_eq!(result[&Script::Hebrew], "ΝΑΜΟ nam");
}

#[test]
fn test_custom_registry_and_selector() {
    let registry = ScriptRegistry::new();
    let translator = Translator::new(&registry).with_scripts(&[Script::Hebrew]);
    let result = translator.translate("David", Direction::ToAncient);
    assert_eq!(result.len(), 1);
    assert_eq!(result[&Script::Hebrew], "\u{05D3}\u{05D0}\u{05D5}i\u{05D3}"); // i 없음
}

#[test]
fn test_space_handling() {
    let result = translate_to_ancient("ram sita");
    assert_eq!(result[&Script::Latin], "RAM SITA");
    assert_eq!(result[&Script::Brahmi], "𑀭𑀫 𑀲𑀺𑀢");
}
