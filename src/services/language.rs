//! Script-based heuristic for classifying a draft as non-English.
//!
//! The backend is told to answer in the draft's own language; for clearly
//! non-English input the prompt preamble gets stricter. The heuristic scans
//! the first 300 characters and counts how many known non-English script
//! families appear; more than two distinct families classifies the draft as
//! non-English. Deliberately cheap and approximate.

const SAMPLE_LEN: usize = 300;

/// Script families checked by the heuristic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScriptFamily {
    European,
    Cyrillic,
    Cjk,
    Arabic,
    Devanagari,
    Thai,
    Hebrew,
    Greek,
    Turkish,
    Iberian,
}

const FAMILIES: [ScriptFamily; 10] = [
    ScriptFamily::European,
    ScriptFamily::Cyrillic,
    ScriptFamily::Cjk,
    ScriptFamily::Arabic,
    ScriptFamily::Devanagari,
    ScriptFamily::Thai,
    ScriptFamily::Hebrew,
    ScriptFamily::Greek,
    ScriptFamily::Turkish,
    ScriptFamily::Iberian,
];

fn matches_family(c: char, family: ScriptFamily) -> bool {
    match family {
        ScriptFamily::European => "àáâãäåæçèéêëìíîïñòóôõöøùúûüýÿ".contains(c),
        ScriptFamily::Cyrillic => {
            ('а'..='я').contains(&c) || "ёђѓєіїјљњћџ".contains(c)
        }
        ScriptFamily::Cjk => {
            ('\u{4e00}'..='\u{9fff}').contains(&c)
                || ('\u{3040}'..='\u{309f}').contains(&c)
                || ('\u{30a0}'..='\u{30ff}').contains(&c)
                || ('\u{ac00}'..='\u{d7af}').contains(&c)
        }
        ScriptFamily::Arabic => ('\u{0600}'..='\u{06ff}').contains(&c),
        ScriptFamily::Devanagari => ('\u{0900}'..='\u{097f}').contains(&c),
        ScriptFamily::Thai => ('\u{0e00}'..='\u{0e7f}').contains(&c),
        ScriptFamily::Hebrew => ('\u{0590}'..='\u{05ff}').contains(&c),
        ScriptFamily::Greek => ('\u{0370}'..='\u{03ff}').contains(&c),
        ScriptFamily::Turkish => "çğıöşü".contains(c),
        ScriptFamily::Iberian => "ñáéíóúü".contains(c),
    }
}

/// Returns true when the draft looks non-English.
pub fn is_non_english(text: &str) -> bool {
    let sample: String = text
        .trim()
        .chars()
        .take(SAMPLE_LEN)
        .collect::<String>()
        .to_lowercase();

    let score = FAMILIES
        .iter()
        .filter(|&&family| sample.chars().any(|c| matches_family(c, family)))
        .count();

    score > 2
}
