//! # Instruction Extraction
//!
//! Two-pass, best-effort selection of cooking steps from normalized lines.
//! Pass 1 keeps lines with an instruction keyword hit or sentence-length
//! prose; pass 2 is a lenient rescan used only when pass 1 found almost
//! nothing. Leading numbering and bullet tokens are stripped so the output
//! steps renumber cleanly in the consuming UI. Output order is always
//! document order.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

// Pass-1 acceptance: prose longer than this qualifies without a keyword hit
const PROSE_MIN_CHARS: usize = 20;
// Upper bound for any step line
const STEP_MAX_CHARS: usize = 200;
// Minimum step length after numbering/bullet stripping
const STEP_MIN_CHARS: usize = 6;
// Pass-2 lenient window
const LENIENT_MIN_CHARS: usize = 30;
// Pass 2 runs only when pass 1 found fewer steps than this
const LENIENT_TRIGGER: usize = 3;

lazy_static! {
    // Quantity+unit lines are ingredients, not steps, even inside an
    // instructions block
    static ref QUANTITY_UNIT: Regex = Regex::new(r"(?i)\d+(?:\.\d+)?\s*(?:kg|g|ml|千克|克|毫升|升)\b")
        .expect("quantity unit pattern should be valid");
    static ref INSTRUCTION_KEYWORDS: Regex = Regex::new(
        r"(?i)步骤|做法|制作|烹饪|方法|marinate|bake|roast|fry|boil|steam|cut|chop|mix|stir|add|pour|腌|烤|煮|炒|切|拌|搅|加|倒|蒸|炖|煎|焖"
    )
    .expect("instruction keyword pattern should be valid");
    static ref LEADING_NUMBERING: Regex = Regex::new(r"^[0-9０-９]+\s*[.)、．）]\s*")
        .expect("leading numbering pattern should be valid");
    static ref LEADING_BULLET: Regex =
        Regex::new(r"^[•\-*]\s*").expect("leading bullet pattern should be valid");
    // A line accepted on length alone must read as a sentence, otherwise a
    // long title line would pass as a step
    static ref SENTENCE_PUNCTUATION: Regex =
        Regex::new(r"[,.;:，。；：！!？?]").expect("sentence punctuation pattern should be valid");
    static ref INGREDIENT_HEADER: Regex =
        Regex::new(r"(?i)ingredients?|食材|材料").expect("ingredient header pattern should be valid");
}

/// Strip one leading numbering token and one leading bullet, then reject
/// remainders that are too short to be a step.
fn strip_list_markers(line: &str) -> Option<String> {
    let without_numbering = LEADING_NUMBERING.replace(line, "");
    let without_bullet = LEADING_BULLET.replace(&without_numbering, "");
    let step = without_bullet.trim().to_string();
    if step.chars().count() < STEP_MIN_CHARS {
        return None;
    }
    Some(step)
}

/// Extract instruction steps, capped at `max_steps` entries.
pub fn extract_instructions(lines: &[String], max_steps: usize) -> Vec<String> {
    let mut steps = Vec::new();

    // Pass 1: keyword hit, or sentence-looking prose over the length bound
    for line in lines {
        if QUANTITY_UNIT.is_match(line) {
            continue;
        }
        let len = line.chars().count();
        if len >= STEP_MAX_CHARS {
            continue;
        }

        let keyword_hit = INSTRUCTION_KEYWORDS.is_match(line);
        let prose_hit = len > PROSE_MIN_CHARS && SENTENCE_PUNCTUATION.is_match(line);
        if !keyword_hit && !prose_hit {
            continue;
        }

        if let Some(step) = strip_list_markers(line) {
            steps.push(step);
        }
    }

    // Pass 2: lenient rescan when pass 1 found almost nothing. Any
    // mid-length line that is neither a quantity line nor a section header
    // qualifies, no keyword required.
    if steps.len() < LENIENT_TRIGGER {
        let mut lenient = Vec::new();
        for line in lines {
            if QUANTITY_UNIT.is_match(line) || INGREDIENT_HEADER.is_match(line) {
                continue;
            }
            let Some(step) = strip_list_markers(line) else {
                continue;
            };
            let len = step.chars().count();
            if (LENIENT_MIN_CHARS..STEP_MAX_CHARS).contains(&len) {
                lenient.push(step);
            }
        }
        if lenient.len() > steps.len() {
            debug!(
                strict = steps.len(),
                lenient = lenient.len(),
                "Lenient instruction pass replaced strict pass"
            );
            steps = lenient;
        }
    }

    steps.truncate(max_steps);
    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_strip_list_markers() {
        assert_eq!(
            strip_list_markers("1. Preheat the oven").as_deref(),
            Some("Preheat the oven")
        );
        assert_eq!(
            strip_list_markers("2) • Mix the batter").as_deref(),
            Some("Mix the batter")
        );
        assert_eq!(
            strip_list_markers("３．翻炒均匀后出锅装盘").as_deref(),
            Some("翻炒均匀后出锅装盘")
        );
        // Too short after stripping
        assert_eq!(strip_list_markers("4. stir"), None);
    }

    #[test]
    fn test_quantity_lines_are_rejected_inside_step_blocks() {
        let doc = lines(&["面粉 500克", "搅拌均匀后静置十分钟"]);
        let steps = extract_instructions(&doc, 15);
        assert_eq!(steps, vec!["搅拌均匀后静置十分钟"]);
    }
}
