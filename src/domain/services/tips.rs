#[cfg(test)]
#[path = "tips_test.rs"]
mod tests;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::models::FindingCategory;

static LINE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    return Regex::new(r"(?i)line\s+(\d+)").unwrap();
});

// Ordered, first match wins. Patterns overlap, so the most specific
// entries sit on top and the generic fallback lives in syntax_tip itself.
static SYNTAX_TIPS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    return vec![
        (
            Regex::new(r"(?i)expected\s+':'").unwrap(),
            "Add the missing colon at the end of the statement header. if, for, while, def and class lines all need one.",
        ),
        (
            Regex::new(r"(?i)unexpected\s+indent").unwrap(),
            "Remove the extra indentation, or move the line into the block it belongs to.",
        ),
        (
            Regex::new(r"(?i)unindent|indentation").unwrap(),
            "Make the indentation consistent. Mixing tabs and spaces is the usual culprit.",
        ),
        (
            Regex::new(r"(?i)was never closed|unexpected eof|unterminated").unwrap(),
            "Close the open bracket, parenthesis or string literal before the end of the file.",
        ),
        (
            Regex::new(r"(?i)cannot assign|assign to literal").unwrap(),
            "Use == to compare values. A single = only assigns to names.",
        ),
        (
            Regex::new(r"(?i)invalid syntax").unwrap(),
            "Check the reported line for typos, missing commas or stray characters.",
        ),
    ];
});

// Keyword tables are matched as case-insensitive substrings against the
// lowercased issue text, in definition order.
static SECURITY_TIPS: &[(&str, &str)] = &[
    (
        "os.system",
        "Replace os.system with subprocess.run and pass the command as a list so the shell never interprets user input.",
    ),
    (
        "subprocess",
        "Drop shell=True and pass subprocess arguments as a list to avoid shell injection.",
    ),
    (
        "eval",
        "Avoid eval on user input. ast.literal_eval or explicit parsing handles the safe cases.",
    ),
    (
        "exec",
        "Avoid exec. Restructure the code so dynamic execution is not needed.",
    ),
    (
        "pickle",
        "Never unpickle untrusted data. Use json or another safe interchange format.",
    ),
    (
        "__import__",
        "Import modules statically instead of resolving names through __import__.",
    ),
];

static RUNTIME_TIPS: &[(&str, &str)] = &[
    (
        "infinite loop",
        "Add a break condition or make sure the loop variable changes on every iteration.",
    ),
    (
        "division by zero",
        "Guard the division with a check that the denominator is not zero.",
    ),
    (
        "infinite recursion",
        "Add a base case that returns before the function calls itself again.",
    ),
    (
        "unreachable code",
        "Remove the unreachable statements or move them above the return.",
    ),
    (
        "out of range",
        "Check the index against the collection length before subscripting.",
    ),
];

/// Best-effort line locator: the first "line <number>" occurrence in the
/// text, case-insensitive. Absence is not an error.
pub fn extract_line(text: &str) -> Option<String> {
    return LINE_PATTERN
        .captures(text)
        .map(|caps| return caps[1].to_string());
}

pub fn syntax_tip(text: &str) -> &'static str {
    for (pattern, tip) in SYNTAX_TIPS.iter() {
        if pattern.is_match(text) {
            return tip;
        }
    }

    return "Double check the reported line for a syntax mistake.";
}

pub fn security_tip(text: &str) -> &'static str {
    let lowered = text.to_lowercase();
    for (keyword, tip) in SECURITY_TIPS {
        if lowered.contains(keyword) {
            return tip;
        }
    }

    return "Remove or isolate the flagged construct. It can run code outside the analysis sandbox.";
}

pub fn runtime_tip(text: &str) -> &'static str {
    let lowered = text.to_lowercase();
    for (keyword, tip) in RUNTIME_TIPS {
        if lowered.contains(keyword) {
            return tip;
        }
    }

    return "Trace the reported line and confirm every value it depends on is always defined.";
}

pub fn optimization_tip(category: FindingCategory) -> &'static str {
    match category {
        FindingCategory::NestedLoop => {
            return "Flatten the nested loops or hoist invariant work out of the inner loop.";
        }
        FindingCategory::LargeFunction => {
            return "Split the function into smaller helpers so each piece can be optimized on its own.";
        }
        FindingCategory::NestedBinaryOperation => {
            return "Break the compound expression into named intermediate values.";
        }
        FindingCategory::Unknown => {
            return "Reduce computational overhead in the flagged region.";
        }
    }
}
